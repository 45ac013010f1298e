// ABOUTME: 'wolfsched check' command implementation
// ABOUTME: Reports each catalog line that fails record parsing, with the underlying cause

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process;
use wolfsched_lib::{parse_course_lines, Result};

/// Configuration for check command
pub struct CheckConfig {
    pub file: PathBuf,
    pub verbose: bool,
}

/// Validate every line of a course records file
pub fn run(config: &CheckConfig) -> Result<()> {
    let file = File::open(&config.file)?;

    let mut valid = 0;
    let mut rejected = 0;
    for (line_number, parsed) in parse_course_lines(BufReader::new(file))? {
        match parsed {
            Ok(course) => {
                valid += 1;
                if config.verbose {
                    println!("✅ line {line_number}: {} {}", course.name(), course.section());
                }
            }
            Err(e) => {
                rejected += 1;
                println!("❌ line {line_number}: {e} ({})", e.reason());
            }
        }
    }

    println!();
    println!("{valid} valid, {rejected} rejected");

    if rejected > 0 {
        process::exit(1);
    }

    Ok(())
}
