// ABOUTME: 'wolfsched catalog' command implementation
// ABOUTME: Lists the valid, deduplicated courses of a catalog file

use super::open_scheduler;
use std::path::PathBuf;
use wolfsched_lib::{Result, SchedulerConfig};

/// Configuration for catalog command
pub struct CatalogConfig {
    pub file: Option<PathBuf>,
    pub json: bool,
    pub settings: SchedulerConfig,
}

/// Print the catalog as a table or as JSON
pub fn run(config: &CatalogConfig) -> Result<()> {
    let scheduler = open_scheduler(config.file.as_deref(), &config.settings)?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(scheduler.catalog())?);
        return Ok(());
    }

    let rows = scheduler.course_catalog_rows();
    if rows.is_empty() {
        println!("No valid courses found in catalog.");
        return Ok(());
    }

    println!("📚 Course Catalog ({} courses)\n", rows.len());
    for [name, section, title] in &rows {
        println!("  {name:<8} {section}  {title}");
    }

    Ok(())
}
