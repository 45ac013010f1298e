// ABOUTME: wolfsched CLI entry point for course scheduling
// ABOUTME: Provides subcommands: catalog, check, build

mod commands;

use clap::{Parser, Subcommand};
use commands::CourseSelector;
use std::path::PathBuf;

/// wolfsched - Build a course schedule from a catalog file
#[derive(Parser)]
#[command(name = "wolfsched")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON config file with default title and catalog path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the valid courses in a catalog file
    Catalog {
        /// Course records file (defaults to the configured catalog)
        file: Option<PathBuf>,
        /// Print courses as JSON
        #[arg(long)]
        json: bool,
    },
    /// Report every line of a catalog file that is not a valid course record
    Check {
        /// Course records file
        file: PathBuf,
    },
    /// Build a schedule from a catalog and optionally export it
    Build {
        /// Course records file (defaults to the configured catalog)
        catalog: Option<PathBuf>,
        /// Schedule title
        #[arg(long)]
        title: Option<String>,
        /// Course to add, as "NAME:SECTION" (e.g. "CSC 216:001")
        #[arg(long = "add", value_parser = commands::parse_selector)]
        add: Vec<CourseSelector>,
        /// Course to remove, as "NAME:SECTION"
        #[arg(long = "remove", value_parser = commands::parse_selector)]
        remove: Vec<CourseSelector>,
        /// Write the schedule to this file
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    commands::setup_logging(cli.verbose);

    let config = match commands::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error: {e}");
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Catalog { file, json } => {
            commands::catalog::run(&commands::catalog::CatalogConfig {
                file,
                json,
                settings: config,
            })
        }
        Commands::Check { file } => commands::check::run(&commands::check::CheckConfig {
            file,
            verbose: cli.verbose,
        }),
        Commands::Build {
            catalog,
            title,
            add,
            remove,
            export,
        } => commands::build::run(&commands::build::BuildConfig {
            catalog,
            title,
            add,
            remove,
            export,
            settings: config,
        }),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {e}");
        std::process::exit(1);
    }
}
