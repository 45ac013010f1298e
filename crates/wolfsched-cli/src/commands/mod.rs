// ABOUTME: Command implementations for the wolfsched CLI
// ABOUTME: Submodules for catalog, check, and build plus shared logging and config helpers

pub mod build;
pub mod catalog;
pub mod check;

use std::path::Path;
use tracing::debug;
use wolfsched_lib::{Result, Scheduler, SchedulerConfig};

/// A course picked by name and section on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSelector {
    pub name: String,
    pub section: String,
}

/// Parse a "NAME:SECTION" course selector
pub fn parse_selector(value: &str) -> std::result::Result<CourseSelector, String> {
    match value.rsplit_once(':') {
        Some((name, section)) if !name.is_empty() && !section.is_empty() => Ok(CourseSelector {
            name: name.to_string(),
            section: section.to_string(),
        }),
        _ => Err(format!(
            "expected NAME:SECTION (e.g. \"CSC 216:001\"), got '{value}'"
        )),
    }
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence; otherwise warnings only, or debug when verbose.
pub fn setup_logging(verbose: bool) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wolfsched_lib={level},wolfsched={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {level}");
}

/// Load the config file if one was given, otherwise use defaults
pub fn load_config(path: Option<&Path>) -> Result<SchedulerConfig> {
    match path {
        Some(path) => SchedulerConfig::from_file(path),
        None => Ok(SchedulerConfig::default()),
    }
}

/// Open the catalog named on the command line, falling back to the config
pub fn open_scheduler(file: Option<&Path>, settings: &SchedulerConfig) -> Result<Scheduler> {
    match file {
        Some(file) => {
            let mut scheduler = Scheduler::from_catalog_file(file)?;
            scheduler.set_schedule_title(&settings.schedule_title);
            Ok(scheduler)
        }
        None => Scheduler::with_config(settings),
    }
}
