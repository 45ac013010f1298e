// ABOUTME: JSON configuration for the scheduler
// ABOUTME: Supplies the default schedule title and catalog location

use crate::{Result, SchedulerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Schema version written by [`SchedulerConfig::default`]
pub const SCHEMA_VERSION: &str = "1.0";
/// Title given to a new schedule
pub const DEFAULT_SCHEDULE_TITLE: &str = "My Schedule";

fn default_schedule_title() -> String {
    DEFAULT_SCHEDULE_TITLE.to_string()
}

/// Scheduler settings loaded from a JSON file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerConfig {
    /// Schema version
    pub schema_version: String,
    /// Title for new schedules
    #[serde(default = "default_schedule_title")]
    pub schedule_title: String,
    /// Course catalog file, relative to the working directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            schedule_title: default_schedule_title(),
            catalog_path: None,
        }
    }
}

impl SchedulerConfig {
    /// Load config from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Parse config from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        if config.schema_version != SCHEMA_VERSION {
            return Err(SchedulerError::Config(format!(
                "unsupported schema version '{}'",
                config.schema_version
            )));
        }
        Ok(config)
    }

    /// Serialize config to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(SchedulerError::from)
    }
}
