// ABOUTME: Error types for wolfsched operations
// ABOUTME: Defines course field errors, record rejections, and the top-level SchedulerError

use std::path::PathBuf;
use thiserror::Error;

/// A course field failed validation during construction
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseError {
    #[error("Invalid course name.")]
    Name,

    #[error("Invalid title.")]
    Title,

    #[error("Invalid section.")]
    Section,

    #[error("Invalid credits.")]
    Credits,

    #[error("Invalid instructor id.")]
    InstructorId,

    #[error("Invalid meeting days and times.")]
    MeetingDaysAndTime,
}

/// Why a record line was rejected; kept for diagnostics only
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// The line ended before this field
    MissingField(&'static str),
    /// A numeric field did not hold an integer
    NotAnInteger {
        field: &'static str,
        token: String,
    },
    /// Tokens remained after the last expected field
    TrailingFields(usize),
    /// The line was not valid UTF-8
    NotUtf8,
    /// All tokens were present but a field was invalid
    Course(CourseError),
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing {field}"),
            Self::NotAnInteger { field, token } => {
                write!(f, "{field} is not an integer: '{token}'")
            }
            Self::TrailingFields(n) => write!(f, "{n} unexpected trailing field(s)"),
            Self::NotUtf8 => write!(f, "line is not valid UTF-8"),
            Self::Course(e) => write!(f, "{e}"),
        }
    }
}

/// A raw line could not be turned into a course
///
/// Every rejection displays the same message regardless of cause. Use
/// [`InvalidRecord::reason`] when the underlying cause is needed for logging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid course entry")]
pub struct InvalidRecord {
    reason: RejectReason,
}

impl InvalidRecord {
    pub(crate) fn new(reason: RejectReason) -> Self {
        Self { reason }
    }

    /// The underlying cause of the rejection
    pub fn reason(&self) -> &RejectReason {
        &self.reason
    }
}

impl From<CourseError> for InvalidRecord {
    fn from(e: CourseError) -> Self {
        Self::new(RejectReason::Course(e))
    }
}

/// Errors that can occur during scheduler operations
#[derive(Error, Debug)]
pub enum SchedulerError {
    /// I/O error reading or writing files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog file could not be opened
    #[error("Cannot find file: {}", path.display())]
    CatalogNotFound { path: PathBuf },

    /// The schedule could not be written
    #[error("The file cannot be saved: {}", path.display())]
    CannotSave { path: PathBuf },

    /// A course with the same name is already on the schedule
    #[error("You are already enrolled in {0}")]
    AlreadyEnrolled(String),

    /// Configuration file is unusable
    #[error("Configuration error: {0}")]
    Config(String),
}
