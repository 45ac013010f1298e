// ABOUTME: Core library for wolfsched providing course scheduling functionality
// ABOUTME: Includes course validation, record parsing, catalog IO, and schedule management

pub mod config;
pub mod course;
pub mod error;
pub mod record;
pub mod scheduler;

pub use config::SchedulerConfig;
pub use course::Course;
pub use error::{CourseError, InvalidRecord, RejectReason, SchedulerError};
pub use record::{
    parse_course, parse_course_lines, read_course_records, read_course_records_from,
    write_course_records,
};
pub use scheduler::Scheduler;

/// Result type alias using [`SchedulerError`]
pub type Result<T> = std::result::Result<T, SchedulerError>;
