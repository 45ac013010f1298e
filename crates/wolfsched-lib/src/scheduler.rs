// ABOUTME: Course catalog and student schedule management
// ABOUTME: Loads a catalog, enrolls and drops courses, and exports the schedule

use crate::config::{SchedulerConfig, DEFAULT_SCHEDULE_TITLE};
use crate::course::Course;
use crate::record::{read_course_records_from, write_course_records};
use crate::{Result, SchedulerError};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info, warn};

/// A catalog of courses and the schedule built from it
///
/// Both collections are small and searched linearly.
#[derive(Debug, Clone)]
pub struct Scheduler {
    catalog: Vec<Course>,
    schedule: Vec<Course>,
    title: String,
}

impl Scheduler {
    /// Create a scheduler over an already loaded catalog
    pub fn new(catalog: Vec<Course>) -> Self {
        Self {
            catalog,
            schedule: Vec::new(),
            title: DEFAULT_SCHEDULE_TITLE.to_string(),
        }
    }

    /// Load the catalog from a course records file
    ///
    /// Only a file that cannot be opened is reported as
    /// [`SchedulerError::CatalogNotFound`]; bad lines inside it are skipped.
    pub fn from_catalog_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            debug!(path = %path.display(), error = %e, "Catalog open failed");
            SchedulerError::CatalogNotFound {
                path: path.to_path_buf(),
            }
        })?;
        let catalog = read_course_records_from(BufReader::new(file))?;
        info!(path = %path.display(), courses = catalog.len(), "Loaded catalog");
        Ok(Self::new(catalog))
    }

    /// Load the catalog named in the config and apply its schedule title
    pub fn with_config(config: &SchedulerConfig) -> Result<Self> {
        let path = config.catalog_path.as_deref().ok_or_else(|| {
            SchedulerError::Config("no catalog path configured".to_string())
        })?;
        let mut scheduler = Self::from_catalog_file(path)?;
        scheduler.set_schedule_title(&config.schedule_title);
        Ok(scheduler)
    }

    pub fn catalog(&self) -> &[Course] {
        &self.catalog
    }

    pub fn schedule(&self) -> &[Course] {
        &self.schedule
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Catalog as rows of name, section, and title
    pub fn course_catalog_rows(&self) -> Vec<[String; 3]> {
        self.catalog.iter().map(summary_row).collect()
    }

    /// Schedule as rows of name, section, and title
    pub fn scheduled_course_rows(&self) -> Vec<[String; 3]> {
        self.schedule.iter().map(summary_row).collect()
    }

    /// Schedule as rows of name, section, title, credits, instructor, and meeting
    pub fn full_scheduled_course_rows(&self) -> Vec<[String; 6]> {
        self.schedule
            .iter()
            .map(|c| {
                [
                    c.name().to_string(),
                    c.section().to_string(),
                    c.title().to_string(),
                    c.credits().to_string(),
                    c.instructor_id().to_string(),
                    c.meeting_string(),
                ]
            })
            .collect()
    }

    /// Find a catalog course by name and section
    pub fn course_from_catalog(&self, name: &str, section: &str) -> Option<&Course> {
        self.catalog
            .iter()
            .find(|c| c.name() == name && c.section() == section)
    }

    /// Add a catalog course to the schedule
    ///
    /// Returns `Ok(false)` when the catalog has no such course. Fails with
    /// [`SchedulerError::AlreadyEnrolled`] when any section of the same course
    /// name is already scheduled.
    pub fn add_course_to_schedule(&mut self, name: &str, section: &str) -> Result<bool> {
        let Some(course) = self.course_from_catalog(name, section) else {
            debug!(name, section, "Course not in catalog");
            return Ok(false);
        };

        if self.schedule.iter().any(|c| c.name() == name) {
            warn!(name, section, "Already enrolled in course");
            return Err(SchedulerError::AlreadyEnrolled(name.to_string()));
        }

        let course = course.clone();
        self.schedule.push(course);
        debug!(name, section, "Added course to schedule");
        Ok(true)
    }

    /// Remove a course from the schedule; false if it was not scheduled
    pub fn remove_course_from_schedule(&mut self, name: &str, section: &str) -> bool {
        match self
            .schedule
            .iter()
            .position(|c| c.name() == name && c.section() == section)
        {
            Some(index) => {
                self.schedule.remove(index);
                debug!(name, section, "Removed course from schedule");
                true
            }
            None => false,
        }
    }

    /// Drop every scheduled course
    pub fn reset_schedule(&mut self) {
        self.schedule.clear();
    }

    pub fn set_schedule_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    /// Total credit hours on the schedule
    pub fn scheduled_credits(&self) -> u32 {
        self.schedule.iter().map(Course::credits).sum()
    }

    /// Write the schedule as course records
    pub fn export_schedule(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        write_course_records(path, &self.schedule).map_err(|e| {
            debug!(path = %path.display(), error = %e, "Schedule export failed");
            SchedulerError::CannotSave {
                path: path.to_path_buf(),
            }
        })?;
        info!(title = %self.title, path = %path.display(), "Exported schedule");
        Ok(())
    }
}

fn summary_row(course: &Course) -> [String; 3] {
    [
        course.name().to_string(),
        course.section().to_string(),
        course.title().to_string(),
    ]
}
