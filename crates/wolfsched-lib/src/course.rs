// ABOUTME: Course value type with constructive field validation
// ABOUTME: A Course can only be built when every field satisfies the catalog grammar

use crate::error::CourseError;
use chrono::NaiveTime;
use serde::Serialize;
use std::fmt;

/// Minimum name length
const MIN_NAME_LENGTH: usize = 5;
/// Maximum name length
const MAX_NAME_LENGTH: usize = 8;
/// Minimum number of letters in a course name
const MIN_LETTER_COUNT: usize = 1;
/// Maximum number of letters in a course name
const MAX_LETTER_COUNT: usize = 4;
/// Number of digits in a course name
const DIGIT_COUNT: usize = 3;
/// Number of digits in a section
const SECTION_LENGTH: usize = 3;
/// Minimum number of credits
const MIN_CREDITS: u32 = 1;
/// Maximum number of credits
const MAX_CREDITS: u32 = 5;

/// Meeting days value for courses with no fixed meeting time
pub const ARRANGED: &str = "A";
/// Days a timed course may meet on
const VALID_DAYS: [char; 5] = ['M', 'T', 'W', 'H', 'F'];
/// 12-hour rendering used by [`Course::meeting_string`]
const CLOCK_FORMAT: &str = "%-I:%M%p";
/// Characters that would split a record line or field
const RECORD_BREAKS: [char; 3] = [',', '\n', '\r'];

/// A validated catalog course
///
/// Instances only exist when every field is valid; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    name: String,
    title: String,
    section: String,
    credits: u32,
    instructor_id: String,
    meeting_days: String,
    start_time: u32,
    end_time: u32,
}

impl Course {
    /// Build a course from all of its fields
    ///
    /// Fields are checked in declaration order (name, title, section, credits,
    /// instructor id, then meeting days and times); the first failure wins.
    /// Times are military `HHMM` integers and must both be 0 for arranged courses.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        title: &str,
        section: &str,
        credits: u32,
        instructor_id: &str,
        meeting_days: &str,
        start_time: u32,
        end_time: u32,
    ) -> Result<Self, CourseError> {
        validate_name(name)?;
        validate_title(title)?;
        validate_section(section)?;
        validate_credits(credits)?;
        validate_instructor_id(instructor_id)?;
        validate_meeting(meeting_days, start_time, end_time)?;

        Ok(Self {
            name: name.to_string(),
            title: title.to_string(),
            section: section.to_string(),
            credits,
            instructor_id: instructor_id.to_string(),
            meeting_days: meeting_days.to_string(),
            start_time,
            end_time,
        })
    }

    /// Build a course without meeting times (start and end are 0)
    pub fn arranged(
        name: &str,
        title: &str,
        section: &str,
        credits: u32,
        instructor_id: &str,
        meeting_days: &str,
    ) -> Result<Self, CourseError> {
        Self::new(name, title, section, credits, instructor_id, meeting_days, 0, 0)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn credits(&self) -> u32 {
        self.credits
    }

    pub fn instructor_id(&self) -> &str {
        &self.instructor_id
    }

    pub fn meeting_days(&self) -> &str {
        &self.meeting_days
    }

    /// Start time as military `HHMM`; 0 when arranged
    pub fn start_time(&self) -> u32 {
        self.start_time
    }

    /// End time as military `HHMM`; 0 when arranged
    pub fn end_time(&self) -> u32 {
        self.end_time
    }

    /// Whether the course has no fixed meeting time
    pub fn is_arranged(&self) -> bool {
        self.meeting_days == ARRANGED
    }

    /// Start time as a clock value, `None` when arranged
    fn start_clock(&self) -> Option<NaiveTime> {
        if self.is_arranged() {
            None
        } else {
            clock(self.start_time)
        }
    }

    /// End time as a clock value, `None` when arranged
    fn end_clock(&self) -> Option<NaiveTime> {
        if self.is_arranged() {
            None
        } else {
            clock(self.end_time)
        }
    }

    /// Human-readable meeting description, e.g. `MW 1:00PM-2:50PM` or `Arranged`
    pub fn meeting_string(&self) -> String {
        match (self.start_clock(), self.end_clock()) {
            (Some(start), Some(end)) => format!(
                "{} {}-{}",
                self.meeting_days,
                start.format(CLOCK_FORMAT),
                end.format(CLOCK_FORMAT)
            ),
            _ => "Arranged".to_string(),
        }
    }

    /// Canonical comma-separated record line, as read by [`crate::parse_course`]
    pub fn to_record(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.name, self.title, self.section, self.credits, self.instructor_id, self.meeting_days
        )?;
        if !self.is_arranged() {
            write!(f, ",{},{}", self.start_time, self.end_time)?;
        }
        Ok(())
    }
}

/// Convert military `HHMM` to a clock value if hour and minute are in range
fn clock(time: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(time / 100, time % 100, 0)
}

/// Check the `L{1,4} NNN` course name pattern
fn validate_name(name: &str) -> Result<(), CourseError> {
    let length = name.chars().count();
    if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&length) {
        return Err(CourseError::Name);
    }

    let mut letters = 0;
    let mut digits = 0;
    let mut space_found = false;
    for c in name.chars() {
        if !space_found {
            if c.is_ascii_alphabetic() {
                letters += 1;
            } else if c == ' ' {
                space_found = true;
            } else {
                return Err(CourseError::Name);
            }
        } else if c.is_ascii_digit() {
            digits += 1;
        } else {
            return Err(CourseError::Name);
        }
    }

    if !(MIN_LETTER_COUNT..=MAX_LETTER_COUNT).contains(&letters) || digits != DIGIT_COUNT {
        return Err(CourseError::Name);
    }
    Ok(())
}

/// Text fields must be non-empty and free of record delimiters
fn is_record_text(value: &str) -> bool {
    !value.is_empty() && !value.contains(&RECORD_BREAKS[..])
}

fn validate_title(title: &str) -> Result<(), CourseError> {
    if !is_record_text(title) {
        return Err(CourseError::Title);
    }
    Ok(())
}

fn validate_section(section: &str) -> Result<(), CourseError> {
    if section.len() != SECTION_LENGTH || !section.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CourseError::Section);
    }
    Ok(())
}

fn validate_credits(credits: u32) -> Result<(), CourseError> {
    if !(MIN_CREDITS..=MAX_CREDITS).contains(&credits) {
        return Err(CourseError::Credits);
    }
    Ok(())
}

fn validate_instructor_id(instructor_id: &str) -> Result<(), CourseError> {
    if !is_record_text(instructor_id) {
        return Err(CourseError::InstructorId);
    }
    Ok(())
}

/// Check meeting days and the time range they imply
fn validate_meeting(days: &str, start_time: u32, end_time: u32) -> Result<(), CourseError> {
    if days.is_empty() {
        return Err(CourseError::MeetingDaysAndTime);
    }

    if days == ARRANGED {
        if start_time != 0 || end_time != 0 {
            return Err(CourseError::MeetingDaysAndTime);
        }
        return Ok(());
    }

    let mut seen = Vec::with_capacity(VALID_DAYS.len());
    for day in days.chars() {
        if !VALID_DAYS.contains(&day) || seen.contains(&day) {
            return Err(CourseError::MeetingDaysAndTime);
        }
        seen.push(day);
    }

    // Equal start and end is a zero-length meeting and is allowed
    if end_time < start_time || clock(start_time).is_none() || clock(end_time).is_none() {
        return Err(CourseError::MeetingDaysAndTime);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn timed(days: &str, start: u32, end: u32) -> Result<Course, CourseError> {
        Course::new("CSC 216", "Software Development Fundamentals", "001", 3, "sesmith5", days, start, end)
    }

    fn named(name: &str) -> Result<Course, CourseError> {
        Course::new(name, "Title", "001", 3, "jdyoung2", "MW", 1330, 1445)
    }

    #[test]
    fn test_valid_course_accessors() {
        let course = timed("MW", 1330, 1445).unwrap();
        assert_eq!(course.name(), "CSC 216");
        assert_eq!(course.title(), "Software Development Fundamentals");
        assert_eq!(course.section(), "001");
        assert_eq!(course.credits(), 3);
        assert_eq!(course.instructor_id(), "sesmith5");
        assert_eq!(course.meeting_days(), "MW");
        assert_eq!(course.start_time(), 1330);
        assert_eq!(course.end_time(), 1445);
        assert!(!course.is_arranged());
    }

    #[test]
    fn test_arranged_course() {
        let course = Course::arranged("CSC 217", "Lab", "211", 1, "jctetter", "A").unwrap();
        assert!(course.is_arranged());
        assert_eq!(course.start_time(), 0);
        assert_eq!(course.end_time(), 0);
        assert_eq!(course.start_clock(), None);
        assert_eq!(course.meeting_string(), "Arranged");
    }

    #[test]
    fn test_name_grammar() {
        assert!(named("CSC 216").is_ok());
        assert!(named("E 115").is_ok());
        assert!(named("HESF 101").is_ok());

        assert_eq!(named(""), Err(CourseError::Name));
        assert_eq!(named("CSC216"), Err(CourseError::Name));
        assert_eq!(named("CSCCC 216"), Err(CourseError::Name));
        assert_eq!(named("C 21"), Err(CourseError::Name));
        assert_eq!(named("CS 2161"), Err(CourseError::Name));
        assert_eq!(named(" 2161"), Err(CourseError::Name));
        assert_eq!(named("CS1 216"), Err(CourseError::Name));
        assert_eq!(named("CSC 21A"), Err(CourseError::Name));
        assert_eq!(named("CSC  216"), Err(CourseError::Name));
    }

    #[test]
    fn test_field_errors() {
        let new = |title, section, credits, instructor| {
            Course::new("CSC 216", title, section, credits, instructor, "MW", 900, 1000)
        };
        assert_eq!(new("", "001", 3, "id"), Err(CourseError::Title));
        assert_eq!(new("T", "01", 3, "id"), Err(CourseError::Section));
        assert_eq!(new("T", "0001", 3, "id"), Err(CourseError::Section));
        assert_eq!(new("T", "0a1", 3, "id"), Err(CourseError::Section));
        assert_eq!(new("T", "001", 0, "id"), Err(CourseError::Credits));
        assert_eq!(new("T", "001", 6, "id"), Err(CourseError::Credits));
        assert_eq!(new("T", "001", 3, ""), Err(CourseError::InstructorId));
        assert!(new("T", "001", 1, "id").is_ok());
        assert!(new("T", "001", 5, "id").is_ok());
    }

    #[test]
    fn test_text_fields_reject_record_delimiters() {
        let new = |title, instructor| {
            Course::new("CSC 216", title, "001", 3, instructor, "MW", 900, 1000)
        };
        assert_eq!(new("Software, Dev", "id"), Err(CourseError::Title));
        assert_eq!(new("Software\nDev", "id"), Err(CourseError::Title));
        assert_eq!(new("Software Dev\r", "id"), Err(CourseError::Title));
        assert_eq!(new("Software Dev", "a,b"), Err(CourseError::InstructorId));
        assert_eq!(new("Software Dev", "ab\n"), Err(CourseError::InstructorId));
        assert!(new("Software Dev: C & Java - 1", "sesmith5").is_ok());
    }

    #[test]
    fn test_first_failing_field_wins() {
        let result = Course::new("bad", "", "x", 9, "", "", 0, 0);
        assert_eq!(result, Err(CourseError::Name));

        let result = Course::new("CSC 216", "T", "x", 9, "", "", 0, 0);
        assert_eq!(result, Err(CourseError::Section));
    }

    #[test]
    fn test_meeting_days() {
        assert!(timed("MTWHF", 800, 900).is_ok());
        assert!(timed("F", 800, 900).is_ok());
        assert_eq!(timed("", 800, 900), Err(CourseError::MeetingDaysAndTime));
        assert_eq!(timed("MM", 800, 900), Err(CourseError::MeetingDaysAndTime));
        assert_eq!(timed("MWM", 800, 900), Err(CourseError::MeetingDaysAndTime));
        assert_eq!(timed("MS", 800, 900), Err(CourseError::MeetingDaysAndTime));
        assert_eq!(timed("mw", 800, 900), Err(CourseError::MeetingDaysAndTime));
        assert_eq!(timed("AM", 800, 900), Err(CourseError::MeetingDaysAndTime));
    }

    #[test]
    fn test_arranged_requires_zero_times() {
        assert!(timed("A", 0, 0).is_ok());
        assert_eq!(timed("A", 900, 0), Err(CourseError::MeetingDaysAndTime));
        assert_eq!(timed("A", 0, 1000), Err(CourseError::MeetingDaysAndTime));
    }

    #[test]
    fn test_time_ranges() {
        assert!(timed("MW", 900, 1030).is_ok());
        assert!(timed("MW", 0, 2359).is_ok());
        assert!(timed("MW", 1200, 1200).is_ok());
        assert_eq!(timed("MW", 1030, 900), Err(CourseError::MeetingDaysAndTime));
        assert_eq!(timed("MW", 2400, 2400), Err(CourseError::MeetingDaysAndTime));
        assert_eq!(timed("MW", 900, 2400), Err(CourseError::MeetingDaysAndTime));
        assert_eq!(timed("MW", 961, 1000), Err(CourseError::MeetingDaysAndTime));
        assert_eq!(timed("MW", 900, 960), Err(CourseError::MeetingDaysAndTime));
    }

    #[test]
    fn test_meeting_string() {
        assert_eq!(timed("MW", 1300, 1450).unwrap().meeting_string(), "MW 1:00PM-2:50PM");
        assert_eq!(timed("TH", 905, 1015).unwrap().meeting_string(), "TH 9:05AM-10:15AM");
        assert_eq!(timed("F", 0, 30).unwrap().meeting_string(), "F 12:00AM-12:30AM");
        assert_eq!(timed("F", 1200, 2359).unwrap().meeting_string(), "F 12:00PM-11:59PM");
    }

    #[test]
    fn test_record_line() {
        let course = timed("MW", 900, 1030).unwrap();
        assert_eq!(
            course.to_record(),
            "CSC 216,Software Development Fundamentals,001,3,sesmith5,MW,900,1030"
        );

        let arranged = Course::arranged("CSC 217", "Lab", "211", 1, "jctetter", "A").unwrap();
        assert_eq!(arranged.to_record(), "CSC 217,Lab,211,1,jctetter,A");
    }

    #[test]
    fn test_equality_covers_all_fields() {
        let a = timed("MW", 900, 1030).unwrap();
        let b = timed("MW", 900, 1030).unwrap();
        let c = timed("MW", 900, 1045).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut set = std::collections::HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert!(!set.contains(&c));
    }

    #[test]
    fn test_serialize_camel_case() {
        let course = timed("MW", 900, 1030).unwrap();
        let json = serde_json::to_value(&course).unwrap();
        assert_eq!(json["instructorId"], "sesmith5");
        assert_eq!(json["startTime"], 900);
    }

    proptest! {
        #[test]
        fn prop_well_formed_names_accepted(name in "[A-Za-z]{1,4} [0-9]{3}") {
            prop_assert!(named(&name).is_ok());
        }

        #[test]
        fn prop_names_without_space_rejected(name in "[A-Za-z0-9]{5,8}") {
            prop_assert_eq!(named(&name), Err(CourseError::Name));
        }

        #[test]
        fn prop_titles_with_commas_rejected(head in "[A-Za-z ]{0,10}", tail in "[A-Za-z ]{0,10}") {
            let title = format!("{head},{tail}");
            let result = Course::new("CSC 216", &title, "001", 3, "id", "MW", 900, 1000);
            prop_assert_eq!(result, Err(CourseError::Title));
        }

        #[test]
        fn prop_start_after_end_rejected(start in 1u32..2400, gap in 1u32..100) {
            prop_assume!(start >= gap);
            prop_assert_eq!(timed("MW", start, start - gap), Err(CourseError::MeetingDaysAndTime));
        }
    }
}
