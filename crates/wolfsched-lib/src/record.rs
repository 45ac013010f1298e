// ABOUTME: Flat-file course record parsing and writing
// ABOUTME: Turns comma-delimited lines into validated Courses and writes schedules back out

use crate::course::{Course, ARRANGED};
use crate::error::{InvalidRecord, RejectReason};
use crate::Result;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::Split;
use tracing::{debug, info};

/// Parse one record line into a course
///
/// The line must hold `name,title,section,credits,instructorId,meetingDays`
/// followed by `startTime,endTime` unless the meeting days are `A`. Every
/// failure, whether arity, number format, or field validation, is reported as
/// the same [`InvalidRecord`].
pub fn parse_course(line: &str) -> std::result::Result<Course, InvalidRecord> {
    let mut tokens = Tokens::new(line);

    let name = tokens.text("name")?;
    let title = tokens.text("title")?;
    let section = tokens.text("section")?;
    let credits = tokens.integer("credits")?;
    let instructor_id = tokens.text("instructor id")?;
    let meeting_days = tokens.text("meeting days")?;

    if meeting_days == ARRANGED {
        tokens.finish()?;
        return Ok(Course::arranged(
            name,
            title,
            section,
            credits,
            instructor_id,
            meeting_days,
        )?);
    }

    let start_time = tokens.integer("start time")?;
    let end_time = tokens.integer("end time")?;
    tokens.finish()?;

    Ok(Course::new(
        name,
        title,
        section,
        credits,
        instructor_id,
        meeting_days,
        start_time,
        end_time,
    )?)
}

/// Comma-delimited token cursor over a single line
struct Tokens<'a> {
    inner: Split<'a, char>,
}

impl<'a> Tokens<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            inner: line.split(','),
        }
    }

    fn text(&mut self, field: &'static str) -> std::result::Result<&'a str, InvalidRecord> {
        self.inner
            .next()
            .ok_or_else(|| InvalidRecord::new(RejectReason::MissingField(field)))
    }

    fn integer(&mut self, field: &'static str) -> std::result::Result<u32, InvalidRecord> {
        let token = self.text(field)?;
        token.parse().map_err(|_| {
            InvalidRecord::new(RejectReason::NotAnInteger {
                field,
                token: token.to_string(),
            })
        })
    }

    fn finish(self) -> std::result::Result<(), InvalidRecord> {
        match self.inner.count() {
            0 => Ok(()),
            extra => Err(InvalidRecord::new(RejectReason::TrailingFields(extra))),
        }
    }
}

/// Read course records from a file, skipping invalid and duplicate lines
///
/// Duplicates are matched on name and section; the first occurrence is kept.
pub fn read_course_records(path: impl AsRef<Path>) -> Result<Vec<Course>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let courses = read_course_records_from(BufReader::new(file))?;
    info!(path = %path.display(), courses = courses.len(), "Loaded course records");
    Ok(courses)
}

/// Read course records from any buffered reader
pub fn read_course_records_from(reader: impl BufRead) -> Result<Vec<Course>> {
    let mut courses: Vec<Course> = Vec::new();

    for (line_number, parsed) in parse_course_lines(reader)? {
        let course = match parsed {
            Ok(course) => course,
            Err(e) => {
                debug!(line = line_number, reason = %e.reason(), "Skipping invalid course record");
                continue;
            }
        };

        let duplicate = courses
            .iter()
            .any(|c| c.name() == course.name() && c.section() == course.section());
        if duplicate {
            debug!(
                line = line_number,
                name = course.name(),
                section = course.section(),
                "Skipping duplicate course record"
            );
            continue;
        }

        courses.push(course);
    }

    Ok(courses)
}

/// Parse every line of a reader, pairing each outcome with its 1-based line number
///
/// A line that is not valid UTF-8 is rejected on its own; only a failing read
/// aborts.
pub fn parse_course_lines(
    mut reader: impl BufRead,
) -> Result<Vec<(usize, std::result::Result<Course, InvalidRecord>)>> {
    let mut parsed = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = strip_line_ending(&buf);
        let outcome = match std::str::from_utf8(line) {
            Ok(line) => parse_course(line),
            Err(_) => Err(InvalidRecord::new(RejectReason::NotUtf8)),
        };
        parsed.push((parsed.len() + 1, outcome));
    }

    Ok(parsed)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Write courses to a file, one record line each
pub fn write_course_records(path: impl AsRef<Path>, courses: &[Course]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    for course in courses {
        writeln!(writer, "{course}")?;
    }
    writer.flush()?;
    info!(path = %path.display(), courses = courses.len(), "Wrote course records");
    Ok(())
}
