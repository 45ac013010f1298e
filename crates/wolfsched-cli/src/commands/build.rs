// ABOUTME: 'wolfsched build' command implementation
// ABOUTME: Adds and removes catalog courses, prints the schedule, and exports it

use super::{open_scheduler, CourseSelector};
use std::path::PathBuf;
use wolfsched_lib::{Result, Scheduler, SchedulerConfig, SchedulerError};

/// Configuration for build command
pub struct BuildConfig {
    pub catalog: Option<PathBuf>,
    pub title: Option<String>,
    pub add: Vec<CourseSelector>,
    pub remove: Vec<CourseSelector>,
    pub export: Option<PathBuf>,
    pub settings: SchedulerConfig,
}

/// Build a schedule: additions first, then removals
pub fn run(config: &BuildConfig) -> Result<()> {
    let mut scheduler = open_scheduler(config.catalog.as_deref(), &config.settings)?;

    if let Some(title) = &config.title {
        scheduler.set_schedule_title(title);
    }

    for selector in &config.add {
        match scheduler.add_course_to_schedule(&selector.name, &selector.section) {
            Ok(true) => {}
            Ok(false) => println!(
                "⚠️  {} {} is not in the catalog",
                selector.name, selector.section
            ),
            Err(e @ SchedulerError::AlreadyEnrolled(_)) => println!("⚠️  {e}"),
            Err(e) => return Err(e),
        }
    }

    for selector in &config.remove {
        if !scheduler.remove_course_from_schedule(&selector.name, &selector.section) {
            println!(
                "⚠️  {} {} is not on the schedule",
                selector.name, selector.section
            );
        }
    }

    print_schedule(&scheduler);

    if let Some(path) = &config.export {
        scheduler.export_schedule(path)?;
        println!();
        println!("💾 Exported schedule to {}", path.display());
    }

    Ok(())
}

fn print_schedule(scheduler: &Scheduler) {
    println!("📋 {}\n", scheduler.title());

    let rows = scheduler.full_scheduled_course_rows();
    if rows.is_empty() {
        println!("  (no courses scheduled)");
        return;
    }

    for [name, section, title, credits, instructor, meeting] in &rows {
        println!("  {name:<8} {section}  {title} ({credits} cr, {instructor}) {meeting}");
    }
    println!();
    println!("Total credits: {}", scheduler.scheduled_credits());
}
