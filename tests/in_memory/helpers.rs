//! Shared builders for in-memory integration tests.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use linear_gantt::timeline::domain::{IssueRecord, IssueStage, ProjectRecord};

/// Builds a calendar date, panicking on invalid input.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Builds a midday UTC timestamp on the given day.
pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Builds a project with the given id, name and state.
pub fn project(id: &str, name: &str, state: &str) -> ProjectRecord {
    ProjectRecord::from_parts(id, name)
        .expect("valid project")
        .with_state(state)
}

/// Builds a completed issue with start and completion timestamps.
pub fn finished(id: &str, started: DateTime<Utc>, completed: DateTime<Utc>) -> IssueRecord {
    IssueRecord::from_parts(id, IssueStage::Completed)
        .expect("valid issue")
        .with_started_at(started)
        .with_completed_at(completed)
}

/// Builds an issue in the given stage with no timestamps.
pub fn open(id: &str, stage: IssueStage) -> IssueRecord {
    IssueRecord::from_parts(id, stage).expect("valid issue")
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl mockable::Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}
