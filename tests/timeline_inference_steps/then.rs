//! Then steps for timeline inference BDD scenarios.

use super::world::{TimelineWorld, scenario_date};
use linear_gantt::timeline::domain::CanonicalStatus;
use rstest_bdd_macros::then;

#[then(r#"the row starts on "{day}""#)]
fn row_starts_on(world: &TimelineWorld, day: String) -> Result<(), eyre::Report> {
    let expected = scenario_date(&day)?;
    let row = world.row()?;
    eyre::ensure!(
        row.start == Some(expected),
        "expected start {expected}, found {:?}",
        row.start
    );
    Ok(())
}

#[then(r#"the row ends on "{day}""#)]
fn row_ends_on(world: &TimelineWorld, day: String) -> Result<(), eyre::Report> {
    let expected = scenario_date(&day)?;
    let row = world.row()?;
    eyre::ensure!(
        row.end == Some(expected),
        "expected end {expected}, found {:?}",
        row.end
    );
    Ok(())
}

#[then("the row has no start")]
fn row_has_no_start(world: &TimelineWorld) -> Result<(), eyre::Report> {
    let row = world.row()?;
    eyre::ensure!(row.start.is_none(), "expected no start, found {:?}", row.start);
    Ok(())
}

#[then("the row has no end")]
fn row_has_no_end(world: &TimelineWorld) -> Result<(), eyre::Report> {
    let row = world.row()?;
    eyre::ensure!(row.end.is_none(), "expected no end, found {:?}", row.end);
    Ok(())
}

#[then(r#"the row status is "{status}""#)]
fn row_status_is(world: &TimelineWorld, status: String) -> Result<(), eyre::Report> {
    let expected = CanonicalStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let row = world.row()?;
    eyre::ensure!(
        row.status == expected,
        "expected status {}, found {}",
        expected.as_str(),
        row.status.as_str()
    );
    Ok(())
}

#[then("the row is overdue")]
fn row_is_overdue(world: &TimelineWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(world.row()?.is_overdue, "expected the row to be overdue");
    Ok(())
}

#[then("the row is not overdue")]
fn row_is_not_overdue(world: &TimelineWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(!world.row()?.is_overdue, "expected the row not to be overdue");
    Ok(())
}

#[then("the row progress is {progress:f64}")]
fn row_progress_is(world: &TimelineWorld, progress: f64) -> Result<(), eyre::Report> {
    let actual = world.row()?.progress.value();
    eyre::ensure!(
        (actual - progress).abs() < 0.005,
        "expected progress {progress}, found {actual}"
    );
    Ok(())
}
