//! Given steps for timeline inference BDD scenarios.

use super::world::{TimelineWorld, scenario_date, scenario_timestamp};
use eyre::WrapErr;
use linear_gantt::timeline::domain::{IssueRecord, IssueStage, ProjectRecord, classify_issue};
use rstest_bdd_macros::given;

#[given(r#"a project in state "{state}""#)]
fn project_in_state(world: &mut TimelineWorld, state: String) -> Result<(), eyre::Report> {
    let project = ProjectRecord::from_parts("scenario-project", "Scenario project")
        .wrap_err("build scenario project")?
        .with_state(state);
    world.project = Some(project);
    world.issues.clear();
    world.row = None;
    Ok(())
}

#[given(r#"the project starts on "{day}""#)]
fn project_starts_on(world: &mut TimelineWorld, day: String) -> Result<(), eyre::Report> {
    let start = scenario_date(&day)?;
    world.update_project(|project| project.with_start_date(start))
}

#[given(r#"the project targets "{day}""#)]
fn project_targets(world: &mut TimelineWorld, day: String) -> Result<(), eyre::Report> {
    let target = scenario_date(&day)?;
    world.update_project(|project| project.with_target_date(target))
}

#[given(r#"the project was completed on "{day}""#)]
fn project_completed_on(world: &mut TimelineWorld, day: String) -> Result<(), eyre::Report> {
    let completed_at = scenario_timestamp(&day)?;
    world.update_project(|project| project.with_completed_at(completed_at))
}

#[given(r#"an idle issue "{id}" in stage "{stage}""#)]
fn issue_in_stage(world: &mut TimelineWorld, id: String, stage: String) -> Result<(), eyre::Report> {
    let issue = IssueRecord::from_parts(&id, classify_issue(&stage)).wrap_err("build issue")?;
    world.issues.push(issue);
    Ok(())
}

#[given(r#"an issue "{id}" in stage "{stage}" created on "{day}""#)]
fn issue_created_on(
    world: &mut TimelineWorld,
    id: String,
    stage: String,
    day: String,
) -> Result<(), eyre::Report> {
    let created_at = scenario_timestamp(&day)?;
    let issue = IssueRecord::from_parts(&id, classify_issue(&stage))
        .wrap_err("build issue")?
        .with_created_at(created_at);
    world.issues.push(issue);
    Ok(())
}

#[given(r#"an issue "{id}" in stage "{stage}" started on "{day}""#)]
fn issue_started_on(
    world: &mut TimelineWorld,
    id: String,
    stage: String,
    day: String,
) -> Result<(), eyre::Report> {
    let started_at = scenario_timestamp(&day)?;
    let issue = IssueRecord::from_parts(&id, classify_issue(&stage))
        .wrap_err("build issue")?
        .with_started_at(started_at);
    world.issues.push(issue);
    Ok(())
}

#[given(r#"a finished issue "{id}" started on "{started}" and completed on "{completed}""#)]
fn finished_issue(
    world: &mut TimelineWorld,
    id: String,
    started: String,
    completed: String,
) -> Result<(), eyre::Report> {
    let started_at = scenario_timestamp(&started)?;
    let completed_at = scenario_timestamp(&completed)?;
    let issue = IssueRecord::from_parts(&id, IssueStage::Completed)
        .wrap_err("build issue")?
        .with_started_at(started_at)
        .with_completed_at(completed_at);
    world.issues.push(issue);
    Ok(())
}
