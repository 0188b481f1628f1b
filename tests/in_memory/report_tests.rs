//! In-memory integration tests for timeline report generation.

use std::sync::Arc;

use super::helpers::{FixedClock, at, date, finished, open, project};
use linear_gantt::timeline::{
    adapters::memory::InMemoryProjectSource,
    domain::{CanonicalStatus, IssueStage, ProjectId},
    engine::EngineConfig,
    services::{
        DateWindow, GroupKey, MissingDate, ReportFilter, TimelineReportService, render_summary,
    },
};
use rstest::{fixture, rstest};

type TestService = TimelineReportService<InMemoryProjectSource, FixedClock>;

/// Seeds a portfolio covering each inference path.
#[fixture]
fn source() -> InMemoryProjectSource {
    let source = InMemoryProjectSource::new();
    source
        .insert(
            project("velocity", "Checkout rewrite", "started")
                .with_start_date(date(2023, 12, 1))
                .with_lead("Ada")
                .with_team_names(vec!["Payments".to_owned()]),
            vec![
                finished("v-1", at(2024, 1, 1), at(2024, 1, 11)),
                finished("v-2", at(2024, 1, 5), at(2024, 1, 21)),
                open("v-3", IssueStage::Started).with_started_at(at(2024, 1, 15)),
                open("v-4", IssueStage::Unstarted),
            ],
        )
        .expect("seed velocity project");
    source
        .insert(
            project("explicit", "Billing export", "paused")
                .with_start_date(date(2024, 2, 1))
                .with_target_date(date(2024, 2, 20))
                .with_lead("Grace")
                .with_team_names(vec!["Billing".to_owned()]),
            Vec::new(),
        )
        .expect("seed explicit project");
    source
        .insert(
            project("shipped", "Audit log", "completed")
                .with_start_date(date(2024, 1, 10))
                .with_target_date(date(2024, 2, 1)),
            vec![finished("s-1", at(2024, 1, 10), at(2024, 1, 30))],
        )
        .expect("seed shipped project");
    source
        .insert(
            project("backlog", "Search revamp", "backlog"),
            vec![open("b-1", IssueStage::Backlog).with_created_at(at(2024, 1, 20))],
        )
        .expect("seed backlog project");
    source
        .insert(project("idea", "Someday", "planned"), Vec::new())
        .expect("seed undated project");
    source
}

fn service(source: InMemoryProjectSource) -> TestService {
    TimelineReportService::new(Arc::new(source), Arc::new(FixedClock(at(2024, 3, 1))))
}

fn id(value: &str) -> ProjectId {
    ProjectId::new(value).expect("valid project id")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn report_resolves_each_inference_path(source: InMemoryProjectSource) {
    let report = service(source)
        .build_report(&ReportFilter::default())
        .await
        .expect("report should build");

    let velocity = report.row(&id("velocity")).expect("velocity row");
    // Span 2024-01-01..2024-01-21 is 20 days for 2 issues; 2 remain.
    assert_eq!(velocity.start, Some(date(2024, 1, 1)));
    assert_eq!(velocity.end, Some(date(2024, 2, 10)));
    assert_eq!(velocity.status, CanonicalStatus::InProgress);
    assert_eq!(velocity.progress.value(), 50.0);
    assert!(velocity.is_overdue);

    let explicit = report.row(&id("explicit")).expect("explicit row");
    assert_eq!(explicit.end, Some(date(2024, 2, 20)));
    assert!(explicit.is_overdue);

    let shipped = report.row(&id("shipped")).expect("shipped row");
    assert_eq!(shipped.status, CanonicalStatus::Done);
    assert!(!shipped.is_overdue);

    let backlog = report.row(&id("backlog")).expect("backlog row");
    assert_eq!(backlog.start, Some(date(2024, 1, 20)));
    assert_eq!(backlog.end, Some(date(2024, 7, 18)));
    assert!(!backlog.is_overdue);

    assert_eq!(report.excluded.len(), 1);
    let excluded = report.excluded.first().expect("one excluded project");
    assert_eq!(excluded.id, id("idea"));
    assert_eq!(excluded.missing, MissingDate::Both);

    let order: Vec<&str> = report.rows.iter().map(|row| row.id.as_str()).collect();
    assert_eq!(order, vec!["velocity", "shipped", "backlog", "explicit"]);
    assert_eq!(report.summary.total_projects, 4);
    assert_eq!(report.summary.total_issues, 6);
    assert_eq!(report.summary.completed_issues, 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_issue_fetch_falls_back_to_project_dates(source: InMemoryProjectSource) {
    source
        .fail_issue_fetch(id("velocity"))
        .expect("mark velocity fetch failing");

    let report = service(source)
        .build_report(&ReportFilter::default())
        .await
        .expect("report should build");

    let velocity = report.row(&id("velocity")).expect("velocity row");
    assert_eq!(velocity.start, Some(date(2023, 12, 1)));
    assert_eq!(velocity.end, Some(date(2024, 5, 29)));
    assert_eq!(velocity.issue_count, 0);
    assert_eq!(velocity.progress.value(), 0.0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn team_and_window_filters_narrow_the_report(source: InMemoryProjectSource) {
    let service = service(source);

    let billing = service
        .build_report(&ReportFilter::default().with_teams(vec!["Billing".to_owned()]))
        .await
        .expect("team report should build");
    let windowed = service
        .build_report(&ReportFilter::default().with_window(DateWindow::new(
            Some(date(2024, 2, 15)),
            Some(date(2024, 2, 28)),
        )))
        .await
        .expect("windowed report should build");

    let billing_ids: Vec<&str> = billing.rows.iter().map(|row| row.id.as_str()).collect();
    assert_eq!(billing_ids, vec!["explicit"]);
    assert!(billing.excluded.is_empty());

    let windowed_ids: Vec<&str> = windowed.rows.iter().map(|row| row.id.as_str()).collect();
    assert_eq!(windowed_ids, vec!["backlog", "explicit"]);
    assert_eq!(windowed.excluded.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn configured_horizon_changes_fallback_end(source: InMemoryProjectSource) {
    let service = TimelineReportService::with_config(
        Arc::new(source),
        Arc::new(FixedClock(at(2024, 3, 1))),
        EngineConfig::default().with_fallback_horizon_days(30),
    );

    let report = service
        .build_report(&ReportFilter::default())
        .await
        .expect("report should build");

    let backlog = report.row(&id("backlog")).expect("backlog row");
    assert_eq!(backlog.end, Some(date(2024, 2, 19)));
    assert!(backlog.is_overdue);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn report_groups_and_renders(source: InMemoryProjectSource) {
    let report = service(source)
        .build_report(&ReportFilter::default())
        .await
        .expect("report should build");

    let by_lead = report.group_by(GroupKey::Lead);
    assert_eq!(by_lead["Ada"].len(), 1);
    assert_eq!(by_lead["Unassigned"].len(), 2);

    let text = render_summary(&report).expect("render summary");
    assert!(text.contains("Project timeline as of 2024-03-01"));
    assert!(text.contains("- Checkout rewrite [in_progress] 2024-01-01 -> 2024-02-10"));
    assert!(text.contains("- Someday (missing both)"));
}
