//! Plain-text rendering of timeline reports.

use super::report::TimelineReport;
use minijinja::Environment;
use thiserror::Error;

const SUMMARY_TEMPLATE: &str = "\
Project timeline as of {{ generated_on }}
{{ summary.total_projects }} projects, {{ summary.completed_issues }}/{{ summary.total_issues }} issues completed, average progress {{ summary.average_progress|round(1) }}%
{% for row in rows %}
- {{ row.name }} [{{ row.status }}] {{ row.start }} -> {{ row.end }}, {{ row.progress|round(1) }}%, {{ row.completedIssueCount }}/{{ row.issueCount }} issues{{ \", lead \" ~ row.lead if row.lead else \"\" }}{{ \" (overdue)\" if row.isOverdue else \"\" }}
{% if row.description %}
  {{ row.description|excerpt }}
{% endif %}
{% endfor %}
{% if excluded %}
Not shown (no effective dates):
{% for project in excluded %}
- {{ project.name }} (missing {{ project.missing }})
{% endfor %}
{% endif %}";

/// Longest description shown before it is cut short.
const EXCERPT_CHARS: usize = 100;

/// Errors returned while rendering a report.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReportRenderError {
    /// The template engine rejected the report.
    #[error("failed to render timeline report: {0}")]
    Template(String),
}

/// Renders a report as a plain-text project listing.
///
/// # Errors
///
/// Returns [`ReportRenderError::Template`] when rendering fails.
pub fn render_summary(report: &TimelineReport) -> Result<String, ReportRenderError> {
    let mut environment = Environment::new();
    environment.set_trim_blocks(true);
    environment.set_lstrip_blocks(true);
    environment.add_filter("excerpt", excerpt);
    environment
        .render_str(SUMMARY_TEMPLATE, report)
        .map_err(|error| ReportRenderError::Template(error.to_string()))
}

/// Cuts text to [`EXCERPT_CHARS`] characters, marking the cut with `...`.
fn excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_CHARS {
        return text.to_owned();
    }
    let mut short: String = text.chars().take(EXCERPT_CHARS).collect();
    short.push_str("...");
    short
}
