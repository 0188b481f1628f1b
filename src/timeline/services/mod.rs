//! Application services for timeline reporting.

mod render;
mod report;
mod timeline_report;

pub use render::{ReportRenderError, render_summary};
pub use report::{
    DateWindow, ExcludedProject, GroupKey, MissingDate, ReportFilter, ReportSummary,
    TimelineReport, UNASSIGNED_LEAD,
};
pub use timeline_report::{TimelineReportError, TimelineReportResult, TimelineReportService};
