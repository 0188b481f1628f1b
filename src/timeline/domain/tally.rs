//! Issue counts and the derived progress percentage.

use super::{IssueRecord, IssueStage};
use serde::{Deserialize, Serialize};

/// Completion percentage in the closed range 0–100.
///
/// Deserialised values pass through [`Progress::new`], so out-of-range input
/// is clamped rather than trusted.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Progress(f64);

impl Progress {
    /// Upper bound of the percentage scale.
    pub const MAX: f64 = 100.0;

    /// Creates a percentage, clamping it into range. `NaN` becomes zero.
    #[must_use]
    pub fn new(percent: f64) -> Self {
        if percent.is_nan() {
            return Self(0.0);
        }
        Self(percent.clamp(0.0, Self::MAX))
    }

    /// Returns the percentage value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Progress {
    fn from(percent: f64) -> Self {
        Self::new(percent)
    }
}

impl From<Progress> for f64 {
    fn from(progress: Progress) -> Self {
        progress.0
    }
}

/// Issue counts for one project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IssueTally {
    issue_count: usize,
    completed_issue_count: usize,
}

impl IssueTally {
    /// Counts all issues and those in the completed stage.
    #[must_use]
    pub fn from_issues(issues: &[IssueRecord]) -> Self {
        Self {
            issue_count: issues.len(),
            completed_issue_count: issues
                .iter()
                .filter(|issue| issue.stage() == IssueStage::Completed)
                .count(),
        }
    }

    /// Returns the total number of issues.
    #[must_use]
    pub const fn issue_count(self) -> usize {
        self.issue_count
    }

    /// Returns the number of completed issues.
    #[must_use]
    pub const fn completed_issue_count(self) -> usize {
        self.completed_issue_count
    }

    /// Derives the progress percentage.
    ///
    /// With at least one issue the share of completed issues wins, rounded to
    /// two decimals. Without issues the tracker-reported figure is used,
    /// defaulting to zero.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "progress is a display percentage rounded to two decimals"
    )]
    pub fn progress(self, reported: Option<f64>) -> Progress {
        if self.issue_count == 0 {
            return Progress::new(reported.unwrap_or_default());
        }
        let share = count_as_f64(self.completed_issue_count) / count_as_f64(self.issue_count);
        Progress::new((share * Progress::MAX * 100.0).round() / 100.0)
    }
}

fn count_as_f64(count: usize) -> f64 {
    f64::from(u32::try_from(count).unwrap_or(u32::MAX))
}
