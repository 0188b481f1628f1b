//! Status normalisation for projects and issues.
//!
//! Start and end inference both read a project's phase through
//! [`classify_project`], so the two halves of the engine always agree on it.

use super::ParseStatusError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalised project phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalStatus {
    /// No execution has been recorded yet.
    #[serde(rename = "todo")]
    Planned,
    /// Work is under way.
    #[serde(rename = "in_progress")]
    InProgress,
    /// The project is finished.
    #[serde(rename = "done")]
    Done,
    /// The project was abandoned.
    #[serde(rename = "cancelled")]
    Cancelled,
}

impl CanonicalStatus {
    /// Returns the output name used by rendering collaborators.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
            Self::Cancelled => "cancelled",
        }
    }
}

impl TryFrom<&str> for CanonicalStatus {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Planned),
            "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for CanonicalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle stage of an issue as reported by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueStage {
    /// Not yet triaged into a workflow.
    Backlog,
    /// Accepted but not started.
    Unstarted,
    /// Work has started.
    Started,
    /// Work is finished.
    Completed,
    /// Work was abandoned.
    Canceled,
}

impl IssueStage {
    /// Returns the tracker's name for the stage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::Unstarted => "unstarted",
            Self::Started => "started",
            Self::Completed => "completed",
            Self::Canceled => "canceled",
        }
    }

    /// Maps the stage onto the canonical phase set.
    #[must_use]
    pub const fn canonical(self) -> CanonicalStatus {
        match self {
            Self::Backlog | Self::Unstarted => CanonicalStatus::Planned,
            Self::Started => CanonicalStatus::InProgress,
            Self::Completed => CanonicalStatus::Done,
            Self::Canceled => CanonicalStatus::Cancelled,
        }
    }

    /// Returns whether the issue has seen any execution.
    #[must_use]
    pub const fn has_execution(self) -> bool {
        matches!(self, Self::Started | Self::Completed)
    }
}

impl fmt::Display for IssueStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a project's free-text state.
///
/// A completion timestamp marks the project done whatever its state text
/// says. Unrecognised text falls through to [`CanonicalStatus::Planned`].
///
/// # Examples
///
/// ```
/// use linear_gantt::timeline::domain::{CanonicalStatus, classify_project};
///
/// assert_eq!(classify_project("In Progress", None), CanonicalStatus::InProgress);
/// assert_eq!(classify_project("whatever", None), CanonicalStatus::Planned);
/// ```
#[must_use]
pub fn classify_project(raw_state: &str, completed_at: Option<DateTime<Utc>>) -> CanonicalStatus {
    let normalized = raw_state.trim().to_lowercase();
    if completed_at.is_some() || matches!(normalized.as_str(), "completed" | "done") {
        return CanonicalStatus::Done;
    }
    match normalized.as_str() {
        "cancelled" | "canceled" => CanonicalStatus::Cancelled,
        "started" | "in progress" | "active" => CanonicalStatus::InProgress,
        _ => CanonicalStatus::Planned,
    }
}

/// Classifies an issue's state type.
///
/// `done` and `cancelled` are accepted as spellings of the completed and
/// canceled stages. Anything unrecognised, including `triage`, is treated as
/// backlog.
#[must_use]
pub fn classify_issue(state_type: &str) -> IssueStage {
    let normalized = state_type.trim().to_lowercase();
    match normalized.as_str() {
        "unstarted" => IssueStage::Unstarted,
        "started" => IssueStage::Started,
        "completed" | "done" => IssueStage::Completed,
        "canceled" | "cancelled" => IssueStage::Canceled,
        _ => IssueStage::Backlog,
    }
}
