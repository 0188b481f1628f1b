//! Project records as supplied by the data-fetching collaborator.

use super::{CanonicalStatus, ProjectId, TimelineDomainError, classify_project};
use chrono::{DateTime, NaiveDate, Utc};

/// State assumed when the tracker omits a project's state.
const DEFAULT_STATE: &str = "planned";

/// Immutable snapshot of a tracker project.
///
/// The record never carries issues or derived dates; pass the issue list to
/// the engine alongside the project on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRecord {
    id: ProjectId,
    name: String,
    raw_state: String,
    explicit_start_date: Option<NaiveDate>,
    explicit_target_date: Option<NaiveDate>,
    completed_at: Option<DateTime<Utc>>,
    color: Option<String>,
    lead: Option<String>,
    description: Option<String>,
    team_names: Vec<String>,
    reported_progress: Option<f64>,
}

impl ProjectRecord {
    /// Creates a project in the default `planned` state with no dates.
    #[must_use]
    pub fn new(id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            raw_state: DEFAULT_STATE.to_owned(),
            explicit_start_date: None,
            explicit_target_date: None,
            completed_at: None,
            color: None,
            lead: None,
            description: None,
            team_names: Vec::new(),
            reported_progress: None,
        }
    }

    /// Creates a project from a raw identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineDomainError::EmptyProjectId`] when the identifier is
    /// blank.
    pub fn from_parts(id: &str, name: impl Into<String>) -> Result<Self, TimelineDomainError> {
        Ok(Self::new(ProjectId::new(id)?, name))
    }

    /// Sets the tracker's free-text state.
    #[must_use]
    pub fn with_state(mut self, raw_state: impl Into<String>) -> Self {
        self.raw_state = raw_state.into();
        self
    }

    /// Sets the planned start date.
    #[must_use]
    pub const fn with_start_date(mut self, start: NaiveDate) -> Self {
        self.explicit_start_date = Some(start);
        self
    }

    /// Sets the planned target date.
    #[must_use]
    pub const fn with_target_date(mut self, target: NaiveDate) -> Self {
        self.explicit_target_date = Some(target);
        self
    }

    /// Sets the completion timestamp.
    #[must_use]
    pub const fn with_completed_at(mut self, completed_at: DateTime<Utc>) -> Self {
        self.completed_at = Some(completed_at);
        self
    }

    /// Sets the display colour.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = non_blank(color.into());
        self
    }

    /// Sets the lead's display name.
    #[must_use]
    pub fn with_lead(mut self, lead: impl Into<String>) -> Self {
        self.lead = non_blank(lead.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = non_blank(description.into());
        self
    }

    /// Sets the owning team names. Blank names are dropped.
    #[must_use]
    pub fn with_team_names(mut self, team_names: impl IntoIterator<Item = String>) -> Self {
        self.team_names = team_names
            .into_iter()
            .filter_map(non_blank)
            .collect();
        self
    }

    /// Sets the progress percentage reported by the tracker itself.
    #[must_use]
    pub const fn with_reported_progress(mut self, progress: f64) -> Self {
        self.reported_progress = Some(progress);
        self
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> &ProjectId {
        &self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the tracker's free-text state.
    #[must_use]
    pub fn raw_state(&self) -> &str {
        &self.raw_state
    }

    /// Returns the planned start date, if any.
    #[must_use]
    pub const fn explicit_start_date(&self) -> Option<NaiveDate> {
        self.explicit_start_date
    }

    /// Returns the planned target date, if any.
    #[must_use]
    pub const fn explicit_target_date(&self) -> Option<NaiveDate> {
        self.explicit_target_date
    }

    /// Returns the completion timestamp, if any.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the display colour, if any.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Returns the lead's display name, if any.
    #[must_use]
    pub fn lead(&self) -> Option<&str> {
        self.lead.as_deref()
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the owning team names.
    #[must_use]
    pub fn team_names(&self) -> &[String] {
        &self.team_names
    }

    /// Returns the tracker-reported progress percentage, if any.
    #[must_use]
    pub const fn reported_progress(&self) -> Option<f64> {
        self.reported_progress
    }

    /// Returns the project's canonical phase.
    #[must_use]
    pub fn status(&self) -> CanonicalStatus {
        classify_project(&self.raw_state, self.completed_at)
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
