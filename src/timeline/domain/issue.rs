//! Issue records as supplied by the data-fetching collaborator.

use super::{IssueId, IssueStage, TimelineDomainError};
use chrono::{DateTime, NaiveDate, Utc};

/// Immutable snapshot of one issue belonging to a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRecord {
    id: IssueId,
    stage: IssueStage,
    created_at: Option<DateTime<Utc>>,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl IssueRecord {
    /// Creates an issue in the given stage with no timestamps.
    #[must_use]
    pub const fn new(id: IssueId, stage: IssueStage) -> Self {
        Self {
            id,
            stage,
            created_at: None,
            started_at: None,
            completed_at: None,
        }
    }

    /// Creates an issue from a raw identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineDomainError::EmptyIssueId`] when the identifier is
    /// blank.
    pub fn from_parts(id: &str, stage: IssueStage) -> Result<Self, TimelineDomainError> {
        Ok(Self::new(IssueId::new(id)?, stage))
    }

    /// Sets the creation timestamp.
    #[must_use]
    pub const fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Sets the timestamp at which work started.
    #[must_use]
    pub const fn with_started_at(mut self, started_at: DateTime<Utc>) -> Self {
        self.started_at = Some(started_at);
        self
    }

    /// Sets the completion timestamp.
    #[must_use]
    pub const fn with_completed_at(mut self, completed_at: DateTime<Utc>) -> Self {
        self.completed_at = Some(completed_at);
        self
    }

    /// Returns the issue identifier.
    #[must_use]
    pub const fn id(&self) -> &IssueId {
        &self.id
    }

    /// Returns the lifecycle stage.
    #[must_use]
    pub const fn stage(&self) -> IssueStage {
        self.stage
    }

    /// Returns the creation timestamp, if it was parseable.
    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Returns the start timestamp, if any.
    #[must_use]
    pub const fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Returns the completion timestamp, if any.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Creation date in UTC.
    #[must_use]
    pub fn created_on(&self) -> Option<NaiveDate> {
        self.created_at.map(|timestamp| timestamp.date_naive())
    }

    /// Start date in UTC.
    #[must_use]
    pub fn started_on(&self) -> Option<NaiveDate> {
        self.started_at.map(|timestamp| timestamp.date_naive())
    }

    /// Completion date in UTC.
    #[must_use]
    pub fn completed_on(&self) -> Option<NaiveDate> {
        self.completed_at.map(|timestamp| timestamp.date_naive())
    }
}
