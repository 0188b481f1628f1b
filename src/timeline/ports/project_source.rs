//! Source port for tracker projects and their issues.

use crate::timeline::domain::{IssueRecord, ProjectId, ProjectRecord};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for project source operations.
pub type ProjectSourceResult<T> = Result<T, ProjectSourceError>;

/// Read-only access to tracker data.
///
/// Implementations return fully constructed records or an error; they never
/// hand back partially populated projects.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// Lists every project visible to the source.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectSourceError`] when the project listing cannot be
    /// produced.
    async fn list_projects(&self) -> ProjectSourceResult<Vec<ProjectRecord>>;

    /// Lists the issues belonging to a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectSourceError::NotFound`] when the source has no issue
    /// data for the project, or another variant when the data cannot be
    /// read.
    async fn list_project_issues(
        &self,
        project_id: &ProjectId,
    ) -> ProjectSourceResult<Vec<IssueRecord>>;
}

/// Errors returned by project source implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectSourceError {
    /// No data exists for the project.
    #[error("no issue data for project: {0}")]
    NotFound(ProjectId),

    /// Source data could not be decoded.
    #[error("malformed {resource}: {reason}")]
    Malformed {
        /// Resource that failed to decode.
        resource: String,
        /// Decoder failure description.
        reason: String,
    },

    /// The source refused or failed the request.
    #[error("project source unavailable: {0}")]
    Unavailable(String),

    /// Underlying I/O failure.
    #[error("project source I/O error: {0}")]
    Io(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectSourceError {
    /// Wraps an I/O error.
    pub fn io(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Io(Arc::new(err))
    }

    /// Builds a decoding error for the named resource.
    pub fn malformed(resource: impl Into<String>, reason: impl ToString) -> Self {
        Self::Malformed {
            resource: resource.into(),
            reason: reason.to_string(),
        }
    }
}
