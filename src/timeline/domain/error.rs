//! Error types for timeline domain construction and parsing.

use thiserror::Error;

/// Errors returned while constructing timeline domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TimelineDomainError {
    /// The project identifier is empty after trimming.
    #[error("project identifier must not be empty")]
    EmptyProjectId,

    /// The issue identifier is empty after trimming.
    #[error("issue identifier must not be empty")]
    EmptyIssueId,
}

/// Error returned while parsing a canonical status name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown canonical status: {0}")]
pub struct ParseStatusError(pub String);
