//! Domain model for project timeline inference.
//!
//! Records are plain immutable values built fresh from each fetch cycle. No
//! domain type stores derived schedule state; inference lives in
//! [`crate::timeline::engine`] and always takes the project and its issues
//! explicitly.

mod dates;
mod error;
mod gantt_row;
mod ids;
mod issue;
mod project;
mod status;
mod tally;

pub use dates::{parse_calendar_date, parse_timestamp};
pub use error::{ParseStatusError, TimelineDomainError};
pub use gantt_row::GanttRow;
pub use ids::{IssueId, ProjectId};
pub use issue::IssueRecord;
pub use project::ProjectRecord;
pub use status::{CanonicalStatus, IssueStage, classify_issue, classify_project};
pub use tally::{IssueTally, Progress};
