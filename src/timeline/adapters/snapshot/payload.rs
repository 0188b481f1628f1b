//! Serde payloads for exported tracker snapshots.
//!
//! Field names follow the tracker's export shape. Date fields are kept as
//! text and parsed leniently, so a malformed date becomes absent instead of
//! failing the whole file. That includes dates exported with the wrong JSON
//! type, such as numbers or booleans.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::timeline::domain::{
    IssueRecord, ProjectRecord, TimelineDomainError, classify_issue, parse_calendar_date,
    parse_timestamp,
};

/// Reads an optional text field, treating any non-string value as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|raw| match raw {
        Value::String(text) => Some(text),
        _ => None,
    }))
}

/// Connection wrapper used by the export for nested lists.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct NodeList<T> {
    #[serde(default = "Vec::new")]
    nodes: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct NamedPayload {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ProjectPayload {
    id: String,
    name: String,
    state: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    target_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    completed_at: Option<String>,
    progress: Option<f64>,
    description: Option<String>,
    color: Option<String>,
    lead: Option<NamedPayload>,
    teams: Option<NodeList<NamedPayload>>,
}

impl ProjectPayload {
    pub(super) fn into_record(self) -> Result<ProjectRecord, TimelineDomainError> {
        let mut record = ProjectRecord::from_parts(&self.id, self.name)?;
        if let Some(state) = self.state {
            record = record.with_state(state);
        }
        if let Some(start) = self.start_date.as_deref().and_then(parse_calendar_date) {
            record = record.with_start_date(start);
        }
        if let Some(target) = self.target_date.as_deref().and_then(parse_calendar_date) {
            record = record.with_target_date(target);
        }
        if let Some(completed_at) = self.completed_at.as_deref().and_then(parse_timestamp) {
            record = record.with_completed_at(completed_at);
        }
        if let Some(progress) = self.progress {
            record = record.with_reported_progress(progress);
        }
        if let Some(description) = self.description {
            record = record.with_description(description);
        }
        if let Some(color) = self.color {
            record = record.with_color(color);
        }
        if let Some(lead) = self.lead.and_then(|lead| lead.name) {
            record = record.with_lead(lead);
        }
        let team_names = self
            .teams
            .map(|teams| teams.nodes)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|team| team.name);
        Ok(record.with_team_names(team_names))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct IssueStatePayload {
    #[serde(rename = "type", default)]
    kind: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct IssuePayload {
    id: String,
    state: Option<IssueStatePayload>,
    #[serde(default, deserialize_with = "lenient_text")]
    created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    started_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    completed_at: Option<String>,
}

impl IssuePayload {
    pub(super) fn into_record(self) -> Result<IssueRecord, TimelineDomainError> {
        let stage = classify_issue(self.state.as_ref().map_or("", |state| state.kind.as_str()));
        let mut record = IssueRecord::from_parts(&self.id, stage)?;
        if let Some(created_at) = self.created_at.as_deref().and_then(parse_timestamp) {
            record = record.with_created_at(created_at);
        }
        if let Some(started_at) = self.started_at.as_deref().and_then(parse_timestamp) {
            record = record.with_started_at(started_at);
        }
        if let Some(completed_at) = self.completed_at.as_deref().and_then(parse_timestamp) {
            record = record.with_completed_at(completed_at);
        }
        Ok(record)
    }
}
