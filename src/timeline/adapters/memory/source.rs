//! In-memory project source.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::timeline::{
    domain::{IssueRecord, ProjectId, ProjectRecord},
    ports::{ProjectSource, ProjectSourceError, ProjectSourceResult},
};

/// Thread-safe in-memory project source.
///
/// Projects are listed in insertion order. Issue fetches can be made to fail
/// per project to exercise degraded report paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectSource {
    state: Arc<RwLock<InMemorySourceState>>,
}

#[derive(Debug, Default)]
struct InMemorySourceState {
    projects: Vec<ProjectRecord>,
    issues: HashMap<ProjectId, Vec<IssueRecord>>,
    failing_issue_fetches: HashSet<ProjectId>,
}

impl InMemoryProjectSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a project and its issues, replacing any project with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectSourceError::Io`] when the internal lock is poisoned.
    pub fn insert(
        &self,
        project: ProjectRecord,
        issues: Vec<IssueRecord>,
    ) -> ProjectSourceResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let id = project.id().clone();
        state.projects.retain(|existing| existing.id() != &id);
        state.projects.push(project);
        state.issues.insert(id, issues);
        Ok(())
    }

    /// Makes issue fetches for the project fail with
    /// [`ProjectSourceError::Unavailable`].
    ///
    /// # Errors
    ///
    /// Returns [`ProjectSourceError::Io`] when the internal lock is poisoned.
    pub fn fail_issue_fetch(&self, project_id: ProjectId) -> ProjectSourceResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.failing_issue_fetches.insert(project_id);
        Ok(())
    }
}

fn poisoned<T>(err: std::sync::PoisonError<T>) -> ProjectSourceError {
    ProjectSourceError::io(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ProjectSource for InMemoryProjectSource {
    async fn list_projects(&self) -> ProjectSourceResult<Vec<ProjectRecord>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.projects.clone())
    }

    async fn list_project_issues(
        &self,
        project_id: &ProjectId,
    ) -> ProjectSourceResult<Vec<IssueRecord>> {
        let state = self.state.read().map_err(poisoned)?;
        if state.failing_issue_fetches.contains(project_id) {
            return Err(ProjectSourceError::Unavailable(format!(
                "issue fetch disabled for project {project_id}"
            )));
        }
        state
            .issues
            .get(project_id)
            .cloned()
            .ok_or_else(|| ProjectSourceError::NotFound(project_id.clone()))
    }
}
