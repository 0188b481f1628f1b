//! Project source backed by an exported snapshot directory.
//!
//! The directory layout is:
//!
//! ```text
//! <root>/projects.json            array of project payloads
//! <root>/issues/<project-id>.json array of issue payloads for one project
//! ```
//!
//! Files are read through a capability handle, so lookups cannot escape the
//! snapshot root.

mod payload;

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;

use crate::timeline::{
    domain::{IssueRecord, ProjectId, ProjectRecord},
    ports::{ProjectSource, ProjectSourceError, ProjectSourceResult},
};
use payload::{IssuePayload, ProjectPayload};

const PROJECTS_FILE: &str = "projects.json";
const ISSUES_DIR: &str = "issues";

/// Reads projects and issues from a snapshot directory.
#[derive(Debug)]
pub struct SnapshotProjectSource {
    root: Dir,
}

impl SnapshotProjectSource {
    /// Opens a snapshot directory from an ambient path.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectSourceError::Io`] when the directory cannot be
    /// opened.
    pub fn open(path: &Utf8Path) -> ProjectSourceResult<Self> {
        let root = Dir::open_ambient_dir(path, ambient_authority()).map_err(ProjectSourceError::io)?;
        tracing::debug!(path = %path, "opened project snapshot");
        Ok(Self::from_dir(root))
    }

    /// Wraps an already opened snapshot directory.
    #[must_use]
    pub const fn from_dir(root: Dir) -> Self {
        Self { root }
    }

    /// Reads a file, returning `None` when it does not exist.
    fn read_optional(&self, path: &str) -> ProjectSourceResult<Option<String>> {
        match self.root.read_to_string(path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                Err(ProjectSourceError::malformed(path, err))
            }
            Err(err) => Err(ProjectSourceError::io(err)),
        }
    }
}

#[async_trait]
impl ProjectSource for SnapshotProjectSource {
    async fn list_projects(&self) -> ProjectSourceResult<Vec<ProjectRecord>> {
        let contents = self.read_optional(PROJECTS_FILE)?.ok_or_else(|| {
            ProjectSourceError::Unavailable(format!("snapshot has no {PROJECTS_FILE}"))
        })?;
        let projects = decode_array::<ProjectPayload>(PROJECTS_FILE, &contents)?
            .into_iter()
            .map(|payload| {
                payload
                    .into_record()
                    .map_err(|err| ProjectSourceError::malformed(PROJECTS_FILE, err))
            })
            .collect::<ProjectSourceResult<Vec<_>>>()?;
        tracing::debug!(count = projects.len(), "loaded snapshot projects");
        Ok(projects)
    }

    async fn list_project_issues(
        &self,
        project_id: &ProjectId,
    ) -> ProjectSourceResult<Vec<IssueRecord>> {
        let path = format!("{ISSUES_DIR}/{project_id}.json");
        let contents = self
            .read_optional(&path)?
            .ok_or_else(|| ProjectSourceError::NotFound(project_id.clone()))?;
        decode_array::<IssuePayload>(&path, &contents)?
            .into_iter()
            .map(|payload| {
                payload
                    .into_record()
                    .map_err(|err| ProjectSourceError::malformed(path.as_str(), err))
            })
            .collect()
    }
}

fn decode_array<T: DeserializeOwned>(resource: &str, contents: &str) -> ProjectSourceResult<Vec<T>> {
    serde_json::from_str(contents).map_err(|err| ProjectSourceError::malformed(resource, err))
}
