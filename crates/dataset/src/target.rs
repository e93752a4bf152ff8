//! Write target configuration (`[target]` table)

use crate::error::{DatasetError, Result};
use docseed_client::{Endpoint, WriteMode, DEFAULT_TIMEOUT};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where and how documents are written
///
/// Exactly one of `base_url` and `project_id` must be set before an
/// endpoint can be resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetConfig {
    /// Explicit documents-root URL
    pub base_url: Option<String>,
    /// Project id on the hosted API
    pub project_id: Option<String>,
    /// Write semantics
    #[serde(default)]
    pub write_mode: WriteMode,
    /// Per-request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl TargetConfig {
    /// Replace the target with an explicit base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self.project_id = None;
        self
    }

    /// Replace the target with a project id
    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self.base_url = None;
        self
    }

    /// Override the write mode
    pub fn with_write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }

    /// Override the timeout
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Reject a target that names both a URL and a project
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_some() && self.project_id.is_some() {
            return Err(DatasetError::Target(
                "set either base_url or project_id, not both".to_string(),
            ));
        }
        if self.timeout_secs == Some(0) {
            return Err(DatasetError::Target(
                "timeout_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve the documents endpoint
    pub fn endpoint(&self) -> Result<Endpoint> {
        self.validate()?;
        match (&self.base_url, &self.project_id) {
            (Some(url), None) => Ok(Endpoint::parse(url)?),
            (None, Some(project)) => Ok(Endpoint::for_project(project)?),
            _ => Err(DatasetError::Target(
                "no base_url or project_id configured".to_string(),
            )),
        }
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }
}
