//! Snapshot records
//!
//! Field names follow the dashboard front end, which reads the JSON files
//! directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Readiness status value that counts as healthy
pub const HEALTHY_STATUS: &str = "True";

/// A deployed Cloud Run service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub name: String,
    pub url: String,
    /// Status of the `Ready` condition ("True", "False", "Unknown", ...)
    pub status: String,
    pub region: String,
    /// Repository URL
    #[serde(rename = "repo")]
    pub repo_url: Option<String>,
    pub repo_name: Option<String>,
}

impl ServiceRecord {
    pub fn is_healthy(&self) -> bool {
        self.status == HEALTHY_STATUS
    }
}

/// A GitHub repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoRecord {
    pub name: String,
    pub url: String,
    pub description: String,
    pub updated_at: String,
    pub cloud_run_service: Option<String>,
}

/// Summary written to `meta.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaRecord {
    pub last_update: String,
    pub project: String,
    pub total_services: usize,
    pub total_repos: usize,
    pub healthy_services: usize,
    pub unhealthy_services: usize,
}

impl MetaRecord {
    pub fn summarize(
        services: &[ServiceRecord],
        repos: &[RepoRecord],
        project: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        let healthy = services.iter().filter(|s| s.is_healthy()).count();
        Self {
            last_update: format_timestamp(now),
            project: project.into(),
            total_services: services.len(),
            total_repos: repos.len(),
            healthy_services: healthy,
            unhealthy_services: services.len() - healthy,
        }
    }
}

/// ISO-8601 UTC with microseconds and a literal `Z`
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}
