//! gh CLI wrapper
//!
//! Wraps `gh repo list` and converts its JSON output into snapshot records.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use skyline_core::{CommandRunner, CommandSpec, MappingTable, RepoRecord};
use std::collections::HashMap;
use std::sync::Arc;

/// Maximum number of repositories requested from `gh`
pub const REPO_LIMIT: u32 = 100;

const REPO_FIELDS: &str = "name,url,updatedAt,description";

/// gh CLI wrapper
pub struct Gh {
    runner: Arc<dyn CommandRunner>,
    program: String,
}

impl Gh {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            program: "gh".to_string(),
        }
    }

    /// Use a different executable than `gh` from `PATH`
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn list_command(&self) -> CommandSpec {
        let limit = REPO_LIMIT.to_string();
        CommandSpec::new(
            &self.program,
            ["repo", "list", "--limit", limit.as_str(), "--json", REPO_FIELDS],
        )
    }

    /// List repositories of the authenticated account
    pub async fn list_repos(&self) -> Result<Vec<RepoDescriptor>> {
        let output = self.runner.run(&self.list_command()).await?;

        if output.trim().is_empty() {
            return Ok(Vec::new());
        }

        let repos: Vec<RepoDescriptor> = serde_json::from_str(&output)?;
        Ok(repos)
    }
}

/// Repository as printed by `gh repo list --json`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoDescriptor {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub updated_at: Option<String>,
}

impl RepoDescriptor {
    pub fn into_record(self, inverse: &HashMap<&str, &str>) -> RepoRecord {
        let cloud_run_service = inverse.get(self.name.as_str()).map(|s| s.to_string());
        RepoRecord {
            name: self.name,
            url: self.url,
            description: self.description.unwrap_or_default(),
            updated_at: self.updated_at.unwrap_or_default(),
            cloud_run_service,
        }
    }
}

/// List repositories and attach the Cloud Run service each one deploys
///
/// A repository shared by several services reports only the last one in
/// the mapping table.
pub async fn fetch_repos(gh: &Gh, mapping: &MappingTable) -> Result<Vec<RepoRecord>> {
    let descriptors = gh.list_repos().await?;
    let inverse = mapping.inverse();

    Ok(descriptors
        .into_iter()
        .map(|d| {
            let aliases = mapping.services_for(&d.name);
            if aliases.len() > 1 {
                tracing::debug!(
                    "Repository {} deploys {} services, reporting {}",
                    d.name,
                    aliases.join(", "),
                    aliases.last().copied().unwrap_or_default()
                );
            }
            d.into_record(&inverse)
        })
        .collect())
}

/// Like [`fetch_repos`], but a failed command or unparsable output yields
/// an empty list
pub async fn fetch_repos_or_empty(gh: &Gh, mapping: &MappingTable) -> Vec<RepoRecord> {
    match fetch_repos(gh, mapping).await {
        Ok(repos) => repos,
        Err(e) => {
            tracing::warn!("GitHub repositories unavailable: {}", e);
            Vec::new()
        }
    }
}
