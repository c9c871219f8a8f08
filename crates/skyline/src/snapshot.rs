//! Dashboard snapshot files
//!
//! Each run rewrites `services.json`, `repos.json` and `meta.json` in full.
//! Files are written one after another without a rename step, so an
//! interrupted run can leave them out of step with each other.

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;
use skyline_core::{MetaRecord, RepoRecord, ServiceRecord};
use std::path::{Path, PathBuf};
use tokio::fs;

pub const SERVICES_FILE: &str = "services.json";
pub const REPOS_FILE: &str = "repos.json";
pub const META_FILE: &str = "meta.json";

/// Everything one run writes
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub services: Vec<ServiceRecord>,
    pub repos: Vec<RepoRecord>,
    pub meta: MetaRecord,
}

impl Snapshot {
    pub fn new(
        services: Vec<ServiceRecord>,
        repos: Vec<RepoRecord>,
        project: &str,
        now: DateTime<Utc>,
    ) -> Self {
        let meta = MetaRecord::summarize(&services, &repos, project, now);
        Self {
            services,
            repos,
            meta,
        }
    }

    /// Write the three files into `dir`, creating it if needed.
    ///
    /// Returns the written paths in the order services, repos, meta.
    pub async fn write_to(&self, dir: &Path) -> anyhow::Result<[PathBuf; 3]> {
        ensure_dir(dir).await?;

        let services = dir.join(SERVICES_FILE);
        let repos = dir.join(REPOS_FILE);
        let meta = dir.join(META_FILE);

        write_json(&services, &self.services).await?;
        write_json(&repos, &self.repos).await?;
        write_json(&meta, &self.meta).await?;

        Ok([services, repos, meta])
    }
}

pub async fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir)
        .await
        .with_context(|| format!("failed to create {}", dir.display()))
}

async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> anyhow::Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!("Wrote {}", path.display());
    Ok(())
}
