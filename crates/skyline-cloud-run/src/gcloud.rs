//! gcloud CLI wrapper
//!
//! Wraps `gcloud run services list` and converts the Knative service
//! descriptors it prints into snapshot records.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use skyline_core::{CommandRunner, CommandSpec, MappingTable, ServiceRecord};
use std::collections::HashMap;
use std::sync::Arc;

const DEFAULT_URL: &str = "N/A";
const DEFAULT_STATUS: &str = "Unknown";
const DEFAULT_REGION: &str = "us-central1";
const READY_CONDITION: &str = "Ready";
const LOCATION_LABEL: &str = "cloud.googleapis.com/location";

/// gcloud CLI wrapper
pub struct Gcloud {
    runner: Arc<dyn CommandRunner>,
    program: String,
}

impl Gcloud {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            program: "gcloud".to_string(),
        }
    }

    /// Use a different executable than `gcloud` from `PATH`
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn list_command(&self) -> CommandSpec {
        CommandSpec::new(&self.program, ["run", "services", "list", "--format=json"])
    }

    /// List all Cloud Run services
    pub async fn list_services(&self) -> Result<Vec<ServiceDescriptor>> {
        let output = self.runner.run(&self.list_command()).await?;

        if output.trim().is_empty() {
            return Ok(Vec::new());
        }

        let services: Vec<ServiceDescriptor> = serde_json::from_str(&output)?;
        Ok(services)
    }
}

/// Service descriptor as printed by `gcloud run services list --format=json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub metadata: ServiceMetadata,

    #[serde(default)]
    pub status: ServiceStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceMetadata {
    pub name: String,

    #[serde(default)]
    pub labels: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub url: Option<String>,

    #[serde(default)]
    pub conditions: Vec<Condition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    #[serde(rename = "type")]
    pub kind: String,

    pub status: Option<String>,
}

impl ServiceDescriptor {
    /// Status of the first `Ready` condition
    pub fn ready_status(&self) -> &str {
        self.status
            .conditions
            .iter()
            .find(|c| c.kind == READY_CONDITION)
            .and_then(|c| c.status.as_deref())
            .unwrap_or(DEFAULT_STATUS)
    }

    pub fn region(&self) -> &str {
        self.metadata
            .labels
            .get(LOCATION_LABEL)
            .map(String::as_str)
            .unwrap_or(DEFAULT_REGION)
    }

    pub fn into_record(self, mapping: &MappingTable) -> ServiceRecord {
        let repo_name = mapping.repo_for(&self.metadata.name).map(str::to_string);
        let repo_url = repo_name.as_deref().map(|r| mapping.repo_url(r));
        let status = self.ready_status().to_string();
        let region = self.region().to_string();

        ServiceRecord {
            name: self.metadata.name,
            url: self.status.url.unwrap_or_else(|| DEFAULT_URL.to_string()),
            status,
            region,
            repo_url,
            repo_name,
        }
    }
}

/// List services and join them against the mapping table
pub async fn fetch_services(
    gcloud: &Gcloud,
    mapping: &MappingTable,
) -> Result<Vec<ServiceRecord>> {
    let descriptors = gcloud.list_services().await?;
    Ok(descriptors
        .into_iter()
        .map(|d| d.into_record(mapping))
        .collect())
}

/// Like [`fetch_services`], but a failed command or unparsable output
/// yields an empty list
pub async fn fetch_services_or_empty(
    gcloud: &Gcloud,
    mapping: &MappingTable,
) -> Vec<ServiceRecord> {
    match fetch_services(gcloud, mapping).await {
        Ok(services) => services,
        Err(e) => {
            tracing::warn!("Cloud Run services unavailable: {}", e);
            Vec::new()
        }
    }
}
