use anyhow::Context;
use skyline_core::{MappingTable, PROJECT_NAME};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings for one refresh run, fixed at startup
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    pub data_dir: PathBuf,
    pub timeout: Duration,
    pub gcloud_bin: String,
    pub gh_bin: String,
    pub project: String,
    pub mapping: MappingTable,
}

impl RefreshConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            timeout: skyline_core::DEFAULT_TIMEOUT,
            gcloud_bin: "gcloud".to_string(),
            gh_bin: "gh".to_string(),
            project: PROJECT_NAME.to_string(),
            mapping: MappingTable::builtin(),
        }
    }
}

/// `data` directory next to the directory holding the executable
///
/// For `/opt/dashboard/bin/skyline` this is `/opt/dashboard/data`.
pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("failed to locate the skyline executable")?;
    Ok(data_dir_for(&exe))
}

fn data_dir_for(exe: &Path) -> PathBuf {
    let bin_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    let root = bin_dir.parent().unwrap_or(bin_dir);
    root.join("data")
}
