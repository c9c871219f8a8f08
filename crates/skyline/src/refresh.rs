use crate::config::RefreshConfig;
use crate::snapshot::{self, Snapshot};
use chrono::Utc;
use colored::Colorize;
use skyline_cloud_run::Gcloud;
use skyline_core::{CommandRunner, SystemRunner};
use skyline_github::Gh;
use std::sync::Arc;

/// Fetch services and repositories, then rewrite the snapshot files.
///
/// Listing failures only shrink the output; filesystem errors abort.
pub async fn handle(config: &RefreshConfig) -> anyhow::Result<Snapshot> {
    let runner: Arc<dyn CommandRunner> = Arc::new(SystemRunner::new(config.timeout));
    run(config, runner).await
}

pub async fn run(
    config: &RefreshConfig,
    runner: Arc<dyn CommandRunner>,
) -> anyhow::Result<Snapshot> {
    let gcloud = Gcloud::new(runner.clone()).with_program(&config.gcloud_bin);
    let gh = Gh::new(runner).with_program(&config.gh_bin);

    snapshot::ensure_dir(&config.data_dir).await?;

    println!("{}", "Fetching Cloud Run services...".blue());
    let services = skyline_cloud_run::fetch_services_or_empty(&gcloud, &config.mapping).await;
    println!("  Found {} services", services.len().to_string().cyan());

    println!("{}", "Fetching GitHub repositories...".blue());
    let repos = skyline_github::fetch_repos_or_empty(&gh, &config.mapping).await;
    println!("  Found {} repositories", repos.len().to_string().cyan());

    let snapshot = Snapshot::new(services, repos, &config.project, Utc::now());
    let paths = snapshot.write_to(&config.data_dir).await?;
    for path in &paths {
        println!("  Saved: {}", path.display().to_string().cyan());
    }

    println!();
    println!("{}", "✓ Refresh complete!".green());

    Ok(snapshot)
}
