mod config;
mod refresh;
mod snapshot;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "skyline")]
#[command(
    about = "Refresh the Cloud Run and GitHub snapshot read by the dashboard",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output directory (default: `data` next to the executable's directory)
    #[arg(long, env = "SKYLINE_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Timeout for each listing command, in seconds
    #[arg(long, env = "SKYLINE_TIMEOUT", default_value_t = 60, global = true)]
    timeout: u64,

    /// gcloud executable
    #[arg(
        long,
        env = "SKYLINE_GCLOUD_BIN",
        default_value = "gcloud",
        hide = true,
        global = true
    )]
    gcloud_bin: String,

    /// gh executable
    #[arg(
        long,
        env = "SKYLINE_GH_BIN",
        default_value = "gh",
        hide = true,
        global = true
    )]
    gh_bin: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch services and repositories and rewrite the snapshot (default)
    Refresh,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries progress lines, diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    match cli.command.unwrap_or(Commands::Refresh) {
        Commands::Version => {
            println!("skyline {}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Refresh => {
            let data_dir = match cli.data_dir {
                Some(dir) => dir,
                None => config::default_data_dir()?,
            };

            let mut config = config::RefreshConfig::new(data_dir);
            config.timeout = Duration::from_secs(cli.timeout);
            config.gcloud_bin = cli.gcloud_bin;
            config.gh_bin = cli.gh_bin;

            refresh::handle(&config).await?;
        }
    }

    Ok(())
}
