//! repin - deployment pin updates as pull requests
//!
//! CLI binary that rewrites a manifest pin and publishes it as a PR.

use anyhow::Result;
use clap::Parser;
use repin::types::{Environment, UpdateConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "repin")]
#[command(about = "Update a deployment manifest pin and open a pull request")]
#[command(version)]
struct Cli {
    /// GitHub owner (user or organization)
    #[arg(short, long)]
    owner: String,

    /// Service repository whose commits are pinned
    #[arg(short, long)]
    repo: String,

    /// Environment (dev or prod)
    #[arg(short, long)]
    env: String,

    /// Path to the YAML manifest
    #[arg(short = 'f', long)]
    file: PathBuf,

    /// Manifest tag whose value embeds the pin
    #[arg(short, long)]
    tag: String,

    /// Explicit 8-character commit hash (resolved from the main branch when omitted)
    #[arg(short, long)]
    commit: Option<String>,

    /// Name of the main branch
    #[arg(short, long, default_value = "master")]
    main_branch: String,

    /// Repository holding the manifest, where the PR is opened
    #[arg(long, default_value = "devops")]
    manifest_repo: String,

    /// Git remote to push the update branch to
    #[arg(long, default_value = "origin")]
    remote: String,

    /// Custom GitHub host (for GitHub Enterprise)
    #[arg(long)]
    host: Option<String>,

    /// Dry run - show what would be done without making changes
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let environment: Environment = cli.env.parse()?;
    let config = UpdateConfig {
        owner: cli.owner,
        repo: cli.repo,
        manifest_repo: cli.manifest_repo,
        environment,
        manifest_path: cli.file,
        tag: cli.tag,
        explicit_hash: cli.commit,
        main_branch: cli.main_branch,
        remote: cli.remote,
    };

    cli::run_update(&config, cli.host.as_deref(), cli.dry_run).await?;

    Ok(())
}
