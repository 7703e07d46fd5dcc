//! Update command - rewrite the manifest pin and open a PR

use crate::cli::style::{Stylize, check};
use async_trait::async_trait;
use repin::error::Result;
use repin::git::GitCli;
use repin::platform::create_platform_service;
use repin::publish::{ProgressCallback, Stage, create_update_plan, execute_update};
use repin::types::{PlatformConfig, PullRequest, UpdateConfig};

/// CLI progress callback that prints to stdout
struct CliProgress;

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_stage(&self, stage: Stage) {
        match stage {
            Stage::ResolveIdentifiers => println!("Resolving commit hashes..."),
            Stage::EnsureBranch => println!("Preparing update branch..."),
            Stage::PatchManifest => println!("Patching manifest..."),
            Stage::CommitChange => println!("Committing..."),
            Stage::PushBranch => println!("Pushing..."),
            Stage::OpenPullRequest => println!("Opening pull request..."),
            Stage::Done => println!("Done!"),
        }
    }

    async fn on_branch(&self, branch: &str, reused: bool) {
        if reused {
            println!("  {} Reusing branch {}", check(), branch.accent());
        } else {
            println!("  {} Created branch {}", check(), branch.accent());
        }
    }

    async fn on_pull_request(&self, pr: &PullRequest) {
        println!("  {} Opened PR #{}", check(), pr.number);
    }

    async fn on_message(&self, message: &str) {
        println!("{message}");
    }
}

/// Run the update command
pub async fn run_update(config: &UpdateConfig, host: Option<&str>, dry_run: bool) -> Result<()> {
    config.validate()?;

    let platform_config = PlatformConfig {
        owner: config.owner.clone(),
        repo: config.repo.clone(),
        manifest_repo: config.manifest_repo.clone(),
        host: host.map(ToString::to_string),
    };
    let platform = create_platform_service(&platform_config).await?;

    let git = GitCli::new();
    let progress = CliProgress;

    let plan = create_update_plan(config, platform.as_ref(), &progress).await?;

    println!(
        "Pinning {} {} to {} (was {})",
        config.repo.accent(),
        config.environment,
        plan.transition.new.accent(),
        plan.transition.old.muted(),
    );

    let result = execute_update(&plan, &git, platform.as_ref(), &progress, dry_run).await?;

    if let Some(pr) = result.pr {
        println!();
        println!("{}", "Pull request created successfully".emphasis());
        println!("URL: {}", pr.html_url.accent());
        println!("Title: {}", plan.title);
        println!("Description:\n{}", plan.description);
    }

    Ok(())
}
