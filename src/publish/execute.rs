//! Phase 2: Update execution
//!
//! Runs the side-effecting stages in strict sequence:
//! `EnsureBranch → PatchManifest → CommitChange → PushBranch →
//! OpenPullRequest → Done`. Fail-fast: the first error aborts the run. The
//! branch left behind by a partial run is reused by the next run, so the
//! sequence is safe to re-invoke from the start.

use crate::error::{Error, Result};
use crate::git::GitBackend;
use crate::manifest::apply_transition;
use crate::platform::PlatformService;
use crate::publish::{ProgressCallback, Stage, UpdatePlan};
use crate::types::PullRequest;
use tracing::info;

/// Result of update execution
#[derive(Debug, Clone)]
pub struct UpdateResult {
    /// The opened pull request; `None` on a dry run
    pub pr: Option<PullRequest>,
    /// Update branch the change was published on
    pub branch: String,
    /// Whether an existing branch of the same name was reused
    pub reused_branch: bool,
}

/// Execute an update plan
///
/// Performs the actual operations: ensure the update branch, patch the
/// manifest, commit, push, and open the PR. With `dry_run` the planned
/// operations are reported and nothing is touched.
pub async fn execute_update(
    plan: &UpdatePlan,
    git: &dyn GitBackend,
    platform: &dyn PlatformService,
    progress: &dyn ProgressCallback,
    dry_run: bool,
) -> Result<UpdateResult> {
    if dry_run {
        progress.on_message("Dry run - no changes will be made").await;
        report_dry_run(plan, progress).await;
        return Ok(UpdateResult {
            pr: None,
            branch: plan.branch.clone(),
            reused_branch: false,
        });
    }

    // Stage: EnsureBranch
    progress.on_stage(Stage::EnsureBranch).await;

    let reused_branch = git.branch_exists(&plan.branch).await?;
    if reused_branch {
        git.checkout(&plan.branch).await?;
    } else {
        git.create_branch(&plan.branch).await?;
    }
    progress.on_branch(&plan.branch, reused_branch).await;

    // Stage: PatchManifest
    progress.on_stage(Stage::PatchManifest).await;

    let changed = apply_transition(
        &plan.manifest_path,
        &plan.main_branch,
        &plan.tag,
        &plan.transition,
    )?;
    if !changed {
        // Committing would fail with an opaque "nothing to commit"; name
        // the missing pin instead.
        return Err(Error::NoChange {
            tag: plan.tag.clone(),
            branch: plan.main_branch.clone(),
            old: plan.transition.old.clone(),
            path: plan.manifest_path.clone(),
        });
    }

    // Stage: CommitChange - stages exactly the manifest file
    progress.on_stage(Stage::CommitChange).await;
    git.stage(&plan.manifest_path).await?;
    git.commit(&plan.title).await?;

    // Stage: PushBranch
    progress.on_stage(Stage::PushBranch).await;
    git.push(&plan.remote, &plan.branch).await?;

    // Stage: OpenPullRequest
    progress.on_stage(Stage::OpenPullRequest).await;
    let pr = platform
        .create_pr(&plan.branch, &plan.main_branch, &plan.title, &plan.description)
        .await?;
    progress.on_pull_request(&pr).await;

    info!(pr = pr.number, branch = %plan.branch, "pin update published");
    progress.on_stage(Stage::Done).await;

    Ok(UpdateResult {
        pr: Some(pr),
        branch: plan.branch.clone(),
        reused_branch,
    })
}

/// Report what would be done in a dry run
async fn report_dry_run(plan: &UpdatePlan, progress: &dyn ProgressCallback) {
    progress
        .on_message(&format!("Would use branch: {}", plan.branch))
        .await;
    progress
        .on_message(&format!(
            "Would rewrite {} pin: {} -> {}",
            plan.tag, plan.transition.old, plan.transition.new
        ))
        .await;
    progress
        .on_message(&format!(
            "Would commit and push to {}: {}",
            plan.remote, plan.title
        ))
        .await;
    progress
        .on_message(&format!(
            "Would open PR against {}: {}",
            plan.main_branch, plan.description
        ))
        .await;
}
