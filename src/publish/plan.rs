//! Phase 1: Update planning
//!
//! Resolves the hash transition and derives every name the execution phase
//! needs. Planning performs no side effects beyond reading the manifest and
//! one ref lookup.

use crate::error::Result;
use crate::naming::{branch_name, change_title, compare_url};
use crate::platform::PlatformService;
use crate::publish::{ProgressCallback, Stage};
use crate::resolve::{extract_old_hash, resolve_new_hash};
use crate::types::{Transition, UpdateConfig};
use std::path::PathBuf;
use tracing::info;

/// Everything the execution phase needs, resolved up front
#[derive(Debug, Clone)]
pub struct UpdatePlan {
    /// The (old, new) hash pair for this run
    pub transition: Transition,
    /// Deterministic update branch name
    pub branch: String,
    /// Commit message and PR title
    pub title: String,
    /// PR body: compare link between the old and new hashes
    pub description: String,
    /// Manifest file to patch
    pub manifest_path: PathBuf,
    /// Main branch name (pin prefix and PR base)
    pub main_branch: String,
    /// Manifest tag whose pin is rewritten
    pub tag: String,
    /// Git remote to push to
    pub remote: String,
}

/// Create an update plan
///
/// Resolves the new hash (explicit value or main-branch tip), extracts the
/// old hash from the manifest, and derives branch name, title, and
/// description. The same inputs always produce the same plan, so a re-run
/// targets the same branch.
pub async fn create_update_plan(
    config: &UpdateConfig,
    platform: &dyn PlatformService,
    progress: &dyn ProgressCallback,
) -> Result<UpdatePlan> {
    config.validate()?;

    progress.on_stage(Stage::ResolveIdentifiers).await;

    let new = resolve_new_hash(
        config.explicit_hash.as_deref(),
        platform,
        &config.main_branch,
    )
    .await?;

    let old = extract_old_hash(&config.manifest_path, &config.main_branch, &config.tag)?;

    info!(%old, %new, tag = %config.tag, "resolved pin transition");

    let transition = Transition { old, new };
    let branch = branch_name(&config.repo, config.environment, &transition.new);
    let title = change_title(&config.repo, config.environment, &transition.new);
    let description = compare_url(
        platform.config().host.as_deref(),
        &config.owner,
        &config.repo,
        &transition,
    );

    Ok(UpdatePlan {
        transition,
        branch,
        title,
        description,
        manifest_path: config.manifest_path.clone(),
        main_branch: config.main_branch.clone(),
        tag: config.tag.clone(),
        remote: config.remote.clone(),
    })
}
