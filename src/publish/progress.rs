//! Progress callback trait for interface-agnostic updates

use crate::types::PullRequest;
use async_trait::async_trait;

/// Publication stage, in strict execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Resolving the old and new commit hashes
    ResolveIdentifiers,
    /// Creating or checking out the update branch
    EnsureBranch,
    /// Rewriting the manifest pin
    PatchManifest,
    /// Staging the manifest and committing
    CommitChange,
    /// Pushing the update branch
    PushBranch,
    /// Opening the pull request
    OpenPullRequest,
    /// Publication complete
    Done,
}

/// Progress callback trait
///
/// Implement this trait to receive progress updates during publication.
/// The CLI prints to the terminal; tests record calls.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new stage
    async fn on_stage(&self, stage: Stage);

    /// Called when the update branch is ready; `reused` is true when an
    /// existing branch of the same name was checked out
    async fn on_branch(&self, branch: &str, reused: bool);

    /// Called when the pull request has been opened
    async fn on_pull_request(&self, pr: &PullRequest);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_stage(&self, _stage: Stage) {}
    async fn on_branch(&self, _branch: &str, _reused: bool) {}
    async fn on_pull_request(&self, _pr: &PullRequest) {}
    async fn on_message(&self, _message: &str) {}
}
