//! Platform services for the source-hosting API
//!
//! Provides the remote operations the pin update needs: looking up a branch
//! tip and opening the pull request.

mod factory;
mod github;

pub use factory::create_platform_service;
pub use github::GitHubService;

use crate::error::Result;
use crate::types::{PlatformConfig, PullRequest};
use async_trait::async_trait;

/// Remote API operations consumed by the pin update
///
/// This trait abstracts the hosting platform so the resolution and
/// publication logic can run against a mock in tests.
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Full commit hash at the tip of a branch in the service repository
    async fn branch_tip(&self, branch: &str) -> Result<String>;

    /// Open a pull request on the manifest repository
    async fn create_pr(
        &self,
        head: &str,
        base: &str,
        title: &str,
        body: &str,
    ) -> Result<PullRequest>;

    /// Get the platform configuration
    fn config(&self) -> &PlatformConfig;
}
