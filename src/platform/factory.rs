//! Platform service factory
//!
//! Resolves authentication and constructs the platform service.

use crate::auth::get_github_auth;
use crate::error::Result;
use crate::platform::{GitHubService, PlatformService};
use crate::types::PlatformConfig;
use tracing::debug;

/// Create a platform service from configuration
///
/// Handles token acquisition and client construction.
pub async fn create_platform_service(
    config: &PlatformConfig,
) -> Result<Box<dyn PlatformService>> {
    let auth = get_github_auth().await?;
    debug!(source = ?auth.source, "resolved GitHub token");
    Ok(Box::new(GitHubService::new(&auth.token, config.clone())?))
}
