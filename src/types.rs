//! Core types for repin

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Deployment environment a manifest pin belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    /// Development environment
    Dev,
    /// Production environment
    Prod,
}

impl Environment {
    /// Environment name as it appears in branch names (lowercase)
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Prod => "prod",
        }
    }

    /// Environment name as it appears in titles (uppercase)
    pub const fn as_upper_str(self) -> &'static str {
        match self {
            Self::Dev => "DEV",
            Self::Prod => "PROD",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "prod" => Ok(Self::Prod),
            other => Err(Error::Prerequisite(format!(
                "environment must be 'dev' or 'prod', got '{other}'"
            ))),
        }
    }
}

/// The (old, new) commit hash pair for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Hash currently pinned in the manifest (8 characters)
    pub old: String,
    /// Hash the manifest will be pinned to (8 characters)
    pub new: String,
}

/// All inputs for one pin update run
#[derive(Debug, Clone)]
pub struct UpdateConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Service repository whose commits are pinned
    pub repo: String,
    /// Repository holding the manifest, where the PR is opened
    pub manifest_repo: String,
    /// Target environment
    pub environment: Environment,
    /// Path to the manifest file inside the working tree
    pub manifest_path: PathBuf,
    /// Manifest tag whose value embeds the pin
    pub tag: String,
    /// Explicit new hash; resolved from the main-branch tip when `None`
    pub explicit_hash: Option<String>,
    /// Name of the main branch (pin prefix and PR base)
    pub main_branch: String,
    /// Git remote to push the update branch to
    pub remote: String,
}

impl UpdateConfig {
    /// Validate required fields before any side effect
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.owner.is_empty() {
            return Err(Error::Prerequisite("owner (-o) is required".to_string()));
        }
        if self.repo.is_empty() {
            return Err(Error::Prerequisite(
                "repository (-r) is required".to_string(),
            ));
        }
        if self.tag.is_empty() {
            return Err(Error::Prerequisite("tag (-t) is required".to_string()));
        }
        Ok(())
    }
}

/// A created pull request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// Web URL for the PR
    pub html_url: String,
    /// Base branch name
    pub base_ref: String,
    /// Head branch name
    pub head_ref: String,
    /// PR title
    pub title: String,
}

/// Platform configuration
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Service repository used for ref lookups and compare links
    pub repo: String,
    /// Repository the pull request is opened against
    pub manifest_repo: String,
    /// Custom host (None for github.com)
    pub host: Option<String>,
}
