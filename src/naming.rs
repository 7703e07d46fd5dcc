//! Deterministic change naming
//!
//! Branch name and title are pure functions of repository, environment, and
//! the new hash, so two runs against the same target state name the same
//! branch and a re-run resumes instead of forking.

use crate::types::{Environment, Transition};

/// Default host for compare links
pub const DEFAULT_HOST: &str = "github.com";

/// Branch name for a pin update: `<repo>_<env>_<new>`
pub fn branch_name(repo: &str, environment: Environment, new_hash: &str) -> String {
    format!("{repo}_{environment}_{new_hash}")
}

/// Commit and PR title for a pin update: `<repo> <ENV> <new>`
pub fn change_title(repo: &str, environment: Environment, new_hash: &str) -> String {
    format!("{repo} {} {new_hash}", environment.as_upper_str())
}

/// PR description: a compare link between the old and new hashes
pub fn compare_url(host: Option<&str>, owner: &str, repo: &str, transition: &Transition) -> String {
    format!(
        "https://{}/{owner}/{repo}/compare/{}...{}",
        host.unwrap_or(DEFAULT_HOST),
        transition.old,
        transition.new,
    )
}
