//! repin - deployment pin updates as pull requests
//!
//! Rewrites a commit pin embedded in a YAML deployment manifest, commits the
//! change on a deterministic branch, and opens a pull request linking the
//! old and new commits. Repeated runs against the same target converge on
//! the same branch instead of diverging.

pub mod auth;
pub mod error;
pub mod git;
pub mod manifest;
pub mod naming;
pub mod platform;
pub mod publish;
pub mod resolve;
pub mod types;
