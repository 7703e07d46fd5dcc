//! Error types for repin

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur during a pin update run
#[derive(Debug, Error)]
pub enum Error {
    /// The new commit hash could not be determined
    #[error("could not resolve new commit hash: {0}")]
    Resolution(String),

    /// No line in the manifest yielded an 8-character hash for the tag
    #[error("commit hash for tag `{tag}` not found in {}", path.display())]
    HashNotFound {
        /// Manifest tag that was searched for
        tag: String,
        /// Manifest file that was scanned
        path: PathBuf,
    },

    /// File read/write failure
    #[error("{op} {}: {source}", path.display())]
    Io {
        /// Operation that failed ("read", "write", ...)
        op: &'static str,
        /// File the operation targeted
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A git invocation failed
    #[error("git {0}")]
    Git(String),

    /// GitHub API error
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Authentication error
    #[error("authentication error: {0}")]
    Auth(String),

    /// Invalid or missing required configuration
    #[error("{0}")]
    Prerequisite(String),

    /// The exact pin to replace is absent from the manifest
    #[error("no pin `{tag}: \"{branch}_{old}\"` found in {}; manifest already updated or tag mismatch", path.display())]
    NoChange {
        /// Manifest tag that was targeted
        tag: String,
        /// Reference branch embedded in the pin
        branch: String,
        /// Old hash that was expected in the pin
        old: String,
        /// Manifest file that was patched
        path: PathBuf,
    },
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        Self::GitHubApi(err.to_string())
    }
}

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
