//! Version-control adapter
//!
//! Git is treated as an opaque external tool: every operation either
//! succeeds or returns an error, with no partial-success semantics. The
//! [`GitBackend`] trait is the seam that lets the publication sequence run
//! against a mock in tests.

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::debug;

/// Version-control operations consumed by the publication sequence
#[async_trait]
pub trait GitBackend: Send + Sync {
    /// Whether a local branch with this name exists
    async fn branch_exists(&self, name: &str) -> Result<bool>;

    /// Check out an existing branch
    async fn checkout(&self, name: &str) -> Result<()>;

    /// Create a new branch from the current checkout point and switch to it
    async fn create_branch(&self, name: &str) -> Result<()>;

    /// Stage a single file
    async fn stage(&self, path: &Path) -> Result<()>;

    /// Commit staged changes with the given message
    async fn commit(&self, message: &str) -> Result<()>;

    /// Push a branch to a remote
    async fn push(&self, remote: &str, branch: &str) -> Result<()>;
}

/// [`GitBackend`] implementation shelling out to the `git` CLI
pub struct GitCli {
    workdir: Option<PathBuf>,
}

impl GitCli {
    /// Backend operating on the current working directory
    pub const fn new() -> Self {
        Self { workdir: None }
    }

    /// Backend operating on a specific working tree
    pub fn in_dir(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(workdir.into()),
        }
    }

    async fn run(&self, args: &[&str]) -> Result<String> {
        let mut cmd = Command::new("git");
        cmd.args(args);
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }

        debug!(?args, "running git");

        let output = cmd
            .output()
            .await
            .map_err(|e| Error::Git(format!("{}: {e}", args.join(" "))))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Git(format!(
                "{}: {}",
                args.join(" "),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GitBackend for GitCli {
    async fn branch_exists(&self, name: &str) -> Result<bool> {
        // rev-parse fails when the ref doesn't resolve; that's the signal,
        // not an error.
        Ok(self.run(&["rev-parse", "--verify", name]).await.is_ok())
    }

    async fn checkout(&self, name: &str) -> Result<()> {
        self.run(&["checkout", name]).await?;
        Ok(())
    }

    async fn create_branch(&self, name: &str) -> Result<()> {
        self.run(&["checkout", "-b", name]).await?;
        Ok(())
    }

    async fn stage(&self, path: &Path) -> Result<()> {
        let path = path.to_str().ok_or_else(|| {
            Error::Git(format!("non-UTF-8 path: {}", path.display()))
        })?;
        self.run(&["add", path]).await?;
        Ok(())
    }

    async fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message]).await?;
        Ok(())
    }

    async fn push(&self, remote: &str, branch: &str) -> Result<()> {
        self.run(&["push", remote, branch]).await?;
        Ok(())
    }
}
