//! Mock version-control backend for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use repin::error::{Error, Result};
use repin::git::GitBackend;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A recorded git operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitOp {
    Checkout(String),
    CreateBranch(String),
    Stage(PathBuf),
    Commit(String),
    Push { remote: String, branch: String },
}

/// Mock git backend with call tracking and error injection
///
/// Created branches are registered, so a second run against the same mock
/// sees the branch as existing - matching real working-tree state.
pub struct MockGit {
    branches: Mutex<HashSet<String>>,
    ops: Mutex<Vec<GitOp>>,
    error_on_commit: Mutex<Option<String>>,
    error_on_push: Mutex<Option<String>>,
}

impl MockGit {
    pub fn new() -> Self {
        Self {
            branches: Mutex::new(HashSet::new()),
            ops: Mutex::new(Vec::new()),
            error_on_commit: Mutex::new(None),
            error_on_push: Mutex::new(None),
        }
    }

    /// Pre-register an existing local branch
    pub fn add_branch(&self, name: &str) {
        self.branches.lock().unwrap().insert(name.to_string());
    }

    /// Make `commit` return an error
    pub fn fail_commit(&self, msg: &str) {
        *self.error_on_commit.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `push` return an error
    pub fn fail_push(&self, msg: &str) {
        *self.error_on_push.lock().unwrap() = Some(msg.to_string());
    }

    /// All recorded operations, in call order
    pub fn get_ops(&self) -> Vec<GitOp> {
        self.ops.lock().unwrap().clone()
    }

    /// All commit messages, in call order
    pub fn get_commits(&self) -> Vec<String> {
        self.get_ops()
            .into_iter()
            .filter_map(|op| match op {
                GitOp::Commit(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    fn record(&self, op: GitOp) {
        self.ops.lock().unwrap().push(op);
    }
}

impl Default for MockGit {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GitBackend for MockGit {
    async fn branch_exists(&self, name: &str) -> Result<bool> {
        Ok(self.branches.lock().unwrap().contains(name))
    }

    async fn checkout(&self, name: &str) -> Result<()> {
        if !self.branches.lock().unwrap().contains(name) {
            return Err(Error::Git(format!("checkout {name}: no such branch")));
        }
        self.record(GitOp::Checkout(name.to_string()));
        Ok(())
    }

    async fn create_branch(&self, name: &str) -> Result<()> {
        self.branches.lock().unwrap().insert(name.to_string());
        self.record(GitOp::CreateBranch(name.to_string()));
        Ok(())
    }

    async fn stage(&self, path: &Path) -> Result<()> {
        self.record(GitOp::Stage(path.to_path_buf()));
        Ok(())
    }

    async fn commit(&self, message: &str) -> Result<()> {
        if let Some(msg) = self.error_on_commit.lock().unwrap().as_ref() {
            return Err(Error::Git(format!("commit: {msg}")));
        }
        self.record(GitOp::Commit(message.to_string()));
        Ok(())
    }

    async fn push(&self, remote: &str, branch: &str) -> Result<()> {
        if let Some(msg) = self.error_on_push.lock().unwrap().as_ref() {
            return Err(Error::Git(format!("push: {msg}")));
        }
        self.record(GitOp::Push {
            remote: remote.to_string(),
            branch: branch.to_string(),
        });
        Ok(())
    }
}
