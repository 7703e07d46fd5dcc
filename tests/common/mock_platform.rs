//! Mock platform service for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use repin::error::{Error, Result};
use repin::platform::PlatformService;
use repin::types::{PlatformConfig, PullRequest};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Call record for `create_pr`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePrCall {
    pub head: String,
    pub base: String,
    pub title: String,
    pub body: String,
}

/// Simple mock platform service for testing
///
/// Features:
/// - Auto-incrementing PR numbers
/// - Call tracking for verification
/// - Configurable branch tips
/// - Error injection for failure path testing
pub struct MockPlatformService {
    config: PlatformConfig,
    next_pr_number: AtomicU64,
    branch_tips: Mutex<HashMap<String, String>>,
    // Call tracking
    branch_tip_calls: Mutex<Vec<String>>,
    create_pr_calls: Mutex<Vec<CreatePrCall>>,
    // Error injection
    error_on_branch_tip: Mutex<Option<String>>,
    error_on_create_pr: Mutex<Option<String>>,
}

impl MockPlatformService {
    /// Create a new mock with the given config
    pub fn with_config(config: PlatformConfig) -> Self {
        Self {
            config,
            next_pr_number: AtomicU64::new(1),
            branch_tips: Mutex::new(HashMap::new()),
            branch_tip_calls: Mutex::new(Vec::new()),
            create_pr_calls: Mutex::new(Vec::new()),
            error_on_branch_tip: Mutex::new(None),
            error_on_create_pr: Mutex::new(None),
        }
    }

    /// Create a mock for a default test repository
    pub fn new_default() -> Self {
        Self::with_config(PlatformConfig {
            owner: "acme".to_string(),
            repo: "svc".to_string(),
            manifest_repo: "devops".to_string(),
            host: None,
        })
    }

    /// Set the full hash returned for a branch tip
    pub fn set_branch_tip(&self, branch: &str, full_hash: &str) {
        self.branch_tips
            .lock()
            .unwrap()
            .insert(branch.to_string(), full_hash.to_string());
    }

    /// Make `branch_tip` return an error
    pub fn fail_branch_tip(&self, msg: &str) {
        *self.error_on_branch_tip.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `create_pr` return an error
    pub fn fail_create_pr(&self, msg: &str) {
        *self.error_on_create_pr.lock().unwrap() = Some(msg.to_string());
    }

    /// Get all branches that `branch_tip` was called with
    pub fn get_branch_tip_calls(&self) -> Vec<String> {
        self.branch_tip_calls.lock().unwrap().clone()
    }

    /// Get all `create_pr` calls
    pub fn get_create_pr_calls(&self) -> Vec<CreatePrCall> {
        self.create_pr_calls.lock().unwrap().clone()
    }

    /// Assert that `create_pr` was called with specific head and base
    pub fn assert_create_pr_called(&self, head: &str, base: &str) {
        let calls = self.get_create_pr_calls();
        assert!(
            calls.iter().any(|c| c.head == head && c.base == base),
            "Expected create_pr({head}, {base}) but got: {calls:?}"
        );
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn branch_tip(&self, branch: &str) -> Result<String> {
        self.branch_tip_calls
            .lock()
            .unwrap()
            .push(branch.to_string());

        if let Some(msg) = self.error_on_branch_tip.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        self.branch_tips
            .lock()
            .unwrap()
            .get(branch)
            .cloned()
            .ok_or_else(|| Error::GitHubApi(format!("no such branch: {branch}")))
    }

    async fn create_pr(
        &self,
        head: &str,
        base: &str,
        title: &str,
        body: &str,
    ) -> Result<PullRequest> {
        self.create_pr_calls.lock().unwrap().push(CreatePrCall {
            head: head.to_string(),
            base: base.to_string(),
            title: title.to_string(),
            body: body.to_string(),
        });

        if let Some(msg) = self.error_on_create_pr.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        let number = self.next_pr_number.fetch_add(1, Ordering::SeqCst);
        Ok(PullRequest {
            number,
            html_url: format!(
                "https://github.com/{}/{}/pull/{number}",
                self.config.owner, self.config.manifest_repo
            ),
            base_ref: base.to_string(),
            head_ref: head.to_string(),
            title: title.to_string(),
        })
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
