//! Shared test utilities for integration tests

pub mod mock_git;
pub mod mock_platform;
