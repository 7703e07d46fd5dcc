//! Two-phase publication engine
//!
//! Handles the workflow of publishing a pin update as a pull request:
//! 1. Planning - resolve both commit hashes and derive all names
//! 2. Execution - branch, patch, commit, push, open the PR
//!
//! Every stage is a precondition for the next; any failure aborts the run
//! immediately with no rollback, and a re-run from the start converges on
//! the same branch.

mod execute;
mod plan;
mod progress;

pub use execute::{execute_update, UpdateResult};
pub use plan::{create_update_plan, UpdatePlan};
pub use progress::{NoopProgress, ProgressCallback, Stage};
