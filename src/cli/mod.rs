//! CLI commands
//!
//! Command implementations for the `repin` binary.

mod style;
mod update;

pub use update::run_update;
