//! Manifest patching
//!
//! Rewrites exactly one pin in the manifest as a plain string substitution.
//! The file is never reparsed or re-serialized, so comments, ordering, and
//! formatting of unrelated keys survive byte-for-byte.

use crate::error::{Error, Result};
use crate::types::Transition;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Quoted YAML scalar form of a pin line value
fn pin(tag: &str, main_branch: &str, hash: &str) -> String {
    format!("{tag}: \"{main_branch}_{hash}\"")
}

/// Apply a pin transition to the manifest
///
/// Replaces the first occurrence of `<tag>: "<main_branch>_<old>"` with the
/// new-hash form and writes the file back. Returns `true` when a replacement
/// happened. When the exact target substring is absent the file is left
/// untouched and `false` is returned; the caller decides whether that is an
/// error.
pub fn apply_transition(
    path: &Path,
    main_branch: &str,
    tag: &str,
    transition: &Transition,
) -> Result<bool> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        op: "read",
        path: path.to_path_buf(),
        source,
    })?;

    let target = pin(tag, main_branch, &transition.old);
    let replacement = pin(tag, main_branch, &transition.new);

    if !content.contains(&target) {
        debug!(%target, "pin not present, leaving manifest untouched");
        return Ok(false);
    }

    let patched = content.replacen(&target, &replacement, 1);
    fs::write(path, patched).map_err(|source| Error::Io {
        op: "write",
        path: path.to_path_buf(),
        source,
    })?;

    debug!(%target, %replacement, "patched manifest");
    Ok(true)
}
