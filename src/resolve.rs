//! Commit hash resolution
//!
//! Determines the new pin (explicit value or main-branch tip) and extracts
//! the old pin from the manifest.

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Length of a short commit hash as embedded in manifest pins
pub const SHORT_HASH_LEN: usize = 8;

/// First [`SHORT_HASH_LEN`] characters of a full commit hash
pub fn shorten(full: &str) -> Result<&str> {
    full.get(..SHORT_HASH_LEN).ok_or_else(|| {
        Error::Resolution(format!(
            "ref lookup returned '{full}', shorter than {SHORT_HASH_LEN} characters"
        ))
    })
}

/// Resolve the new commit hash for this run
///
/// A non-empty explicit value is used verbatim, with no format check.
/// Otherwise the tip of `main_branch` is looked up on the platform and
/// truncated to [`SHORT_HASH_LEN`] characters.
pub async fn resolve_new_hash(
    explicit: Option<&str>,
    platform: &dyn PlatformService,
    main_branch: &str,
) -> Result<String> {
    if let Some(hash) = explicit {
        if !hash.is_empty() {
            debug!(hash, "using explicit commit hash");
            return Ok(hash.to_string());
        }
    }

    let full = platform
        .branch_tip(main_branch)
        .await
        .map_err(|e| Error::Resolution(format!("tip of {main_branch}: {e}")))?;

    let short = shorten(&full)?.to_string();
    debug!(%full, %short, "resolved commit hash from branch tip");
    Ok(short)
}

/// Extract the currently pinned hash from the manifest
///
/// Scans lines in order; for each line containing `tag` as a substring, the
/// pattern `<main_branch>_(\w{8})` is matched against that line. The first
/// capture wins. Requiring the tag on the same line as the pattern keeps an
/// unrelated tag sharing the branch prefix from matching elsewhere in the
/// file.
pub fn extract_old_hash(path: &Path, main_branch: &str, tag: &str) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        op: "read",
        path: path.to_path_buf(),
        source,
    })?;

    let pattern = format!(r"{}_(\w{{{SHORT_HASH_LEN}}})", regex::escape(main_branch));
    let re = Regex::new(&pattern).map_err(|e| Error::Resolution(e.to_string()))?;

    for line in content.lines() {
        if !line.contains(tag) {
            continue;
        }
        if let Some(captures) = re.captures(line) {
            let hash = captures[1].to_string();
            debug!(%hash, line, "extracted pinned hash");
            return Ok(hash);
        }
    }

    Err(Error::HashNotFound {
        tag: tag.to_string(),
        path: path.to_path_buf(),
    })
}
