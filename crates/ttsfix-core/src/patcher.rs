//! In-place URL rewriting of the original save file.
//!
//! Operates on the raw text, not a re-serialized JSON tree: formatting, key
//! order and anything the parser would not round-trip survive untouched. A
//! replacement whose original text never occurs matches nothing, silently.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::fixer::FixReport;

/// Replaces every occurrence of each original URL with its fixed counterpart
/// and rewrites `input` in place. No-op when `fixes` is empty; returns whether
/// the file was rewritten.
pub fn patch_file(input: &Path, fixes: &[FixReport]) -> Result<bool> {
    if fixes.is_empty() {
        return Ok(false);
    }

    let mut text =
        fs::read_to_string(input).with_context(|| format!("read {}", input.display()))?;
    for fix in fixes {
        tracing::info!("replacing {} with {}", fix.original_url, fix.fixed_url);
        text = text.replace(&fix.original_url, &fix.fixed_url);
    }
    fs::write(input, text).with_context(|| format!("write {}", input.display()))?;
    Ok(true)
}
