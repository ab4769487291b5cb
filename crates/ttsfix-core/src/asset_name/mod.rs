//! Asset naming: deterministic local filenames for downloaded URLs.
//!
//! TTS asset URLs often have no usable path segment (pastebin links, query
//! parameters, mirrors), so filenames are content-addressed by the URL text
//! itself: a 128-bit digest formatted as a UUID plus a fixed `.obj` extension.
//! The same URL always maps to the same file, so re-runs are idempotent.

mod hash;
mod raw;

pub use hash::hashed_filename;
pub use raw::raw_paste_url;

use std::path::{Path, PathBuf};

/// Target path for `url` inside `group_dir`: the paste-host raw rewrite is
/// applied first so the name (and later the fetch) refer to the raw content.
pub fn asset_path(group_dir: &Path, url: &str) -> PathBuf {
    group_dir.join(hashed_filename(&raw_paste_url(url)))
}
