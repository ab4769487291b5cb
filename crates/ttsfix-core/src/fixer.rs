//! Corruption detection and repair for downloaded geometry text.
//!
//! The defect is a backslash-newline line continuation that downstream mesh
//! parsers cannot handle. Detection is deliberately over-broad: any backslash
//! marks the file as corrupted. The repair collapses `\` + newline into a
//! single space and writes the result under the fixed directory; the original
//! download is never modified.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::asset_name;
use crate::downloader::is_mesh_group;
use crate::extract::UrlGroups;

/// One repaired asset: the URL as found in the save file and the published
/// URL the save file should reference instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixReport {
    pub original_url: String,
    pub fixed_url: String,
    pub fixed_path: PathBuf,
}

/// Checks `path` for the corruption signature; on a hit, writes a repaired
/// copy under `fixed_dir` (same basename) and returns its path.
pub fn check_and_repair(path: &Path, fixed_dir: &Path) -> Result<Option<PathBuf>> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    if !data.contains('\\') {
        return Ok(None);
    }
    tracing::info!("{} has backslashes", path.display());

    let name = path
        .file_name()
        .with_context(|| format!("no file name in {}", path.display()))?;
    fs::create_dir_all(fixed_dir)
        .with_context(|| format!("create {}", fixed_dir.display()))?;
    let fixed_path = fixed_dir.join(name);

    let repaired = data.replace("\\\n", " ");
    fs::write(&fixed_path, repaired)
        .with_context(|| format!("write {}", fixed_path.display()))?;
    Ok(Some(fixed_path))
}

/// Published URL for a repaired file: fixed base plus the file's basename.
pub fn replacement_url(base: &str, fixed_path: &Path) -> String {
    let name = fixed_path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    if base.ends_with('/') {
        format!("{base}{name}")
    } else {
        format!("{base}/{name}")
    }
}

/// Scans every downloaded mesh/collider asset and builds the replacement map.
///
/// Iterates the group map in discovery order, first target path per distinct
/// URL wins. Files missing on disk (failed downloads) and assets that cannot
/// be read as text are logged and skipped, never fatal.
pub fn scan_and_repair(
    groups: &UrlGroups,
    output_dir: &Path,
    fixed_dir: &Path,
    fixed_base_url: &str,
) -> Result<Vec<FixReport>> {
    let mut seen = HashSet::new();
    let mut fixes = Vec::new();

    for (group, urls) in groups.iter() {
        if !is_mesh_group(group) {
            continue;
        }
        let group_dir = output_dir.join(group);
        for url in urls {
            if !seen.insert(url.as_str()) {
                continue;
            }
            let path = asset_name::asset_path(&group_dir, url);
            if !path.exists() {
                continue;
            }
            let repaired = match check_and_repair(&path, fixed_dir) {
                Ok(repaired) => repaired,
                Err(e) => {
                    // Per-asset failure (unreadable or non-UTF-8 download):
                    // log and keep scanning the rest.
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                    continue;
                }
            };
            if let Some(fixed_path) = repaired {
                let fixed_url = replacement_url(fixed_base_url, &fixed_path);
                tracing::info!("will replace {} with {}", url, fixed_url);
                fixes.push(FixReport {
                    original_url: url.clone(),
                    fixed_url,
                    fixed_path,
                });
            }
        }
    }
    Ok(fixes)
}
