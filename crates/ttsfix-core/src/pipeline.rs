//! End-to-end pipeline: load → extract → download → repair → patch.
//!
//! Owns no long-lived state; the durable side effects are the asset tree, the
//! repaired copies, and (when repairs happened) the rewritten input file.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::asset_name;
use crate::downloader::{self, DownloadOutcome, DownloadTask, Fetcher};
use crate::extract;
use crate::fixer;
use crate::patcher;

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Save/mod JSON file; rewritten in place when repairs happen.
    pub input: PathBuf,
    /// Root of the group-keyed asset tree.
    pub output_dir: PathBuf,
    /// Worker threads for the download pool.
    pub jobs: usize,
    /// Where repaired copies are written.
    pub fixed_dir: PathBuf,
    /// Published base URL for repaired files.
    pub fixed_base_url: String,
}

/// Counts for the run; per-URL failures are logged, never fatal.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PipelineSummary {
    pub groups: usize,
    pub urls: usize,
    pub fetched: usize,
    pub already_present: usize,
    pub failed: usize,
    pub repaired: usize,
    pub patched: bool,
}

/// Runs the whole pipeline once. Fatal only on unreadable or malformed input
/// JSON (and I/O failures on the input file itself during patching).
pub fn run(opts: &PipelineOptions, fetcher: &dyn Fetcher) -> Result<PipelineSummary> {
    let text = fs::read_to_string(&opts.input)
        .with_context(|| format!("read {}", opts.input.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("parse {}", opts.input.display()))?;

    let groups = extract::extract_urls(&value);
    tracing::info!(
        "extracted {} URL(s) in {} group(s) from {}",
        groups.total_urls(),
        groups.len(),
        opts.input.display()
    );

    let mut tasks = Vec::new();
    for (group, urls) in groups.iter() {
        if !downloader::is_mesh_group(group) {
            continue;
        }
        let group_dir = opts.output_dir.join(group);
        fs::create_dir_all(&group_dir)
            .with_context(|| format!("create {}", group_dir.display()))?;
        for url in urls {
            tasks.push(DownloadTask {
                group: group.to_string(),
                url: asset_name::raw_paste_url(url).into_owned(),
                dest: asset_name::asset_path(&group_dir, url),
            });
        }
    }

    let reports = downloader::run_pool(fetcher, tasks, opts.jobs);
    let mut summary = PipelineSummary {
        groups: groups.len(),
        urls: groups.total_urls(),
        ..Default::default()
    };
    for report in &reports {
        match report.outcome {
            DownloadOutcome::Fetched => summary.fetched += 1,
            DownloadOutcome::AlreadyPresent => summary.already_present += 1,
            DownloadOutcome::Failed(_) => summary.failed += 1,
        }
    }
    tracing::info!(
        "downloads: {} fetched, {} already present, {} failed",
        summary.fetched,
        summary.already_present,
        summary.failed
    );

    let fixes = fixer::scan_and_repair(
        &groups,
        &opts.output_dir,
        &opts.fixed_dir,
        &opts.fixed_base_url,
    )?;
    summary.repaired = fixes.len();

    summary.patched = patcher::patch_file(&opts.input, &fixes)?;
    if summary.patched {
        tracing::info!(
            "rewrote {} with {} replacement URL(s)",
            opts.input.display(),
            fixes.len()
        );
    }

    Ok(summary)
}
