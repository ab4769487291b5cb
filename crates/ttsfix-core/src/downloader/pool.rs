//! Bounded worker pool for concurrent downloads.
//!
//! Workers are scoped threads pulling tasks from a shared cursor; the scope
//! teardown is the drain barrier, so by the time `run_pool` returns every
//! submitted task has an outcome. A failing task never affects its siblings.

use super::{DownloadOutcome, DownloadReport, DownloadTask, Fetcher};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;

/// Runs `tasks` on up to `workers` threads and returns one report per task.
/// Completion order is unspecified; all failures are captured, none propagate.
pub fn run_pool(fetcher: &dyn Fetcher, tasks: Vec<DownloadTask>, workers: usize) -> Vec<DownloadReport> {
    if tasks.is_empty() {
        return Vec::new();
    }
    let workers = workers.max(1).min(tasks.len());
    let next = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel();

    std::thread::scope(|s| {
        for _ in 0..workers {
            let tx = tx.clone();
            let next = &next;
            let tasks = &tasks;
            s.spawn(move || loop {
                let index = next.fetch_add(1, Ordering::Relaxed);
                let Some(task) = tasks.get(index) else { break };
                let outcome = run_one(fetcher, task);
                let _ = tx.send(DownloadReport {
                    group: task.group.clone(),
                    url: task.url.clone(),
                    dest: task.dest.clone(),
                    outcome,
                });
            });
        }
        drop(tx);
    });

    rx.into_iter().collect()
}

fn run_one(fetcher: &dyn Fetcher, task: &DownloadTask) -> DownloadOutcome {
    if task.dest.exists() {
        tracing::debug!("already present, skipping: {}", task.url);
        return DownloadOutcome::AlreadyPresent;
    }
    match fetcher.fetch(&task.url, &task.dest) {
        Ok(()) => {
            tracing::info!("downloaded {}", task.url);
            DownloadOutcome::Fetched
        }
        Err(e) => {
            tracing::warn!("failed to download {}: {}", task.url, e);
            DownloadOutcome::Failed(e.to_string())
        }
    }
}
