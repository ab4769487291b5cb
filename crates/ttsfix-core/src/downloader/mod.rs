//! Asset download stage.
//!
//! Only mesh/collider groups are fetched; every other group is extracted and
//! reported but never touches the network. Fetching is behind the [`Fetcher`]
//! trait so the pool and pipeline are testable without real I/O.

mod error;
mod fetch;
mod pool;

pub use error::FetchError;
pub use fetch::CurlFetcher;
pub use pool::run_pool;

use std::path::{Path, PathBuf};

/// Case-sensitive substrings marking groups that hold mesh/collider asset
/// references. Only these are downloaded and checked for corruption.
pub const MESH_MARKERS: [&str; 2] = ["MeshURL", "ColliderURL"];

/// True when `group` names mesh or collider assets.
pub fn is_mesh_group(group: &str) -> bool {
    MESH_MARKERS.iter().any(|m| group.contains(m))
}

/// Blocking fetch-to-file primitive. A failed fetch must leave no file at
/// `dest` (the fix stage treats an existing path as a completed download).
pub trait Fetcher: Sync {
    fn fetch(&self, url: &str, dest: &Path) -> Result<(), FetchError>;
}

/// One unit of work for the pool: fetch `url` into `dest`. `url` is the
/// effective fetch URL (paste-host rewrite already applied).
#[derive(Debug, Clone)]
pub struct DownloadTask {
    pub group: String,
    pub url: String,
    pub dest: PathBuf,
}

/// Per-URL result, captured explicitly rather than re-derived from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// Target path already existed; no network access was made.
    AlreadyPresent,
    Fetched,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct DownloadReport {
    pub group: String,
    pub url: String,
    pub dest: PathBuf,
    pub outcome: DownloadOutcome,
}
