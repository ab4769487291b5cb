//! Fetch error type, one variant per failure boundary.

use thiserror::Error;

/// Error from a single blocking fetch (curl failure, HTTP error, or disk I/O).
/// Never propagated past the pool; it becomes a logged `Failed` outcome.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (connection, DNS, timeout, aborted write).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Temp-file creation or persist into place failed.
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),
}
