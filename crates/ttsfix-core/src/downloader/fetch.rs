//! Blocking HTTP GET to file via libcurl.
//!
//! The body is streamed into a temp file in the destination directory and
//! persisted into place only after a 2xx response, so a failed or aborted
//! fetch leaves nothing at the target path.

use super::FetchError;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Production fetcher: plain GET, redirects followed. No transfer timeout;
/// a stalled server blocks its worker thread, by contract.
pub struct CurlFetcher;

impl super::Fetcher for CurlFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<(), FetchError> {
        let dir = dest.parent().unwrap_or_else(|| Path::new("."));
        let tmp = tempfile::NamedTempFile::new_in(dir)?;
        let mut out = tmp.as_file().try_clone()?;

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(Duration::from_secs(30))?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(move |data| match out.write_all(data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    tracing::warn!("write to temp file failed: {}", e);
                    Ok(0) // abort transfer; surfaces as a curl write error
                }
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }

        tmp.persist(dest).map_err(|e| FetchError::Io(e.error))?;
        Ok(())
    }
}
