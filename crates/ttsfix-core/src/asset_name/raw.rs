//! Paste-host raw-content rewrite.

use std::borrow::Cow;

/// Hosts whose wrapper pages must be rewritten to the raw-content path before
/// hashing and fetching, so the stored bytes are geometry text and not HTML.
const PASTE_HOST: &str = "pastebin.com";
const RAW_PREFIX: &str = "/raw";

/// Rewrites a `pastebin.com` wrapper URL to its `/raw` variant. URLs that
/// already request raw content, point elsewhere, or fail to parse are returned
/// unchanged.
pub fn raw_paste_url(url: &str) -> Cow<'_, str> {
    let parsed = match url::Url::parse(url) {
        Ok(p) => p,
        Err(_) => return Cow::Borrowed(url),
    };
    if parsed.host_str() != Some(PASTE_HOST) || parsed.path().starts_with(RAW_PREFIX) {
        return Cow::Borrowed(url);
    }
    let mut rewritten = parsed.clone();
    rewritten.set_path(&format!("{}{}", RAW_PREFIX, parsed.path()));
    Cow::Owned(rewritten.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapper_url_gains_raw_path() {
        assert_eq!(
            raw_paste_url("https://pastebin.com/AbCdEf"),
            "https://pastebin.com/raw/AbCdEf"
        );
    }

    #[test]
    fn raw_url_unchanged() {
        let u = "https://pastebin.com/raw/AbCdEf";
        assert!(matches!(raw_paste_url(u), Cow::Borrowed(_)));
        assert_eq!(raw_paste_url(u), u);
    }

    #[test]
    fn other_hosts_unchanged() {
        let u = "https://example.com/AbCdEf";
        assert_eq!(raw_paste_url(u), u);
        let steam = "http://cloud-3.steamusercontent.com/ugc/12345/";
        assert_eq!(raw_paste_url(steam), steam);
    }

    #[test]
    fn unparseable_url_unchanged() {
        let u = "http://";
        assert_eq!(raw_paste_url(u), u);
    }
}
