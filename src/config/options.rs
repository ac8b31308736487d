// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub retry: RetryPolicy,
    pub export: ExportOptions,
}

/// Where the overview markup comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// Fetch `ScrapeOptions::url`.
    Remote,
    /// Read a saved copy of the page from disk.
    File(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub url: String,
    /// Prefix for relative detail links (`/wiki/...`).
    pub origin: String,
    pub source: Source,
    /// Follow item links to fetch icon URLs (one request per item).
    pub resolve_icons: bool,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            url: s!(OVERVIEW_URL),
            origin: s!(ORIGIN),
            source: Source::Remote,
            resolve_icons: true,
        }
    }
}

impl ScrapeOptions {
    /// Absolute URL for a detail link; absolute links pass through.
    pub fn detail_url(&self, link: &str) -> String {
        if link.starts_with("http://") || link.starts_with("https://") {
            s!(link)
        } else if link.starts_with("//") {
            join!("https:", link)
        } else {
            join!(self.origin.trim_end_matches('/'), link)
        }
    }
}

/// Whole-pass retry: `max_attempts` tries with a fixed `pause` between them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub pause: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_ATTEMPTS,
            pause: Duration::from_millis(DEFAULT_PAUSE_MS),
        }
    }
}

impl RetryPolicy {
    pub fn no_pause(max_attempts: u32) -> Self {
        Self { max_attempts, pause: Duration::ZERO }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_path: PathBuf,
    pub pretty: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from(DEFAULT_OUT_FILE),
            pretty: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_url_joins_relative_links() {
        let opts = ScrapeOptions::default();
        assert_eq!(
            opts.detail_url("/wiki/Bolts"),
            "https://escapefromtarkov.fandom.com/wiki/Bolts"
        );
    }

    #[test]
    fn detail_url_keeps_absolute_links() {
        let opts = ScrapeOptions { origin: s!("https://example.org/"), ..Default::default() };
        assert_eq!(opts.detail_url("https://other.net/x"), "https://other.net/x");
        assert_eq!(opts.detail_url("//cdn.net/x"), "https://cdn.net/x");
        assert_eq!(opts.detail_url("/wiki/A"), "https://example.org/wiki/A");
    }

    #[test]
    fn defaults_match_reference_run() {
        let o = AppOptions::default();
        assert_eq!(o.retry.max_attempts, 3);
        assert_eq!(o.retry.pause, Duration::from_secs(1));
        assert_eq!(o.export.out_path, PathBuf::from("hideout_zones.json"));
        assert!(o.scrape.resolve_icons);
    }
}
