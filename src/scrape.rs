// src/scrape.rs
use std::{fs, time::Instant};

use crate::{
    config::options::{ScrapeOptions, Source},
    core::net::Fetch,
    error::ScrapeError,
    progress::Progress,
    specs::hideout::{self, ZonesBundle},
};

/// Overview markup from the configured source.
pub fn load_overview(fetcher: &dyn Fetch, opts: &ScrapeOptions) -> Result<String, ScrapeError> {
    match &opts.source {
        Source::Remote => fetcher.get(&opts.url),
        Source::File(path) => fs::read_to_string(path).map_err(|e| ScrapeError::io(path, e)),
    }
}

/// One full fetch-and-extract pass. Any error here fails the pass.
pub fn collect_zones(
    fetcher: &dyn Fetch,
    opts: &ScrapeOptions,
    progress: &mut dyn Progress,
) -> Result<ZonesBundle, ScrapeError> {
    progress.log("Fetching hideout overview…");

    let markup = load_overview(fetcher, opts)?;
    let t = Instant::now();
    let bundle = hideout::parse_doc(&markup, fetcher, opts, progress)?;
    logf!(
        "Extracted {} zones ({} requirements skipped) in {:?}",
        bundle.zones.len(),
        bundle.skipped,
        t.elapsed()
    );
    Ok(bundle)
}
