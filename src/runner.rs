// src/runner.rs
use std::path::PathBuf;
use std::thread;

use crate::{
    config::options::{AppOptions, RetryPolicy, ScrapeOptions},
    core::net::Fetch,
    error::ScrapeError,
    file,
    model::HideoutZone,
    progress::{NullProgress, Progress},
    scrape,
};

/// Result of the retry loop, before anything is written.
pub struct Harvest {
    /// Zones from the successful pass; empty if every pass failed.
    pub zones: Vec<HideoutZone>,
    pub attempts: u32,
    pub skipped: usize,
    pub last_error: Option<ScrapeError>,
}

impl Harvest {
    pub fn succeeded(&self) -> bool {
        self.last_error.is_none()
    }
}

/// Summary of what was produced.
pub struct RunSummary {
    pub zones: Vec<HideoutZone>,
    pub attempts: u32,
    pub skipped: usize,
    pub succeeded: bool,
    pub file_written: PathBuf,
}

/// Run whole fetch-and-extract passes until one succeeds or the policy runs out.
/// Sleeps `retry.pause` between attempts, never after the last one.
pub fn scrape_with_retry(
    fetcher: &dyn Fetch,
    opts: &ScrapeOptions,
    retry: &RetryPolicy,
    progress: &mut dyn Progress,
) -> Harvest {
    let max = retry.max_attempts.max(1);
    let mut last_error = None;

    for attempt in 1..=max {
        match scrape::collect_zones(fetcher, opts, &mut *progress) {
            Ok(bundle) => {
                logf!("Scrape: OK on attempt {attempt}/{max}, zones={}", bundle.zones.len());
                return Harvest {
                    zones: bundle.zones,
                    attempts: attempt,
                    skipped: bundle.skipped,
                    last_error: None,
                };
            }
            Err(e) => {
                loge!("Error scraping (attempt {attempt}/{max}): {e}");
                progress.attempt_failed(attempt, &e);
                last_error = Some(e);
                if attempt < max && !retry.pause.is_zero() {
                    thread::sleep(retry.pause);
                }
            }
        }
    }

    logw!("Scrape: giving up after {max} attempts; writing empty result");
    Harvest { zones: Vec::new(), attempts: max, skipped: 0, last_error }
}

/// Top-level runner: retry the scrape, then write the export exactly once.
/// Exhausted retries are not an error; only the final write can fail.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    fetcher: &dyn Fetch,
    opts: &AppOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, ScrapeError> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let harvest = scrape_with_retry(fetcher, &opts.scrape, &opts.retry, &mut *progress);
    let succeeded = harvest.succeeded();
    let path = file::write_export(&opts.export, &harvest.zones)?;
    progress.finish();

    Ok(RunSummary {
        zones: harvest.zones,
        attempts: harvest.attempts,
        skipped: harvest.skipped,
        succeeded,
        file_written: path,
    })
}
