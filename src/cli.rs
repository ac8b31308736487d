// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::consts::*;
use crate::config::options::{AppOptions, ExportOptions, RetryPolicy, ScrapeOptions, Source};
use crate::core::HttpFetcher;
use crate::error::ScrapeError;
use crate::model::HideoutZone;
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

#[derive(Parser, Debug)]
#[command(author, version, about = "Scrape hideout zone upgrade requirements into JSON", long_about = None)]
pub struct Args {
    /// Hideout overview page
    #[arg(long, env = "HIDEOUT_URL", default_value = OVERVIEW_URL)]
    pub url: String,

    /// Origin prepended to relative item links
    #[arg(long, env = "HIDEOUT_ORIGIN", default_value = ORIGIN)]
    pub origin: String,

    /// Parse a saved copy of the overview page instead of fetching it
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (a directory gets hideout_zones.json inside it)
    #[arg(short, long, env = "HIDEOUT_OUT", default_value = DEFAULT_OUT_FILE)]
    pub out: PathBuf,

    /// Total fetch-and-extract attempts
    #[arg(long, env = "HIDEOUT_ATTEMPTS", default_value_t = DEFAULT_ATTEMPTS)]
    pub attempts: u32,

    /// Pause between attempts, in milliseconds
    #[arg(long, env = "HIDEOUT_PAUSE_MS", default_value_t = DEFAULT_PAUSE_MS)]
    pub pause_ms: u64,

    /// Skip item page lookups; every "img" is null
    #[arg(long)]
    pub no_icons: bool,

    /// Single-line JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    /// Don't print zone listings
    #[arg(short, long)]
    pub quiet: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn into_options(self) -> AppOptions {
        AppOptions {
            scrape: ScrapeOptions {
                url: self.url,
                origin: self.origin,
                source: self.input.map_or(Source::Remote, Source::File),
                resolve_icons: !self.no_icons,
            },
            retry: RetryPolicy {
                max_attempts: self.attempts,
                pause: Duration::from_millis(self.pause_ms),
            },
            export: ExportOptions { out_path: self.out, pretty: !self.compact },
        }
    }
}

/// Prints zone listings to stdout and failures to stderr.
pub struct ConsoleProgress {
    quiet: bool,
    done: usize,
    total: usize,
}

impl ConsoleProgress {
    pub fn new(quiet: bool) -> Self {
        Self { quiet, done: 0, total: 0 }
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        if !self.quiet { eprintln!("{msg}"); }
    }
    fn zone_done(&mut self, zone: &HideoutZone) {
        self.done += 1;
        if !self.quiet {
            print!("{}", zone.report());
        }
    }
    fn item_skipped(&mut self, zone: &str, level: u32, reason: &str) {
        eprintln!("Error processing requirement ({zone}, level {level}): {reason}");
    }
    fn attempt_failed(&mut self, attempt: u32, err: &ScrapeError) {
        eprintln!("Error scraping (attempt {attempt}): {err}");
    }
    fn finish(&mut self) {
        if !self.quiet && self.total > 0 {
            eprintln!("Scraped {}/{} zones", self.done, self.total);
        }
    }
}

pub fn run() -> color_eyre::Result<RunSummary> {
    let args = Args::parse();
    crate::log::init(args.verbose);

    let mut progress = ConsoleProgress::new(args.quiet);
    let opts = args.into_options();
    let fetcher = HttpFetcher::new()?;

    let summary = runner::run(&fetcher, &opts, Some(&mut progress))?;
    if !summary.succeeded {
        eprintln!("All {} attempts failed; wrote an empty zone list", summary.attempts);
    }
    println!("Wrote {}", summary.file_written.display());
    Ok(summary)
}
