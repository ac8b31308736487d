// src/progress.rs
use crate::error::ScrapeError;
use crate::model::HideoutZone;

/// Progress reporting for a scrape run.
/// The CLI implements this to print zone listings; library callers can ignore it.
pub trait Progress {
    /// Called once tables are located, with the number of zones found.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One zone fully extracted.
    fn zone_done(&mut self, _zone: &HideoutZone) {}

    /// A requirement was dropped; extraction continues.
    fn item_skipped(&mut self, _zone: &str, _level: u32, _reason: &str) {}

    /// A whole pass failed and may be retried.
    fn attempt_failed(&mut self, _attempt: u32, _err: &ScrapeError) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
