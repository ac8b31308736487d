// src/config/consts.rs

// Net config
pub const OVERVIEW_URL: &str = "https://escapefromtarkov.fandom.com/wiki/Hideout";
pub const ORIGIN: &str = "https://escapefromtarkov.fandom.com";
pub const USER_AGENT: &str = concat!("hideout_scrape/", env!("CARGO_PKG_VERSION"));

// Export
pub const DEFAULT_OUT_FILE: &str = "hideout_zones.json";

// Retry
pub const DEFAULT_ATTEMPTS: u32 = 3;
pub const DEFAULT_PAUSE_MS: u64 = 1_000;

// Page layout
pub const FIRST_REQUIREMENT_ROW: usize = 3; // 1-based; rows 1-2 are headers
pub const MISSING_NAME: &str = "N/A";
