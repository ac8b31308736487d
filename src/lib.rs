// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod file;
pub mod model;
pub mod progress;
pub mod runner;
pub mod scrape;

pub use crate::core::net::{Fetch, HttpFetcher};
pub use error::{ClassifyError, ScrapeError};
pub use model::{HideoutZone, LevelRequirements, RequirementKind, ZoneRequirement};
