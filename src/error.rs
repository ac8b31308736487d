// src/error.rs
//! Error taxonomy.
//!
//! - [`ScrapeError`] is the transport/structure tier: anything that makes one
//!   whole fetch-and-extract pass unusable. The runner retries on it.
//! - [`ClassifyError`] is the requirement tier: one `<li>` that could not be
//!   turned into a requirement. The zone extractor logs it and moves on.
//! - [`RequirementError`] wraps everything that can sink a single requirement,
//!   including its icon lookup.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("{0} not found")]
    MissingElement(String),

    #[error("invalid CSS selector '{0}'")]
    Selector(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ScrapeError {
    pub fn missing(what: impl Into<String>) -> Self {
        ScrapeError::MissingElement(what.into())
    }

    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        ScrapeError::Io { path: path.as_ref().display().to_string(), source }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("list item has no content")]
    Empty,

    #[error("unrecognized requirement shape: {0:?}")]
    UnknownShape(String),
}

#[derive(Debug, Error)]
pub enum RequirementError {
    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error("icon lookup failed: {0}")]
    Icon(#[source] ScrapeError),
}
