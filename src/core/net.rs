// src/core/net.rs
// Blocking HTTP GET. Every call waits for the response; no retries here,
// the runner retries whole passes.

use std::time::Instant;

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::error::ScrapeError;

/// Anything that can turn a URL into markup.
/// The live client is [`HttpFetcher`]; tests script their own.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<String, ScrapeError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ScrapeError::Http { url: s!("<client>"), source: e })?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String, ScrapeError> {
        let t = Instant::now();
        let http_err = |e| ScrapeError::Http { url: s!(url), source: e };

        let resp = self.client.get(url).send().map_err(http_err)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { url: s!(url), status: status.as_u16() });
        }
        let body = resp.text().map_err(http_err)?;
        logd!("GET {url} -> {} bytes in {:?}", body.len(), t.elapsed());
        Ok(body)
    }
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn get(&self, url: &str) -> Result<String, ScrapeError> {
        (**self).get(url)
    }
}
