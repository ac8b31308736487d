// src/specs/item_page.rs
// Icon lookup on an item's own wiki page: `td.va-infobox-icon a img[src]`.
// Missing page parts resolve to None; only fetch failures are errors.

use crate::config::options::ScrapeOptions;
use crate::core::{html, net::Fetch};
use crate::error::ScrapeError;

const ICON_IMG: &str = "td.va-infobox-icon a img";

pub fn resolve_icon(
    fetcher: &dyn Fetch,
    opts: &ScrapeOptions,
    link: Option<&str>,
) -> Result<Option<String>, ScrapeError> {
    let Some(link) = link.filter(|l| !l.is_empty()) else {
        return Ok(None);
    };
    let url = opts.detail_url(link);
    let doc = fetcher.get(&url)?;
    let icon = parse_icon(&doc)?;
    if icon.is_none() {
        logd!("No icon on {url}");
    }
    Ok(icon)
}

/// Split out for unit tests.
pub fn parse_icon(markup: &str) -> Result<Option<String>, ScrapeError> {
    let doc = html::parse_document(markup);
    let img = html::select_first(doc.root_element(), ICON_IMG)?;
    Ok(img.and_then(|el| html::attr(el, "src")))
}
