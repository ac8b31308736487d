// tests/common/mod.rs
//
// Scripted fetcher + synthetic pages shared by the integration tests.
//
#![allow(dead_code)]

use std::cell::Cell;
use std::collections::HashMap;
use std::path::PathBuf;

use hideout_scrape::{Fetch, ScrapeError};

pub const OVERVIEW: &str = "https://escapefromtarkov.fandom.com/wiki/Hideout";
pub const ICON: &str = "https://static.wikia.nocookie.net/escapefromtarkov/images/metal_spare_parts.png";

/// Serves fixed pages; the overview fails for the first `fail_first` requests.
pub struct Script {
    pages: HashMap<String, String>,
    fail_first: Cell<u32>,
    pub overview_hits: Cell<u32>,
    pub total_hits: Cell<u32>,
}

impl Script {
    pub fn new(fail_first: u32) -> Self {
        let mut pages = HashMap::new();
        pages.insert(OVERVIEW.to_string(), lavatory_page());
        pages.insert(
            "https://escapefromtarkov.fandom.com/wiki/Metal_spare_parts".to_string(),
            item_page(ICON),
        );
        Self {
            pages,
            fail_first: Cell::new(fail_first),
            overview_hits: Cell::new(0),
            total_hits: Cell::new(0),
        }
    }

    pub fn with_page(mut self, url: &str, body: String) -> Self {
        self.pages.insert(url.to_string(), body);
        self
    }
}

impl Fetch for Script {
    fn get(&self, url: &str) -> Result<String, ScrapeError> {
        self.total_hits.set(self.total_hits.get() + 1);
        if url == OVERVIEW {
            self.overview_hits.set(self.overview_hits.get() + 1);
            let left = self.fail_first.get();
            if left > 0 {
                self.fail_first.set(left - 1);
                return Err(ScrapeError::Status { url: url.to_string(), status: 502 });
            }
        }
        self.pages
            .get(url)
            .cloned()
            .ok_or(ScrapeError::Status { url: url.to_string(), status: 404 })
    }
}

pub fn tabber(tables: &[&str]) -> String {
    let mut body = String::from(r#"<div class="wds-tabber dealer-tabber"><div class="wds-tabs__wrapper"><ul class="wds-tabs"></ul></div>"#);
    for t in tables {
        body.push_str(r#"<div class="wds-tab__content">"#);
        body.push_str(t);
        body.push_str("</div>");
    }
    body.push_str("</div>");
    format!("<!DOCTYPE html><html><head><title>Hideout</title></head><body><main>{body}</main></body></html>")
}

pub fn lavatory_page() -> String {
    tabber(&[r#"<table class="wikitable">
<tr><th colspan="3">Lavatory</th></tr>
<tr><th>Requirements</th><th>Function</th><th>Construction time</th></tr>
<tr><td><ul><li>2x <a href="/wiki/Metal_spare_parts">Metal spare parts</a></li></ul></td><td>Unlocks crafts</td><td>1h</td></tr>
<tr><td></td><td></td><td></td></tr>
</table>"#])
}

pub fn item_page(src: &str) -> String {
    format!(
        r#"<html><body><table class="va-infobox"><tr><td class="va-infobox-icon"><a href="/x"><img src="{src}" alt="icon"></a></td></tr></table></body></html>"#
    )
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("hideout_it_{}", name));
    let _ = std::fs::remove_dir_all(&p);
    std::fs::create_dir_all(&p).unwrap();
    p
}
