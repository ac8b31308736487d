// src/specs/hideout.rs
//! Extraction rules for the Hideout overview page.
//!
//! Layout it relies on:
//! - one tab group `div.wds-tabber.dealer-tabber`
//! - one `div.wds-tab__content` panel per zone, each holding a `table.wikitable`
//! - in that table: row 1 `<th>` is the zone name, row 2 is column headers,
//!   rows 3.. are upgrade levels; the first `<td>` of a level row lists
//!   requirements as `<ul><li>…</li></ul>`
//!
//! The level scan probes rows until one has no requirement list. There is
//! no fixed level count.

use scraper::{ElementRef, Html};

use crate::config::consts::FIRST_REQUIREMENT_ROW;
use crate::config::options::ScrapeOptions;
use crate::core::{html, net::Fetch};
use crate::error::{RequirementError, ScrapeError};
use crate::model::{HideoutZone, RequirementKind, ZoneRequirement};
use crate::progress::Progress;
use crate::specs::{item_page, requirement};

const TAB_GROUP: &str = "div.wds-tabber.dealer-tabber";
const TAB_PANEL: &str = "div.wds-tab__content";
const ZONE_TABLE: &str = "table.wikitable";
const ZONE_HEADER: &str = "tr:first-child th";

pub struct ZonesBundle {
    pub zones: Vec<HideoutZone>,
    /// Requirements dropped across all zones.
    pub skipped: usize,
}

pub struct ZoneBundle {
    pub zone: HideoutZone,
    pub skipped: usize,
}

/// Parse the overview markup and extract every zone.
/// Icons for item requirements are fetched through `fetcher` when enabled.
pub fn parse_doc(
    markup: &str,
    fetcher: &dyn Fetch,
    opts: &ScrapeOptions,
    progress: &mut dyn Progress,
) -> Result<ZonesBundle, ScrapeError> {
    let doc = html::parse_document(markup);
    let tables = locate_zone_tables(&doc)?;
    logf!("Found {} zone tables", tables.len());

    progress.begin(tables.len());

    let mut zones = Vec::with_capacity(tables.len());
    let mut skipped = 0usize;
    for table in tables {
        let bundle = extract_zone(table, fetcher, opts, &mut *progress)?;
        skipped += bundle.skipped;
        progress.zone_done(&bundle.zone);
        zones.push(bundle.zone);
    }

    Ok(ZonesBundle { zones, skipped })
}

/// One `table.wikitable` per zone tab, in document order.
/// A missing tab group (or a tab without a table) fails the whole pass.
pub fn locate_zone_tables(doc: &Html) -> Result<Vec<ElementRef<'_>>, ScrapeError> {
    let tabber = html::select_first(doc.root_element(), TAB_GROUP)?
        .ok_or_else(|| ScrapeError::missing(join!("tab group ", TAB_GROUP)))?;

    let panel_sel = html::selector(TAB_PANEL)?;
    let mut tables = Vec::new();
    for (i, panel) in tabber.select(&panel_sel).enumerate() {
        let table = html::select_first(panel, ZONE_TABLE)?
            .ok_or_else(|| ScrapeError::missing(format!("{ZONE_TABLE} in tab {}", i + 1)))?;
        tables.push(table);
    }
    Ok(tables)
}

/// Build one zone from its table. Bad requirements are logged and skipped;
/// a missing zone header is an error.
pub fn extract_zone(
    table: ElementRef<'_>,
    fetcher: &dyn Fetch,
    opts: &ScrapeOptions,
    progress: &mut dyn Progress,
) -> Result<ZoneBundle, ScrapeError> {
    let name = zone_name(table)?;
    let mut zone = HideoutZone::new(name);
    let mut skipped = 0usize;

    for items in level_rows(table)? {
        let level = zone.add_level();
        for li in items {
            match build_requirement(li, fetcher, opts) {
                Ok(req) => {
                    // A level was just opened, so this cannot hand the item back.
                    let _ = zone.push_requirement(req);
                }
                Err(e) => {
                    skipped += 1;
                    let reason = e.to_string();
                    loge!("Error processing requirement in {} level {level}: {reason}", zone.name);
                    progress.item_skipped(&zone.name, level, &reason);
                }
            }
        }
    }

    logd!("Zone {}: {} levels, {} requirements", zone.id, zone.levels.len(), zone.requirement_count());
    Ok(ZoneBundle { zone, skipped })
}

fn zone_name(table: ElementRef<'_>) -> Result<String, ScrapeError> {
    html::select_first(table, ZONE_HEADER)?
        .and_then(html::first_text)
        .ok_or_else(|| ScrapeError::missing("zone header cell"))
}

/// Requirement `<li>`s per level row, stopping at the first row without any.
fn level_rows(table: ElementRef<'_>) -> Result<Vec<Vec<ElementRef<'_>>>, ScrapeError> {
    let mut rows = Vec::new();
    for n in FIRST_REQUIREMENT_ROW.. {
        let sel = html::selector(&format!("tr:nth-child({n}) td:first-of-type ul li"))?;
        let items: Vec<_> = table.select(&sel).collect();
        if items.is_empty() {
            break;
        }
        rows.push(items);
    }
    Ok(rows)
}

fn build_requirement(
    li: ElementRef<'_>,
    fetcher: &dyn Fetch,
    opts: &ScrapeOptions,
) -> Result<ZoneRequirement, RequirementError> {
    let c = requirement::classify(li)?;

    let img = if c.kind == RequirementKind::Item && opts.resolve_icons {
        item_page::resolve_icon(fetcher, opts, c.link.as_deref()).map_err(RequirementError::Icon)?
    } else {
        None
    };

    Ok(ZoneRequirement::new(c.name, c.number, c.kind)
        .with_link(c.link)
        .with_img(img))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NullProgress;

    struct Offline;
    impl Fetch for Offline {
        fn get(&self, url: &str) -> Result<String, ScrapeError> {
            Err(ScrapeError::missing(format!("offline: {url}")))
        }
    }

    fn no_icons() -> ScrapeOptions {
        ScrapeOptions { resolve_icons: false, ..Default::default() }
    }

    fn page(tabs: &[&str]) -> String {
        let mut body = s!(r#"<div class="wds-tabber dealer-tabber"><div class="wds-tabs__wrapper"></div>"#);
        for t in tabs {
            body.push_str(r#"<div class="wds-tab__content">"#);
            body.push_str(t);
            body.push_str("</div>");
        }
        body.push_str("</div>");
        format!("<html><body>{body}</body></html>")
    }

    const VENTS: &str = r#"<table class="wikitable">
<tr><th colspan="4">Vents</th></tr>
<tr><th>Requirements</th><th>Function</th></tr>
<tr><td><ul><li>Level 1 <a href="/wiki/Hideout#Security">Security</a></li><li>1 <a href="/wiki/Bolts">Bolts</a></li></ul></td><td>-</td></tr>
<tr><td><ul><li><a href="/wiki/Mechanic">Mechanic</a> LL2</li><li><a href="/wiki/Endurance">Endurance</a> Level 2</li><li>Mystery</li></ul></td><td>-</td></tr>
<tr><td>Nothing here</td><td>-</td></tr>
<tr><td><ul><li>5 <a href="/wiki/Nuts">Nuts</a></li></ul></td><td>-</td></tr>
</table>"#;

    #[test]
    fn missing_tab_group_is_fatal() {
        let doc = Html::parse_document("<html><body><table class='wikitable'></table></body></html>");
        assert!(matches!(locate_zone_tables(&doc), Err(ScrapeError::MissingElement(_))));
    }

    #[test]
    fn tab_without_table_is_fatal() {
        let doc = Html::parse_document(&page(&["<p>empty</p>"]));
        assert!(locate_zone_tables(&doc).is_err());
    }

    #[test]
    fn tables_come_back_in_tab_order() {
        let a = r#"<table class="wikitable"><tr><th>Alpha</th></tr></table>"#;
        let b = r#"<table class="other"></table><table class="wikitable"><tr><th>Beta</th></tr></table>"#;
        let doc = Html::parse_document(&page(&[a, b]));
        let tables = locate_zone_tables(&doc).unwrap();
        let names: Vec<_> = tables.iter().map(|t| zone_name(*t).unwrap()).collect();
        assert_eq!(names, ["Alpha", "Beta"]);
    }

    #[test]
    fn levels_stop_at_first_row_without_list() {
        let out = parse_doc(&page(&[VENTS]), &Offline, &no_icons(), &mut NullProgress).unwrap();
        let zone = &out.zones[0];
        assert_eq!(zone.id, "vents");
        assert_eq!(zone.levels.len(), 2);
        assert_eq!(zone.levels[0].level, 1);
        assert_eq!(zone.levels[1].level, 2);
    }

    #[test]
    fn requirements_keep_document_order_and_kinds() {
        let out = parse_doc(&page(&[VENTS]), &Offline, &no_icons(), &mut NullProgress).unwrap();
        let zone = &out.zones[0];
        let l1: Vec<_> = zone.levels[0].requirements.iter().map(|r| (r.kind, r.name.as_str())).collect();
        assert_eq!(l1, [(RequirementKind::Zone, "Security"), (RequirementKind::Item, "Bolts")]);
        let l2: Vec<_> = zone.levels[1].requirements.iter().map(|r| r.kind).collect();
        assert_eq!(l2, [RequirementKind::Trader, RequirementKind::Skill]);
    }

    #[test]
    fn unclassifiable_item_is_skipped_not_fatal() {
        struct Count(usize);
        impl Progress for Count {
            fn item_skipped(&mut self, zone: &str, level: u32, _reason: &str) {
                assert_eq!((zone, level), ("Vents", 2));
                self.0 += 1;
            }
        }
        let mut count = Count(0);
        let out = parse_doc(&page(&[VENTS]), &Offline, &no_icons(), &mut count).unwrap();
        assert_eq!(out.skipped, 1);
        assert_eq!(count.0, 1);
        assert_eq!(out.zones[0].requirement_count(), 4);
    }

    #[test]
    fn icon_fetch_failure_skips_only_that_item() {
        let opts = ScrapeOptions::default();
        let out = parse_doc(&page(&[VENTS]), &Offline, &opts, &mut NullProgress).unwrap();
        let zone = &out.zones[0];
        // "Bolts" is the only item and its page is unreachable.
        assert_eq!(out.skipped, 2);
        assert!(zone.levels[0].requirements.iter().all(|r| r.kind != RequirementKind::Item));
    }

    #[test]
    fn zone_without_requirement_rows_has_no_levels() {
        let t = r#"<table class="wikitable"><tr><th>Stash</th></tr><tr><th>Req</th></tr></table>"#;
        let out = parse_doc(&page(&[t]), &Offline, &no_icons(), &mut NullProgress).unwrap();
        assert_eq!(out.zones[0].name, "Stash");
        assert!(out.zones[0].levels.is_empty());
    }

    #[test]
    fn table_without_header_fails_the_pass() {
        let t = r#"<table class="wikitable"><tr><td>no header</td></tr></table>"#;
        assert!(parse_doc(&page(&[t]), &Offline, &no_icons(), &mut NullProgress).is_err());
    }
}
