// src/specs/requirement.rs
//! Classifier for one requirement `<li>`.
//!
//! The overview page has no common markup for requirements, only shapes:
//!
//! ```text
//! <li>2x <a href="/wiki/Bolts">Bolts</a></li>                 item   (text, starts with a digit)
//! <li><a href="/wiki/Mechanic">Mechanic</a> LL2</li>         trader (link first, "LL" last)
//! <li><a href="/wiki/Endurance">Endurance</a> Level 2</li>   skill  (link first, "Level" last)
//! <li>Level 1 <a href="/wiki/Vents">Vents</a></li>            zone   (text, contains "Level")
//! ```
//!
//! Checks run in that priority order. Anything else is a [`ClassifyError`];
//! there is no fallback kind.

use scraper::ElementRef;

use crate::config::consts::MISSING_NAME;
use crate::core::html::{self, Child};
use crate::error::ClassifyError;
use crate::model::RequirementKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classified {
    pub kind: RequirementKind,
    pub name: String,
    /// Quantity for items, level token otherwise. Trimmed page text.
    pub number: String,
    pub link: Option<String>,
}

pub fn classify(li: ElementRef<'_>) -> Result<Classified, ClassifyError> {
    let kids = html::children(li);
    let kind = classify_shape(&kids).map_err(|e| match e {
        ClassifyError::UnknownShape(_) => ClassifyError::UnknownShape(html::text_of(li)),
        other => other,
    })?;

    Ok(Classified {
        kind,
        name: name_of(li),
        number: value_of(&kids),
        link: link_of(&kids),
    })
}

/// Kind from the children's shape alone.
pub fn classify_shape(kids: &[Child<'_>]) -> Result<RequirementKind, ClassifyError> {
    let (first, last) = match (kids.first(), kids.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return Err(ClassifyError::Empty),
    };

    match first {
        Child::Element(_) => {
            let tail = last.text();
            if tail.contains("LL") {
                Ok(RequirementKind::Trader)
            } else if tail.contains("Level") {
                Ok(RequirementKind::Skill)
            } else {
                Err(ClassifyError::UnknownShape(tail))
            }
        }
        Child::Text(t) => {
            let t = t.trim_start();
            if t.chars().next().is_some_and(char::is_numeric) {
                Ok(RequirementKind::Item)
            } else if t.contains("Level") {
                Ok(RequirementKind::Zone)
            } else {
                Err(ClassifyError::UnknownShape(s!(t)))
            }
        }
    }
}

/// Text of the first link anywhere inside the item.
fn name_of(li: ElementRef<'_>) -> String {
    match html::select_first(li, "a") {
        Ok(Some(a)) => html::text_of(a),
        _ => s!(MISSING_NAME),
    }
}

/// Leading text when the item starts with text, else the trailing child.
fn value_of(kids: &[Child<'_>]) -> String {
    let pick = match kids.first() {
        Some(c) if c.is_text() => Some(c),
        _ => kids.last(),
    };
    pick.map(|c| c.text().trim().to_string())
        .unwrap_or_else(|| s!(MISSING_NAME))
}

/// `href` of the first direct `<a>` child.
fn link_of(kids: &[Child<'_>]) -> Option<String> {
    kids.iter()
        .find(|c| c.is_tag("a"))
        .and_then(|c| c.as_element())
        .and_then(|a| html::attr(a, "href"))
}
