// src/core/html.rs
//! Thin helpers over `scraper` so the specs read as "find X, take its text".

use scraper::{ElementRef, Html, Node, Selector};

use crate::core::sanitize::normalize_ws;
use crate::error::ScrapeError;

/// One direct child of an element, as the specs care about it.
/// Comments, doctypes and processing instructions are dropped.
#[derive(Clone, Copy, Debug)]
pub enum Child<'a> {
    Text(&'a str),
    Element(ElementRef<'a>),
}

impl<'a> Child<'a> {
    /// Raw text: the string itself, or all descendant text of the element.
    pub fn text(&self) -> String {
        match self {
            Child::Text(t) => s!(*t),
            Child::Element(el) => el.text().collect(),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Child::Text(_))
    }

    pub fn as_element(&self) -> Option<ElementRef<'a>> {
        match self {
            Child::Element(el) => Some(*el),
            Child::Text(_) => None,
        }
    }

    pub fn is_tag(&self, name: &str) -> bool {
        self.as_element()
            .is_some_and(|el| el.value().name().eq_ignore_ascii_case(name))
    }
}

/// Direct children of `el` in document order.
pub fn children(el: ElementRef<'_>) -> Vec<Child<'_>> {
    el.children()
        .filter_map(|node| match node.value() {
            Node::Text(t) => Some(Child::Text(&**t)),
            Node::Element(_) => ElementRef::wrap(node).map(Child::Element),
            _ => None,
        })
        .collect()
}

pub fn selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|_| ScrapeError::Selector(s!(css)))
}

pub fn parse_document(markup: &str) -> Html {
    Html::parse_document(markup)
}

/// First element under `scope` matching `css`.
pub fn select_first<'a>(scope: ElementRef<'a>, css: &str) -> Result<Option<ElementRef<'a>>, ScrapeError> {
    let sel = selector(css)?;
    Ok(scope.select(&sel).next())
}

/// All descendant text of `el`, whitespace-collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// First non-blank text node under `el`, trimmed.
/// Header cells sometimes carry a trailing `<br>` or icon; the label comes first.
pub fn first_text(el: ElementRef<'_>) -> Option<String> {
    el.text()
        .map(str::trim)
        .find(|t| !t.is_empty())
        .map(|t| s!(t))
}

pub fn attr(el: ElementRef<'_>, name: &str) -> Option<String> {
    el.value().attr(name).map(|v| s!(v))
}
