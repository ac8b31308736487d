// src/specs/mod.rs
//! # Page extraction modules
//!
//! Page-specific extraction: each module knows *where the ground truth lives in
//! the HTML* of one wiki page and how to read it.
//!
//! ## What lives here
//! - **Selector choice** for the hideout overview page and for item pages.
//! - **Shape classification** of requirement list items (item / trader /
//!   skill / zone), see [`requirement`].
//! - **Light shaping** into `model` types, wrapped in small "bundle" structs
//!   that also carry skip counts.
//!
//! ## What does **not** live here
//! - **Retry policy** (`runner`), output files (`file`), console output (`cli`).
//! - **Fetch transport**: specs receive a `core::net::Fetch` and never build
//!   their own client.
//!
//! ## Typical call chain
//! ```text
//! cli → runner::run (retry) → scrape::collect_zones → specs::hideout::parse_doc
//!                                                   ↘ specs::requirement::classify
//!                                                   ↘ specs::item_page::resolve_icon
//! ```
//!
//! ## Conventions & invariants
//! - Document order is preserved for zones, levels and requirements.
//! - One bad `<li>` never aborts a zone; a missing tab group or table aborts
//!   the pass.
//! - Specs are testable **offline** against inline HTML snippets.
pub mod hideout;
pub mod item_page;
pub mod requirement;
