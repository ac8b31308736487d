// src/model.rs
//! Zone → level → requirement hierarchy, and its JSON shape.
//!
//! ```text
//! [{ "id", "name", "level_requirements": [
//!     { "level": 1, "requirements": [
//!         { "id", "name", "number", "type", "img" } ] } ] }]
//! ```
//!
//! Order is document order everywhere and duplicates are kept.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::sanitize::create_id;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementKind {
    Item,
    Trader,
    Skill,
    Zone,
}

impl RequirementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementKind::Item => "item",
            RequirementKind::Trader => "trader",
            RequirementKind::Skill => "skill",
            RequirementKind::Zone => "zone",
        }
    }
}

impl fmt::Display for RequirementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One prerequisite of a level.
///
/// `number` is the page's own text: an item quantity ("2x", "15") for items,
/// a level token ("LL2", "Level 3") for the other kinds. It is never parsed,
/// so don't compare it numerically.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRequirement {
    pub id: String,
    pub name: String,
    pub number: String,
    #[serde(rename = "type")]
    pub kind: RequirementKind,
    #[serde(skip)]
    pub link: Option<String>,
    pub img: Option<String>,
}

impl ZoneRequirement {
    pub fn new(name: impl Into<String>, number: impl Into<String>, kind: RequirementKind) -> Self {
        let name = name.into();
        Self {
            id: create_id(&name),
            name,
            number: number.into(),
            kind,
            link: None,
            img: None,
        }
    }

    pub fn with_link(mut self, link: Option<String>) -> Self {
        self.link = link;
        self
    }

    pub fn with_img(mut self, img: Option<String>) -> Self {
        self.img = img;
        self
    }
}

impl fmt::Display for ZoneRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RequirementKind::Item => write!(f, "{} {}", self.number, self.name),
            _ => write!(f, "{} {}", self.name, self.number),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRequirements {
    /// 1-based.
    pub level: u32,
    pub requirements: Vec<ZoneRequirement>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HideoutZone {
    pub id: String,
    pub name: String,
    #[serde(rename = "level_requirements")]
    pub levels: Vec<LevelRequirements>,
}

impl HideoutZone {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self { id: create_id(&name), name, levels: Vec::new() }
    }

    /// Open the next level and return its number.
    pub fn add_level(&mut self) -> u32 {
        let level = self.levels.len() as u32 + 1;
        self.levels.push(LevelRequirements { level, requirements: Vec::new() });
        level
    }

    /// Append to the most recently opened level.
    /// Returns the requirement back if no level is open yet.
    pub fn push_requirement(&mut self, req: ZoneRequirement) -> Result<(), ZoneRequirement> {
        match self.levels.last_mut() {
            Some(lvl) => { lvl.requirements.push(req); Ok(()) }
            None => Err(req),
        }
    }

    pub fn level(&self, level: u32) -> Option<&LevelRequirements> {
        self.levels.get(level.checked_sub(1)? as usize)
    }

    pub fn requirement_count(&self) -> usize {
        self.levels.iter().map(|l| l.requirements.len()).sum()
    }

    /// Multi-line console listing.
    pub fn report(&self) -> String {
        let mut out = format!("Zone ID: {}\nZone Name: {}\nRequirements:\n", self.id, self.name);
        for lvl in &self.levels {
            out.push_str(&format!("  Level {}:\n", lvl.level));
            for req in &lvl.requirements {
                out.push_str(&format!("    - {req}\n"));
            }
        }
        out
    }
}
