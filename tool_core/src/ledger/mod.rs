//! Ledger - Leveled records for traits and modifiers on a tool
//!
//! Persisted as an indexed compound ("0", "1", ...) of records. In memory the
//! records keep insertion order for display and are indexed by identifier for
//! lookup.

mod tool_trait;

pub use tool_trait::{add_trait, ToolTrait};

use crate::tag::{keys, Compound, Tag};
use crate::types::TextColor;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single leveled entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRecord {
    pub identifier: String,
    pub level: i32,
    pub color: TextColor,
}

impl LedgerRecord {
    fn to_tag(&self) -> Compound {
        let mut tag = Compound::new();
        tag.set_string(keys::IDENTIFIER, self.identifier.as_str());
        tag.set_int(keys::LEVEL, self.level);
        tag.set_string(keys::COLOR, self.color.as_str());
        tag
    }

    fn from_tag(tag: &Compound) -> Option<Self> {
        let identifier = tag.get_string(keys::IDENTIFIER)?;
        Some(LedgerRecord {
            identifier: identifier.to_string(),
            level: tag.get_int(keys::LEVEL),
            color: tag
                .get_string(keys::COLOR)
                .map(TextColor::from_name)
                .unwrap_or_default(),
        })
    }
}

/// Result of granting a level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraitGrant {
    /// Not registered; nothing changed
    Rejected,
    /// New record created
    Added,
    /// Existing record gained a level
    LeveledUp,
    /// Existing record already at max level; nothing changed
    Capped,
}

/// Ordered set of leveled records, at most one per identifier
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    records: Vec<LedgerRecord>,
    positions: HashMap<String, usize>,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger::default()
    }

    /// Load from an indexed compound
    ///
    /// Malformed entries and repeated identifiers are dropped; the first
    /// record for an identifier wins.
    pub fn from_tag(tag: &Compound) -> Self {
        let mut ledger = Ledger::new();
        for entry in tag.indexed() {
            let Tag::Compound(entry) = entry else {
                continue;
            };
            if let Some(record) = LedgerRecord::from_tag(entry) {
                if !ledger.positions.contains_key(&record.identifier) {
                    ledger.insert(record);
                }
            }
        }
        ledger
    }

    /// Write as an indexed compound in insertion order
    pub fn to_tag(&self) -> Compound {
        let mut tag = Compound::new();
        for record in &self.records {
            tag.push_indexed(Tag::Compound(record.to_tag()));
        }
        tag
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &LedgerRecord> {
        self.records.iter()
    }

    pub fn get(&self, identifier: &str) -> Option<&LedgerRecord> {
        self.positions.get(identifier).map(|&i| &self.records[i])
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.positions.contains_key(identifier)
    }

    /// Current level, or 0 if absent
    pub fn level(&self, identifier: &str) -> i32 {
        self.get(identifier).map(|r| r.level).unwrap_or(0)
    }

    /// Grant one level of `identifier`, capped at `max_level`
    ///
    /// An existing record keeps its original color. A new record is appended
    /// with `color`.
    pub fn grant(&mut self, identifier: &str, color: TextColor, max_level: i32) -> TraitGrant {
        if let Some(&i) = self.positions.get(identifier) {
            let record = &mut self.records[i];
            if record.level < max_level {
                record.level += 1;
                TraitGrant::LeveledUp
            } else {
                TraitGrant::Capped
            }
        } else {
            self.insert(LedgerRecord {
                identifier: identifier.to_string(),
                level: max_level.clamp(0, 1),
                color,
            });
            TraitGrant::Added
        }
    }

    fn insert(&mut self, record: LedgerRecord) {
        self.positions
            .insert(record.identifier.clone(), self.records.len());
        self.records.push(record);
    }
}
