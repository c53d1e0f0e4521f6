//! Tag - Structured key/value document used to persist tool state
//!
//! A tool is stored as a root [`Compound`] holding four sections (see [`keys`]):
//! the raw base data that is the source of truth, and three derived sections
//! (stats, traits, modifier effects) that can always be regenerated.
//!
//! Reads follow the host store's semantics: a missing number reads as zero and
//! a missing compound reads as empty.

pub mod keys;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single value in a tag document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    Int(i32),
    Float(f32),
    String(String),
    Compound(Compound),
}

/// A string-keyed map of tags
///
/// Keys are kept sorted so serialization is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Compound {
    entries: BTreeMap<String, Tag>,
}

impl Compound {
    /// Create an empty compound
    pub fn new() -> Self {
        Compound {
            entries: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<Tag> {
        self.entries.remove(key)
    }

    pub fn set(&mut self, key: impl Into<String>, tag: Tag) {
        self.entries.insert(key.into(), tag);
    }

    pub fn set_int(&mut self, key: impl Into<String>, value: i32) {
        self.set(key, Tag::Int(value));
    }

    pub fn set_float(&mut self, key: impl Into<String>, value: f32) {
        self.set(key, Tag::Float(value));
    }

    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.set(key, Tag::String(value.into()));
    }

    pub fn set_compound(&mut self, key: impl Into<String>, value: Compound) {
        self.set(key, Tag::Compound(value));
    }

    /// Integer at `key`, or 0 if absent or not an integer
    pub fn get_int(&self, key: &str) -> i32 {
        match self.entries.get(key) {
            Some(Tag::Int(v)) => *v,
            _ => 0,
        }
    }

    /// Float at `key`, or 0.0 if absent or not a float
    pub fn get_float(&self, key: &str) -> f32 {
        match self.entries.get(key) {
            Some(Tag::Float(v)) => *v,
            _ => 0.0,
        }
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(Tag::String(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn get_compound(&self, key: &str) -> Option<&Compound> {
        match self.entries.get(key) {
            Some(Tag::Compound(v)) => Some(v),
            _ => None,
        }
    }

    pub fn get_compound_mut(&mut self, key: &str) -> Option<&mut Compound> {
        match self.entries.get_mut(key) {
            Some(Tag::Compound(v)) => Some(v),
            _ => None,
        }
    }

    /// Copy of the compound at `key`, or an empty compound
    pub fn get_compound_or_empty(&self, key: &str) -> Compound {
        self.get_compound(key).cloned().unwrap_or_default()
    }

    // === Indexed sub-records ===
    //
    // Lists are stored as compounds keyed "0", "1", ... and end at the first
    // missing index.

    /// Number of contiguous indexed entries starting at "0"
    pub fn indexed_len(&self) -> usize {
        let mut index = 0;
        while self.has_key(&index.to_string()) {
            index += 1;
        }
        index
    }

    /// Iterate indexed entries in ascending index order
    pub fn indexed(&self) -> impl Iterator<Item = &Tag> {
        (0..self.indexed_len()).filter_map(move |i| self.get(&i.to_string()))
    }

    /// Append at the first free index, returning that index
    pub fn push_indexed(&mut self, tag: Tag) -> usize {
        let index = self.indexed_len();
        self.set(index.to_string(), tag);
        index
    }

    /// Read an indexed list of strings, skipping entries of other types
    pub fn string_list(&self) -> Vec<String> {
        self.indexed()
            .filter_map(|tag| match tag {
                Tag::String(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    /// Build an indexed list of strings
    pub fn from_string_list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut compound = Compound::new();
        for value in values {
            compound.push_indexed(Tag::String(value.into()));
        }
        compound
    }

    // === Serialization ===

    /// Serialize to JSON bytes
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Deserialize from JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
