//! Materials and their per-category stats

use crate::types::TextColor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stats a material contributes to tools
///
/// Each part role reads a different subset: heads use durability, attack and
/// mining speed; handles use the durability modifier; accessories only add
/// durability.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ToolMaterialStats {
    #[serde(default)]
    pub durability: i32,
    #[serde(default)]
    pub attack: f32,
    #[serde(default)]
    pub mining_speed: f32,
    #[serde(default)]
    pub durability_modifier: f32,
    #[serde(default)]
    pub harvest_level: i32,
}

impl ToolMaterialStats {
    /// Stat category these stats are registered under
    pub const CATEGORY: &'static str = "tool";

    /// All stats zero, used for unknown materials
    pub const ZERO: ToolMaterialStats = ToolMaterialStats {
        durability: 0,
        attack: 0.0,
        mining_speed: 0.0,
        durability_modifier: 0.0,
        harvest_level: 0,
    };

    pub fn new(
        durability: i32,
        attack: f32,
        mining_speed: f32,
        durability_modifier: f32,
        harvest_level: i32,
    ) -> Self {
        ToolMaterialStats {
            durability,
            attack,
            mining_speed,
            durability_modifier,
            harvest_level,
        }
    }
}

/// A registered material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Unique identifier (e.g., "iron", "wood")
    pub identifier: String,
    /// Color used for traits this material grants
    #[serde(default)]
    pub color: TextColor,
    /// Stats keyed by category; a material may lack some categories
    #[serde(default)]
    pub stats: BTreeMap<String, ToolMaterialStats>,
    /// Identifiers of traits granted by this material
    #[serde(default)]
    pub traits: Vec<String>,
}

impl Material {
    /// Identifier of the placeholder material
    pub const UNKNOWN_ID: &'static str = "unknown";

    pub fn new(identifier: impl Into<String>, color: TextColor) -> Self {
        Material {
            identifier: identifier.into(),
            color,
            stats: BTreeMap::new(),
            traits: Vec::new(),
        }
    }

    /// Placeholder substituted for identifiers that no longer resolve
    ///
    /// All tool stats are zero and it grants no traits.
    pub fn unknown() -> Self {
        Material::new(Self::UNKNOWN_ID, TextColor::Gray)
            .with_stats(ToolMaterialStats::CATEGORY, ToolMaterialStats::ZERO)
    }

    /// Add stats under a category
    pub fn with_stats(mut self, category: impl Into<String>, stats: ToolMaterialStats) -> Self {
        self.stats.insert(category.into(), stats);
        self
    }

    /// Add a granted trait
    pub fn with_trait(mut self, trait_id: impl Into<String>) -> Self {
        self.traits.push(trait_id.into());
        self
    }

    /// Stats for a category, if the material has any
    pub fn get_stats(&self, category: &str) -> Option<&ToolMaterialStats> {
        self.stats.get(category)
    }

    /// Tool stats, or zero stats if the material has no tool category
    pub fn tool_stats(&self) -> ToolMaterialStats {
        match self.get_stats(ToolMaterialStats::CATEGORY) {
            Some(stats) => *stats,
            None => {
                tracing::debug!(
                    material = %self.identifier,
                    "material has no tool stats, using zero"
                );
                ToolMaterialStats::ZERO
            }
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.identifier == Self::UNKNOWN_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_material_is_inert() {
        let unknown = Material::unknown();
        assert!(unknown.is_unknown());
        assert!(unknown.traits.is_empty());
        assert_eq!(unknown.tool_stats(), ToolMaterialStats::ZERO);
    }

    #[test]
    fn test_missing_category_reads_as_zero() {
        let slime = Material::new("slime", TextColor::Green);
        assert!(slime.get_stats(ToolMaterialStats::CATEGORY).is_none());
        assert_eq!(slime.tool_stats(), ToolMaterialStats::ZERO);
    }

    #[test]
    fn test_material_deserializes_from_toml() {
        let toml = r#"
identifier = "iron"
color = "white"
traits = ["magnetic"]

[stats.tool]
durability = 250
attack = 6.0
mining_speed = 6.0
durability_modifier = 0.85
harvest_level = 2
"#;
        let iron: Material = toml::from_str(toml).unwrap();
        assert_eq!(iron.color, TextColor::White);
        assert_eq!(iron.tool_stats().durability, 250);
        assert_eq!(iron.tool_stats().harvest_level, 2);
        assert_eq!(iron.traits, vec!["magnetic"]);
    }
}
