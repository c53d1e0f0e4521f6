//! StatModifier - Data-driven modifier adding flat stats

use crate::ledger::{Ledger, TraitGrant};
use crate::modifier::{Match, Modifier, RecipeMatch};
use crate::stats::ToolStats;
use crate::tag::{keys, Compound};
use crate::types::{ItemStack, TextColor};
use serde::{Deserialize, Serialize};

/// Flat stats added per application
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatBonus {
    #[serde(default)]
    pub durability: i32,
    #[serde(default)]
    pub attack: f32,
    #[serde(default)]
    pub mining_speed: f32,
    #[serde(default)]
    pub harvest_level: i32,
}

/// A modifier defined in content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatModifier {
    /// Unique identifier (e.g., "haste")
    pub identifier: String,
    /// Items consumed per application
    pub recipe: RecipeMatch,
    /// Free modifier slots spent per application
    #[serde(default = "default_slot_cost")]
    pub slot_cost: i32,
    /// Maximum number of applications on one tool
    #[serde(default = "default_max_level")]
    pub max_level: i32,
    /// Modifiers that cannot coexist with this one
    #[serde(default)]
    pub conflicts: Vec<String>,
    /// Tooltip color
    #[serde(default)]
    pub color: TextColor,
    #[serde(default)]
    pub bonus: StatBonus,
}

fn default_slot_cost() -> i32 {
    1
}

fn default_max_level() -> i32 {
    1
}

impl StatModifier {
    pub fn new(identifier: impl Into<String>, recipe: RecipeMatch, bonus: StatBonus) -> Self {
        StatModifier {
            identifier: identifier.into(),
            recipe,
            slot_cost: default_slot_cost(),
            max_level: default_max_level(),
            conflicts: Vec::new(),
            color: TextColor::default(),
            bonus,
        }
    }

    pub fn with_max_level(mut self, max_level: i32) -> Self {
        self.max_level = max_level;
        self
    }

    pub fn with_slot_cost(mut self, slot_cost: i32) -> Self {
        self.slot_cost = slot_cost;
        self
    }

    pub fn with_conflict(mut self, identifier: impl Into<String>) -> Self {
        self.conflicts.push(identifier.into());
        self
    }

    pub fn with_color(mut self, color: TextColor) -> Self {
        self.color = color;
        self
    }
}

impl Modifier for StatModifier {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn matches(&self, stacks: &[Option<ItemStack>]) -> Option<Match> {
        self.recipe.matches(stacks)
    }

    fn can_apply(&self, tool: &Compound) -> bool {
        if ToolStats::from_tool(tool).free_modifiers < self.slot_cost {
            return false;
        }

        let applied = Ledger::from_tag(&tool.get_compound_or_empty(keys::TOOL_MODIFIERS));
        if applied.level(&self.identifier) >= self.max_level {
            return false;
        }
        !self.conflicts.iter().any(|other| applied.contains(other))
    }

    fn apply_effect(&self, tool: &mut Compound) {
        let mut applied = Ledger::from_tag(&tool.get_compound_or_empty(keys::TOOL_MODIFIERS));
        let grant = applied.grant(&self.identifier, self.color, self.max_level);
        if !matches!(grant, TraitGrant::Added | TraitGrant::LeveledUp) {
            // level unchanged, so the stats stay as they are
            return;
        }
        tool.set_compound(keys::TOOL_MODIFIERS, applied.to_tag());

        let mut stats = ToolStats::from_tool(tool);
        stats.durability = stats.durability.saturating_add(self.bonus.durability);
        stats.attack += self.bonus.attack;
        stats.mining_speed += self.bonus.mining_speed;
        stats.harvest_level = stats.harvest_level.saturating_add(self.bonus.harvest_level);
        stats.free_modifiers = stats.free_modifiers.saturating_sub(self.slot_cost);
        stats.write_to_tool(tool);
    }
}
