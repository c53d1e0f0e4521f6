//! Modifiers - Active effects applied to a tool by consuming input items

mod recipe;
mod stat_modifier;

pub use recipe::{Ingredient, Match, RecipeMatch};
pub use stat_modifier::{StatBonus, StatModifier};

use crate::tag::{keys, Compound, Tag};
use crate::types::ItemStack;
use std::fmt;

/// Trait for anything that can modify a tool
pub trait Modifier: Send + Sync + fmt::Debug {
    /// Unique identifier, recorded in the tool's modifier log
    fn identifier(&self) -> &str;

    /// Find input items for one application, if present
    fn matches(&self, stacks: &[Option<ItemStack>]) -> Option<Match>;

    /// Whether the tool can currently accept another application
    fn can_apply(&self, tool: &Compound) -> bool;

    /// Apply one application's effect to the derived sections of the tool
    ///
    /// Called both on first application and when replaying the modifier log
    /// during a rebuild, so it must only depend on the tool's current state.
    fn apply_effect(&self, tool: &mut Compound);

    /// Record this modifier in the tool's log and apply its effect
    fn apply(&self, tool: &mut Compound) {
        record_modifier(tool, self.identifier());
        self.apply_effect(tool);
    }
}

/// Append a modifier identifier to the tool's modifier log
pub fn record_modifier(tool: &mut Compound, identifier: &str) {
    if tool.get_compound(keys::BASE_DATA).is_none() {
        tool.set_compound(keys::BASE_DATA, Compound::new());
    }
    if let Some(base) = tool.get_compound_mut(keys::BASE_DATA) {
        if base.get_compound(keys::BASE_MODIFIERS).is_none() {
            base.set_compound(keys::BASE_MODIFIERS, Compound::new());
        }
        if let Some(log) = base.get_compound_mut(keys::BASE_MODIFIERS) {
            log.push_indexed(Tag::String(identifier.to_string()));
        }
    }
}

/// Modifier identifiers in the order they were applied
pub fn modifier_log(tool: &Compound) -> Vec<String> {
    tool.get_compound(keys::BASE_DATA)
        .and_then(|base| base.get_compound(keys::BASE_MODIFIERS))
        .map(Compound::string_list)
        .unwrap_or_default()
}
