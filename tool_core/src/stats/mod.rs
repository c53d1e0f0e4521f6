//! ToolStats - Derived base stats of a tool

mod aggregator;

pub use aggregator::{
    build_simple_tool, build_tool_stats, calculate_accessory_parts, calculate_handle_parts,
    calculate_harvest_level, calculate_head_parts, handle_multiplier,
};

use crate::tag::{keys, Compound};
use serde::{Deserialize, Serialize};

/// Free modifier slots a freshly built tool starts with
pub const DEFAULT_FREE_MODIFIERS: i32 = 3;

/// Derived stats of a tool
///
/// Always produced fresh from material stats; never patched across unrelated
/// recomputations. Modifier effects are applied on top after aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ToolStats {
    pub durability: i32,
    pub attack: f32,
    pub mining_speed: f32,
    pub harvest_level: i32,
    pub free_modifiers: i32,
}

impl ToolStats {
    /// Write into a stats compound
    pub fn to_tag(&self) -> Compound {
        let mut tag = Compound::new();
        tag.set_int(keys::DURABILITY, self.durability);
        tag.set_float(keys::ATTACK, self.attack);
        tag.set_float(keys::MINING_SPEED, self.mining_speed);
        tag.set_int(keys::HARVEST_LEVEL, self.harvest_level);
        tag.set_int(keys::FREE_MODIFIERS, self.free_modifiers);
        tag
    }

    /// Read from a stats compound, missing values read as zero
    pub fn from_tag(tag: &Compound) -> Self {
        ToolStats {
            durability: tag.get_int(keys::DURABILITY),
            attack: tag.get_float(keys::ATTACK),
            mining_speed: tag.get_float(keys::MINING_SPEED),
            harvest_level: tag.get_int(keys::HARVEST_LEVEL),
            free_modifiers: tag.get_int(keys::FREE_MODIFIERS),
        }
    }

    /// Read the stats section of a tool document
    pub fn from_tool(root: &Compound) -> Self {
        root.get_compound(keys::TOOL_DATA)
            .map(ToolStats::from_tag)
            .unwrap_or_default()
    }

    /// Overwrite the stats section of a tool document
    pub fn write_to_tool(&self, root: &mut Compound) {
        root.set_compound(keys::TOOL_DATA, self.to_tag());
    }
}
