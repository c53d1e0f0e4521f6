//! Traits - Passive leveled effects granted by materials

use crate::ledger::{Ledger, TraitGrant};
use crate::registry::Registry;
use crate::types::TextColor;
use serde::{Deserialize, Serialize};

/// A registered trait definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolTrait {
    /// Unique identifier (e.g., "stonebound")
    pub identifier: String,
    /// Highest level a tool can hold
    #[serde(default = "default_max_level")]
    pub max_level: i32,
}

fn default_max_level() -> i32 {
    1
}

impl ToolTrait {
    pub fn new(identifier: impl Into<String>, max_level: i32) -> Self {
        ToolTrait {
            identifier: identifier.into(),
            max_level,
        }
    }
}

/// Add one level of `tool_trait` to the ledger
///
/// Only traits that are the registry's own registered instance are accepted;
/// anything else is logged and ignored. If the trait is already present its
/// stored color is kept and `color` is ignored.
pub fn add_trait(
    ledger: &mut Ledger,
    registry: &dyn Registry,
    tool_trait: &ToolTrait,
    color: TextColor,
) -> TraitGrant {
    if !registry.is_registered_trait(tool_trait) {
        tracing::error!(
            trait_id = %tool_trait.identifier,
            "trying to apply unregistered trait"
        );
        return TraitGrant::Rejected;
    }

    ledger.grant(&tool_trait.identifier, color, tool_trait.max_level)
}
