//! Prelude module for convenient imports
//!
//! ```rust
//! use tool_core::prelude::*;
//! ```

// Core types
pub use crate::material::{Material, ToolMaterialStats};
pub use crate::stats::ToolStats;
pub use crate::tag::{keys, Compound, Tag};
pub use crate::types::{ItemStack, PartRole, TextColor};

// Traits and modifiers
pub use crate::ledger::{add_trait, Ledger, ToolTrait, TraitGrant};
pub use crate::modifier::{Modifier, RecipeMatch, StatBonus, StatModifier};

// Registry
pub use crate::registry::{ContentRegistry, Registry};

// Tools
pub use crate::tool::{
    build_tool, rebuild_tool, tool_materials, tool_modifiers, tool_traits, try_modify_tool,
    RebuildOutcome, ToolDefinition,
};

// Config
pub use crate::config::default_content;
