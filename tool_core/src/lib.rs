//! tool_core - Stat aggregation and rebuild engine for multi-part tools
//!
//! This library provides:
//! - Stat aggregation: combining material stats by part role into tool stats
//! - Ledger: leveled traits and modifier records with capped levels
//! - Modifier loop: matching input items against registered modifiers
//! - Rebuild: regenerating all derived tool state from raw base data
//!
//! Tools are persisted as [`Compound`] documents. Only the material list and
//! modifier log in the base section are authoritative; everything else is
//! derived and can be regenerated with [`rebuild_tool`].

pub mod config;
pub mod ledger;
pub mod material;
pub mod modifier;
pub mod prelude;
pub mod registry;
pub mod stats;
pub mod tag;
pub mod tool;
pub mod types;

// Re-export core types for convenience
pub use config::{default_content, load_content, parse_content, ConfigError};
pub use ledger::{add_trait, Ledger, LedgerRecord, ToolTrait, TraitGrant};
pub use material::{Material, ToolMaterialStats};
pub use modifier::{Ingredient, Match, Modifier, RecipeMatch, StatBonus, StatModifier};
pub use registry::{ContentRegistry, Registry};
pub use stats::{build_simple_tool, ToolStats, DEFAULT_FREE_MODIFIERS};
pub use tag::{Compound, Tag};
pub use tool::{
    build_tool, rebuild_tool, try_modify_tool, RebuildOutcome, ToolDefinition, ToolError,
};
pub use types::{ItemStack, PartRole, TextColor};
