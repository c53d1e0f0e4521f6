//! Fixed key names of the persisted tool document

// Sections of the root compound
pub const BASE_DATA: &str = "base";
pub const TOOL_DATA: &str = "stats";
pub const TOOL_TRAITS: &str = "traits";
pub const TOOL_MODIFIERS: &str = "modifiers";

// Inside BASE_DATA
pub const BASE_MATERIALS: &str = "materials";
pub const BASE_MODIFIERS: &str = "modifiers";

// Inside TOOL_DATA
pub const DURABILITY: &str = "durability";
pub const ATTACK: &str = "attack";
pub const MINING_SPEED: &str = "mining_speed";
pub const HARVEST_LEVEL: &str = "harvest_level";
pub const FREE_MODIFIERS: &str = "free_modifiers";

// Trait and modifier records
pub const IDENTIFIER: &str = "identifier";
pub const LEVEL: &str = "level";
pub const COLOR: &str = "color";
