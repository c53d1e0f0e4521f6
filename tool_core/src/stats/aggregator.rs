//! Aggregation rules combining material stats by part role
//!
//! Construction order is fixed: heads (mean) -> accessories (sum) ->
//! handles (multiplier) -> harvest level (max) -> free modifier slots.
//! Handles multiply after accessories so their bonus applies to the full base.

use crate::material::ToolMaterialStats;
use crate::stats::{ToolStats, DEFAULT_FREE_MODIFIERS};

/// Mean durability, attack and mining speed of the head parts
///
/// Integer durability is truncated. The sum is taken in 64 bits so the mean
/// of in-range durabilities is always in range.
///
/// # Panics
///
/// Panics if `stats` is empty. Every tool needs at least one head.
pub fn calculate_head_parts(stats: &[ToolMaterialStats]) -> ToolStats {
    assert!(!stats.is_empty(), "head aggregation requires at least one material");

    let mut durability: i64 = 0;
    let mut attack: f32 = 0.0;
    let mut speed: f32 = 0.0;

    for stat in stats {
        durability += i64::from(stat.durability);
        attack += stat.attack;
        speed += stat.mining_speed;
    }

    let count = stats.len();
    ToolStats {
        durability: (durability / count as i64) as i32,
        attack: attack / count as f32,
        mining_speed: speed / count as f32,
        ..ToolStats::default()
    }
}

/// Add the durability of every accessory to the running total, saturating
pub fn calculate_accessory_parts(tool: &mut ToolStats, stats: &[ToolMaterialStats]) {
    for stat in stats {
        tool.durability = tool.durability.saturating_add(stat.durability);
    }
}

/// Durability multiplier of a set of handles
///
/// The summed modifiers are scaled by `0.5 + 0.5 * count` and divided by
/// `count`, so several handles are worth more than their plain mean. A single
/// handle yields exactly its own modifier. `None` when there are no handles.
pub fn handle_multiplier(stats: &[ToolMaterialStats]) -> Option<f32> {
    if stats.is_empty() {
        return None;
    }

    let count = stats.len();
    let sum: f32 = stats.iter().map(|s| s.durability_modifier).sum();

    let scaled = (sum as f64 * (0.5 + count as f64 * 0.5)) as f32;
    Some(scaled / count as f32)
}

/// Multiply durability by the handle multiplier, truncating to an integer
///
/// No-op without handles.
pub fn calculate_handle_parts(tool: &mut ToolStats, stats: &[ToolMaterialStats]) {
    if let Some(multiplier) = handle_multiplier(stats) {
        tool.durability = (tool.durability as f32 * multiplier) as i32;
    }
}

/// Set harvest level to the highest among the given materials
pub fn calculate_harvest_level(tool: &mut ToolStats, stats: &[ToolMaterialStats]) {
    tool.harvest_level = stats
        .iter()
        .map(|s| s.harvest_level)
        .fold(0, i32::max);
}

/// Build stats from materials grouped by role
///
/// Harvest level is taken from the heads only.
///
/// # Panics
///
/// Panics if `heads` is empty.
pub fn build_tool_stats(
    heads: &[ToolMaterialStats],
    handles: &[ToolMaterialStats],
    accessories: &[ToolMaterialStats],
    free_modifiers: i32,
) -> ToolStats {
    let mut result = calculate_head_parts(heads);
    calculate_accessory_parts(&mut result, accessories);
    calculate_handle_parts(&mut result, handles);
    calculate_harvest_level(&mut result, heads);
    result.free_modifiers = free_modifiers;
    result
}

/// A simple tool: one head, one handle, any number of accessories
pub fn build_simple_tool(
    head: ToolMaterialStats,
    handle: ToolMaterialStats,
    accessories: &[ToolMaterialStats],
) -> ToolStats {
    build_tool_stats(&[head], &[handle], accessories, DEFAULT_FREE_MODIFIERS)
}
