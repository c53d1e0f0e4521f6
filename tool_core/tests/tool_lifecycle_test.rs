//! Integration test: Build tool -> Apply modifiers -> Change content -> Rebuild
//!
//! Validates that derived state always follows from the persisted materials
//! and modifier log.

use tool_core::config::ContentConfig;
use tool_core::modifier::modifier_log;
use tool_core::prelude::*;

const CONTENT: &str = include_str!("../config/content.toml");

fn content() -> ContentConfig {
    toml::from_str(CONTENT).expect("bundled content parses")
}

fn pickaxe(registry: &ContentRegistry) -> Compound {
    let definition = registry.tool("pickaxe").unwrap();
    build_tool(&definition, &["iron", "wood", "stone"], registry).unwrap()
}

#[test]
fn test_single_head_single_handle_tool() {
    let mut registry = ContentRegistry::new();
    registry.register_material(Material::new("bronze", TextColor::Gold).with_stats(
        ToolMaterialStats::CATEGORY,
        ToolMaterialStats::new(100, 4.0, 2.0, 0.0, 0),
    ));
    registry.register_material(Material::new("oak", TextColor::Gold).with_stats(
        ToolMaterialStats::CATEGORY,
        ToolMaterialStats::new(0, 0.0, 0.0, 1.0, 0),
    ));
    let definition = ToolDefinition::simple("axe", 0);

    let tool = build_tool(&definition, &["bronze", "oak"], &registry).unwrap();
    let stats = ToolStats::from_tool(&tool);

    assert_eq!(stats.durability, 100);
    assert!((stats.attack - 4.0).abs() < f32::EPSILON);
    assert!((stats.mining_speed - 2.0).abs() < f32::EPSILON);
    assert_eq!(stats.free_modifiers, 3);
}

#[test]
fn test_build_pickaxe_from_default_content() {
    let registry = default_content();
    let tool = pickaxe(&registry);

    let stats = ToolStats::from_tool(&tool);
    // (iron 250 + stone 120) * wood 1.0
    assert_eq!(stats.durability, 370);
    assert_eq!(stats.harvest_level, 2);

    let traits = tool_traits(&tool);
    let order: Vec<_> = traits.iter().map(|r| r.identifier.as_str()).collect();
    assert_eq!(order, vec!["magnetic", "ecological", "cheapskate", "stonebound"]);
    assert_eq!(traits.get("magnetic").unwrap().color, TextColor::White);
}

#[test]
fn test_modify_then_rebuild_is_stable() {
    let registry = default_content();
    let definition = registry.tool("pickaxe").unwrap();
    let tool = pickaxe(&registry);

    let mut stacks = vec![
        Some(ItemStack::new("redstone", 2)),
        Some(ItemStack::new("quartz", 1)),
        Some(ItemStack::new("dirt", 5)),
    ];
    let mut modified = try_modify_tool(&registry, &mut stacks, &tool, true).unwrap();

    assert_eq!(modifier_log(&modified), vec!["haste", "haste", "sharpness"]);
    assert_eq!(stacks, vec![None, None, Some(ItemStack::new("dirt", 5))]);

    let stats = ToolStats::from_tool(&modified);
    assert!((stats.mining_speed - 7.0).abs() < f32::EPSILON);
    assert!((stats.attack - 6.5).abs() < f32::EPSILON);
    assert_eq!(stats.free_modifiers, 0);

    let before = modified.to_json().unwrap();
    rebuild_tool(&mut modified, &definition, &registry);
    let first = modified.to_json().unwrap();
    rebuild_tool(&mut modified, &definition, &registry);
    let second = modified.to_json().unwrap();

    assert_eq!(before, first);
    assert_eq!(first, second);
}

#[test]
fn test_preview_does_not_consume() {
    let registry = default_content();
    let tool = pickaxe(&registry);
    let mut stacks = vec![Some(ItemStack::new("obsidian_plate", 3))];

    let preview = try_modify_tool(&registry, &mut stacks, &tool, false).unwrap();

    assert_eq!(stacks, vec![Some(ItemStack::new("obsidian_plate", 3))]);
    assert_eq!(tool_modifiers(&preview).level("reinforced"), 3);
    // the source tool is untouched as well
    assert!(tool_modifiers(&tool).is_empty());
}

#[test]
fn test_slots_run_out_with_items_left() {
    let registry = default_content();
    let tool = pickaxe(&registry);
    let mut stacks = vec![Some(ItemStack::new("redstone", 5))];

    let modified = try_modify_tool(&registry, &mut stacks, &tool, true).unwrap();

    assert_eq!(tool_modifiers(&modified).level("haste"), 3);
    assert_eq!(stacks, vec![Some(ItemStack::new("redstone", 2))]);
}

#[test]
fn test_conflicting_modifiers() {
    let registry = default_content();
    let tool = pickaxe(&registry);
    let mut stacks = vec![
        Some(ItemStack::new("lapis", 1)),
        Some(ItemStack::new("silky_jewel", 1)),
    ];

    let modified = try_modify_tool(&registry, &mut stacks, &tool, true).unwrap();

    let applied = tool_modifiers(&modified);
    assert!(applied.contains("luck"));
    assert!(!applied.contains("silky"));
    assert_eq!(stacks[1], Some(ItemStack::new("silky_jewel", 1)));
}

#[test]
fn test_nothing_matches() {
    let registry = default_content();
    let tool = pickaxe(&registry);
    let mut stacks = vec![Some(ItemStack::new("dirt", 64)), None];

    assert!(try_modify_tool(&registry, &mut stacks, &tool, true).is_none());
    assert!(try_modify_tool(&registry, &mut stacks, &tool, false).is_none());
    assert_eq!(stacks[0], Some(ItemStack::new("dirt", 64)));
}

#[test]
fn test_rebuild_picks_up_changed_material_stats() {
    let registry = content().into_registry().unwrap();
    let definition = registry.tool("pickaxe").unwrap();
    let mut tool = pickaxe(&registry);
    let mut stacks = vec![Some(ItemStack::new("emerald", 1))];
    tool = try_modify_tool(&registry, &mut stacks, &tool, true).unwrap();

    // content update buffs iron
    let mut updated = content();
    let iron = updated
        .materials
        .iter_mut()
        .find(|m| m.identifier == "iron")
        .unwrap();
    iron.stats
        .get_mut(ToolMaterialStats::CATEGORY)
        .unwrap()
        .durability = 400;
    let updated = updated.into_registry().unwrap();

    let outcome = rebuild_tool(&mut tool, &definition, &updated);
    assert!(outcome.is_rebuilt());

    // (400 + 120) * 1.0 + emerald 250
    assert_eq!(ToolStats::from_tool(&tool).durability, 770);
    assert_eq!(tool_modifiers(&tool).level("emerald"), 1);
}

#[test]
fn test_rebuild_with_deleted_material() {
    let registry = content().into_registry().unwrap();
    let definition = registry.tool("pickaxe").unwrap();
    let mut tool = pickaxe(&registry);

    let mut trimmed = content();
    trimmed.materials.retain(|m| m.identifier != "stone");
    let trimmed = trimmed.into_registry().unwrap();

    let outcome = rebuild_tool(&mut tool, &definition, &trimmed);

    assert_eq!(
        outcome,
        RebuildOutcome::Rebuilt {
            missing_materials: vec!["stone".to_string()],
            skipped_modifiers: vec![],
        }
    );
    // accessory contributes nothing, its traits are gone
    assert_eq!(ToolStats::from_tool(&tool).durability, 250);
    assert!(!tool_traits(&tool).contains("stonebound"));
    // raw data still names the deleted material
    assert_eq!(tool_materials(&tool), vec!["iron", "wood", "stone"]);
}

#[test]
fn test_material_without_tool_stats_counts_as_zero() {
    let registry = default_content();
    let shovel = registry.tool("shovel").unwrap();

    let tool = build_tool(&shovel, &["iron", "slime"], &registry).unwrap();

    // slime handle has no durability modifier
    assert_eq!(ToolStats::from_tool(&tool).durability, 0);
    assert_eq!(ToolStats::from_tool(&tool).harvest_level, 2);
}

#[test]
fn test_tool_without_base_data_is_left_alone() {
    let registry = default_content();
    let definition = registry.tool("pickaxe").unwrap();
    let mut tool = pickaxe(&registry);
    tool.remove(keys::BASE_DATA);
    let before = tool.clone();

    assert_eq!(
        rebuild_tool(&mut tool, &definition, &registry),
        RebuildOutcome::NoBaseData
    );
    assert_eq!(tool, before);
}
