//! Rebuilding derived tool state from its raw base data

use crate::modifier::modifier_log;
use crate::registry::Registry;
use crate::tag::{keys, Compound};
use crate::tool::ToolDefinition;

/// Result of a rebuild
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RebuildOutcome {
    /// The tool has no base data; nothing was changed
    NoBaseData,
    /// Derived sections were regenerated
    Rebuilt {
        /// Material identifiers replaced by the unknown placeholder
        missing_materials: Vec<String>,
        /// Logged modifiers that are no longer registered
        skipped_modifiers: Vec<String>,
    },
}

impl RebuildOutcome {
    pub fn is_rebuilt(&self) -> bool {
        matches!(self, RebuildOutcome::Rebuilt { .. })
    }
}

/// Regenerate stats, traits and modifier effects from the base data
///
/// Only the recorded material identifiers and modifier log are read; any
/// previously derived data is overwritten. Unresolvable materials become the
/// unknown placeholder (zero stats, which lowers a role's average) and
/// unregistered modifiers are skipped, so a rebuild never fails.
///
/// # Panics
///
/// Panics if `definition` has no head part.
pub fn rebuild_tool(
    root: &mut Compound,
    definition: &ToolDefinition,
    registry: &dyn Registry,
) -> RebuildOutcome {
    let Some(base) = root.get_compound(keys::BASE_DATA) else {
        return RebuildOutcome::NoBaseData;
    };

    let material_ids = base
        .get_compound(keys::BASE_MATERIALS)
        .map(Compound::string_list)
        .unwrap_or_default();

    let mut missing_materials = Vec::new();
    let mut materials: Vec<_> = material_ids
        .iter()
        .map(|id| {
            registry.material(id).unwrap_or_else(|| {
                tracing::warn!(material = %id, "unknown material, using placeholder");
                missing_materials.push(id.clone());
                registry.unknown_material()
            })
        })
        .collect();

    // slots the layout expects but the base data lacks
    while materials.len() < definition.part_count() {
        materials.push(registry.unknown_material());
    }

    definition.write_derived(root, &materials, registry);

    let mut skipped_modifiers = Vec::new();
    for identifier in modifier_log(root) {
        match registry.modifier(&identifier) {
            Some(modifier) => modifier.apply_effect(root),
            None => {
                tracing::debug!(modifier = %identifier, "missing modifier");
                skipped_modifiers.push(identifier);
            }
        }
    }

    RebuildOutcome::Rebuilt {
        missing_materials,
        skipped_modifiers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{Material, ToolMaterialStats};
    use crate::modifier::{Modifier, RecipeMatch, StatBonus, StatModifier};
    use crate::registry::ContentRegistry;
    use crate::stats::ToolStats;
    use crate::tool::{build_tool, tool_modifiers};
    use crate::types::TextColor;

    fn registry() -> ContentRegistry {
        let mut registry = ContentRegistry::new();
        registry.register_material(Material::new("iron", TextColor::White).with_stats(
            ToolMaterialStats::CATEGORY,
            ToolMaterialStats::new(200, 6.0, 6.0, 1.0, 2),
        ));
        registry.register_material(Material::new("wood", TextColor::Gold).with_stats(
            ToolMaterialStats::CATEGORY,
            ToolMaterialStats::new(50, 2.0, 2.0, 1.0, 0),
        ));
        registry.register_modifier(
            StatModifier::new(
                "reinforced",
                RecipeMatch::of("obsidian", 1),
                StatBonus {
                    durability: 25,
                    ..StatBonus::default()
                },
            )
            .with_max_level(3),
        );
        registry
    }

    #[test]
    fn test_no_base_data_is_noop() {
        let registry = registry();
        let mut root = Compound::new();
        root.set_int("unrelated", 7);
        let before = root.clone();

        let outcome = rebuild_tool(&mut root, &ToolDefinition::simple("pick", 0), &registry);

        assert_eq!(outcome, RebuildOutcome::NoBaseData);
        assert_eq!(root, before);
    }

    #[test]
    fn test_rebuild_overwrites_tampered_stats() {
        let registry = registry();
        let pick = ToolDefinition::simple("pick", 0);
        let mut tool = build_tool(&pick, &["iron", "wood"], &registry).unwrap();
        let fresh = tool.clone();

        ToolStats {
            durability: 9999,
            ..ToolStats::default()
        }
        .write_to_tool(&mut tool);

        assert!(rebuild_tool(&mut tool, &pick, &registry).is_rebuilt());
        assert_eq!(tool, fresh);
    }

    #[test]
    fn test_rebuild_replays_modifiers() {
        let registry = registry();
        let pick = ToolDefinition::simple("pick", 0);
        let mut tool = build_tool(&pick, &["iron", "wood"], &registry).unwrap();
        let modifier = registry.modifier("reinforced").unwrap();
        modifier.apply(&mut tool);
        modifier.apply(&mut tool);
        let applied = tool.clone();

        rebuild_tool(&mut tool, &pick, &registry);

        assert_eq!(tool, applied);
        assert_eq!(ToolStats::from_tool(&tool).durability, 250);
        assert_eq!(tool_modifiers(&tool).level("reinforced"), 2);
    }

    #[test]
    fn test_lowered_max_level_caps_replayed_effects() {
        let mut registry = registry();
        let pick = ToolDefinition::simple("pick", 0);
        let mut tool = build_tool(&pick, &["iron", "wood"], &registry).unwrap();
        let modifier = registry.modifier("reinforced").unwrap();
        for _ in 0..3 {
            modifier.apply(&mut tool);
        }
        assert_eq!(ToolStats::from_tool(&tool).durability, 275);

        registry.register_modifier(
            StatModifier::new(
                "reinforced",
                RecipeMatch::of("obsidian", 1),
                StatBonus {
                    durability: 25,
                    ..StatBonus::default()
                },
            )
            .with_max_level(1),
        );
        rebuild_tool(&mut tool, &pick, &registry);

        let stats = ToolStats::from_tool(&tool);
        assert_eq!(tool_modifiers(&tool).level("reinforced"), 1);
        assert_eq!(stats.durability, 225);
        assert_eq!(stats.free_modifiers, 2);
        // the log itself is raw data and keeps every application
        assert_eq!(crate::modifier::modifier_log(&tool).len(), 3);
    }

    #[test]
    fn test_missing_modifier_is_skipped() {
        let mut registry = registry();
        let pick = ToolDefinition::simple("pick", 0);
        let mut tool = build_tool(&pick, &["iron", "wood"], &registry).unwrap();
        registry.modifier("reinforced").unwrap().apply(&mut tool);
        registry.remove_modifier("reinforced");

        let outcome = rebuild_tool(&mut tool, &pick, &registry);

        assert_eq!(
            outcome,
            RebuildOutcome::Rebuilt {
                missing_materials: vec![],
                skipped_modifiers: vec!["reinforced".to_string()],
            }
        );
        assert_eq!(ToolStats::from_tool(&tool).durability, 200);
        assert!(tool_modifiers(&tool).is_empty());
    }

    #[test]
    fn test_missing_material_becomes_placeholder() {
        let mut registry = registry();
        let hammer = ToolDefinition::new(
            "hammer",
            vec![
                crate::types::PartRole::Head,
                crate::types::PartRole::Head,
                crate::types::PartRole::Handle,
            ],
        );
        let mut tool = build_tool(&hammer, &["iron", "wood", "wood"], &registry).unwrap();
        registry.remove_material("wood");

        let outcome = rebuild_tool(&mut tool, &hammer, &registry);

        let RebuildOutcome::Rebuilt {
            missing_materials, ..
        } = outcome
        else {
            panic!("expected rebuild");
        };
        assert_eq!(missing_materials, vec!["wood", "wood"]);
        // mean(200, 0) = 100, unknown handle modifier 0.0 zeroes durability
        let stats = ToolStats::from_tool(&tool);
        assert_eq!(stats.durability, 0);
        assert!((stats.attack - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_short_material_list_is_padded() {
        let registry = registry();
        let pick = ToolDefinition::simple("pick", 0);
        let mut tool = build_tool(&pick, &["iron", "wood"], &registry).unwrap();
        let base = tool.get_compound_mut(keys::BASE_DATA).unwrap();
        base.set_compound(keys::BASE_MATERIALS, Compound::from_string_list(["iron"]));

        assert!(rebuild_tool(&mut tool, &pick, &registry).is_rebuilt());
        // unknown handle multiplies by zero
        assert_eq!(ToolStats::from_tool(&tool).durability, 0);
        assert_eq!(ToolStats::from_tool(&tool).harvest_level, 2);
    }
}
