//! Tools - Part layouts and construction of persisted tool documents

mod modify;
mod rebuild;

pub use modify::try_modify_tool;
pub use rebuild::{rebuild_tool, RebuildOutcome};

use crate::ledger::{add_trait, Ledger};
use crate::material::{Material, ToolMaterialStats};
use crate::registry::Registry;
use crate::stats::{build_tool_stats, ToolStats, DEFAULT_FREE_MODIFIERS};
use crate::tag::{keys, Compound};
use crate::types::PartRole;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Tool construction error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("Tool '{tool}' needs {expected} parts, got {actual}")]
    PartCountMismatch {
        tool: String,
        expected: usize,
        actual: usize,
    },
    #[error("Unknown material: {0}")]
    UnknownMaterial(String),
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    #[error("Tool '{0}' has no head part")]
    MissingHead(String),
}

/// A kind of tool and the role of each of its parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique identifier (e.g., "pickaxe")
    pub identifier: String,
    /// Role of each material slot, in material order
    pub parts: Vec<PartRole>,
    /// Free modifier slots of a freshly built tool
    #[serde(default = "default_free_modifiers")]
    pub free_modifiers: i32,
}

fn default_free_modifiers() -> i32 {
    DEFAULT_FREE_MODIFIERS
}

impl ToolDefinition {
    pub fn new(identifier: impl Into<String>, parts: Vec<PartRole>) -> Self {
        ToolDefinition {
            identifier: identifier.into(),
            parts,
            free_modifiers: DEFAULT_FREE_MODIFIERS,
        }
    }

    /// Head, handle, then `accessories` accessory parts
    pub fn simple(identifier: impl Into<String>, accessories: usize) -> Self {
        let mut parts = vec![PartRole::Head, PartRole::Handle];
        parts.extend(std::iter::repeat(PartRole::Accessory).take(accessories));
        ToolDefinition::new(identifier, parts)
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    pub fn has_head(&self) -> bool {
        self.parts.contains(&PartRole::Head)
    }

    /// Tool stats of a role's materials, in part order
    fn stats_for(&self, role: PartRole, materials: &[Arc<Material>]) -> Vec<ToolMaterialStats> {
        self.parts
            .iter()
            .zip(materials)
            .filter(|(r, _)| **r == role)
            .map(|(_, material)| material.tool_stats())
            .collect()
    }

    /// Aggregate base stats from materials in part order
    ///
    /// Materials beyond the layout are ignored.
    ///
    /// # Panics
    ///
    /// Panics if no head material is supplied.
    pub fn build_stats(&self, materials: &[Arc<Material>]) -> ToolStats {
        build_tool_stats(
            &self.stats_for(PartRole::Head, materials),
            &self.stats_for(PartRole::Handle, materials),
            &self.stats_for(PartRole::Accessory, materials),
            self.free_modifiers,
        )
    }

    /// Grant every material's traits, in material order, with its color
    pub fn build_traits(&self, materials: &[Arc<Material>], registry: &dyn Registry) -> Ledger {
        let mut ledger = Ledger::new();
        for material in materials.iter().take(self.parts.len()) {
            for trait_id in &material.traits {
                match registry.tool_trait(trait_id) {
                    Some(tool_trait) => {
                        add_trait(&mut ledger, registry, &tool_trait, material.color);
                    }
                    None => tracing::warn!(
                        material = %material.identifier,
                        trait_id = %trait_id,
                        "material grants unregistered trait"
                    ),
                }
            }
        }
        ledger
    }

    /// Write freshly derived stats and traits into a tool document
    ///
    /// The modifier-effect section is reset; replaying the modifier log is
    /// the caller's job.
    pub(crate) fn write_derived(
        &self,
        root: &mut Compound,
        materials: &[Arc<Material>],
        registry: &dyn Registry,
    ) {
        self.build_stats(materials).write_to_tool(root);
        root.set_compound(
            keys::TOOL_TRAITS,
            self.build_traits(materials, registry).to_tag(),
        );
        root.set_compound(keys::TOOL_MODIFIERS, Compound::new());
    }
}

/// Build a new tool document from material identifiers
///
/// The layout needs a head, every identifier must be registered and the
/// count must match the layout.
pub fn build_tool(
    definition: &ToolDefinition,
    material_ids: &[&str],
    registry: &dyn Registry,
) -> Result<Compound, ToolError> {
    if !definition.has_head() {
        return Err(ToolError::MissingHead(definition.identifier.clone()));
    }
    if material_ids.len() != definition.part_count() {
        return Err(ToolError::PartCountMismatch {
            tool: definition.identifier.clone(),
            expected: definition.part_count(),
            actual: material_ids.len(),
        });
    }

    let materials = material_ids
        .iter()
        .map(|id| {
            registry
                .material(id)
                .ok_or_else(|| ToolError::UnknownMaterial(id.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut base = Compound::new();
    base.set_compound(
        keys::BASE_MATERIALS,
        Compound::from_string_list(material_ids.iter().copied()),
    );
    base.set_compound(keys::BASE_MODIFIERS, Compound::new());

    let mut root = Compound::new();
    root.set_compound(keys::BASE_DATA, base);
    definition.write_derived(&mut root, &materials, registry);
    Ok(root)
}

/// Material identifiers recorded in a tool's base data
pub fn tool_materials(root: &Compound) -> Vec<String> {
    root.get_compound(keys::BASE_DATA)
        .and_then(|base| base.get_compound(keys::BASE_MATERIALS))
        .map(Compound::string_list)
        .unwrap_or_default()
}

/// Traits currently derived on a tool
pub fn tool_traits(root: &Compound) -> Ledger {
    Ledger::from_tag(&root.get_compound_or_empty(keys::TOOL_TRAITS))
}

/// Modifier levels currently derived on a tool
pub fn tool_modifiers(root: &Compound) -> Ledger {
    Ledger::from_tag(&root.get_compound_or_empty(keys::TOOL_MODIFIERS))
}
