//! Content configuration: materials, traits, modifiers and tools

use super::ConfigError;
use crate::ledger::ToolTrait;
use crate::material::Material;
use crate::modifier::StatModifier;
use crate::registry::{ContentRegistry, Registry};
use crate::tool::ToolDefinition;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Container for all content definitions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(default)]
    pub traits: Vec<ToolTrait>,
    #[serde(default)]
    pub materials: Vec<Material>,
    /// Registration order decides which modifier claims shared items first
    #[serde(default)]
    pub modifiers: Vec<StatModifier>,
    #[serde(default)]
    pub tools: Vec<ToolDefinition>,
}

impl ContentConfig {
    /// Check cross references and identifier uniqueness
    pub fn validate(&self) -> Result<(), ConfigError> {
        let trait_ids = unique_ids("trait", self.traits.iter().map(|t| t.identifier.as_str()))?;
        unique_ids(
            "material",
            self.materials.iter().map(|m| m.identifier.as_str()),
        )?;
        let modifier_ids = unique_ids(
            "modifier",
            self.modifiers.iter().map(|m| m.identifier.as_str()),
        )?;
        unique_ids("tool", self.tools.iter().map(|t| t.identifier.as_str()))?;

        for tool_trait in &self.traits {
            if tool_trait.max_level < 1 {
                return Err(ConfigError::invalid(format!(
                    "trait '{}' has max_level {}, must be at least 1",
                    tool_trait.identifier, tool_trait.max_level
                )));
            }
        }

        for material in &self.materials {
            if material.identifier == Material::UNKNOWN_ID {
                return Err(ConfigError::invalid(format!(
                    "material identifier '{}' is reserved",
                    Material::UNKNOWN_ID
                )));
            }
            if let Some(missing) = material.traits.iter().find(|t| !trait_ids.contains(t.as_str())) {
                return Err(ConfigError::invalid(format!(
                    "material '{}' grants unknown trait '{}'",
                    material.identifier, missing
                )));
            }
        }

        for modifier in &self.modifiers {
            let consumes_items = modifier
                .recipe
                .ingredients
                .iter()
                .all(|ingredient| ingredient.amount > 0);
            if modifier.recipe.ingredients.is_empty() || !consumes_items {
                return Err(ConfigError::invalid(format!(
                    "modifier '{}' needs at least one ingredient with a positive amount",
                    modifier.identifier
                )));
            }
            if let Some(missing) = modifier
                .conflicts
                .iter()
                .find(|c| !modifier_ids.contains(c.as_str()))
            {
                return Err(ConfigError::invalid(format!(
                    "modifier '{}' conflicts with unknown modifier '{}'",
                    modifier.identifier, missing
                )));
            }
        }

        if let Some(tool) = self.tools.iter().find(|t| !t.has_head()) {
            return Err(ConfigError::invalid(format!(
                "tool '{}' has no head part",
                tool.identifier
            )));
        }

        Ok(())
    }

    /// Validate and register everything, modifiers in declaration order
    pub fn into_registry(self) -> Result<ContentRegistry, ConfigError> {
        self.validate()?;

        let mut registry = ContentRegistry::new();
        for tool_trait in self.traits {
            registry.register_trait(tool_trait);
        }
        for material in self.materials {
            registry.register_material(material);
        }
        for modifier in self.modifiers {
            registry.register_modifier(modifier);
        }
        for tool in self.tools {
            registry.register_tool(tool);
        }
        tracing::debug!(
            materials = registry.material_count(),
            traits = registry.trait_count(),
            modifiers = registry.modifiers().len(),
            tools = registry.tool_count(),
            "content loaded"
        );
        Ok(registry)
    }
}

fn unique_ids<'a>(
    kind: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<HashSet<&'a str>, ConfigError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ConfigError::invalid(format!(
                "duplicate {} identifier '{}'",
                kind, id
            )));
        }
    }
    Ok(seen)
}

/// Load content from a TOML file
pub fn load_content(path: &Path) -> Result<ContentRegistry, ConfigError> {
    let config: ContentConfig = super::load_toml(path)?;
    config.into_registry()
}

/// Load content from a TOML string
pub fn parse_content(content: &str) -> Result<ContentRegistry, ConfigError> {
    let config: ContentConfig = super::parse_toml(content)?;
    config.into_registry()
}

/// Bundled default content
pub fn default_content() -> ContentRegistry {
    let toml = include_str!("../../config/content.toml");
    parse_content(toml).unwrap_or_else(|err| {
        tracing::error!(error = %err, "bundled content failed to load");
        ContentRegistry::new()
    })
}
