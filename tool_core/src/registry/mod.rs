//! Registry - Read-only lookup of known materials, traits and modifiers
//!
//! The host builds a registry once before any tool is processed and passes it
//! to every operation. The engine never writes to it.

use crate::ledger::ToolTrait;
use crate::material::Material;
use crate::modifier::Modifier;
use crate::tool::ToolDefinition;
use std::collections::HashMap;
use std::sync::Arc;

/// Lookup interface the engine depends on
pub trait Registry: Send + Sync {
    /// Material by identifier, if registered
    fn material(&self, identifier: &str) -> Option<Arc<Material>>;

    /// Placeholder returned for unresolvable material identifiers
    fn unknown_material(&self) -> Arc<Material>;

    /// Modifier by identifier, if registered
    fn modifier(&self, identifier: &str) -> Option<Arc<dyn Modifier>>;

    /// Trait by identifier, if registered
    fn tool_trait(&self, identifier: &str) -> Option<Arc<ToolTrait>>;

    /// All modifiers in registration order
    ///
    /// Earlier modifiers get the first claim on shared input items.
    fn modifiers(&self) -> &[Arc<dyn Modifier>];

    /// Material by identifier, or the unknown placeholder
    fn material_or_unknown(&self, identifier: &str) -> Arc<Material> {
        self.material(identifier)
            .unwrap_or_else(|| self.unknown_material())
    }

    /// Whether `tool_trait` is the registered instance itself
    fn is_registered_trait(&self, tool_trait: &ToolTrait) -> bool {
        self.tool_trait(&tool_trait.identifier)
            .is_some_and(|registered| std::ptr::eq(registered.as_ref(), tool_trait))
    }
}

/// In-memory registry populated from content
#[derive(Debug, Clone)]
pub struct ContentRegistry {
    materials: HashMap<String, Arc<Material>>,
    traits: HashMap<String, Arc<ToolTrait>>,
    modifiers: Vec<Arc<dyn Modifier>>,
    modifier_positions: HashMap<String, usize>,
    tools: HashMap<String, Arc<ToolDefinition>>,
    unknown: Arc<Material>,
}

impl Default for ContentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ContentRegistry {
            materials: HashMap::new(),
            traits: HashMap::new(),
            modifiers: Vec::new(),
            modifier_positions: HashMap::new(),
            tools: HashMap::new(),
            unknown: Arc::new(Material::unknown()),
        }
    }

    /// Register a material, replacing any with the same identifier
    pub fn register_material(&mut self, material: Material) -> Arc<Material> {
        let material = Arc::new(material);
        self.materials
            .insert(material.identifier.clone(), Arc::clone(&material));
        material
    }

    /// Register a trait, replacing any with the same identifier
    pub fn register_trait(&mut self, tool_trait: ToolTrait) -> Arc<ToolTrait> {
        let tool_trait = Arc::new(tool_trait);
        self.traits
            .insert(tool_trait.identifier.clone(), Arc::clone(&tool_trait));
        tool_trait
    }

    /// Register a modifier
    ///
    /// A modifier replacing an existing identifier keeps the original
    /// position in iteration order.
    pub fn register_modifier<M: Modifier + 'static>(&mut self, modifier: M) -> Arc<dyn Modifier> {
        let modifier: Arc<dyn Modifier> = Arc::new(modifier);
        let identifier = modifier.identifier().to_string();
        match self.modifier_positions.get(&identifier) {
            Some(&i) => self.modifiers[i] = Arc::clone(&modifier),
            None => {
                self.modifier_positions
                    .insert(identifier, self.modifiers.len());
                self.modifiers.push(Arc::clone(&modifier));
            }
        }
        modifier
    }

    /// Register a tool definition, replacing any with the same identifier
    pub fn register_tool(&mut self, tool: ToolDefinition) -> Arc<ToolDefinition> {
        let tool = Arc::new(tool);
        self.tools.insert(tool.identifier.clone(), Arc::clone(&tool));
        tool
    }

    /// Remove a material; tools using it rebuild with the unknown placeholder
    pub fn remove_material(&mut self, identifier: &str) -> Option<Arc<Material>> {
        self.materials.remove(identifier)
    }

    /// Remove a modifier; rebuilds skip it when replaying
    pub fn remove_modifier(&mut self, identifier: &str) -> Option<Arc<dyn Modifier>> {
        let index = self.modifier_positions.remove(identifier)?;
        let removed = self.modifiers.remove(index);
        for position in self.modifier_positions.values_mut() {
            if *position > index {
                *position -= 1;
            }
        }
        Some(removed)
    }

    pub fn get_trait(&self, identifier: &str) -> Option<Arc<ToolTrait>> {
        self.traits.get(identifier).cloned()
    }

    pub fn tool(&self, identifier: &str) -> Option<Arc<ToolDefinition>> {
        self.tools.get(identifier).cloned()
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn trait_count(&self) -> usize {
        self.traits.len()
    }

    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }
}

impl Registry for ContentRegistry {
    fn material(&self, identifier: &str) -> Option<Arc<Material>> {
        self.materials.get(identifier).cloned()
    }

    fn unknown_material(&self) -> Arc<Material> {
        Arc::clone(&self.unknown)
    }

    fn modifier(&self, identifier: &str) -> Option<Arc<dyn Modifier>> {
        self.modifier_positions
            .get(identifier)
            .map(|&i| Arc::clone(&self.modifiers[i]))
    }

    fn tool_trait(&self, identifier: &str) -> Option<Arc<ToolTrait>> {
        self.get_trait(identifier)
    }

    fn modifiers(&self) -> &[Arc<dyn Modifier>] {
        &self.modifiers
    }
}
