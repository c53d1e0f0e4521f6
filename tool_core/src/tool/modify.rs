//! Modifier matching loop

use crate::modifier::RecipeMatch;
use crate::registry::Registry;
use crate::tag::Compound;
use crate::types::ItemStack;

/// Apply every modifier the input stacks allow to a copy of `tool`
///
/// Modifiers are tried in registry order. Each one is applied as many times
/// as its recipe keeps matching the remaining items. When a recipe matches
/// but the tool refuses the modifier, that modifier is abandoned even though
/// items for it remain, and the loop moves to the next modifier.
///
/// With `remove_items` false the loop runs on a copy of the stacks and the
/// caller's stacks are left untouched. Returns the modified copy, or `None`
/// if no modifier was applied.
pub fn try_modify_tool(
    registry: &dyn Registry,
    stacks: &mut [Option<ItemStack>],
    tool: &Compound,
    remove_items: bool,
) -> Option<Compound> {
    let mut copy = tool.clone();
    let mut applied = false;

    let mut preview: Vec<Option<ItemStack>>;
    let stacks: &mut [Option<ItemStack>] = if remove_items {
        stacks
    } else {
        preview = stacks.to_vec();
        &mut preview
    };

    for modifier in registry.modifiers() {
        while let Some(found) = modifier.matches(stacks) {
            if !modifier.can_apply(&copy) {
                tracing::debug!(
                    modifier = %modifier.identifier(),
                    "items present but tool refuses modifier"
                );
                break;
            }
            modifier.apply(&mut copy);
            RecipeMatch::remove_match(stacks, &found);
            applied = true;
        }
    }

    applied.then_some(copy)
}
