//! RecipeMatch - Matching modifier recipes against input stacks

use crate::types::ItemStack;
use serde::{Deserialize, Serialize};

/// One required input of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub item: String,
    #[serde(default = "default_amount")]
    pub amount: u32,
}

fn default_amount() -> u32 {
    1
}

impl Ingredient {
    pub fn new(item: impl Into<String>, amount: u32) -> Self {
        Ingredient {
            item: item.into(),
            amount,
        }
    }
}

/// Items taken from input slots by a successful match
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Match {
    /// (slot index, amount taken) pairs
    pub taken: Vec<(usize, u32)>,
}

/// A recipe: every ingredient must be satisfiable from the inputs
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeMatch {
    pub ingredients: Vec<Ingredient>,
}

impl RecipeMatch {
    pub fn new(ingredients: Vec<Ingredient>) -> Self {
        RecipeMatch { ingredients }
    }

    /// Recipe needing `amount` of a single item
    pub fn of(item: impl Into<String>, amount: u32) -> Self {
        RecipeMatch::new(vec![Ingredient::new(item, amount)])
    }

    /// Find items satisfying the recipe once, taking from slots in order
    ///
    /// A recipe without ingredients (or with only zero amounts) never
    /// matches, so every match consumes at least one item.
    pub fn matches(&self, stacks: &[Option<ItemStack>]) -> Option<Match> {
        let mut remaining: Vec<u32> = stacks
            .iter()
            .map(|s| s.as_ref().map_or(0, |s| s.amount))
            .collect();
        let mut taken = Vec::new();

        for ingredient in &self.ingredients {
            let mut needed = ingredient.amount;
            for (slot, stack) in stacks.iter().enumerate() {
                if needed == 0 {
                    break;
                }
                let Some(stack) = stack else {
                    continue;
                };
                if !stack.is(&ingredient.item) {
                    continue;
                }
                let take = needed.min(remaining[slot]);
                if take == 0 {
                    continue;
                }
                remaining[slot] -= take;
                needed -= take;
                taken.push((slot, take));
            }
            if needed > 0 {
                return None;
            }
        }

        if taken.is_empty() {
            return None;
        }
        Some(Match { taken })
    }

    /// Remove matched items from the stacks, emptying depleted slots
    pub fn remove_match(stacks: &mut [Option<ItemStack>], found: &Match) {
        for &(slot, amount) in &found.taken {
            let Some(entry) = stacks.get_mut(slot) else {
                continue;
            };
            let depleted = match entry.as_mut() {
                Some(stack) => {
                    stack.amount = stack.amount.saturating_sub(amount);
                    stack.amount == 0
                }
                None => false,
            };
            if depleted {
                *entry = None;
            }
        }
    }
}
