use super::entities::Pantry;
use super::value_objects::{IngredientOrigin, PantryEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestedIngredient {
    pub name: &'static str,
    pub category: &'static str,
}

impl SuggestedIngredient {
    pub fn to_entry(&self) -> PantryEntry {
        PantryEntry {
            name: self.name.to_string(),
            origin: IngredientOrigin::Suggested(self.category.to_string()),
        }
    }
}

pub const SUGGESTED_INGREDIENTS: [SuggestedIngredient; 8] = [
    SuggestedIngredient {
        name: "Onion",
        category: "Vegetables",
    },
    SuggestedIngredient {
        name: "Tomato",
        category: "Vegetables",
    },
    SuggestedIngredient {
        name: "Rice",
        category: "Grains",
    },
    SuggestedIngredient {
        name: "Paneer",
        category: "Protein",
    },
    SuggestedIngredient {
        name: "Eggs",
        category: "Protein",
    },
    SuggestedIngredient {
        name: "Garlic",
        category: "Vegetables",
    },
    SuggestedIngredient {
        name: "Pasta",
        category: "Grains",
    },
    SuggestedIngredient {
        name: "Chicken",
        category: "Protein",
    },
];

/// Catalogue entries matching `query` that are not yet in the pantry.
pub fn suggested_ingredients(pantry: &Pantry, query: &str) -> Vec<SuggestedIngredient> {
    let query = query.trim().to_lowercase();
    SUGGESTED_INGREDIENTS
        .iter()
        .filter(|s| !pantry.contains(s.name))
        .filter(|s| query.is_empty() || s.name.to_lowercase().contains(&query))
        .copied()
        .collect()
}
