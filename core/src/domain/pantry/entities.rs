use serde::{Deserialize, Serialize};

use crate::domain::common::generate_random_string;

use super::value_objects::{IngredientOrigin, PantryEntry, ToggleOutcome, same_ingredient_name};

const INGREDIENT_ID_LENGTH: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Ingredient {
    pub fn new(name: String, origin: &IngredientOrigin) -> Self {
        Self {
            id: generate_random_string(INGREDIENT_ID_LENGTH),
            name,
            category: Some(origin.category().to_string()),
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        same_ingredient_name(&self.name, name)
    }
}

impl From<&Ingredient> for PantryEntry {
    fn from(item: &Ingredient) -> Self {
        let origin = match item.category.as_deref() {
            Some("Scanned") => IngredientOrigin::Scanned,
            Some("Manual") | None => IngredientOrigin::Manual,
            Some(category) => IngredientOrigin::Suggested(category.to_string()),
        };
        Self {
            name: item.name.clone(),
            origin,
        }
    }
}

/// The user's ingredients on hand, unique by case-insensitive name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pantry {
    items: Vec<Ingredient>,
}

impl Pantry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a pantry from stored items, keeping the first of any
    /// case-insensitive duplicates.
    pub fn from_items(items: Vec<Ingredient>) -> Self {
        let mut pantry = Self::new();
        for item in items {
            if !pantry.contains(&item.name) {
                pantry.items.push(item);
            }
        }
        pantry
    }

    pub fn into_items(self) -> Vec<Ingredient> {
        self.items
    }

    pub fn items(&self) -> &[Ingredient] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.matches(name))
    }

    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|item| item.name.clone()).collect()
    }

    /// Removes the item with the same case-insensitive name, or inserts a
    /// new one with a fresh id.
    pub fn toggle(&mut self, entry: PantryEntry) -> ToggleOutcome {
        if self.contains(&entry.name) {
            self.items.retain(|item| !item.matches(&entry.name));
            ToggleOutcome::Removed
        } else {
            self.items.push(Ingredient::new(entry.name, &entry.origin));
            ToggleOutcome::Added
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
