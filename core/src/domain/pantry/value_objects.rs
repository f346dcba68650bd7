use std::fmt;

/// Where a pantry item came from; stored as the ingredient's category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngredientOrigin {
    Manual,
    Scanned,
    /// Picked from the suggestion catalogue, carrying its category
    Suggested(String),
}

impl IngredientOrigin {
    pub fn category(&self) -> &str {
        match self {
            IngredientOrigin::Manual => "Manual",
            IngredientOrigin::Scanned => "Scanned",
            IngredientOrigin::Suggested(category) => category,
        }
    }
}

/// Case-insensitive name equality used for every pantry and scan lookup.
pub fn same_ingredient_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// A request to toggle a pantry item, by name or by an existing item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PantryEntry {
    pub name: String,
    pub origin: IngredientOrigin,
}

impl PantryEntry {
    pub fn manual(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin: IngredientOrigin::Manual,
        }
    }

    pub fn scanned(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin: IngredientOrigin::Scanned,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    /// The name was already present and has been removed
    Removed,
}

impl ToggleOutcome {
    pub fn notice(&self, name: &str) -> String {
        match self {
            ToggleOutcome::Added => format!("Added {name}"),
            ToggleOutcome::Removed => format!("Removed {name}"),
        }
    }
}

impl fmt::Display for ToggleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToggleOutcome::Added => f.write_str("added"),
            ToggleOutcome::Removed => f.write_str("removed"),
        }
    }
}
