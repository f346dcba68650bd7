use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_plan::entities::MealPlan,
    pantry::entities::Pantry,
    preferences::entities::UserPreferences,
    storage::ports::KeyValueStore,
};

pub const PREFERENCES_KEY: &str = "mealmate_prefs_v2";
pub const PANTRY_KEY: &str = "mealmate_pantry_v2";
pub const MEAL_PLAN_KEY: &str = "mealmate_plan_v2";

pub const ALL_KEYS: [&str; 3] = [PREFERENCES_KEY, PANTRY_KEY, MEAL_PLAN_KEY];

/// Reads and decodes the document under `key`. Missing, unreadable or
/// corrupt documents all yield `None`.
pub async fn load_json<S, T>(store: &S, key: &str) -> Option<T>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    let raw = match store.get(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, error = %e, "failed to read stored value");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "ignoring corrupt stored value");
            None
        }
    }
}

pub async fn save_json<S, T>(store: &S, key: &str, value: &T) -> Result<(), CoreError>
where
    S: KeyValueStore,
    T: Serialize,
{
    let raw = serde_json::to_string(value).map_err(|e| {
        CoreError::StorageError(format!("failed to encode value for {key}: {e}"))
    })?;
    store.set(key, raw).await
}

pub async fn load_preferences<S: KeyValueStore>(store: &S) -> UserPreferences {
    load_json(store, PREFERENCES_KEY).await.unwrap_or_default()
}

pub async fn load_pantry<S: KeyValueStore>(store: &S) -> Pantry {
    load_json::<S, Pantry>(store, PANTRY_KEY)
        .await
        .map(|pantry| Pantry::from_items(pantry.into_items()))
        .unwrap_or_default()
}

pub async fn load_meal_plan<S: KeyValueStore>(store: &S) -> Option<MealPlan> {
    let plan: MealPlan = load_json(store, MEAL_PLAN_KEY).await?;
    match plan.validate() {
        Ok(()) => Some(plan),
        Err(e) => {
            warn!(error = %e, "ignoring stored meal plan");
            None
        }
    }
}

/// Removes every persisted document. Attempts all keys before reporting
/// the first failure.
pub async fn clear_all<S: KeyValueStore>(store: &S) -> Result<(), CoreError> {
    let mut first_error = None;
    for key in ALL_KEYS {
        if let Err(e) = store.remove(key).await {
            warn!(key, error = %e, "failed to remove stored value");
            first_error.get_or_insert(e);
        }
    }
    first_error.map_or(Ok(()), Err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pantry::value_objects::PantryEntry;
    use crate::domain::preferences::value_objects::DietType;
    use crate::infrastructure::storage::InMemoryKeyValueStore;

    #[tokio::test]
    async fn test_first_run_defaults() {
        let store = InMemoryKeyValueStore::new();
        let prefs = load_preferences(&store).await;
        assert_eq!(prefs, UserPreferences::default());
        assert!(load_pantry(&store).await.is_empty());
        assert!(load_meal_plan(&store).await.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_preferences_fall_back_to_default() {
        let store = InMemoryKeyValueStore::new();
        store
            .set(PREFERENCES_KEY, "{not json".to_string())
            .await
            .unwrap();
        assert_eq!(load_preferences(&store).await, UserPreferences::default());
    }

    #[tokio::test]
    async fn test_round_trip_through_store() {
        let store = InMemoryKeyValueStore::new();
        let mut prefs = UserPreferences::default();
        prefs.set_diet(DietType::Vegan);
        let mut pantry = Pantry::new();
        pantry.toggle(PantryEntry::manual("Lentils"));

        save_json(&store, PREFERENCES_KEY, &prefs).await.unwrap();
        save_json(&store, PANTRY_KEY, &pantry).await.unwrap();

        assert_eq!(load_preferences(&store).await.diet, DietType::Vegan);
        assert_eq!(load_pantry(&store).await, pantry);
    }

    #[tokio::test]
    async fn test_clear_all_removes_every_key() {
        let store = InMemoryKeyValueStore::new();
        for key in ALL_KEYS {
            store.set(key, "null".to_string()).await.unwrap();
        }
        clear_all(&store).await.unwrap();
        for key in ALL_KEYS {
            assert_eq!(store.get(key).await.unwrap(), None);
        }
    }
}
