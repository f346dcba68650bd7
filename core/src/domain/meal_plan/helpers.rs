use serde::Deserialize;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7},
    meal_plan::entities::{Meal, MealPlan, MealSuggestion},
    preferences::value_objects::Weekday,
};

pub const MIN_SWAP_SUGGESTIONS: usize = 3;
pub const MAX_SWAP_SUGGESTIONS: usize = 5;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlannedMealRecord {
    name: String,
    time: u32,
    tags: Vec<String>,
    is_pantry_friendly: bool,
    day: Weekday,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SwapRecord {
    name: String,
    time: u32,
    is_pantry_friendly: bool,
}

fn require_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::MalformedResponse("meal without a name".to_string()));
    }
    Ok(())
}

/// Decodes a week plan. Anything other than seven well-formed records, one
/// per weekday, is a `MalformedResponse`.
pub fn decode_meal_plan(raw: &str) -> Result<MealPlan, CoreError> {
    let records: Vec<PlannedMealRecord> = serde_json::from_str(raw.trim()).map_err(|e| {
        tracing::error!("Invalid meal plan format: {}", e);
        CoreError::MalformedResponse(format!("Invalid meal plan format: {}", e))
    })?;

    let meals = records
        .into_iter()
        .map(|record| {
            require_name(&record.name)?;
            Ok(Meal {
                id: Some(generate_uuid_v7()),
                name: record.name.trim().to_string(),
                time: record.time,
                tags: record.tags,
                is_pantry_friendly: record.is_pantry_friendly,
                day: record.day,
            })
        })
        .collect::<Result<Vec<_>, CoreError>>()?;

    MealPlan::new(meals)
}

pub fn decode_swap_suggestions(raw: &str) -> Result<Vec<MealSuggestion>, CoreError> {
    let records: Vec<SwapRecord> = serde_json::from_str(raw.trim()).map_err(|e| {
        CoreError::MalformedResponse(format!("Invalid swap suggestions format: {}", e))
    })?;

    if !(MIN_SWAP_SUGGESTIONS..=MAX_SWAP_SUGGESTIONS).contains(&records.len()) {
        return Err(CoreError::MalformedResponse(format!(
            "expected {}-{} suggestions, got {}",
            MIN_SWAP_SUGGESTIONS,
            MAX_SWAP_SUGGESTIONS,
            records.len()
        )));
    }

    records
        .into_iter()
        .map(|record| {
            require_name(&record.name)?;
            Ok(MealSuggestion {
                name: record.name.trim().to_string(),
                time: record.time,
                is_pantry_friendly: record.is_pantry_friendly,
                tags: None,
            })
        })
        .collect()
}

/// Splits a comma-separated answer into trimmed, non-empty names.
pub fn parse_ingredient_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
