use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp, generate_uuid_v7},
    preferences::value_objects::Weekday,
};

pub const DINING_OUT_NAME: &str = "Dining Out";
pub const CLEARED_MEAL_NAME: &str = "Nothing planned";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    /// Cooking time in minutes; 0 means nothing to cook
    pub time: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    pub is_pantry_friendly: bool,
    pub day: Weekday,
}

impl Meal {
    /// Exchanges every field except `day` with `other`.
    fn swap_content(&mut self, other: &mut Meal) {
        std::mem::swap(&mut self.id, &mut other.id);
        std::mem::swap(&mut self.name, &mut other.name);
        std::mem::swap(&mut self.time, &mut other.time);
        std::mem::swap(&mut self.tags, &mut other.tags);
        std::mem::swap(&mut self.is_pantry_friendly, &mut other.is_pantry_friendly);
    }
}

/// An alternative offered for a single plan slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSuggestion {
    pub name: String,
    pub time: u32,
    pub is_pantry_friendly: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub id: Uuid,
    meals: Vec<Meal>,
    pub created_at: DateTime<Utc>,
}

impl MealPlan {
    /// Builds a plan from exactly one meal per weekday, in any order.
    /// Meals are stored Monday first.
    pub fn new(mut meals: Vec<Meal>) -> Result<Self, CoreError> {
        if meals.len() != Weekday::ALL.len() {
            return Err(CoreError::MalformedResponse(format!(
                "expected {} meals, got {}",
                Weekday::ALL.len(),
                meals.len()
            )));
        }
        meals.sort_by_key(|meal| meal.day);

        let (created_at, timestamp) = generate_timestamp();
        let plan = Self {
            id: Uuid::new_v7(timestamp),
            meals,
            created_at,
        };
        plan.validate()?;
        Ok(plan)
    }

    /// Checks the one-meal-per-weekday invariant in canonical order.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.meals.len() != Weekday::ALL.len() {
            return Err(CoreError::MalformedResponse(format!(
                "expected {} meals, got {}",
                Weekday::ALL.len(),
                self.meals.len()
            )));
        }
        for (meal, day) in self.meals.iter().zip(Weekday::ALL) {
            if meal.day != day {
                return Err(CoreError::MalformedResponse(format!(
                    "expected a meal for {day}, found {}",
                    meal.day
                )));
            }
        }
        Ok(())
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn get(&self, index: usize) -> Option<&Meal> {
        self.meals.get(index)
    }

    pub fn position_of(&self, day: Weekday) -> Option<usize> {
        self.meals.iter().position(|meal| meal.day == day)
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut Meal, CoreError> {
        self.meals
            .get_mut(index)
            .ok_or(CoreError::InvalidPlanIndex(index))
    }

    /// Overwrites the slot with the suggestion, keeping the slot's day.
    /// Tags are replaced only when the suggestion carries them.
    pub fn apply_swap(&mut self, index: usize, suggestion: MealSuggestion) -> Result<(), CoreError> {
        let slot = self.slot_mut(index)?;
        slot.id = Some(generate_uuid_v7());
        slot.name = suggestion.name;
        slot.time = suggestion.time;
        slot.is_pantry_friendly = suggestion.is_pantry_friendly;
        if let Some(tags) = suggestion.tags {
            slot.tags = tags;
        }
        Ok(())
    }

    /// Swaps everything but the day between `source_index` and the slot for
    /// `target_day`. Returns `false` when no slot has that day.
    pub fn move_meal(&mut self, source_index: usize, target_day: Weekday) -> Result<bool, CoreError> {
        if source_index >= self.meals.len() {
            return Err(CoreError::InvalidPlanIndex(source_index));
        }
        let Some(target_index) = self.position_of(target_day) else {
            return Ok(false);
        };
        if target_index == source_index {
            return Ok(true);
        }

        let (low, high) = (source_index.min(target_index), source_index.max(target_index));
        let (head, tail) = self.meals.split_at_mut(high);
        head[low].swap_content(&mut tail[0]);
        Ok(true)
    }

    pub fn dine_out(&mut self, index: usize) -> Result<(), CoreError> {
        let slot = self.slot_mut(index)?;
        slot.id = Some(generate_uuid_v7());
        slot.name = DINING_OUT_NAME.to_string();
        slot.time = 0;
        slot.tags = vec![DINING_OUT_NAME.to_string()];
        slot.is_pantry_friendly = false;
        Ok(())
    }

    pub fn clear_meal(&mut self, index: usize) -> Result<(), CoreError> {
        let slot = self.slot_mut(index)?;
        slot.id = None;
        slot.name = CLEARED_MEAL_NAME.to_string();
        slot.time = 0;
        slot.tags.clear();
        slot.is_pantry_friendly = false;
        Ok(())
    }
}
