use crate::domain::{
    pantry::entities::Pantry,
    preferences::{
        entities::UserPreferences,
        value_objects::{DietType, Weekday},
    },
};

/// Everything the collaborator needs to plan a week, captured up front so
/// the request does not borrow the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    pub diet: DietType,
    pub daily_budgets: [(Weekday, u32); 7],
    pub pantry: Vec<String>,
}

impl PlanRequest {
    pub fn new(prefs: &UserPreferences, pantry: &Pantry) -> Self {
        Self {
            diet: prefs.diet,
            daily_budgets: prefs.weekly_budgets(),
            pantry: pantry.names(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequest {
    pub meal_name: String,
    pub diet: DietType,
    pub max_minutes: u32,
    pub pantry: Vec<String>,
}

impl SwapRequest {
    /// Budget defaults to the base prep time; pass the slot's day to honour
    /// a busy-day override.
    pub fn new(
        meal_name: impl Into<String>,
        prefs: &UserPreferences,
        pantry: &Pantry,
        day: Option<Weekday>,
    ) -> Self {
        Self {
            meal_name: meal_name.into(),
            diet: prefs.diet,
            max_minutes: day.map_or(prefs.base_time, |day| prefs.time_budget(day)),
            pantry: pantry.names(),
        }
    }
}
