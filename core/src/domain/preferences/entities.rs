use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::common::entities::app_errors::CoreError;

use super::value_objects::{DietType, Weekday};

pub const DEFAULT_USER_NAME: &str = "Guest";
pub const DEFAULT_BASE_TIME: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub name: String,
    pub diet: DietType,
    /// Default prep time budget in minutes
    pub base_time: u32,
    /// Per-day overrides of `base_time`
    #[serde(default)]
    pub busy_days: BTreeMap<Weekday, u32>,
    #[serde(default)]
    pub is_logged_in: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            name: DEFAULT_USER_NAME.to_string(),
            diet: DietType::Vegetarian,
            base_time: DEFAULT_BASE_TIME,
            busy_days: BTreeMap::new(),
            is_logged_in: false,
        }
    }
}

impl UserPreferences {
    pub fn set_diet(&mut self, diet: DietType) {
        self.diet = diet;
    }

    pub fn set_base_time(&mut self, minutes: u32) -> Result<(), CoreError> {
        self.base_time = positive(minutes)?;
        Ok(())
    }

    pub fn set_busy_day_override(&mut self, day: Weekday, minutes: u32) -> Result<(), CoreError> {
        self.busy_days.insert(day, positive(minutes)?);
        Ok(())
    }

    /// Returns whether an override was present.
    pub fn clear_busy_day_override(&mut self, day: Weekday) -> bool {
        self.busy_days.remove(&day).is_some()
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::EmptyInput);
        }
        self.name = name.to_string();
        Ok(())
    }

    pub fn sign_in(&mut self, name: &str) -> Result<(), CoreError> {
        self.set_name(name)?;
        self.is_logged_in = true;
        Ok(())
    }

    pub fn sign_out(&mut self) {
        self.name = DEFAULT_USER_NAME.to_string();
        self.is_logged_in = false;
    }

    /// Minutes available on `day`, honouring busy-day overrides.
    pub fn time_budget(&self, day: Weekday) -> u32 {
        self.busy_days.get(&day).copied().unwrap_or(self.base_time)
    }

    pub fn weekly_budgets(&self) -> [(Weekday, u32); 7] {
        Weekday::ALL.map(|day| (day, self.time_budget(day)))
    }
}

fn positive(minutes: u32) -> Result<u32, CoreError> {
    if minutes == 0 {
        return Err(CoreError::EmptyInput);
    }
    Ok(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = UserPreferences::default();
        assert_eq!(prefs.name, "Guest");
        assert_eq!(prefs.diet, DietType::Vegetarian);
        assert_eq!(prefs.base_time, 30);
        assert!(prefs.busy_days.is_empty());
        assert!(!prefs.is_logged_in);
    }

    #[test]
    fn test_busy_day_overrides_base_time() {
        let mut prefs = UserPreferences::default();
        prefs.set_busy_day_override(Weekday::Wednesday, 15).unwrap();
        assert_eq!(prefs.time_budget(Weekday::Wednesday), 15);
        assert_eq!(prefs.time_budget(Weekday::Thursday), 30);

        let budgets = prefs.weekly_budgets();
        assert_eq!(budgets[2], (Weekday::Wednesday, 15));
        assert_eq!(budgets[0], (Weekday::Monday, 30));

        assert!(prefs.clear_busy_day_override(Weekday::Wednesday));
        assert!(!prefs.clear_busy_day_override(Weekday::Wednesday));
        assert_eq!(prefs.time_budget(Weekday::Wednesday), 30);
    }

    #[test]
    fn test_zero_minutes_rejected() {
        let mut prefs = UserPreferences::default();
        assert_eq!(prefs.set_base_time(0), Err(CoreError::EmptyInput));
        assert_eq!(prefs.base_time, 30);
        assert_eq!(
            prefs.set_busy_day_override(Weekday::Monday, 0),
            Err(CoreError::EmptyInput)
        );
        assert!(prefs.busy_days.is_empty());
    }

    #[test]
    fn test_sign_in_and_out() {
        let mut prefs = UserPreferences::default();
        assert_eq!(prefs.sign_in("   "), Err(CoreError::EmptyInput));
        prefs.sign_in("  Asha ").unwrap();
        assert_eq!(prefs.name, "Asha");
        assert!(prefs.is_logged_in);
        prefs.sign_out();
        assert_eq!(prefs.name, "Guest");
        assert!(!prefs.is_logged_in);
    }

    #[test]
    fn test_json_layout() {
        let mut prefs = UserPreferences::default();
        prefs.set_busy_day_override(Weekday::Friday, 45).unwrap();
        let value = serde_json::to_value(&prefs).unwrap();
        assert_eq!(value["baseTime"], 30);
        assert_eq!(value["busyDays"]["Friday"], 45);
        assert_eq!(value["isLoggedIn"], false);
    }

    #[test]
    fn test_reads_stored_short_day_keys() {
        let raw = r#"{"name":"Guest","diet":"Vegan","baseTime":20,"busyDays":{"Mon":15,"Fri":45},"isLoggedIn":true}"#;
        let prefs: UserPreferences = serde_json::from_str(raw).unwrap();
        assert_eq!(prefs.diet, DietType::Vegan);
        assert_eq!(prefs.time_budget(Weekday::Monday), 15);
        assert_eq!(prefs.time_budget(Weekday::Friday), 45);
        assert_eq!(prefs.time_budget(Weekday::Sunday), 20);
    }
}
