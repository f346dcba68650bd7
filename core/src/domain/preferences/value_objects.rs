use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    #[serde(alias = "Mon")]
    Monday,
    #[serde(alias = "Tue")]
    Tuesday,
    #[serde(alias = "Wed")]
    Wednesday,
    #[serde(alias = "Thu")]
    Thursday,
    #[serde(alias = "Fri")]
    Friday,
    #[serde(alias = "Sat")]
    Saturday,
    #[serde(alias = "Sun")]
    Sunday,
}

impl Weekday {
    /// Canonical plan order, Monday first
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    pub fn short_name(&self) -> &'static str {
        &self.name()[..3]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Weekday::ALL
            .into_iter()
            .find(|day| {
                day.name().eq_ignore_ascii_case(needle) || day.short_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| format!("unknown weekday: {s}"))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietType {
    #[default]
    Vegetarian,
    #[serde(rename = "Non-veg")]
    NonVeg,
    #[serde(rename = "Egg-only")]
    EggOnly,
    Vegan,
}

impl DietType {
    pub const ALL: [DietType; 4] = [
        DietType::Vegetarian,
        DietType::NonVeg,
        DietType::EggOnly,
        DietType::Vegan,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DietType::Vegetarian => "Vegetarian",
            DietType::NonVeg => "Non-veg",
            DietType::EggOnly => "Egg-only",
            DietType::Vegan => "Vegan",
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
