use serde_json::json;

use crate::domain::preferences::value_objects::Weekday;

/// Returns the JSON schema for week plan LLM responses
pub fn get_meal_plan_schema() -> serde_json::Value {
    let days: Vec<&str> = Weekday::ALL.iter().map(|day| day.name()).collect();
    json!({
        "type": "array",
        "minItems": 7,
        "maxItems": 7,
        "items": {
            "type": "object",
            "properties": {
                "name": { "type": "string", "description": "Name of the dish" },
                "time": { "type": "integer", "description": "Cook time in minutes" },
                "tags": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Tags like Quick, Healthy, etc."
                },
                "isPantryFriendly": {
                    "type": "boolean",
                    "description": "Whether it uses pantry items heavily"
                },
                "day": { "type": "string", "enum": days, "description": "The day of the week" }
            },
            "required": ["name", "time", "day", "isPantryFriendly", "tags"]
        }
    })
}

/// Returns the JSON schema for swap suggestion LLM responses
pub fn get_swap_suggestions_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "minItems": 3,
        "maxItems": 5,
        "items": {
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "time": { "type": "integer" },
                "isPantryFriendly": { "type": "boolean" }
            },
            "required": ["name", "time", "isPantryFriendly"]
        }
    })
}
