use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_plan::{
        entities::{MealPlan, MealSuggestion},
        value_objects::{PlanRequest, SwapRequest},
    },
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Free-text answer about a single JPEG image
    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// JSON answer constrained by `response_schema`
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the three AI-backed planning operations
#[cfg_attr(test, mockall::automock)]
pub trait MealPlanService: Send + Sync {
    /// A full week, one meal per weekday, or an error. Never partial.
    fn generate_plan(
        &self,
        request: PlanRequest,
    ) -> impl Future<Output = Result<MealPlan, CoreError>> + Send;

    /// Alternatives for one meal; empty on any failure
    fn request_swaps(
        &self,
        request: SwapRequest,
    ) -> impl Future<Output = Vec<MealSuggestion>> + Send;

    /// Ingredient names visible in the image
    fn scan_image(
        &self,
        image_data: Vec<u8>,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}
