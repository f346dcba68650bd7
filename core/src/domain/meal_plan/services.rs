use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, instrument, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_plan::{
        entities::{MealPlan, MealSuggestion},
        helpers::{decode_meal_plan, decode_swap_suggestions, parse_ingredient_list},
        ports::{LLMClient, MealPlanService},
        prompts::{SCAN_INSTRUCTION, build_plan_prompt, build_swap_prompt},
        schema::{get_meal_plan_schema, get_swap_suggestions_schema},
        value_objects::{PlanRequest, SwapRequest},
    },
};

/// Drives the LLM collaborator and strictly decodes its answers.
#[derive(Debug)]
pub struct MealPlanner<L: LLMClient> {
    llm_client: Arc<L>,
    request_timeout: Duration,
}

impl<L: LLMClient> Clone for MealPlanner<L> {
    fn clone(&self) -> Self {
        Self {
            llm_client: Arc::clone(&self.llm_client),
            request_timeout: self.request_timeout,
        }
    }
}

impl<L: LLMClient> MealPlanner<L> {
    pub fn new(llm_client: L, request_timeout: Duration) -> Self {
        Self {
            llm_client: Arc::new(llm_client),
            request_timeout,
        }
    }

    /// Bounds a collaborator call; an elapsed timeout is a request failure.
    async fn bounded<T>(
        &self,
        call: impl Future<Output = Result<T, CoreError>>,
    ) -> Result<T, CoreError> {
        tokio::time::timeout(self.request_timeout, call)
            .await
            .map_err(|_| {
                CoreError::RequestFailure(format!(
                    "LLM request timed out after {:?}",
                    self.request_timeout
                ))
            })?
    }

    async fn fetch_swaps(&self, request: SwapRequest) -> Result<Vec<MealSuggestion>, CoreError> {
        let raw = self
            .bounded(
                self.llm_client
                    .generate_with_text(build_swap_prompt(&request), get_swap_suggestions_schema()),
            )
            .await?;
        decode_swap_suggestions(&raw)
    }
}

impl<L: LLMClient> MealPlanService for MealPlanner<L> {
    #[instrument(skip(self, request), fields(diet = %request.diet, pantry = request.pantry.len()))]
    async fn generate_plan(&self, request: PlanRequest) -> Result<MealPlan, CoreError> {
        let raw = self
            .bounded(
                self.llm_client
                    .generate_with_text(build_plan_prompt(&request), get_meal_plan_schema()),
            )
            .await
            .inspect_err(|e| error!("Meal plan request failed: {}", e))?;

        let plan = decode_meal_plan(&raw)?;
        info!(plan_id = %plan.id, "meal plan generated");
        Ok(plan)
    }

    #[instrument(skip(self, request), fields(meal = %request.meal_name))]
    async fn request_swaps(&self, request: SwapRequest) -> Vec<MealSuggestion> {
        match self.fetch_swaps(request).await {
            Ok(suggestions) => suggestions,
            Err(e) => {
                warn!("Swap suggestions unavailable: {}", e);
                Vec::new()
            }
        }
    }

    #[instrument(skip_all, fields(image_bytes = image_data.len()))]
    async fn scan_image(&self, image_data: Vec<u8>) -> Result<Vec<String>, CoreError> {
        let text = self
            .bounded(
                self.llm_client
                    .generate_with_image(SCAN_INSTRUCTION.to_string(), image_data),
            )
            .await
            .inspect_err(|e| error!("Pantry scan failed: {}", e))?;

        Ok(parse_ingredient_list(&text))
    }
}
