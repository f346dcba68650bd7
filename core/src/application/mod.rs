use crate::{
    domain::{common::MealmateConfig, meal_plan::services::MealPlanner, session::Session},
    infrastructure::{llm::GeminiLLMClient, storage::FileKeyValueStore},
};

pub mod telemetry;

pub type AppSession = Session<FileKeyValueStore, MealPlanner<GeminiLLMClient>>;

/// Wires the Gemini client and file storage into a restored session.
pub async fn create_session(config: MealmateConfig) -> Result<AppSession, anyhow::Error> {
    let llm_client = GeminiLLMClient::new(&config.llm)?;
    let planner = MealPlanner::new(llm_client, config.llm.request_timeout);
    let store = FileKeyValueStore::new(config.storage.data_dir.clone());

    tracing::info!(
        data_dir = %store.data_dir().display(),
        model = %config.llm.gemini_model,
        "starting mealmate session"
    );

    Ok(Session::load(store, planner, config.storage.persist_plan).await)
}
