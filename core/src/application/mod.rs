use anyhow::bail;
use tracing::info;

use crate::{
    domain::{
        assistant::Assistant, common::NutritionConfig, history::HistoryStore,
        nutrition::services::AnalysisClient,
    },
    infrastructure::{
        clock::SystemClock, history::FileHistoryRepository, llm::GeminiLLMClient,
    },
};

pub type NutritionAssistant =
    Assistant<AnalysisClient<GeminiLLMClient>, FileHistoryRepository, SystemClock>;

/// Wires the production adapters and loads the persisted history.
pub async fn create_service(config: NutritionConfig) -> Result<NutritionAssistant, anyhow::Error> {
    if config.llm.gemini_api_key.trim().is_empty() {
        bail!("a Gemini API key is required (GEMINI_API_KEY)");
    }

    let llm_client = GeminiLLMClient::from_config(&config.llm);
    let analyzer = AnalysisClient::new(llm_client);

    let repository = FileHistoryRepository::new(config.history.path.clone());
    let history = HistoryStore::load(repository).await;

    info!(
        model = %config.llm.gemini_model,
        history_path = %config.history.path.display(),
        entries = history.len(),
        "nutrition assistant ready"
    );

    Ok(Assistant::new(analyzer, history, SystemClock))
}
