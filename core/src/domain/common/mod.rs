use std::path::PathBuf;

use chrono::Utc;

pub mod entities;
pub mod ports;

#[derive(Clone, Debug)]
pub struct NutritionConfig {
    pub llm: LLMConfig,
    pub history: HistoryConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
}

#[derive(Clone, Debug)]
pub struct HistoryConfig {
    pub path: PathBuf,
}

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_HISTORY_PATH: &str = "data/nutrition_history.json";

/// Current time as epoch milliseconds.
pub fn generate_timestamp() -> i64 {
    Utc::now().timestamp_millis()
}
