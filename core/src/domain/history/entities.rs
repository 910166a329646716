use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::domain::nutrition::entities::NutritionResponse;

pub const IMAGE_MEAL_LABEL: &str = "Meal from image";
pub const UNKNOWN_MEAL_LABEL: &str = "Unknown meal";

/// One persisted analysis result with its originating description.
///
/// Field names follow the persisted camelCase layout so existing history dumps load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalEntry {
    pub id: i64,
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub meal_description: String,
    pub nutrition_data: NutritionResponse,
}

impl HistoricalEntry {
    pub fn new(
        id: i64,
        timestamp: i64,
        meal_description: String,
        nutrition_data: NutritionResponse,
    ) -> Self {
        Self {
            id,
            timestamp,
            meal_description,
            nutrition_data,
        }
    }
}

/// Label stored for a submission; only a literally empty description falls back.
pub fn meal_description_label(description: &str, has_image: bool) -> String {
    if !description.is_empty() {
        description.to_string()
    } else if has_image {
        IMAGE_MEAL_LABEL.to_string()
    } else {
        UNKNOWN_MEAL_LABEL.to_string()
    }
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("stored history is corrupted")]
    Corrupted(#[source] serde_json::Error),

    #[error("failed to read stored history")]
    Read(#[source] std::io::Error),

    #[error("failed to encode history")]
    Encode(#[source] serde_json::Error),

    #[error("failed to write history")]
    Write(#[source] std::io::Error),
}
