use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Image handle supplied by the file selection surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealImage {
    pub file_name: String,
    pub mime_type: String,
    pub data: Bytes,
}

impl MealImage {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, data: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            data,
        }
    }

    pub fn summary(&self) -> MealImageSummary {
        MealImageSummary {
            file_name: self.file_name.clone(),
            mime_type: self.mime_type.clone(),
            size_bytes: self.data.len(),
        }
    }
}

/// Display-side description of a selected image, without its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealImageSummary {
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeMealInput {
    pub description: String,
    pub image: Option<MealImage>,
}

/// Provider-neutral structured-output request handed to an [`LLMClient`](super::ports::LLMClient).
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateContentRequest {
    pub system_instruction: String,
    pub parts: Vec<ContentPart>,
    pub response_schema: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPart {
    Text(String),
    InlineData { mime_type: String, data: Bytes },
}
