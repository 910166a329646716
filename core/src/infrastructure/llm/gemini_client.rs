use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::LLMConfig,
    nutrition::{
        entities::AnalysisError,
        ports::LLMClient,
        value_objects::{ContentPart, GenerateContentRequest},
    },
};

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

impl From<GenerateContentRequest> for GeminiRequest {
    fn from(request: GenerateContentRequest) -> Self {
        let parts = request
            .parts
            .into_iter()
            .map(|part| match part {
                ContentPart::Text(text) => Part::Text { text },
                ContentPart::InlineData { mime_type, data } => Part::InlineData {
                    inline_data: InlineData {
                        mime_type,
                        data: general_purpose::STANDARD.encode(&data),
                    },
                },
            })
            .collect();

        GeminiRequest {
            contents: vec![Content { parts }],
            system_instruction: Some(Content {
                parts: vec![Part::Text {
                    text: request.system_instruction,
                }],
            }),
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: request.response_schema,
            }),
        }
    }
}

impl GeminiResponse {
    /// Concatenated text parts of the first candidate, if it has any.
    fn into_text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        (!text.is_empty()).then_some(text)
    }
}

impl GeminiLLMClient {
    pub fn new(api_key: String, model_name: String, base_url: String) -> Self {
        Self {
            api_key,
            model_name,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn from_config(config: &LLMConfig) -> Self {
        Self::new(
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
            config.gemini_base_url.clone(),
        )
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model_name
        )
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, AnalysisError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                AnalysisError::Request(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(AnalysisError::ServiceStatus {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            AnalysisError::Request(format!("failed to decode LLM response: {}", e))
        })?;

        gemini_response.into_text().ok_or_else(|| {
            tracing::error!("No text response received from Gemini API");
            AnalysisError::EmptyResponse
        })
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<String, AnalysisError> {
        self.call_gemini_api(GeminiRequest::from(request)).await
    }
}
