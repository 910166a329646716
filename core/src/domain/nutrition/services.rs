use tracing::{error, instrument};
use validator::Validate;

use crate::domain::nutrition::{
    entities::{AnalysisError, NutritionResponse},
    ports::{LLMClient, MealAnalyzer},
    prompt::{SYSTEM_INSTRUCTION, build_analysis_prompt},
    schema::get_nutrition_schema,
    value_objects::{AnalyzeMealInput, ContentPart, GenerateContentRequest},
};

#[derive(Debug, Clone)]
pub struct AnalysisClient<L> {
    llm_client: L,
}

impl<L> AnalysisClient<L>
where
    L: LLMClient,
{
    pub fn new(llm_client: L) -> Self {
        Self { llm_client }
    }
}

/// Builds the single outbound request for one analysis.
///
/// The image part, when present, precedes the prompt text.
pub fn build_request(input: &AnalyzeMealInput) -> GenerateContentRequest {
    let mut parts = Vec::with_capacity(2);

    if let Some(image) = &input.image {
        parts.push(ContentPart::InlineData {
            mime_type: image.mime_type.clone(),
            data: image.data.clone(),
        });
    }

    parts.push(ContentPart::Text(build_analysis_prompt(
        &input.description,
        input.image.is_some(),
    )));

    GenerateContentRequest {
        system_instruction: SYSTEM_INSTRUCTION.to_string(),
        parts,
        response_schema: get_nutrition_schema(),
    }
}

pub fn parse_nutrition_response(raw: &str) -> Result<NutritionResponse, AnalysisError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AnalysisError::EmptyResponse);
    }

    let response: NutritionResponse =
        serde_json::from_str(trimmed).map_err(AnalysisError::MalformedResponse)?;

    response.validate().map_err(AnalysisError::NonConforming)?;

    Ok(response)
}

impl<L> MealAnalyzer for AnalysisClient<L>
where
    L: LLMClient,
{
    #[instrument(skip_all, fields(has_image = input.image.is_some()))]
    async fn analyze(&self, input: AnalyzeMealInput) -> Result<NutritionResponse, AnalysisError> {
        let request = build_request(&input);

        let raw_response = self
            .llm_client
            .generate_content(request)
            .await
            .inspect_err(|e| error!("Error analyzing meal: {}", e))?;

        parse_nutrition_response(&raw_response)
            .inspect_err(|e| error!("Failed to parse analysis reply: {}", e))
    }
}
