use std::future::Future;

use crate::domain::nutrition::{
    entities::{AnalysisError, NutritionResponse},
    value_objects::{AnalyzeMealInput, GenerateContentRequest},
};

/// LLM Client trait for calling multimodal models with a structured-output schema
pub trait LLMClient: Send + Sync {
    /// Returns the raw text of the first candidate.
    fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> impl Future<Output = Result<String, AnalysisError>> + Send;
}

/// Turns a meal description and/or image into a validated [`NutritionResponse`].
///
/// Implementations hold no per-call state and may be invoked concurrently.
pub trait MealAnalyzer: Send + Sync {
    fn analyze(
        &self,
        input: AnalyzeMealInput,
    ) -> impl Future<Output = Result<NutritionResponse, AnalysisError>> + Send;
}
