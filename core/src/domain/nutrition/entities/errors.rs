use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("analysis request failed: {0}")]
    Request(String),

    #[error("analysis service returned {status}: {body}")]
    ServiceStatus { status: u16, body: String },

    #[error("analysis service returned no text")]
    EmptyResponse,

    #[error("analysis reply is not valid nutrition JSON")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("analysis reply does not satisfy the nutrition schema")]
    NonConforming(#[source] validator::ValidationErrors),
}
