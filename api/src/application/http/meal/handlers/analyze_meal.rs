use axum::extract::State;
use nutrition_assistant_core::domain::assistant::AssistantService;
use tracing::error;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use crate::application::http::session::view::SessionView;

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "meal",
    summary = "Analyze the current meal",
    description = "Sends the current description and image for analysis. An analysis failure is reported in the session's `error` field with status 200.",
    responses(
        (status = 200, body = SessionView),
        (status = 409, description = "An analysis is already in flight")
    )
)]
pub async fn analyze_meal(State(state): State<AppState>) -> Result<Response<SessionView>, ApiError> {
    // Runs detached so a dropped connection cannot leave the session loading.
    let service = state.service.clone();
    let snapshot = tokio::spawn(async move { service.submit().await })
        .await
        .map_err(|e| {
            error!("analysis task failed: {}", e);
            ApiError::InternalServerError("analysis task failed".to_string())
        })?
        .map_err(ApiError::from)?;

    Ok(Response::OK(SessionView::render(&snapshot, &state.presenter)))
}
