use axum::extract::State;
use nutrition_assistant_core::domain::assistant::AssistantService;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use crate::application::http::session::view::SessionView;

#[utoipa::path(
    post,
    path = "/clear",
    tag = "meal",
    summary = "Clear the meal",
    description = "Resets the input, the displayed result and the error. History is kept.",
    responses(
        (status = 200, body = SessionView),
        (status = 409, description = "An analysis is in flight")
    )
)]
pub async fn clear_meal(State(state): State<AppState>) -> Result<Response<SessionView>, ApiError> {
    let snapshot = state.service.clear().await.map_err(ApiError::from)?;

    Ok(Response::OK(SessionView::render(&snapshot, &state.presenter)))
}
