use axum::extract::State;
use nutrition_assistant_core::domain::assistant::AssistantService;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use crate::application::http::session::view::SessionView;

#[utoipa::path(
    get,
    path = "/session",
    tag = "session",
    summary = "Get the current session",
    description = "Returns the meal input, the loading and error state, the displayed nutrition result and the rendered history.",
    responses(
        (status = 200, body = SessionView)
    )
)]
pub async fn get_session(State(state): State<AppState>) -> Result<Response<SessionView>, ApiError> {
    let snapshot = state.service.snapshot().await;

    Ok(Response::OK(SessionView::render(&snapshot, &state.presenter)))
}
