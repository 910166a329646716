use axum::extract::{Path, State};
use nutrition_assistant_core::domain::assistant::AssistantService;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use crate::application::http::session::view::SessionView;

#[utoipa::path(
    post,
    path = "/{id}/select",
    tag = "history",
    summary = "Display a history entry",
    description = "Shows the stored nutrition result of a history entry and clears any error.",
    responses(
        (status = 200, body = SessionView),
        (status = 404, description = "Unknown history entry"),
        (status = 409, description = "An analysis is in flight")
    ),
    params(
        ("id" = i64, Path, description = "History entry id"),
    )
)]
pub async fn select_entry(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response<SessionView>, ApiError> {
    let snapshot = state
        .service
        .select_history_entry(id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SessionView::render(&snapshot, &state.presenter)))
}
