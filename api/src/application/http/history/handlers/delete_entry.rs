use axum::extract::{Path, State};
use nutrition_assistant_core::domain::assistant::AssistantService;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use crate::application::http::session::view::SessionView;

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "history",
    summary = "Delete a history entry",
    description = "Removes the entry from history. The displayed result is cleared only when it came from this entry.",
    responses(
        (status = 200, body = SessionView),
        (status = 404, description = "Unknown history entry"),
        (status = 409, description = "An analysis is in flight")
    ),
    params(
        ("id" = i64, Path, description = "History entry id"),
    )
)]
pub async fn delete_entry(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response<SessionView>, ApiError> {
    let snapshot = state
        .service
        .delete_history_entry(id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SessionView::render(&snapshot, &state.presenter)))
}
