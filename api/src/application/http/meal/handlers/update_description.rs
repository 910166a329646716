use axum::extract::State;
use nutrition_assistant_core::domain::assistant::AssistantService;

use crate::application::http::meal::validators::UpdateDescriptionValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::session::view::SessionView;

#[utoipa::path(
    put,
    path = "/description",
    tag = "meal",
    summary = "Update meal description",
    description = "Replaces the free-text meal description. Rejected while an analysis is in flight.",
    responses(
        (status = 200, body = SessionView),
        (status = 400, description = "Invalid payload"),
        (status = 409, description = "An analysis is in flight")
    ),
    request_body = UpdateDescriptionValidator
)]
pub async fn update_description(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateDescriptionValidator>,
) -> Result<Response<SessionView>, ApiError> {
    let snapshot = state
        .service
        .set_description(payload.description)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SessionView::render(&snapshot, &state.presenter)))
}
