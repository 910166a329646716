use axum::{
    extract::{Multipart, State, multipart::MultipartError},
    http::StatusCode,
};
use bytes::Bytes;
use nutrition_assistant_core::domain::{assistant::AssistantService, nutrition::MealImage};
use tracing::{error, warn};

use crate::application::http::meal::validators::UploadImageForm;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use crate::application::http::session::view::SessionView;

pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024; // 10 MiB
const IMAGE_FIELD: &str = "image";
const DEFAULT_FILE_NAME: &str = "image";

fn multipart_error(e: MultipartError) -> ApiError {
    error!("Failed to read multipart body: {}", e);
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::PayloadTooLarge(format!(
            "Image too large. Max size is {} bytes",
            MAX_IMAGE_BYTES
        ));
    }
    ApiError::BadRequest(format!("Failed to read multipart body: {}", e.body_text()))
}

#[utoipa::path(
    put,
    path = "/image",
    tag = "meal",
    summary = "Select a meal image",
    description = "Replaces the meal image with the `image` field of a multipart form. Only `image/*` content up to 10 MiB is accepted.",
    responses(
        (status = 200, body = SessionView),
        (status = 400, description = "Missing or empty image field"),
        (status = 409, description = "An analysis is in flight"),
        (status = 413, description = "Image too large"),
        (status = 415, description = "Not an image")
    ),
    request_body(content = UploadImageForm, content_type = "multipart/form-data")
)]
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<SessionView>, ApiError> {
    let mut image: Option<MealImage> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or(DEFAULT_FILE_NAME).to_string();
        let mime_type = field
            .content_type()
            .map(str::to_string)
            .ok_or_else(|| ApiError::UnsupportedMediaType("Missing image content type".to_string()))?;

        if !mime_type.starts_with("image/") {
            warn!(%file_name, %mime_type, "rejected non-image upload");
            return Err(ApiError::UnsupportedMediaType(format!(
                "Expected an image/* file, got {}",
                mime_type
            )));
        }

        let data: Bytes = field.bytes().await.map_err(multipart_error)?;

        if data.is_empty() {
            return Err(ApiError::BadRequest("Image cannot be empty".to_string()));
        }

        if data.len() > MAX_IMAGE_BYTES {
            return Err(ApiError::PayloadTooLarge(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_BYTES
            )));
        }

        image = Some(MealImage::new(file_name, mime_type, data));
    }

    let image = image.ok_or_else(|| {
        ApiError::BadRequest(format!("Missing '{}' field in multipart form", IMAGE_FIELD))
    })?;

    let snapshot = state
        .service
        .set_image(image)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SessionView::render(&snapshot, &state.presenter)))
}
