use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{post, put},
};
use utoipa::OpenApi;

use super::handlers::analyze_meal::{__path_analyze_meal, analyze_meal};
use super::handlers::clear_meal::{__path_clear_meal, clear_meal};
use super::handlers::remove_image::{__path_remove_image, remove_image};
use super::handlers::update_description::{__path_update_description, update_description};
use super::handlers::upload_image::{MAX_IMAGE_BYTES, __path_upload_image, upload_image};
use crate::application::http::server::app_state::AppState;

/// Room for the multipart framing around a maximum-size image.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(update_description, upload_image, remove_image, analyze_meal, clear_meal))]
pub struct MealApiDoc;

pub fn meal_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/meal/description", root_path),
            put(update_description),
        )
        .route(
            &format!("{}/meal/image", root_path),
            put(upload_image)
                .delete(remove_image)
                .layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES + MULTIPART_OVERHEAD_BYTES)),
        )
        .route(&format!("{}/meal/analyze", root_path), post(analyze_meal))
        .route(&format!("{}/meal/clear", root_path), post(clear_meal))
}
