use axum::{
    Router,
    routing::{delete, post},
};
use utoipa::OpenApi;

use super::handlers::delete_entry::{__path_delete_entry, delete_entry};
use super::handlers::select_entry::{__path_select_entry, select_entry};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(select_entry, delete_entry))]
pub struct HistoryApiDoc;

pub fn history_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/history/{{id}}/select", root_path),
            post(select_entry),
        )
        .route(&format!("{}/history/{{id}}", root_path), delete(delete_entry))
}
