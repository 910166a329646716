use axum::{Router, routing::get};

use super::handlers::get_session::get_session;
use crate::application::http::server::app_state::AppState;

pub fn session_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{}/session", root_path), get(get_session))
}
