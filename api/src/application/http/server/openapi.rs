use utoipa::OpenApi;

use crate::application::http::{
    health::__path_health, history::router::HistoryApiDoc, meal::router::MealApiDoc,
    session::handlers::get_session::__path_get_session,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nutrition Assistant API"
    ),
    paths(health, get_session),
    nest(
        (path = "/meal", api = MealApiDoc),
        (path = "/history", api = HistoryApiDoc),
    )
)]
pub struct ApiDoc;
