use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::get_index::{__path_get_index, get_index};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_index))]
pub struct HomeApiDoc;

pub fn home_routes(root_path: &str) -> Router<AppState> {
    let path = if root_path.is_empty() {
        "/".to_string()
    } else {
        root_path.to_string()
    };

    Router::new().route(&path, get(get_index))
}
