use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::recommend_foods::{__path_recommend_foods, recommend_foods};
use super::handlers::search_foods::{__path_search_foods, search_foods};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(recommend_foods, search_foods))]
pub struct FoodApiDoc;

pub fn food_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/search", state.args.server.root_path),
            post(search_foods),
        )
        .route(
            &format!("{}/{{goal}}", state.args.server.root_path),
            post(recommend_foods),
        )
}
