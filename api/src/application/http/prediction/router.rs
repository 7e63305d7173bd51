use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::predict_goal::{__path_predict_goal, predict_goal};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(predict_goal))]
pub struct PredictionApiDoc;

pub fn prediction_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/predict", state.args.server.root_path),
        post(predict_goal),
    )
}
