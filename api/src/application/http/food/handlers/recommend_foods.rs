use axum::extract::{Path, State};
use dietwise_core::domain::food::{
    entities::GoalCategory, ports::FoodService, value_objects::RecommendFoodsInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    food::validators::{RecommendFoodsForm, dietary_filter},
    form_extractor::FormFields,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecommendFoodsResponse {
    /// Food descriptions, in random order
    pub data: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/{goal}",
    tag = "food",
    summary = "Recommend foods",
    description = "Returns a random sample of foods for the goal category, narrowed by the dietary checkboxes. An empty list means nothing matched.",
    params(
        ("goal" = String, Path, description = "One of musclegain, weightgain, weightloss"),
    ),
    request_body(
        content = RecommendFoodsForm,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, body = RecommendFoodsResponse),
        (status = 404, body = ApiErrorResponse, description = "Unknown goal category"),
        (status = 500, body = ApiErrorResponse, description = "Food dataset unavailable"),
    )
)]
pub async fn recommend_foods(
    Path(goal): Path<String>,
    State(state): State<AppState>,
    form: FormFields,
) -> Result<Response<RecommendFoodsResponse>, ApiError> {
    let goal = GoalCategory::from_path_segment(&goal)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown goal category: {goal}")))?;

    let foods = state
        .service
        .recommend_foods(RecommendFoodsInput {
            goal,
            filter: dietary_filter(&form),
            sample_size: None,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecommendFoodsResponse { data: foods }))
}
