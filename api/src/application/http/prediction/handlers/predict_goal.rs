use axum::extract::State;
use dietwise_core::domain::prediction::{
    entities::GoalLabel, ports::PredictionService, value_objects::PredictGoalInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    prediction::validators::PredictGoalValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateForm},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GoalPrediction {
    #[schema(example = "Weight Loss")]
    pub goal: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PredictGoalResponse {
    pub data: GoalPrediction,
}

impl From<GoalLabel> for GoalPrediction {
    fn from(label: GoalLabel) -> Self {
        Self {
            goal: label.display_name().to_string(),
        }
    }
}

#[utoipa::path(
    post,
    path = "/predict",
    tag = "prediction",
    summary = "Predict dietary goal",
    description = "Runs the goal classifier on three numeric inputs and returns one of Muscle Gain, Weight Gain, Weight Loss or General food.",
    request_body(
        content = PredictGoalValidator,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, body = PredictGoalResponse),
        (status = 400, body = ApiErrorResponse, description = "Inputs are missing or not numeric"),
        (status = 500, body = ApiErrorResponse, description = "Model unavailable"),
    )
)]
pub async fn predict_goal(
    State(state): State<AppState>,
    ValidateForm(payload): ValidateForm<PredictGoalValidator>,
) -> Result<Response<PredictGoalResponse>, ApiError> {
    let label = state
        .service
        .predict_goal(PredictGoalInput {
            raw_features: payload.into_raw_features(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(PredictGoalResponse {
        data: GoalPrediction::from(label),
    }))
}
