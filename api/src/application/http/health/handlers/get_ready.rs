use axum::extract::State;
use dietwise_core::domain::health::{entities::ReadinessReport, ports::HealthCheckService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub data: ReadinessReport,
}

#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    summary = "Readiness probe",
    description = "Reports whether the goal model and the food dataset were loaded. Responds 503 while either is unavailable.",
    responses(
        (status = 200, body = ReadinessResponse),
        (status = 503, body = ReadinessResponse),
    )
)]
pub async fn get_ready(State(state): State<AppState>) -> Response<ReadinessResponse> {
    let report = state.service.readiness().await;
    let response = ReadinessResponse {
        ready: report.is_ready(),
        data: report,
    };

    if response.ready {
        Response::OK(response)
    } else {
        Response::ServiceUnavailable(response)
    }
}
