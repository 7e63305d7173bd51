use axum::extract::State;
use dietwise_core::domain::food::entities::GoalCategory;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct EndpointDescription {
    pub method: String,
    pub path: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct IndexResponse {
    pub name: String,
    pub version: String,
    pub endpoints: Vec<EndpointDescription>,
}

fn endpoint(method: &str, path: String, description: &str) -> EndpointDescription {
    EndpointDescription {
        method: method.to_string(),
        path,
        description: description.to_string(),
    }
}

#[utoipa::path(
    get,
    path = "/",
    tag = "home",
    summary = "Service index",
    responses(
        (status = 200, body = IndexResponse)
    )
)]
pub async fn get_index(State(state): State<AppState>) -> Response<IndexResponse> {
    let root_path = &state.args.server.root_path;

    let mut endpoints = vec![endpoint(
        "POST",
        format!("{root_path}/predict"),
        "Predict a dietary goal from input_1, input_2 and input_3",
    )];

    endpoints.extend(GoalCategory::ALL.iter().map(|goal| {
        endpoint(
            "POST",
            format!("{root_path}/{}", goal.path_segment()),
            "Recommend foods; checkboxes vegetarian, iron, calcium",
        )
    }));

    endpoints.push(endpoint(
        "POST",
        format!("{root_path}/search"),
        "Whole food table sorted by sort_by",
    ));
    endpoints.push(endpoint(
        "GET",
        format!("{root_path}/health/ready"),
        "Model and dataset readiness",
    ));

    Response::OK(IndexResponse {
        name: "dietwise".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints,
    })
}
