use std::collections::BTreeMap;

use axum::extract::State;
use dietwise_core::domain::food::{
    entities::FoodTable, ports::FoodService, value_objects::SearchFoodsInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    food::validators::SearchFoodsValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateForm},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FoodSearchResult {
    /// Column names in dataset order
    pub columns: Vec<String>,
    pub rows: Vec<BTreeMap<String, String>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SearchFoodsResponse {
    pub data: FoodSearchResult,
}

impl From<FoodTable> for FoodSearchResult {
    fn from(table: FoodTable) -> Self {
        let rows = table
            .rows
            .into_iter()
            .map(|row| table.columns.iter().cloned().zip(row).collect())
            .collect();

        Self {
            columns: table.columns,
            rows,
        }
    }
}

#[utoipa::path(
    post,
    path = "/search",
    tag = "food",
    summary = "Search foods",
    description = "Returns the whole food table sorted by `sort_by` (default `Descrip`). Prefix the column with `-` for descending order.",
    request_body(
        content = SearchFoodsValidator,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, body = SearchFoodsResponse),
        (status = 400, body = ApiErrorResponse, description = "Unknown sort column"),
        (status = 500, body = ApiErrorResponse, description = "Food dataset unavailable"),
    )
)]
pub async fn search_foods(
    State(state): State<AppState>,
    ValidateForm(payload): ValidateForm<SearchFoodsValidator>,
) -> Result<Response<SearchFoodsResponse>, ApiError> {
    let table = state
        .service
        .search_foods(SearchFoodsInput {
            sort_by: payload.sort_by,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SearchFoodsResponse {
        data: FoodSearchResult::from(table),
    }))
}
