use utoipa::OpenApi;

use crate::application::http::{
    food::router::FoodApiDoc, health::router::HealthApiDoc, home::router::HomeApiDoc,
    prediction::router::PredictionApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dietwise API",
        description = "Goal prediction and food recommendations"
    ),
    tags(
        (name = "prediction", description = "Dietary goal classifier"),
        (name = "food", description = "Food recommendations and catalog search"),
        (name = "health", description = "Liveness and readiness probes"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Full document, with every router's paths merged in.
    pub fn build() -> utoipa::openapi::OpenApi {
        ApiDoc::openapi()
            .merge_from(HomeApiDoc::openapi())
            .merge_from(PredictionApiDoc::openapi())
            .merge_from(FoodApiDoc::openapi())
            .merge_from(HealthApiDoc::openapi())
    }
}
