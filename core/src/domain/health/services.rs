use crate::domain::{
    common::services::Service,
    food::ports::FoodCatalogRepository,
    health::{
        entities::{DatasetStatus, ReadinessReport},
        ports::HealthCheckService,
    },
    prediction::ports::GoalClassifier,
};

impl<F, M> HealthCheckService for Service<F, M>
where
    F: FoodCatalogRepository,
    M: GoalClassifier,
{
    async fn readiness(&self) -> ReadinessReport {
        let dataset = match self.food_catalog.catalog() {
            Ok(catalog) => DatasetStatus {
                available: true,
                records: Some(catalog.len()),
                loaded_at: Some(catalog.loaded_at),
            },
            Err(_) => DatasetStatus::default(),
        };

        ReadinessReport {
            model: self.classifier.status(),
            dataset,
        }
    }
}
