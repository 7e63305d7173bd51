use tracing::info;

use crate::{
    domain::common::{DietwiseConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{classifier::TreeEnsembleClassifier, food_catalog::CsvFoodCatalogRepository},
};

pub type DietwiseService = Service<CsvFoodCatalogRepository, TreeEnsembleClassifier>;

/// Load the dataset and the model, then wire them into the service.
///
/// Load failures are logged and leave the matching adapter unavailable; only
/// an invalid configuration is an error here.
pub fn create_service(config: DietwiseConfig) -> Result<DietwiseService, CoreError> {
    if config.recommendation.sample_size == 0 {
        return Err(CoreError::InvalidInput(
            "sample size must be at least 1".to_string(),
        ));
    }

    let food_catalog = CsvFoodCatalogRepository::load(&config.dataset.path);
    let classifier = TreeEnsembleClassifier::load(&config.model.path);

    info!(
        dataset_available = food_catalog.is_available(),
        model_available = classifier.is_available(),
        sample_size = config.recommendation.sample_size,
        "Dietwise service created"
    );

    Ok(Service::new(
        food_catalog,
        classifier,
        config.recommendation.sample_size,
    ))
}
