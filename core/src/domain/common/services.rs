use std::sync::Arc;

use crate::domain::{food::ports::FoodCatalogRepository, prediction::ports::GoalClassifier};

/// Application service shared by every request handler.
///
/// The catalog and the classifier are loaded once at startup and never
/// mutated afterwards.
pub struct Service<F, M>
where
    F: FoodCatalogRepository,
    M: GoalClassifier,
{
    pub(crate) food_catalog: Arc<F>,
    pub(crate) classifier: Arc<M>,
    pub(crate) sample_size: usize,
}

impl<F, M> Service<F, M>
where
    F: FoodCatalogRepository,
    M: GoalClassifier,
{
    pub fn new(food_catalog: F, classifier: M, sample_size: usize) -> Self {
        Self {
            food_catalog: Arc::new(food_catalog),
            classifier: Arc::new(classifier),
            sample_size,
        }
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }
}

impl<F, M> Clone for Service<F, M>
where
    F: FoodCatalogRepository,
    M: GoalClassifier,
{
    fn clone(&self) -> Self {
        Self {
            food_catalog: Arc::clone(&self.food_catalog),
            classifier: Arc::clone(&self.classifier),
            sample_size: self.sample_size,
        }
    }
}
