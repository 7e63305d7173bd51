use std::future::Future;
use std::sync::Arc;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::{
        entities::{FoodCatalog, FoodTable},
        value_objects::{RecommendFoodsInput, SearchFoodsInput},
    },
};

/// Read access to the food dataset loaded at startup
#[cfg_attr(test, mockall::automock)]
pub trait FoodCatalogRepository: Send + Sync {
    /// Fails with `CoreError::DataUnavailable` when the dataset could not be loaded
    fn catalog(&self) -> Result<Arc<FoodCatalog>, CoreError>;
}

/// Service trait for food recommendation and catalog search
pub trait FoodService: Send + Sync {
    fn recommend_foods(
        &self,
        input: RecommendFoodsInput,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn search_foods(
        &self,
        input: SearchFoodsInput,
    ) -> impl Future<Output = Result<FoodTable, CoreError>> + Send;
}
