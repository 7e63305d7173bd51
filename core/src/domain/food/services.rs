use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food::{
        entities::FoodTable,
        helpers::{recommend, sort_table},
        ports::{FoodCatalogRepository, FoodService},
        value_objects::{RecommendFoodsInput, SearchFoodsInput, SortSpec},
    },
    prediction::ports::GoalClassifier,
};

impl<F, M> FoodService for Service<F, M>
where
    F: FoodCatalogRepository,
    M: GoalClassifier,
{
    #[instrument(skip(self), fields(goal = ?input.goal))]
    async fn recommend_foods(
        &self,
        input: RecommendFoodsInput,
    ) -> Result<Vec<String>, CoreError> {
        let sample_size = input.sample_size.unwrap_or(self.sample_size);
        if sample_size == 0 {
            return Err(CoreError::InvalidInput(
                "sample size must be at least 1".to_string(),
            ));
        }

        let catalog = self.food_catalog.catalog()?;

        let foods = recommend(
            &catalog.records,
            input.goal,
            input.filter,
            sample_size,
            &mut rand::thread_rng(),
        );

        tracing::debug!(count = foods.len(), "Recommended foods");

        Ok(foods)
    }

    #[instrument(skip(self))]
    async fn search_foods(&self, input: SearchFoodsInput) -> Result<FoodTable, CoreError> {
        let sort = SortSpec::from(&input);
        let catalog = self.food_catalog.catalog()?;

        let table = sort_table(&catalog.table, &sort)?;

        tracing::debug!(rows = table.len(), column = %sort.column, "Sorted food catalog");

        Ok(table)
    }
}
