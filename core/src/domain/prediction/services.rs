use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food::ports::FoodCatalogRepository,
    prediction::{
        entities::{FeatureVector, GoalLabel},
        ports::{GoalClassifier, PredictionService},
        value_objects::PredictGoalInput,
    },
};

impl<F, M> PredictionService for Service<F, M>
where
    F: FoodCatalogRepository,
    M: GoalClassifier,
{
    #[instrument(skip(self, input))]
    async fn predict_goal(&self, input: PredictGoalInput) -> Result<GoalLabel, CoreError> {
        let features = FeatureVector::parse(input.raw_features.as_slice())?;

        let raw_label = self.classifier.predict_label(&features)?;
        let label = GoalLabel::from_model_label(&raw_label);

        tracing::info!(raw_label = %raw_label, goal = %label, "Predicted goal");

        Ok(label)
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::{
        food::ports::MockFoodCatalogRepository, prediction::ports::MockGoalClassifier,
    };

    fn service(
        classifier: MockGoalClassifier,
    ) -> Service<MockFoodCatalogRepository, MockGoalClassifier> {
        Service::new(MockFoodCatalogRepository::new(), classifier, 5)
    }

    fn input(values: &[&str]) -> PredictGoalInput {
        PredictGoalInput {
            raw_features: values.iter().map(|value| value.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_predict_goal_maps_label() {
        let mut classifier = MockGoalClassifier::new();
        classifier
            .expect_predict_label()
            .with(eq(FeatureVector::new([80.0, 180.0, 3.0]).unwrap()))
            .returning(|_| Ok("Weight_Loss".to_string()));

        let label = service(classifier)
            .predict_goal(input(&["80", "180", "3"]))
            .await
            .unwrap();

        assert_eq!(label, GoalLabel::WeightLoss);
        assert_eq!(label.display_name(), "Weight Loss");
    }

    #[tokio::test]
    async fn test_predict_goal_unknown_label_is_general() {
        let mut classifier = MockGoalClassifier::new();
        classifier
            .expect_predict_label()
            .returning(|_| Ok("Maintenance".to_string()));

        let label = service(classifier)
            .predict_goal(input(&["1", "2", "3"]))
            .await
            .unwrap();

        assert_eq!(label, GoalLabel::General);
    }

    #[tokio::test]
    async fn test_predict_goal_rejects_invalid_input_before_model() {
        let mut classifier = MockGoalClassifier::new();
        classifier.expect_predict_label().never();

        let result = service(classifier)
            .predict_goal(input(&["1", "abc", "3"]))
            .await;

        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_predict_goal_model_unavailable() {
        let mut classifier = MockGoalClassifier::new();
        classifier
            .expect_predict_label()
            .returning(|_| Err(CoreError::ModelUnavailable));

        let result = service(classifier)
            .predict_goal(input(&["1", "2", "3"]))
            .await;

        assert_eq!(result, Err(CoreError::ModelUnavailable));
    }
}
