use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::entities::ModelStatus,
    prediction::{
        entities::{FeatureVector, GoalLabel},
        value_objects::PredictGoalInput,
    },
};

/// Pre-trained classifier, consumed only through its predictions
#[cfg_attr(test, mockall::automock)]
pub trait GoalClassifier: Send + Sync {
    /// Returns the model's raw label, e.g. `Muscle_Gain`.
    /// Fails with `CoreError::ModelUnavailable` when the model could not be loaded.
    fn predict_label(&self, features: &FeatureVector) -> Result<String, CoreError>;

    fn status(&self) -> ModelStatus;
}

/// Service trait for goal prediction
pub trait PredictionService: Send + Sync {
    fn predict_goal(
        &self,
        input: PredictGoalInput,
    ) -> impl Future<Output = Result<GoalLabel, CoreError>> + Send;
}
