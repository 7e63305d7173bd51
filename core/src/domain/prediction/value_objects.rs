/// Raw form values, parsed into a `FeatureVector` by the service.
#[derive(Debug, Clone)]
pub struct PredictGoalInput {
    pub raw_features: Vec<String>,
}
