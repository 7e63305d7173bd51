use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct PredictGoalValidator {
    #[validate(length(min = 1, message = "input_1 is required"))]
    #[schema(example = "70")]
    pub input_1: String,

    #[validate(length(min = 1, message = "input_2 is required"))]
    #[schema(example = "175")]
    pub input_2: String,

    #[validate(length(min = 1, message = "input_3 is required"))]
    #[schema(example = "22.9")]
    pub input_3: String,
}

impl PredictGoalValidator {
    /// Raw values in model feature order; parsing happens in the domain.
    pub fn into_raw_features(self) -> Vec<String> {
        vec![self.input_1, self.input_2, self.input_3]
    }
}
