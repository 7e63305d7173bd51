use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

pub const FEATURE_COUNT: usize = 3;

/// Classifier input: exactly three finite numbers, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Result<Self, CoreError> {
        if let Some(position) = values.iter().position(|value| !value.is_finite()) {
            return Err(CoreError::InvalidInput(format!(
                "input_{} must be a finite number",
                position + 1
            )));
        }

        Ok(Self(values))
    }

    /// Parse user-supplied text values, `input_1` first.
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<Self, CoreError> {
        if raw.len() != FEATURE_COUNT {
            return Err(CoreError::InvalidInput(format!(
                "expected {FEATURE_COUNT} inputs, got {}",
                raw.len()
            )));
        }

        let mut values = [0.0; FEATURE_COUNT];
        for (index, (slot, text)) in values.iter_mut().zip(raw).enumerate() {
            let text = text.as_ref().trim();
            *slot = text.parse::<f64>().map_err(|_| {
                CoreError::InvalidInput(format!(
                    "input_{} must be a number, got {text:?}",
                    index + 1
                ))
            })?;
        }

        Self::new(values)
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }
}

/// Goal predicted for a user, as shown to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum GoalLabel {
    MuscleGain,
    WeightGain,
    WeightLoss,
    General,
}

impl GoalLabel {
    /// Map a raw model label. Anything unrecognized is `General`.
    pub fn from_model_label(label: &str) -> Self {
        match label {
            "Muscle_Gain" => GoalLabel::MuscleGain,
            "Weight_Gain" => GoalLabel::WeightGain,
            "Weight_Loss" => GoalLabel::WeightLoss,
            _ => GoalLabel::General,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GoalLabel::MuscleGain => "Muscle Gain",
            GoalLabel::WeightGain => "Weight Gain",
            GoalLabel::WeightLoss => "Weight Loss",
            GoalLabel::General => "General food",
        }
    }
}

impl fmt::Display for GoalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
