use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ModelStatus {
    pub available: bool,
    /// Hex SHA-256 of the model artifact
    pub fingerprint: Option<String>,
    pub labels: Vec<String>,
    pub trees: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DatasetStatus {
    pub available: bool,
    pub records: Option<usize>,
    pub loaded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReadinessReport {
    pub model: ModelStatus,
    pub dataset: DatasetStatus,
}

impl ReadinessReport {
    pub fn is_ready(&self) -> bool {
        self.model.available && self.dataset.available
    }
}
