use std::path::PathBuf;

pub mod entities;
pub mod services;

/// Number of foods returned by a recommendation when the caller does not ask
/// for a specific amount.
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

#[derive(Clone, Debug)]
pub struct DietwiseConfig {
    pub dataset: DatasetConfig,
    pub model: ModelConfig,
    pub recommendation: RecommendationConfig,
}

#[derive(Clone, Debug)]
pub struct DatasetConfig {
    pub path: PathBuf,
}

#[derive(Clone, Debug)]
pub struct ModelConfig {
    pub path: PathBuf,
}

#[derive(Clone, Debug)]
pub struct RecommendationConfig {
    pub sample_size: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}
