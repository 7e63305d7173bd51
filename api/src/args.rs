use std::path::PathBuf;

use clap::Parser;
use dietwise_core::domain::common::{
    DEFAULT_SAMPLE_SIZE, DatasetConfig, DietwiseConfig, ModelConfig, RecommendationConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "dietwise", version, about = "Diet recommendation API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub dataset: DatasetArgs,

    #[command(flatten)]
    pub model: ModelArgs,

    #[command(flatten)]
    pub recommendation: RecommendationArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        num_args = 0..
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatasetArgs {
    #[arg(
        long = "dataset-path",
        env = "DATASET_PATH",
        default_value = "data/done_food_data.csv"
    )]
    pub path: PathBuf,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ModelArgs {
    #[arg(long = "model-path", env = "MODEL_PATH", default_value = "data/food_model.json")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, clap::Args)]
pub struct RecommendationArgs {
    #[arg(long = "sample-size", env = "SAMPLE_SIZE", default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub sample_size: usize,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Used when `RUST_LOG` is not set
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for DietwiseConfig {
    fn from(args: Args) -> Self {
        Self {
            dataset: DatasetConfig {
                path: args.dataset.path,
            },
            model: ModelConfig {
                path: args.model.path,
            },
            recommendation: RecommendationConfig {
                sample_size: args.recommendation.sample_size,
            },
        }
    }
}
