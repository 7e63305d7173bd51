use std::{fs::File, io::Read, path::Path, sync::Arc};

use tracing::{error, info};

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::{
        entities::{FoodCatalog, FoodTable},
        ports::FoodCatalogRepository,
    },
};

#[derive(Debug, Clone)]
enum CatalogState {
    Loaded(Arc<FoodCatalog>),
    Unavailable { reason: String },
}

/// Food catalog read once from a CSV file.
///
/// A file that cannot be read or parsed leaves the repository unavailable
/// instead of failing startup; every lookup then reports `DataUnavailable`.
#[derive(Debug, Clone)]
pub struct CsvFoodCatalogRepository {
    state: CatalogState,
}

impl CsvFoodCatalogRepository {
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        let result = File::open(path)
            .map_err(|e| format!("failed to open {}: {e}", path.display()))
            .and_then(Self::parse);

        match result {
            Ok(catalog) => {
                info!(
                    path = %path.display(),
                    records = catalog.len(),
                    "Food dataset loaded"
                );
                Self::from_catalog(catalog)
            }
            Err(reason) => {
                error!(path = %path.display(), %reason, "Failed to load food dataset");
                Self::unavailable(reason)
            }
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CoreError> {
        Self::parse(reader)
            .map(Self::from_catalog)
            .map_err(CoreError::InvalidInput)
    }

    pub fn from_catalog(catalog: FoodCatalog) -> Self {
        Self {
            state: CatalogState::Loaded(Arc::new(catalog)),
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            state: CatalogState::Unavailable {
                reason: reason.into(),
            },
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.state, CatalogState::Loaded(_))
    }

    fn parse<R: Read>(reader: R) -> Result<FoodCatalog, String> {
        let table = read_table(reader).map_err(|e| format!("invalid CSV: {e}"))?;
        FoodCatalog::from_table(table).map_err(|e| e.to_string())
    }
}

impl FoodCatalogRepository for CsvFoodCatalogRepository {
    fn catalog(&self) -> Result<Arc<FoodCatalog>, CoreError> {
        match &self.state {
            CatalogState::Loaded(catalog) => Ok(Arc::clone(catalog)),
            CatalogState::Unavailable { reason } => {
                tracing::debug!(%reason, "Food dataset requested while unavailable");
                Err(CoreError::DataUnavailable)
            }
        }
    }
}

/// Read a headed CSV document into a table. Rows must match the header width.
pub fn read_table<R: Read>(reader: R) -> Result<FoodTable, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let columns = reader
        .headers()?
        .iter()
        .map(str::to_string)
        .collect::<Vec<_>>();

    let rows = reader
        .records()
        .map(|record| record.map(|record| record.iter().map(str::to_string).collect()))
        .collect::<Result<Vec<Vec<String>>, csv::Error>>()?;

    Ok(FoodTable::new(columns, rows))
}
