use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

pub const DESCRIPTION_COLUMN: &str = "Descrip";
pub const CATEGORY_COLUMN: &str = "category";
pub const IRON_COLUMN: &str = "Iron_mg";
pub const CALCIUM_COLUMN: &str = "Calcium_mg";

/// Goal a user can ask recommendations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum GoalCategory {
    MuscleGain,
    WeightGain,
    WeightLoss,
}

impl GoalCategory {
    pub const ALL: [GoalCategory; 3] = [
        GoalCategory::MuscleGain,
        GoalCategory::WeightGain,
        GoalCategory::WeightLoss,
    ];

    /// Value used in the dataset `category` column.
    pub fn dataset_label(&self) -> &'static str {
        match self {
            GoalCategory::MuscleGain => "Muscle_Gain",
            GoalCategory::WeightGain => "Weight_Gain",
            GoalCategory::WeightLoss => "Weight_Loss",
        }
    }

    pub fn path_segment(&self) -> &'static str {
        match self {
            GoalCategory::MuscleGain => "musclegain",
            GoalCategory::WeightGain => "weightgain",
            GoalCategory::WeightLoss => "weightloss",
        }
    }

    pub fn from_path_segment(segment: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|goal| goal.path_segment() == segment)
    }

    pub fn from_dataset_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|goal| goal.dataset_label() == label)
    }
}

/// Category of a dataset row. Rows outside the three goals are kept as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum FoodCategory {
    MuscleGain,
    WeightGain,
    WeightLoss,
    Other,
}

impl FoodCategory {
    pub fn from_dataset_label(label: &str) -> Self {
        GoalCategory::from_dataset_label(label)
            .map(FoodCategory::from)
            .unwrap_or(FoodCategory::Other)
    }
}

impl From<GoalCategory> for FoodCategory {
    fn from(goal: GoalCategory) -> Self {
        match goal {
            GoalCategory::MuscleGain => FoodCategory::MuscleGain,
            GoalCategory::WeightGain => FoodCategory::WeightGain,
            GoalCategory::WeightLoss => FoodCategory::WeightLoss,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodRecord {
    pub description: String,
    pub category: FoodCategory,
    /// `None` when the cell is empty or not a number.
    pub iron_mg: Option<f64>,
    pub calcium_mg: Option<f64>,
}

impl FoodRecord {
    pub fn new(
        description: impl Into<String>,
        category: FoodCategory,
        iron_mg: Option<f64>,
        calcium_mg: Option<f64>,
    ) -> Self {
        Self {
            description: description.into(),
            category,
            iron_mg,
            calcium_mg,
        }
    }
}

/// Raw dataset: ordered column names and every row as text cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl FoodTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The loaded dataset, typed records alongside the raw table they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodCatalog {
    pub records: Vec<FoodRecord>,
    pub table: FoodTable,
    pub loaded_at: DateTime<Utc>,
}

impl FoodCatalog {
    /// Builds typed records from the raw table.
    ///
    /// Fails when one of the description, category, iron or calcium columns is
    /// missing, or when a row is shorter than the header.
    pub fn from_table(table: FoodTable) -> Result<Self, CoreError> {
        let description = required_column(&table, DESCRIPTION_COLUMN)?;
        let category = required_column(&table, CATEGORY_COLUMN)?;
        let iron = required_column(&table, IRON_COLUMN)?;
        let calcium = required_column(&table, CALCIUM_COLUMN)?;

        let records = table
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let cell = |column: usize| {
                    row.get(column).map(String::as_str).ok_or_else(|| {
                        CoreError::InvalidInput(format!("row {} is missing cells", index + 1))
                    })
                };

                Ok(FoodRecord {
                    description: cell(description)?.to_string(),
                    category: FoodCategory::from_dataset_label(cell(category)?),
                    iron_mg: parse_nutrient(cell(iron)?),
                    calcium_mg: parse_nutrient(cell(calcium)?),
                })
            })
            .collect::<Result<Vec<_>, CoreError>>()?;

        Ok(Self {
            records,
            table,
            loaded_at: Utc::now(),
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn required_column(table: &FoodTable, name: &str) -> Result<usize, CoreError> {
    table
        .column_index(name)
        .ok_or_else(|| CoreError::InvalidInput(format!("missing column {name}")))
}

pub fn parse_nutrient(cell: &str) -> Option<f64> {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
