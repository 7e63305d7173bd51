use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::food::{
    entities::{DESCRIPTION_COLUMN, FoodRecord, GoalCategory},
    policies::{is_calcium_rich, is_iron_rich, is_vegetarian},
};

/// User-selected constraints applied before sampling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DietaryFilter {
    pub vegetarian_only: bool,
    pub iron_only: bool,
    pub calcium_only: bool,
}

impl DietaryFilter {
    pub fn accepts(&self, record: &FoodRecord) -> bool {
        (!self.iron_only || is_iron_rich(record))
            && (!self.calcium_only || is_calcium_rich(record))
            && (!self.vegetarian_only || is_vegetarian(&record.description))
    }
}

#[derive(Debug, Clone)]
pub struct RecommendFoodsInput {
    pub goal: GoalCategory,
    pub filter: DietaryFilter,
    /// Falls back to the configured sample size.
    pub sample_size: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct SearchFoodsInput {
    pub sort_by: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub column: String,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Parse a column name, `-` prefix meaning descending. Blank input sorts
    /// by description.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() {
            return Self::default();
        }

        match value.strip_prefix('-') {
            Some(column) => Self {
                column: column.to_string(),
                direction: SortDirection::Desc,
            },
            None => Self {
                column: value.to_string(),
                direction: SortDirection::Asc,
            },
        }
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            column: DESCRIPTION_COLUMN.to_string(),
            direction: SortDirection::Asc,
        }
    }
}

impl From<&SearchFoodsInput> for SortSpec {
    fn from(input: &SearchFoodsInput) -> Self {
        input
            .sort_by
            .as_deref()
            .map(SortSpec::parse)
            .unwrap_or_default()
    }
}
