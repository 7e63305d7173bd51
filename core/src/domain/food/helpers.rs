use std::cmp::Ordering;

use rand::{Rng, seq::SliceRandom};

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::{
        entities::{FoodCategory, FoodRecord, FoodTable, GoalCategory, parse_nutrient},
        value_objects::{DietaryFilter, SortDirection, SortSpec},
    },
};

/// Pick up to `sample_size` descriptions of foods matching the goal and the
/// dietary filter, uniformly at random and without replacement.
///
/// An empty match set yields an empty list.
pub fn recommend<R>(
    records: &[FoodRecord],
    goal: GoalCategory,
    filter: DietaryFilter,
    sample_size: usize,
    rng: &mut R,
) -> Vec<String>
where
    R: Rng + ?Sized,
{
    let category = FoodCategory::from(goal);
    let candidates: Vec<&FoodRecord> = records
        .iter()
        .filter(|record| record.category == category)
        .filter(|record| filter.accepts(record))
        .collect();

    candidates
        .choose_multiple(rng, sample_size.min(candidates.len()))
        .map(|record| record.description.clone())
        .collect()
}

/// Return a copy of the table with rows ordered by `sort.column`.
///
/// Numeric cells order by value and come before text cells, which order
/// lexicographically. Rows with equal keys keep their dataset order.
pub fn sort_table(table: &FoodTable, sort: &SortSpec) -> Result<FoodTable, CoreError> {
    let column = table.column_index(&sort.column).ok_or_else(|| {
        CoreError::InvalidInput(format!("unknown sort column {}", sort.column))
    })?;

    let mut rows: Vec<&Vec<String>> = table.rows.iter().collect();
    rows.sort_by(|a, b| {
        let ordering = compare_cells(cell(a, column), cell(b, column));
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    Ok(FoodTable {
        columns: table.columns.clone(),
        rows: rows.into_iter().cloned().collect(),
    })
}

fn cell(row: &[String], column: usize) -> &str {
    row.get(column).map(String::as_str).unwrap_or_default()
}

enum SortKey<'a> {
    Number(f64),
    Text(&'a str),
}

impl<'a> SortKey<'a> {
    fn of(value: &'a str) -> Self {
        match parse_nutrient(value) {
            Some(number) => SortKey::Number(number),
            None => SortKey::Text(value),
        }
    }
}

fn compare_cells(a: &str, b: &str) -> Ordering {
    match (SortKey::of(a), SortKey::of(b)) {
        (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(&b),
        (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
        (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
        (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
    }
}
