use crate::domain::food::entities::FoodRecord;

pub const IRON_RICH_THRESHOLD_MG: f64 = 6.0;
pub const CALCIUM_RICH_THRESHOLD_MG: f64 = 150.0;

/// Description fragments that mark a food as non-vegetarian. Matching is a
/// case-insensitive substring test, shared by every goal category.
pub const NON_VEGETARIAN_TERMS: &[&str] = &[
    "egg",
    "fish",
    "meat",
    "beef",
    "chicken",
    "deer",
    "lamb",
    "crab",
    "pork",
    "frog legs",
    "turkey",
    "flesh",
    "ostrich",
    "emu",
    "cuttelfish",
    "crayfish",
    "shrimp",
    "octopus",
];

pub fn is_iron_rich(record: &FoodRecord) -> bool {
    record
        .iron_mg
        .is_some_and(|iron| iron > IRON_RICH_THRESHOLD_MG)
}

pub fn is_calcium_rich(record: &FoodRecord) -> bool {
    record
        .calcium_mg
        .is_some_and(|calcium| calcium > CALCIUM_RICH_THRESHOLD_MG)
}

pub fn is_vegetarian(description: &str) -> bool {
    let description = description.to_lowercase();
    !NON_VEGETARIAN_TERMS
        .iter()
        .any(|term| description.contains(term))
}
