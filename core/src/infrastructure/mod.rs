pub mod classifier;
pub mod food_catalog;
