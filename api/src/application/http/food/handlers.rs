pub mod recommend_foods;
pub mod search_foods;
