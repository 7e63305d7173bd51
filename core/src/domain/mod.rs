pub mod common;
pub mod food;
pub mod health;
pub mod prediction;
