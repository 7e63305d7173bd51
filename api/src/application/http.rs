pub mod food;
pub mod form_extractor;
pub mod health;
pub mod home;
pub mod prediction;
pub mod server;
