pub mod config;
pub mod models;
pub mod relay;
pub mod routes;
pub mod scrape;
pub mod validate;

pub use routes::{app, AppState};
