mod app;
mod catalog;
mod config;
mod serve;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use catalog::CatalogError;
pub use config::ConfigError;
pub use serve::ServeError;
pub use validation::ValidationError;
