//! Configuration loading and application.
mod apply;
mod loader;
pub mod types;


pub use apply::{PresentSettings, resolve_present, resolve_serve};
pub use loader::{load_config, load_config_file};
