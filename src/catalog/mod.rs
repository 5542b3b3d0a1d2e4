//! Step catalogs: the ordered pipelines each flow diagram walks through.
//!
//! Catalogs are authored as TOML, validated once on load, and shared
//! read-only behind `Arc` afterwards.
mod builtin;
mod load;
mod set;
mod types;

#[cfg(test)]
mod tests;

pub use builtin::builtin_catalogs;
pub use load::{MAX_STEPS, load_catalog_dir, parse_catalog};
pub use set::CatalogSet;
pub use types::{Catalog, Hook, HookCategory, Step};
