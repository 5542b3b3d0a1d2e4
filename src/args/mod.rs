//! CLI argument types and parsing helpers.
mod cli;
pub(crate) mod parsers;


pub use cli::{CatalogArgs, CheckArgs, Command, DeckArgs, PresentArgs, ServeArgs};
pub use parsers::{parse_duration_arg, parse_speed};
