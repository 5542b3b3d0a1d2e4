use std::path::PathBuf;
use thiserror::Error;

/// Author-time integrity problems in step catalogs.
///
/// These surface when a catalog is loaded and are never papered over with
/// defaults: the hook category decides what the deck tells the audience.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to parse catalog '{origin}': {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to read catalog directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read catalog '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Catalog id must not be empty.")]
    EmptyCatalogId,
    #[error("Catalog '{catalog}' has no steps.")]
    NoSteps { catalog: String },
    #[error("Catalog '{catalog}' has {count} steps; at most {max} are allowed.")]
    TooManySteps {
        catalog: String,
        count: usize,
        max: usize,
    },
    #[error("Catalog '{catalog}' step {index} has an empty id.")]
    EmptyStepId { catalog: String, index: usize },
    #[error("Catalog '{catalog}' repeats step id '{step}'.")]
    DuplicateStepId { catalog: String, step: String },
    #[error("Catalog '{catalog}' step '{step}' has ordinal {found}; expected {expected}.")]
    OrdinalOutOfSequence {
        catalog: String,
        step: String,
        expected: usize,
        found: usize,
    },
    #[error("Catalog '{catalog}' step '{step}' is a hook point but has no hook category.")]
    MissingHookCategory { catalog: String, step: String },
    #[error(
        "Catalog '{catalog}' step '{step}' has unknown hook category '{value}'. Use early-broadcast, late-targeted, or both."
    )]
    UnknownHookCategory {
        catalog: String,
        step: String,
        value: String,
    },
    #[error("Catalog '{catalog}' step '{step}' sets a hook category but is not a hook point.")]
    CategoryWithoutHook { catalog: String, step: String },
    #[error("Catalog '{catalog}' is defined more than once.")]
    DuplicateCatalog { catalog: String },
    #[error("Unknown catalog '{catalog}'.")]
    UnknownCatalog { catalog: String },
    #[error("Deck has no slides.")]
    EmptyDeck,
    #[error("Slide '{slide}' refers to unknown catalog '{catalog}'.")]
    SlideCatalogMissing { slide: String, catalog: String },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
