use crate::error::CatalogError;

use super::load::parse_catalog;
use super::types::Catalog;

const BUILTIN_SOURCES: [(&str, &str); 3] = [
    ("builtin:kubernetes", include_str!("data/kubernetes.toml")),
    ("builtin:knative", include_str!("data/knative.toml")),
    ("builtin:vrm", include_str!("data/vrm.toml")),
];

/// The three catalogs the deck ships with: Kubernetes, Knative, and VRM.
///
/// # Errors
///
/// Returns an error if an embedded catalog fails validation.
pub fn builtin_catalogs() -> Result<Vec<Catalog>, CatalogError> {
    BUILTIN_SOURCES
        .iter()
        .map(|(origin, text)| parse_catalog(origin, text))
        .collect()
}
