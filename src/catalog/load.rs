use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::CatalogError;

use super::types::{Catalog, Hook, HookCategory, Step};

/// Upper bound on steps per catalog; diagrams are laid out for short pipelines.
pub const MAX_STEPS: usize = 64;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCatalog {
    id: String,
    title: String,
    #[serde(default)]
    subtitle: String,
    #[serde(default)]
    steps: Vec<RawStep>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawStep {
    id: String,
    ordinal: usize,
    label: String,
    #[serde(default)]
    component: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    is_hook_point: bool,
    hook_category: Option<String>,
    hook_label: Option<String>,
    #[serde(default)]
    info_available: Vec<String>,
    timing: Option<String>,
    timing_ms: Option<u32>,
}

/// Parses and validates one catalog document.
///
/// `origin` names the source in error messages (a file path or a built-in
/// name).
///
/// # Errors
///
/// Returns an error when the TOML is malformed or the catalog violates an
/// integrity rule: empty ids, duplicate ids, out-of-sequence ordinals, a hook
/// point without a known category, or a category on a non-hook step.
pub fn parse_catalog(origin: &str, text: &str) -> Result<Catalog, CatalogError> {
    let raw: RawCatalog = toml::from_str(text).map_err(|err| CatalogError::Parse {
        origin: origin.to_owned(),
        source: err,
    })?;
    validate(raw)
}

/// Loads every `.toml` file in `dir`, in file-name order.
///
/// # Errors
///
/// Returns an error when the directory or a file cannot be read, or when any
/// catalog fails validation.
pub fn load_catalog_dir(dir: &Path) -> Result<Vec<Catalog>, CatalogError> {
    let entries = std::fs::read_dir(dir).map_err(|err| CatalogError::ReadDir {
        path: dir.to_path_buf(),
        source: err,
    })?;
    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| CatalogError::ReadDir {
            path: dir.to_path_buf(),
            source: err,
        })?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("toml") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut catalogs = Vec::with_capacity(paths.len());
    for path in paths {
        let text = std::fs::read_to_string(&path).map_err(|err| CatalogError::ReadFile {
            path: path.clone(),
            source: err,
        })?;
        let catalog = parse_catalog(&path.display().to_string(), &text)?;
        tracing::debug!(
            "Loaded catalog '{}' ({} steps) from {}",
            catalog.id(),
            catalog.len(),
            path.display()
        );
        catalogs.push(catalog);
    }
    Ok(catalogs)
}

fn validate(raw: RawCatalog) -> Result<Catalog, CatalogError> {
    let catalog_id = raw.id.trim().to_owned();
    if catalog_id.is_empty() {
        return Err(CatalogError::EmptyCatalogId);
    }
    if raw.steps.is_empty() {
        return Err(CatalogError::NoSteps {
            catalog: catalog_id,
        });
    }
    if raw.steps.len() > MAX_STEPS {
        return Err(CatalogError::TooManySteps {
            catalog: catalog_id,
            count: raw.steps.len(),
            max: MAX_STEPS,
        });
    }

    let mut seen_ids: HashSet<String> = HashSet::with_capacity(raw.steps.len());
    let mut steps = Vec::with_capacity(raw.steps.len());
    for (index, raw_step) in raw.steps.into_iter().enumerate() {
        let step = validate_step(&catalog_id, index, raw_step)?;
        if !seen_ids.insert(step.id.clone()) {
            return Err(CatalogError::DuplicateStepId {
                catalog: catalog_id,
                step: step.id,
            });
        }
        steps.push(step);
    }

    Ok(Catalog::from_validated(
        catalog_id,
        raw.title,
        raw.subtitle,
        steps,
    ))
}

fn validate_step(catalog: &str, index: usize, raw: RawStep) -> Result<Step, CatalogError> {
    let id = raw.id.trim().to_owned();
    if id.is_empty() {
        return Err(CatalogError::EmptyStepId {
            catalog: catalog.to_owned(),
            index,
        });
    }
    if raw.ordinal != index {
        return Err(CatalogError::OrdinalOutOfSequence {
            catalog: catalog.to_owned(),
            step: id,
            expected: index,
            found: raw.ordinal,
        });
    }

    let hook = match (raw.is_hook_point, raw.hook_category) {
        (true, Some(value)) => {
            let Some(category) = HookCategory::parse(&value) else {
                return Err(CatalogError::UnknownHookCategory {
                    catalog: catalog.to_owned(),
                    step: id,
                    value,
                });
            };
            Some(Hook {
                category,
                label: raw.hook_label,
                info_available: raw.info_available,
            })
        }
        (true, None) => {
            return Err(CatalogError::MissingHookCategory {
                catalog: catalog.to_owned(),
                step: id,
            });
        }
        (false, Some(_)) => {
            return Err(CatalogError::CategoryWithoutHook {
                catalog: catalog.to_owned(),
                step: id,
            });
        }
        (false, None) => None,
    };

    Ok(Step {
        id,
        ordinal: raw.ordinal,
        label: raw.label,
        component: raw.component,
        description: raw.description,
        hook,
        timing: raw.timing,
        timing_ms: raw.timing_ms,
    })
}
