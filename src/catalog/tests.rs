use std::path::Path;

use tempfile::tempdir;

use super::{CatalogSet, HookCategory, MAX_STEPS, builtin_catalogs, load_catalog_dir, parse_catalog};
use crate::error::{AppError, AppResult, CatalogError};

const THREE_STEPS: &str = r#"
id = "demo"
title = "Demo"

[[steps]]
id = "plain"
ordinal = 0
label = "Plain"

[[steps]]
id = "early"
ordinal = 1
label = "Early"
is_hook_point = true
hook_category = "early-broadcast"

[[steps]]
id = "late"
ordinal = 2
label = "Late"
is_hook_point = true
hook_category = "phase2"
"#;

fn expect_error(text: &str) -> AppResult<CatalogError> {
    match parse_catalog("test", text) {
        Ok(_) => Err(AppError::catalog("Expected catalog to be rejected")),
        Err(err) => Ok(err),
    }
}

#[test]
fn parses_valid_catalog_with_aliases() -> AppResult<()> {
    let catalog = parse_catalog("test", THREE_STEPS)?;
    if catalog.id() != "demo" || catalog.len() != 3 {
        return Err(AppError::catalog("Unexpected catalog shape"));
    }
    let categories: Vec<Option<HookCategory>> = catalog
        .steps()
        .iter()
        .map(|step| step.hook_category())
        .collect();
    if categories
        != [
            None,
            Some(HookCategory::EarlyBroadcast),
            Some(HookCategory::LateTargeted),
        ]
    {
        return Err(AppError::catalog(format!(
            "Unexpected categories: {:?}",
            categories
        )));
    }
    if catalog.last_index() != 2 || catalog.hook_steps().count() != 2 {
        return Err(AppError::catalog("Unexpected hook bookkeeping"));
    }
    Ok(())
}

#[test]
fn hook_point_without_category_is_rejected() -> AppResult<()> {
    let text = r#"
id = "demo"
title = "Demo"

[[steps]]
id = "hook"
ordinal = 0
label = "Hook"
is_hook_point = true
"#;
    match expect_error(text)? {
        CatalogError::MissingHookCategory { step, .. } if step == "hook" => Ok(()),
        other => Err(AppError::catalog(format!("Unexpected error: {}", other))),
    }
}

#[test]
fn unknown_category_is_rejected_with_value() -> AppResult<()> {
    let text = r#"
id = "demo"
title = "Demo"

[[steps]]
id = "hook"
ordinal = 0
label = "Hook"
is_hook_point = true
hook_category = "sideways"
"#;
    match expect_error(text)? {
        CatalogError::UnknownHookCategory { value, .. } if value == "sideways" => Ok(()),
        other => Err(AppError::catalog(format!("Unexpected error: {}", other))),
    }
}

#[test]
fn category_on_plain_step_is_rejected() -> AppResult<()> {
    let text = r#"
id = "demo"
title = "Demo"

[[steps]]
id = "plain"
ordinal = 0
label = "Plain"
hook_category = "both"
"#;
    match expect_error(text)? {
        CatalogError::CategoryWithoutHook { .. } => Ok(()),
        other => Err(AppError::catalog(format!("Unexpected error: {}", other))),
    }
}

#[test]
fn ordinals_must_be_contiguous_from_zero() -> AppResult<()> {
    let text = r#"
id = "demo"
title = "Demo"

[[steps]]
id = "a"
ordinal = 0
label = "A"

[[steps]]
id = "b"
ordinal = 2
label = "B"
"#;
    match expect_error(text)? {
        CatalogError::OrdinalOutOfSequence {
            expected: 1,
            found: 2,
            ..
        } => Ok(()),
        other => Err(AppError::catalog(format!("Unexpected error: {}", other))),
    }
}

#[test]
fn duplicate_step_ids_and_empty_catalogs_are_rejected() -> AppResult<()> {
    let duplicate = r#"
id = "demo"
title = "Demo"

[[steps]]
id = "a"
ordinal = 0
label = "A"

[[steps]]
id = "a"
ordinal = 1
label = "Again"
"#;
    if !matches!(expect_error(duplicate)?, CatalogError::DuplicateStepId { .. }) {
        return Err(AppError::catalog("Expected duplicate id error"));
    }

    let empty = "id = \"demo\"\ntitle = \"Demo\"\n";
    if !matches!(expect_error(empty)?, CatalogError::NoSteps { .. }) {
        return Err(AppError::catalog("Expected empty catalog error"));
    }

    let blank_id = "id = \" \"\ntitle = \"Demo\"\n";
    if !matches!(expect_error(blank_id)?, CatalogError::EmptyCatalogId) {
        return Err(AppError::catalog("Expected empty catalog id error"));
    }
    Ok(())
}

#[test]
fn oversized_catalog_is_rejected() -> AppResult<()> {
    let mut text = String::from("id = \"big\"\ntitle = \"Big\"\n");
    for index in 0..=MAX_STEPS {
        text.push_str(&format!(
            "\n[[steps]]\nid = \"s{index}\"\nordinal = {index}\nlabel = \"S\"\n"
        ));
    }
    match expect_error(&text)? {
        CatalogError::TooManySteps { count, .. } if count == MAX_STEPS + 1 => Ok(()),
        other => Err(AppError::catalog(format!("Unexpected error: {}", other))),
    }
}

#[test]
fn builtin_catalogs_validate() -> AppResult<()> {
    let catalogs = builtin_catalogs()?;
    let ids: Vec<&str> = catalogs.iter().map(|catalog| catalog.id()).collect();
    if ids != ["kubernetes", "knative", "vrm"] {
        return Err(AppError::catalog(format!("Unexpected ids: {:?}", ids)));
    }
    for catalog in &catalogs {
        let has_late = catalog.hook_steps().any(|step| {
            matches!(
                step.hook_category(),
                Some(HookCategory::LateTargeted | HookCategory::Both)
            )
        });
        if !has_late {
            return Err(AppError::catalog(format!(
                "Catalog '{}' never reaches a late hook",
                catalog.id()
            )));
        }
    }
    Ok(())
}

#[test]
fn catalog_dir_loads_toml_files_and_rejects_duplicates() -> AppResult<()> {
    let dir = tempdir()?;
    std::fs::write(dir.path().join("demo.toml"), THREE_STEPS)?;
    std::fs::write(dir.path().join("notes.txt"), "ignored")?;

    let loaded = load_catalog_dir(dir.path())?;
    if loaded.len() != 1 {
        return Err(AppError::catalog("Expected one catalog from directory"));
    }

    let set = CatalogSet::load(Some(dir.path()))?;
    if set.len() != 4 || set.get("demo").is_none() {
        return Err(AppError::catalog("Expected builtins plus demo"));
    }

    std::fs::write(
        dir.path().join("kube.toml"),
        "id = \"kubernetes\"\ntitle = \"Again\"\n[[steps]]\nid = \"a\"\nordinal = 0\nlabel = \"A\"\n",
    )?;
    match CatalogSet::load(Some(dir.path())) {
        Err(CatalogError::DuplicateCatalog { catalog }) if catalog == "kubernetes" => Ok(()),
        Err(other) => Err(AppError::catalog(format!("Unexpected error: {}", other))),
        Ok(_) => Err(AppError::catalog("Expected duplicate catalog error")),
    }
}

#[test]
fn missing_catalog_dir_is_an_error() -> AppResult<()> {
    match load_catalog_dir(Path::new("/nonexistent/prewarm-deck/catalogs")) {
        Err(CatalogError::ReadDir { .. }) => Ok(()),
        Err(other) => Err(AppError::catalog(format!("Unexpected error: {}", other))),
        Ok(_) => Err(AppError::catalog("Expected read error")),
    }
}
