use std::io::{self, Write};

use crate::catalog::{Catalog, CatalogSet, HookCategory, Step};
use crate::deck::Deck;
use crate::playback::ProcessorState;

/// One summary line per catalog, then the deck size.
pub(super) fn print_check<W: Write>(
    out: &mut W,
    catalogs: &CatalogSet,
    deck: &Deck,
) -> io::Result<()> {
    for catalog in catalogs.iter() {
        let hooks: Vec<HookCategory> = catalog
            .hook_steps()
            .filter_map(Step::hook_category)
            .collect();
        let reached = ProcessorState::classify(hooks.iter().copied());
        let categories: Vec<&str> = hooks.iter().map(|category| category.as_str()).collect();
        writeln!(
            out,
            "ok  {:<12} {:>2} steps, {} hooks [{}], ends {}",
            catalog.id(),
            catalog.len(),
            hooks.len(),
            categories.join(", "),
            reached
        )?;
    }
    writeln!(
        out,
        "ok  deck         {} slides, {} catalogs",
        deck.count(),
        catalogs.len()
    )
}

pub(super) fn print_catalog<W: Write>(out: &mut W, catalog: &Catalog) -> io::Result<()> {
    writeln!(out, "{} ({})", catalog.title(), catalog.id())?;
    if !catalog.subtitle().is_empty() {
        writeln!(out, "{}", catalog.subtitle())?;
    }
    for step in catalog.steps() {
        let timing = step.timing.as_deref().unwrap_or("-");
        writeln!(
            out,
            "{:>3}  {:<28} {:<24} {:>10}",
            step.ordinal, step.label, step.component, timing
        )?;
        if let Some(hook) = &step.hook {
            writeln!(
                out,
                "     hook: {} ({}){}",
                hook.category,
                hook.category.phase_label(),
                hook.label
                    .as_ref()
                    .map(|label| format!(" {}", label))
                    .unwrap_or_default()
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, AppResult};

    fn render<F>(write: F) -> AppResult<String>
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut out = Vec::new();
        write(&mut out)?;
        String::from_utf8(out)
            .map_err(|err| AppError::validation(format!("Output is not UTF-8: {}", err)))
    }

    #[test]
    fn check_reports_every_builtin_catalog() -> AppResult<()> {
        let catalogs = CatalogSet::load(None)?;
        let deck = Deck::build(&catalogs)?;
        let text = render(|out| print_check(out, &catalogs, &deck))?;
        let slides = format!("{} slides", deck.count());
        for needle in ["kubernetes", "knative", "vrm", "ends HOT", slides.as_str()] {
            if !text.contains(needle) {
                return Err(AppError::validation(format!(
                    "check output is missing '{}': {}",
                    needle, text
                )));
            }
        }
        Ok(())
    }

    #[test]
    fn catalog_listing_shows_hooks() -> AppResult<()> {
        let catalogs = CatalogSet::load(None)?;
        let catalog = catalogs.require("kubernetes")?;
        let text = render(|out| print_catalog(out, &catalog))?;
        for needle in ["hook: early-broadcast", "hook: late-targeted"] {
            if !text.contains(needle) {
                return Err(AppError::validation(format!(
                    "catalog listing is missing '{}': {}",
                    needle, text
                )));
            }
        }
        Ok(())
    }
}
