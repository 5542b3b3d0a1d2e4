use std::io::{self, Write};

use crate::catalog::Catalog;
use crate::deck::{Deck, Slide, SlideBody};
use crate::playback::PlaybackEngine;
use std::sync::Arc;

/// Writes the deck as plain text. Flow slides list every step together with
/// the processor temperature reached once playback has passed it.
///
/// # Errors
///
/// Returns an error when writing to `out` fails.
pub fn write_outline<W: Write>(out: &mut W, deck: &Deck) -> io::Result<()> {
    let total = deck.count().get();
    for (index, slide) in deck.slides().iter().enumerate() {
        write_slide(out, slide, index.saturating_add(1), total)?;
    }
    Ok(())
}

fn write_slide<W: Write>(out: &mut W, slide: &Slide, number: usize, total: usize) -> io::Result<()> {
    writeln!(out, "[{}/{}] {}: {}", number, total, slide.label, slide.title)?;
    if !slide.subtitle.is_empty() {
        writeln!(out, "    {}", slide.subtitle)?;
    }
    for line in &slide.lines {
        writeln!(out, "    {}", line)?;
    }
    match &slide.body {
        SlideBody::Text => {}
        SlideBody::Flow(catalog) => write_flow(out, catalog)?,
        SlideBody::Timing(catalogs) => {
            for catalog in catalogs {
                write_timing(out, catalog)?;
            }
        }
    }
    writeln!(out)
}

fn write_flow<W: Write>(out: &mut W, catalog: &Arc<Catalog>) -> io::Result<()> {
    let mut engine = PlaybackEngine::new(Arc::clone(catalog));
    writeln!(out, "    {} (start: {})", catalog.title(), engine.processor_state())?;
    while engine.step_forward() {
        let Some(step) = engine.current_step() else {
            break;
        };
        let hook = step
            .hook_category()
            .map(|category| format!(" [{}]", category))
            .unwrap_or_default();
        writeln!(
            out,
            "    {:>2}. {} ({}){} -> {}",
            step.ordinal,
            step.label,
            step.component,
            hook,
            engine.processor_state()
        )?;
    }
    Ok(())
}

fn write_timing<W: Write>(out: &mut W, catalog: &Catalog) -> io::Result<()> {
    writeln!(out, "    {} timing:", catalog.title())?;
    for step in catalog.steps() {
        if let Some(timing_ms) = step.timing_ms {
            writeln!(out, "      {:<24} {:>6} ms", step.label, timing_ms)?;
        }
    }
    Ok(())
}
