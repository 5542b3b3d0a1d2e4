use std::sync::Arc;

use prewarm_deck::catalog::{CatalogSet, HookCategory};
use prewarm_deck::deck::{Deck, SlideBody};
use prewarm_deck::navigation::SlideNavigator;
use prewarm_deck::playback::{PlaybackEngine, ProcessorState};

#[test]
fn every_flow_slide_walks_from_cold_to_hot() -> Result<(), String> {
    let catalogs = CatalogSet::load(None).map_err(|err| err.to_string())?;
    let deck = Deck::build(&catalogs).map_err(|err| err.to_string())?;

    let mut flows = 0usize;
    for slide in deck.slides() {
        let SlideBody::Flow(catalog) = &slide.body else {
            continue;
        };
        flows = flows.saturating_add(1);
        let mut engine = PlaybackEngine::new(Arc::clone(catalog));
        if engine.processor_state() != ProcessorState::Cold {
            return Err(format!("{} should start cold", slide.id));
        }
        let mut previous = ProcessorState::Cold;
        while engine.step_forward() {
            let state = engine.processor_state();
            if state < previous {
                return Err(format!("{} cooled down during playback", slide.id));
            }
            previous = state;
        }
        if previous != ProcessorState::Hot {
            return Err(format!("{} never reached hot", slide.id));
        }
    }
    if flows != 3 {
        return Err(format!("expected 3 flow slides, found {}", flows));
    }
    Ok(())
}

#[test]
fn navigation_covers_the_whole_deck() -> Result<(), String> {
    let catalogs = CatalogSet::load(None).map_err(|err| err.to_string())?;
    let deck = Deck::build(&catalogs).map_err(|err| err.to_string())?;
    let mut navigator = SlideNavigator::new(deck.count());

    let mut visited = 1usize;
    while navigator.next() {
        visited = visited.saturating_add(1);
    }
    if visited != deck.count().get() || !navigator.is_last() {
        return Err("navigation did not reach the last slide".to_owned());
    }
    if navigator.next() {
        return Err("next past the last slide should be a no-op".to_owned());
    }
    Ok(())
}

#[test]
fn builtin_catalogs_expose_both_hook_phases() -> Result<(), String> {
    let catalogs = CatalogSet::load(None).map_err(|err| err.to_string())?;
    let knative = catalogs.require("knative").map_err(|err| err.to_string())?;
    let categories: Vec<HookCategory> = knative
        .hook_steps()
        .filter_map(|step| step.hook_category())
        .collect();
    if !categories.contains(&HookCategory::EarlyBroadcast)
        || !categories.contains(&HookCategory::LateTargeted)
    {
        return Err(format!("unexpected knative hooks: {:?}", categories));
    }
    Ok(())
}
