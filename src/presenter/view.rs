use crate::catalog::Catalog;
use crate::deck::SlideBody;
use crate::playback::PlaybackEngine;
use crate::ui::model::{
    DeckView, FlowView, GateView, HookView, StepStatus, StepView, TimingRow, TimingView, ViewBody,
};

use super::session::PresentationSession;

/// Snapshot of the session for the renderer.
#[must_use]
pub fn build_view(session: &PresentationSession, no_color: bool) -> DeckView {
    let gate = (!session.gate().is_unlocked()).then(|| GateView {
        input_len: session.gate().input_len(),
        error: session.gate().has_error(),
    });
    let navigator = session.navigator();
    let slide_count = navigator.total().get();

    let Some(slide) = session.active_slide() else {
        return DeckView {
            no_color,
            slide_count,
            gate,
            ..DeckView::default()
        };
    };

    let body = match (&slide.body, session.active_engine()) {
        (SlideBody::Flow(_), Some(engine)) => ViewBody::Flow(flow_view(engine)),
        (SlideBody::Timing(catalogs), _) => {
            ViewBody::Timing(catalogs.iter().map(|catalog| timing_view(catalog)).collect())
        }
        (SlideBody::Text | SlideBody::Flow(_), _) => ViewBody::Text,
    };

    DeckView {
        no_color,
        slide_index: navigator.current(),
        slide_count,
        label: slide.label.clone(),
        title: slide.title.clone(),
        subtitle: slide.subtitle.clone(),
        lines: slide.lines.clone(),
        notes: session.show_notes().then(|| slide.notes.clone()),
        body,
        gate,
    }
}

fn flow_view(engine: &PlaybackEngine) -> FlowView {
    let catalog = engine.catalog();
    let position = engine.position();
    let steps = catalog
        .steps()
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let status = match position {
                Some(current) if index == current => StepStatus::Current,
                Some(current) if index < current => StepStatus::Done,
                Some(_) | None => StepStatus::Pending,
            };
            StepView {
                ordinal: step.ordinal,
                label: step.label.clone(),
                component: step.component.clone(),
                timing: step.timing.clone(),
                status,
                hook: step.hook.as_ref().map(|hook| HookView {
                    category: hook.category,
                    label: hook.label.clone(),
                    info_available: hook.info_available.clone(),
                    fired: engine.has_visited(&step.id),
                }),
            }
        })
        .collect();

    FlowView {
        title: catalog.title().to_owned(),
        steps,
        position,
        description: engine.current_step().map(|step| step.description.clone()),
        playing: engine.is_playing(),
        speed: engine.speed(),
        state: engine.processor_state(),
    }
}

fn timing_view(catalog: &Catalog) -> TimingView {
    TimingView {
        title: catalog.title().to_owned(),
        rows: catalog
            .steps()
            .iter()
            .filter_map(|step| {
                step.timing_ms.map(|timing_ms| TimingRow {
                    label: step.label.clone(),
                    timing_ms,
                    is_hook: step.is_hook_point(),
                })
            })
            .collect(),
    }
}
