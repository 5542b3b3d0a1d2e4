use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use crate::deck::{Deck, Slide};
use crate::gate::GateState;
use crate::navigation::SlideNavigator;
use crate::playback::{PlaybackEngine, Speed, TickOutcome};

use super::keys::{DeckCommand, KeyContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackSettings {
    pub base_interval: Duration,
    pub speed: Speed,
}

/// One running presentation: the deck, the current slide, one playback
/// engine per flow slide, and the passcode gate.
#[derive(Debug)]
pub struct PresentationSession {
    deck: Deck,
    navigator: SlideNavigator,
    engines: Vec<Option<PlaybackEngine>>,
    gate: GateState,
    show_notes: bool,
    quit: bool,
}

impl PresentationSession {
    #[must_use]
    pub fn new(deck: Deck, gate: GateState, settings: PlaybackSettings, start_slide: usize) -> Self {
        let engines = deck
            .slides()
            .iter()
            .map(|slide| {
                slide.flow_catalog().map(|catalog| {
                    PlaybackEngine::with_settings(
                        Arc::clone(catalog),
                        settings.base_interval,
                        settings.speed,
                    )
                })
            })
            .collect();
        let mut navigator = SlideNavigator::new(deck.count());
        navigator.go_to(start_slide);
        Self {
            deck,
            navigator,
            engines,
            gate,
            show_notes: false,
            quit: false,
        }
    }

    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub const fn navigator(&self) -> &SlideNavigator {
        &self.navigator
    }

    #[must_use]
    pub const fn gate(&self) -> &GateState {
        &self.gate
    }

    #[must_use]
    pub const fn show_notes(&self) -> bool {
        self.show_notes
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.quit
    }

    #[must_use]
    pub fn active_slide(&self) -> Option<&Slide> {
        self.deck.slide(self.navigator.current())
    }

    #[must_use]
    pub fn active_engine(&self) -> Option<&PlaybackEngine> {
        self.engines
            .get(self.navigator.current())
            .and_then(Option::as_ref)
    }

    fn active_engine_mut(&mut self) -> Option<&mut PlaybackEngine> {
        self.engines
            .get_mut(self.navigator.current())
            .and_then(Option::as_mut)
    }

    #[must_use]
    pub fn key_context(&self) -> KeyContext {
        KeyContext {
            gate_locked: !self.gate.is_unlocked(),
            has_playback: self.active_engine().is_some(),
        }
    }

    /// The only deadline the runtime needs to wait on. Engines on inactive
    /// slides are always reset, so they never hold one.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        if !self.gate.is_unlocked() {
            return None;
        }
        self.active_engine().and_then(PlaybackEngine::next_deadline)
    }

    pub fn fire_due(&mut self, now: Instant) -> Option<TickOutcome> {
        if !self.gate.is_unlocked() {
            return None;
        }
        self.active_engine_mut()
            .and_then(|engine| engine.fire_due(now))
    }

    pub fn apply(&mut self, command: DeckCommand) -> bool {
        self.apply_at(command, Instant::now())
    }

    /// Applies one command. Returns whether anything visible changed.
    pub fn apply_at(&mut self, command: DeckCommand, now: Instant) -> bool {
        if matches!(command, DeckCommand::Quit) {
            self.quit = true;
            return true;
        }
        if !self.gate.is_unlocked() {
            return self.apply_gate(command);
        }

        match command {
            DeckCommand::NextSlide => self.move_slide(SlideNavigator::next),
            DeckCommand::PreviousSlide => self.move_slide(SlideNavigator::previous),
            DeckCommand::FirstSlide => self.move_slide(SlideNavigator::first),
            DeckCommand::LastSlide => self.move_slide(SlideNavigator::last),
            DeckCommand::ToggleNotes => {
                self.show_notes = !self.show_notes;
                true
            }
            DeckCommand::TogglePlay => self.with_engine(|engine| {
                engine.toggle_play_at(now);
                true
            }),
            DeckCommand::StepForward => self.with_engine(PlaybackEngine::step_forward),
            DeckCommand::StepBackward => self.with_engine(PlaybackEngine::step_backward),
            DeckCommand::Reset => self.with_engine(|engine| {
                engine.reset();
                true
            }),
            DeckCommand::SetSpeed(speed) => self.with_engine(|engine| {
                let changed = engine.speed() != speed;
                engine.set_speed_at(speed, now);
                changed
            }),
            DeckCommand::GateInput(_)
            | DeckCommand::GateBackspace
            | DeckCommand::GateSubmit
            | DeckCommand::Quit => false,
        }
    }

    fn apply_gate(&mut self, command: DeckCommand) -> bool {
        match command {
            DeckCommand::GateInput(ch) => self.gate.push(ch),
            DeckCommand::GateBackspace => self.gate.backspace(),
            DeckCommand::GateSubmit => {
                if self.gate.submit() {
                    tracing::info!("Presentation unlocked");
                }
            }
            DeckCommand::NextSlide
            | DeckCommand::PreviousSlide
            | DeckCommand::FirstSlide
            | DeckCommand::LastSlide
            | DeckCommand::TogglePlay
            | DeckCommand::StepForward
            | DeckCommand::StepBackward
            | DeckCommand::Reset
            | DeckCommand::SetSpeed(_)
            | DeckCommand::ToggleNotes
            | DeckCommand::Quit => return false,
        }
        true
    }

    fn with_engine<F>(&mut self, action: F) -> bool
    where
        F: FnOnce(&mut PlaybackEngine) -> bool,
    {
        self.active_engine_mut().is_some_and(action)
    }

    /// Leaving a flow slide resets its engine, which also cancels its timer.
    fn move_slide<F>(&mut self, movement: F) -> bool
    where
        F: FnOnce(&mut SlideNavigator) -> bool,
    {
        let leaving = self.navigator.current();
        if !movement(&mut self.navigator) {
            return false;
        }
        if let Some(Some(engine)) = self.engines.get_mut(leaving) {
            engine.reset();
        }
        tracing::debug!(
            "Slide {} -> {}",
            leaving,
            self.navigator.current()
        );
        true
    }
}
