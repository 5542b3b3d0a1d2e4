use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use crate::catalog::{Catalog, Step};

use super::speed::Speed;
use super::temperature::ProcessorState;

/// Interval between autoplay advances at 1x.
pub const DEFAULT_BASE_INTERVAL: Duration = Duration::from_millis(1500);

/// Longest accepted 1x interval; larger values are clamped to it.
pub const MAX_BASE_INTERVAL: Duration = Duration::from_secs(86_400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Moved to the given step index.
    Advanced(usize),
    /// Already on the last step; playback stopped.
    Finished,
}

/// Cursor, play flag, speed, and visited hooks for one catalog.
///
/// Position is `None` before the first step (the "-1" state) and otherwise
/// always a valid index. The visited set only grows until [`reset`]. There
/// is at most one autoplay deadline at a time and it lives here, so whoever
/// owns the engine owns the timer.
///
/// [`reset`]: PlaybackEngine::reset
#[derive(Debug, Clone)]
pub struct PlaybackEngine {
    catalog: Arc<Catalog>,
    position: Option<usize>,
    playing: bool,
    speed: Speed,
    base_interval: Duration,
    visited: BTreeSet<String>,
    deadline: Option<Instant>,
}

impl PlaybackEngine {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_settings(catalog, DEFAULT_BASE_INTERVAL, Speed::Normal)
    }

    #[must_use]
    pub fn with_settings(catalog: Arc<Catalog>, base_interval: Duration, speed: Speed) -> Self {
        Self {
            catalog,
            position: None,
            playing: false,
            speed,
            base_interval: base_interval.clamp(Duration::from_millis(1), MAX_BASE_INTERVAL),
            visited: BTreeSet::new(),
            deadline: None,
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        self.position
    }

    #[must_use]
    pub fn current_step(&self) -> Option<&Step> {
        self.position.and_then(|index| self.catalog.step(index))
    }

    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub const fn speed(&self) -> Speed {
        self.speed
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.speed.interval(self.base_interval)
    }

    #[must_use]
    pub const fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn visited_hooks(&self) -> impl Iterator<Item = &str> {
        self.visited.iter().map(String::as_str)
    }

    #[must_use]
    pub fn has_visited(&self, step_id: &str) -> bool {
        self.visited.contains(step_id)
    }

    /// Recomputed from the visited set on every call.
    #[must_use]
    pub fn processor_state(&self) -> ProcessorState {
        ProcessorState::classify(
            self.visited
                .iter()
                .filter_map(|id| self.catalog.step_by_id(id))
                .filter_map(Step::hook_category),
        )
    }

    /// Moves one step forward, stopping at the last step. Returns whether the
    /// position changed.
    pub fn step_forward(&mut self) -> bool {
        match self.next_index() {
            Some(next) => {
                self.enter(next);
                true
            }
            None => false,
        }
    }

    /// Moves one step back, stopping before the first step. Visited hooks are
    /// kept.
    pub fn step_backward(&mut self) -> bool {
        match self.position {
            Some(0) => {
                self.position = None;
                true
            }
            Some(index) => {
                self.position = index.checked_sub(1);
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        self.position = None;
        self.playing = false;
        self.visited.clear();
        self.deadline = None;
    }

    pub fn play(&mut self) {
        self.play_at(Instant::now());
    }

    /// Starts autoplay with the first advance one interval after `now`.
    /// Already playing is a no-op, so a second deadline is never created.
    pub fn play_at(&mut self, now: Instant) {
        if self.playing {
            return;
        }
        self.playing = true;
        self.schedule_after(now);
    }

    /// Stops autoplay. No advance happens after this returns.
    pub const fn pause(&mut self) {
        self.playing = false;
        self.deadline = None;
    }

    pub fn toggle_play(&mut self) {
        self.toggle_play_at(Instant::now());
    }

    pub fn toggle_play_at(&mut self, now: Instant) {
        if self.playing {
            self.pause();
        } else {
            self.play_at(now);
        }
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.set_speed_at(speed, Instant::now());
    }

    /// Changes speed. While playing, the pending deadline is replaced by one
    /// a full new interval after `now`.
    pub fn set_speed_at(&mut self, speed: Speed, now: Instant) {
        self.speed = speed;
        if self.playing {
            self.schedule_after(now);
        }
    }

    /// Runs the autoplay advance if the deadline has passed.
    ///
    /// The next deadline follows the previous one by exactly one interval; if
    /// that is already in the past (the owner was late), it is pushed to one
    /// interval after `now` instead of firing a burst.
    pub fn fire_due(&mut self, now: Instant) -> Option<TickOutcome> {
        if !self.playing {
            return None;
        }
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }

        match self.next_index() {
            Some(next) => {
                self.enter(next);
                let interval = self.interval();
                self.deadline = match deadline.checked_add(interval) {
                    Some(following) if following > now => Some(following),
                    Some(_) | None => now.checked_add(interval),
                };
                self.playing = self.deadline.is_some();
                Some(TickOutcome::Advanced(next))
            }
            None => {
                self.pause();
                Some(TickOutcome::Finished)
            }
        }
    }

    fn next_index(&self) -> Option<usize> {
        let next = match self.position {
            Some(index) => index.checked_add(1)?,
            None => 0,
        };
        (next <= self.catalog.last_index() && !self.catalog.is_empty()).then_some(next)
    }

    fn enter(&mut self, index: usize) {
        self.position = Some(index);
        if let Some(step) = self.catalog.step(index)
            && step.is_hook_point()
            && !self.visited.contains(&step.id)
        {
            tracing::debug!(
                "Hook '{}' fired in catalog '{}'",
                step.id,
                self.catalog.id()
            );
            self.visited.insert(step.id.clone());
        }
    }

    /// Playing without a deadline would never advance, so an unschedulable
    /// deadline stops playback.
    fn schedule_after(&mut self, now: Instant) {
        self.deadline = now.checked_add(self.interval());
        self.playing = self.deadline.is_some();
    }
}
