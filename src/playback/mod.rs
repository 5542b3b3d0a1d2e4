//! Step playback: a cursor over one catalog, driven manually or by a single
//! autoplay deadline, plus the processor temperature derived from the hooks
//! it has passed.
mod autoplay;
mod engine;
mod speed;
mod temperature;


pub use autoplay::wait_for_tick;
pub use engine::{DEFAULT_BASE_INTERVAL, MAX_BASE_INTERVAL, PlaybackEngine, TickOutcome};
pub use speed::Speed;
pub use temperature::ProcessorState;
