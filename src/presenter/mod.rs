//! The interactive presentation: key mapping, session state and the task
//! that drives both.
mod keys;
mod outline;
mod runner;
mod session;
mod view;

pub use keys::{DeckCommand, KeyContext, map_key};
pub use outline::write_outline;
pub use runner::{PresentOptions, drive_session, print_outline, run_presenter};
pub use session::{PlaybackSettings, PresentationSession};
pub use view::build_view;

#[cfg(test)]
mod tests;
