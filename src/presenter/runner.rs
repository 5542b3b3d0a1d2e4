use std::io::{self, IsTerminal, Write};

use crossterm::event::KeyEvent;
use tokio::sync::{mpsc, watch};
use tokio::time::Instant;

use crate::deck::Deck;
use crate::error::{AppError, AppResult, ValidationError};
use crate::gate::{Gate, GateState};
use crate::playback::{TickOutcome, wait_for_tick};
use crate::shutdown::{ShutdownReceiver, ShutdownSender, setup_key_reader};
use crate::ui::model::DeckView;
use crate::ui::render::setup_render_ui;

use super::keys::map_key;
use super::outline::write_outline;
use super::session::{PlaybackSettings, PresentationSession};
use super::view::build_view;

/// Key events buffered between the blocking reader and the session task.
const KEY_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
pub struct PresentOptions {
    pub passcode: Option<String>,
    pub settings: PlaybackSettings,
    pub start_slide: usize,
    pub no_ui: bool,
    pub no_color: bool,
}

/// Runs the presentation until the presenter quits or shutdown is broadcast.
///
/// Without a terminal on stdout, or with `no_ui`, prints the outline instead.
///
/// # Errors
///
/// Returns an error when the outline is requested for a passcode-protected
/// deck, when it cannot be written, or when a presenter task fails to join.
pub async fn run_presenter(
    deck: Deck,
    options: PresentOptions,
    shutdown_tx: &ShutdownSender,
) -> AppResult<()> {
    if options.no_ui || !io::stdout().is_terminal() {
        let mut stdout = io::stdout().lock();
        return print_outline(&mut stdout, &deck, options.passcode.as_deref());
    }

    let gate = GateState::new(Gate::new(options.passcode));
    let session = PresentationSession::new(deck, gate, options.settings, options.start_slide);
    let (ui_tx, _) = watch::channel(build_view(&session, options.no_color));
    let ui_handle = setup_render_ui(shutdown_tx, &ui_tx);

    let (key_tx, key_rx) = mpsc::channel(KEY_CHANNEL_CAPACITY);
    let reader_handle = setup_key_reader(shutdown_tx, key_tx);

    let session = drive_session(
        session,
        key_rx,
        shutdown_tx.subscribe(),
        &ui_tx,
        options.no_color,
    )
    .await;
    tracing::debug!(
        "Presenter stopped on slide {}",
        session.navigator().current()
    );

    drop(shutdown_tx.send(()));
    ui_handle.await?;
    reader_handle.await?;
    Ok(())
}

/// Writes the plain-text outline. The outline has no gate screen, so a
/// configured passcode refuses it before anything is written.
///
/// # Errors
///
/// Returns [`ValidationError::OutlineLocked`] when `passcode` is set, or an
/// I/O error when writing fails.
pub fn print_outline<W: Write>(out: &mut W, deck: &Deck, passcode: Option<&str>) -> AppResult<()> {
    if passcode.is_some() {
        tracing::warn!("Refusing to print the outline of a passcode-protected deck");
        return Err(AppError::validation(ValidationError::OutlineLocked));
    }
    tracing::debug!("Printing deck outline");
    write_outline(out, deck)?;
    Ok(())
}

/// The session loop. Every state change happens here, between two selects,
/// so a pause or reset always lands before the next autoplay deadline is
/// read back from the engine.
pub async fn drive_session(
    mut session: PresentationSession,
    mut key_rx: mpsc::Receiver<KeyEvent>,
    mut shutdown_rx: ShutdownReceiver,
    ui_tx: &watch::Sender<DeckView>,
    no_color: bool,
) -> PresentationSession {
    loop {
        let deadline = session.next_deadline();
        let changed = tokio::select! {
            _ = shutdown_rx.recv() => break,
            key = key_rx.recv() => {
                let Some(key) = key else {
                    break;
                };
                map_key(key, session.key_context())
                    .is_some_and(|command| session.apply(command))
            }
            () = wait_for_tick(deadline) => {
                match session.fire_due(Instant::now()) {
                    Some(TickOutcome::Advanced(index)) => {
                        tracing::debug!("Autoplay advanced to step {}", index);
                        true
                    }
                    Some(TickOutcome::Finished) => {
                        tracing::debug!("Autoplay finished");
                        true
                    }
                    None => false,
                }
            }
        };

        if session.should_quit() {
            break;
        }
        if changed {
            ui_tx.send_replace(build_view(&session, no_color));
        }
    }
    session
}
