use tokio::sync::watch;

use crate::shutdown::ShutdownSender;
use crate::ui::model::DeckView;

use super::dashboard::{Ui, UiActions};

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        Ui::cleanup();
    }
}

/// Spawns the render task. It draws the current view once, then redraws on
/// every view change until shutdown or until the sender is dropped. The
/// window title follows the slide and the gate.
#[must_use]
pub fn setup_render_ui(
    shutdown_tx: &ShutdownSender,
    ui_tx: &watch::Sender<DeckView>,
) -> tokio::task::JoinHandle<()> {
    let mut ui_rx = ui_tx.subscribe();
    let mut shutdown_rx = shutdown_tx.subscribe();
    tokio::spawn(async move {
        let mut terminal = match Ui::setup_terminal() {
            Ok(terminal) => terminal,
            Err(err) => {
                tracing::error!("Failed to setup terminal: {}", err);
                return;
            }
        };
        let _guard = TerminalGuard;

        let initial = ui_rx.borrow_and_update().clone();
        Ui::set_title(&initial);
        Ui::render(&mut terminal, &initial);
        let mut titled = (initial.slide_index, initial.gate.is_some());

        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => break,
                res = ui_rx.changed() => {
                    if res.is_ok() {
                        let view = ui_rx.borrow_and_update().clone();
                        let current = (view.slide_index, view.gate.is_some());
                        if current != titled {
                            Ui::set_title(&view);
                            titled = current;
                        }
                        Ui::render(&mut terminal, &view);
                    } else {
                        break;
                    }
                }
            }
        }
    })
}
