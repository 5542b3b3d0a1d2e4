use crossterm::{
    cursor, execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend, prelude::Backend};
use std::io;

use crate::error::AppResult;
use crate::ui::model::DeckView;

use super::frame::draw_frame;

const TITLE_PREFIX: &str = "prewarm-deck";

pub trait UiActions {
    /// Enters raw mode and the alternate screen with a hidden cursor.
    ///
    /// # Errors
    ///
    /// Returns an error when terminal setup fails. The terminal is restored
    /// before returning.
    fn setup_terminal() -> AppResult<Terminal<CrosstermBackend<std::io::Stdout>>>;
    fn cleanup();
    fn render<B: Backend>(terminal: &mut Terminal<B>, view: &DeckView);
    fn set_title(view: &DeckView);
}

pub struct Ui;

impl UiActions for Ui {
    fn setup_terminal() -> AppResult<Terminal<CrosstermBackend<std::io::Stdout>>> {
        enable_raw_mode()?;
        if let Err(err) = execute!(io::stdout(), EnterAlternateScreen) {
            disable_raw_mode().ok();
            return Err(err.into());
        }

        let mut terminal = restore_on_err(Terminal::new(CrosstermBackend::new(io::stdout())))?;
        restore_on_err(terminal.clear())?;
        restore_on_err(terminal.hide_cursor())?;
        Ok(terminal)
    }

    fn cleanup() {
        disable_raw_mode().ok();
        execute!(
            io::stdout(),
            SetTitle(""),
            LeaveAlternateScreen,
            cursor::Show
        )
        .ok();
    }

    fn render<B: Backend>(terminal: &mut Terminal<B>, view: &DeckView) {
        if let Err(err) = terminal.draw(|f| draw_frame(f, view)) {
            tracing::error!("Failed to render slide {}: {}", view.slide_index, err);
        }
    }

    fn set_title(view: &DeckView) {
        if let Err(err) = execute!(io::stdout(), SetTitle(window_title(view))) {
            tracing::debug!("Failed to set terminal title: {}", err);
        }
    }
}

/// Terminal window title for the current view. A locked deck shows no slide
/// details.
#[must_use]
pub fn window_title(view: &DeckView) -> String {
    if view.gate.is_some() {
        return format!("{} (locked)", TITLE_PREFIX);
    }
    format!(
        "{} [{}/{}] {}",
        TITLE_PREFIX,
        view.slide_index.saturating_add(1),
        view.slide_count,
        view.title
    )
}

fn restore_on_err<T>(result: io::Result<T>) -> AppResult<T> {
    result.map_err(|err| {
        Ui::cleanup();
        err.into()
    })
}
