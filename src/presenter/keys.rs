use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::playback::Speed;

/// Everything a keypress can ask the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckCommand {
    NextSlide,
    PreviousSlide,
    FirstSlide,
    LastSlide,
    TogglePlay,
    StepForward,
    StepBackward,
    Reset,
    SetSpeed(Speed),
    ToggleNotes,
    Quit,
    GateInput(char),
    GateBackspace,
    GateSubmit,
}

/// What the active slide can do, which decides how Space is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyContext {
    pub gate_locked: bool,
    pub has_playback: bool,
}

/// Maps a key event to a command. Unrecognized keys map to `None`.
#[must_use]
pub fn map_key(key: KeyEvent, context: KeyContext) -> Option<DeckCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(DeckCommand::Quit);
    }
    if matches!(key.code, KeyCode::Esc) {
        return Some(DeckCommand::Quit);
    }

    if context.gate_locked {
        return map_gate_key(key.code);
    }

    if matches!(key.code, KeyCode::Right | KeyCode::Down) {
        Some(DeckCommand::NextSlide)
    } else if matches!(key.code, KeyCode::Left | KeyCode::Up) {
        Some(DeckCommand::PreviousSlide)
    } else if matches!(key.code, KeyCode::Char(' ')) {
        if context.has_playback {
            Some(DeckCommand::TogglePlay)
        } else {
            Some(DeckCommand::NextSlide)
        }
    } else if matches!(key.code, KeyCode::Home) {
        Some(DeckCommand::FirstSlide)
    } else if matches!(key.code, KeyCode::End) {
        Some(DeckCommand::LastSlide)
    } else if let KeyCode::Char(ch) = key.code {
        map_presenter_char(ch)
    } else {
        None
    }
}

fn map_gate_key(code: KeyCode) -> Option<DeckCommand> {
    if matches!(code, KeyCode::Enter) {
        Some(DeckCommand::GateSubmit)
    } else if matches!(code, KeyCode::Backspace) {
        Some(DeckCommand::GateBackspace)
    } else if let KeyCode::Char(ch) = code {
        Some(DeckCommand::GateInput(ch))
    } else {
        None
    }
}

fn map_presenter_char(ch: char) -> Option<DeckCommand> {
    match ch {
        ']' => Some(DeckCommand::StepForward),
        '[' => Some(DeckCommand::StepBackward),
        'r' | 'R' => Some(DeckCommand::Reset),
        '1' => Some(DeckCommand::SetSpeed(Speed::Half)),
        '2' => Some(DeckCommand::SetSpeed(Speed::Normal)),
        '3' => Some(DeckCommand::SetSpeed(Speed::Double)),
        'n' | 'N' => Some(DeckCommand::ToggleNotes),
        'q' | 'Q' => Some(DeckCommand::Quit),
        _ => None,
    }
}
