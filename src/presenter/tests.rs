use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use tokio::sync::{mpsc, watch};

use super::{
    DeckCommand, KeyContext, PlaybackSettings, PresentationSession, build_view, drive_session,
    map_key, print_outline, write_outline,
};
use crate::catalog::CatalogSet;
use crate::deck::Deck;
use crate::error::{AppError, AppResult, ValidationError};
use crate::gate::{Gate, GateState};
use crate::playback::{DEFAULT_BASE_INTERVAL, Speed};
use crate::shutdown::shutdown_channel;
use crate::ui::model::{DeckView, ViewBody};

const UNLOCKED: KeyContext = KeyContext {
    gate_locked: false,
    has_playback: false,
};
const ON_FLOW: KeyContext = KeyContext {
    gate_locked: false,
    has_playback: true,
};
const LOCKED: KeyContext = KeyContext {
    gate_locked: true,
    has_playback: false,
};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn builtin_deck() -> AppResult<Deck> {
    Ok(Deck::build(&CatalogSet::load(None)?)?)
}

fn slide_index(deck: &Deck, id: &str) -> AppResult<usize> {
    deck.slides()
        .iter()
        .position(|slide| slide.id == id)
        .ok_or_else(|| AppError::validation(format!("Missing slide {}", id)))
}

fn settings() -> PlaybackSettings {
    PlaybackSettings {
        base_interval: DEFAULT_BASE_INTERVAL,
        speed: Speed::Normal,
    }
}

fn session_at(slide: &str, passcode: Option<&str>) -> AppResult<PresentationSession> {
    let deck = builtin_deck()?;
    let start = slide_index(&deck, slide)?;
    let gate = GateState::new(Gate::new(passcode.map(str::to_owned)));
    Ok(PresentationSession::new(deck, gate, settings(), start))
}

fn engine_position(session: &PresentationSession) -> AppResult<Option<usize>> {
    session
        .active_engine()
        .map(crate::playback::PlaybackEngine::position)
        .ok_or_else(|| AppError::validation("Active slide has no engine"))
}

fn check(condition: bool, message: &'static str) -> AppResult<()> {
    if condition {
        Ok(())
    } else {
        Err(AppError::validation(message))
    }
}

fn expect_key(code: KeyCode, context: KeyContext, expected: Option<DeckCommand>) -> AppResult<()> {
    expect_mapped(key(code), context, expected)
}

fn expect_mapped(
    event: KeyEvent,
    context: KeyContext,
    expected: Option<DeckCommand>,
) -> AppResult<()> {
    let mapped = map_key(event, context);
    if mapped != expected {
        return Err(AppError::validation(format!(
            "{:?} mapped to {:?}, expected {:?}",
            event.code, mapped, expected
        )));
    }
    Ok(())
}

fn expect_position(session: &PresentationSession, expected: Option<usize>) -> AppResult<()> {
    let position = engine_position(session)?;
    if position != expected {
        return Err(AppError::validation(format!(
            "Engine at {:?}, expected {:?}",
            position, expected
        )));
    }
    Ok(())
}

fn outline_text(out: Vec<u8>) -> AppResult<String> {
    String::from_utf8(out)
        .map_err(|err| AppError::validation(format!("Outline is not UTF-8: {}", err)))
}

#[test]
fn arrows_navigate_and_space_depends_on_slide() -> AppResult<()> {
    expect_key(KeyCode::Right, UNLOCKED, Some(DeckCommand::NextSlide))?;
    expect_key(KeyCode::Down, UNLOCKED, Some(DeckCommand::NextSlide))?;
    expect_key(KeyCode::Left, UNLOCKED, Some(DeckCommand::PreviousSlide))?;
    expect_key(KeyCode::Up, UNLOCKED, Some(DeckCommand::PreviousSlide))?;
    expect_key(KeyCode::Char(' '), UNLOCKED, Some(DeckCommand::NextSlide))?;
    expect_key(KeyCode::Char(' '), ON_FLOW, Some(DeckCommand::TogglePlay))
}

#[test]
fn presenter_keys_map_to_playback_commands() -> AppResult<()> {
    expect_key(KeyCode::Char(']'), ON_FLOW, Some(DeckCommand::StepForward))?;
    expect_key(KeyCode::Char('['), ON_FLOW, Some(DeckCommand::StepBackward))?;
    expect_key(
        KeyCode::Char('1'),
        ON_FLOW,
        Some(DeckCommand::SetSpeed(Speed::Half)),
    )?;
    expect_key(
        KeyCode::Char('3'),
        ON_FLOW,
        Some(DeckCommand::SetSpeed(Speed::Double)),
    )?;
    expect_key(KeyCode::Char('x'), ON_FLOW, None)?;
    expect_key(KeyCode::Tab, UNLOCKED, None)
}

#[test]
fn quit_keys_work_everywhere() -> AppResult<()> {
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    expect_mapped(ctrl_c, LOCKED, Some(DeckCommand::Quit))?;
    expect_key(KeyCode::Esc, LOCKED, Some(DeckCommand::Quit))?;
    expect_key(KeyCode::Char('q'), UNLOCKED, Some(DeckCommand::Quit))
}

#[test]
fn locked_gate_captures_text_and_ignores_navigation() -> AppResult<()> {
    expect_key(KeyCode::Char('q'), LOCKED, Some(DeckCommand::GateInput('q')))?;
    expect_key(KeyCode::Enter, LOCKED, Some(DeckCommand::GateSubmit))?;
    expect_key(KeyCode::Backspace, LOCKED, Some(DeckCommand::GateBackspace))?;
    expect_key(KeyCode::Right, LOCKED, None)
}

#[test]
fn key_release_is_ignored() -> AppResult<()> {
    let release = KeyEvent {
        code: KeyCode::Right,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    expect_mapped(release, UNLOCKED, None)
}

#[test]
fn locked_session_only_accepts_the_passcode() -> AppResult<()> {
    let mut session = session_at("title", Some("warm"))?;
    check(
        session.next_deadline().is_none(),
        "Locked session must not schedule ticks",
    )?;
    check(
        !session.apply(DeckCommand::NextSlide),
        "Locked session must ignore navigation",
    )?;
    check(
        session.navigator().current() == 0,
        "Locked session must stay on the first slide",
    )?;

    for ch in "cold".chars() {
        session.apply(DeckCommand::GateInput(ch));
    }
    session.apply(DeckCommand::GateSubmit);
    check(session.gate().has_error(), "Wrong passcode must flag an error")?;
    check(
        !session.gate().is_unlocked(),
        "Wrong passcode must keep the gate locked",
    )?;

    for ch in "warm".chars() {
        session.apply(DeckCommand::GateInput(ch));
    }
    session.apply(DeckCommand::GateSubmit);
    check(session.gate().is_unlocked(), "Matching passcode must unlock")?;
    check(
        session.apply(DeckCommand::NextSlide),
        "Unlocked session must navigate",
    )?;
    check(
        session.navigator().current() == 1,
        "Expected the second slide after unlocking",
    )
}

#[test]
fn leaving_a_flow_slide_resets_its_engine() -> AppResult<()> {
    let mut session = session_at("k8s-flow", None)?;
    let flow_index = session.navigator().current();
    session.apply(DeckCommand::StepForward);
    session.apply(DeckCommand::StepForward);
    session.apply(DeckCommand::TogglePlay);
    expect_position(&session, Some(1))?;
    check(
        session.next_deadline().is_some(),
        "Playing flow must hold a deadline",
    )?;

    session.apply(DeckCommand::NextSlide);
    check(
        session.active_engine().is_none(),
        "Next slide should have no engine",
    )?;
    check(
        session.next_deadline().is_none(),
        "Leaving the flow must drop its deadline",
    )?;

    session.apply(DeckCommand::PreviousSlide);
    check(
        session.navigator().current() == flow_index,
        "Expected to return to the flow slide",
    )?;
    expect_position(&session, None)?;
    check(
        session
            .active_engine()
            .is_some_and(|engine| !engine.is_playing()),
        "Returned flow must be paused",
    )
}

#[test]
fn playback_commands_without_engine_change_nothing() -> AppResult<()> {
    let mut session = session_at("title", None)?;
    for command in [
        DeckCommand::StepForward,
        DeckCommand::TogglePlay,
        DeckCommand::SetSpeed(Speed::Double),
        DeckCommand::PreviousSlide,
    ] {
        if session.apply(command) {
            return Err(AppError::validation(format!(
                "{:?} changed a slide without playback",
                command
            )));
        }
    }
    Ok(())
}

#[test]
fn view_reflects_playback_and_notes() -> AppResult<()> {
    let mut session = session_at("k8s-flow", None)?;
    session.apply(DeckCommand::StepForward);
    session.apply(DeckCommand::SetSpeed(Speed::Double));
    session.apply(DeckCommand::ToggleNotes);

    let view = build_view(&session, true);
    check(view.gate.is_none(), "Open deck must not show the gate")?;
    check(view.notes.is_some(), "Notes were toggled on")?;
    match view.body {
        ViewBody::Flow(flow) => {
            check(flow.position == Some(0), "Expected the first step")?;
            check(flow.speed == Speed::Double, "Expected double speed")?;
            check(
                flow.description.is_some(),
                "Current step should have a description",
            )
        }
        ViewBody::Text | ViewBody::Timing(_) => Err(AppError::validation("Expected a flow body")),
    }
}

#[test]
fn timing_slide_lists_timed_steps() -> AppResult<()> {
    let session = session_at("timing", None)?;
    let view = build_view(&session, false);
    match view.body {
        ViewBody::Timing(timings) => {
            check(timings.len() == 2, "Expected two timing catalogs")?;
            check(
                timings.iter().all(|timing| !timing.rows.is_empty()),
                "Every timing catalog needs rows",
            )
        }
        ViewBody::Text | ViewBody::Flow(_) => Err(AppError::validation("Expected a timing body")),
    }
}

#[test]
fn outline_lists_every_slide_and_flow_temperatures() -> AppResult<()> {
    let deck = builtin_deck()?;
    let mut out = Vec::new();
    write_outline(&mut out, &deck)?;
    let text = outline_text(out)?;

    let total = deck.count().get();
    check(
        text.contains(&format!("[1/{}]", total)),
        "Outline misses the first slide",
    )?;
    check(
        text.contains(&format!("[{}/{}]", total, total)),
        "Outline misses the last slide",
    )?;
    check(text.contains("-> COLD"), "Outline misses COLD steps")?;
    check(text.contains("-> HOT"), "Outline misses HOT steps")?;
    check(text.contains(" ms"), "Outline misses timing rows")
}

#[test]
fn outline_is_refused_for_a_passcode_protected_deck() -> AppResult<()> {
    let deck = builtin_deck()?;
    let mut out = Vec::new();
    match print_outline(&mut out, &deck, Some("secret")) {
        Err(AppError::Validation(ValidationError::OutlineLocked)) => {}
        other => {
            return Err(AppError::validation(format!(
                "Expected OutlineLocked, got {:?}",
                other
            )));
        }
    }
    check(out.is_empty(), "Locked outline must not write any slide")?;

    print_outline(&mut out, &deck, None)?;
    let text = outline_text(out)?;
    check(text.contains("[1/"), "Open deck outline must list slides")
}

#[tokio::test(start_paused = true)]
async fn autoplay_advances_through_the_session_loop() -> AppResult<()> {
    let session = session_at("k8s-flow", None)?;
    let (shutdown_tx, _) = shutdown_channel();
    let (ui_tx, mut ui_rx) = watch::channel(DeckView::default());
    let (key_tx, key_rx) = mpsc::channel(8);

    let driver = async move {
        key_tx.send(key(KeyCode::Char(' '))).await.ok();
        tokio::time::sleep(Duration::from_millis(4600)).await;
        key_tx.send(key(KeyCode::Char('q'))).await.ok();
    };
    let (session, ()) = tokio::join!(
        drive_session(session, key_rx, shutdown_tx.subscribe(), &ui_tx, true),
        driver
    );

    check(session.should_quit(), "q must quit the session")?;
    expect_position(&session, Some(2))?;
    check(
        ui_rx.has_changed().unwrap_or(false),
        "UI must receive the updated view",
    )?;
    let view = ui_rx.borrow_and_update().clone();
    check(
        matches!(view.body, ViewBody::Flow(_)),
        "Last view should be the flow slide",
    )
}

#[tokio::test(start_paused = true)]
async fn pause_stops_the_session_loop_from_advancing() -> AppResult<()> {
    let session = session_at("kn-flow", None)?;
    let (shutdown_tx, _) = shutdown_channel();
    let (ui_tx, _ui_rx) = watch::channel(DeckView::default());
    let (key_tx, key_rx) = mpsc::channel(8);

    let driver = async move {
        key_tx.send(key(KeyCode::Char(' '))).await.ok();
        tokio::time::sleep(Duration::from_millis(1510)).await;
        key_tx.send(key(KeyCode::Char(' '))).await.ok();
        tokio::time::sleep(Duration::from_millis(6000)).await;
        key_tx.send(key(KeyCode::Esc)).await.ok();
    };
    let (session, ()) = tokio::join!(
        drive_session(session, key_rx, shutdown_tx.subscribe(), &ui_tx, true),
        driver
    );

    expect_position(&session, Some(0))
}

#[tokio::test]
async fn shutdown_ends_the_session_loop() -> AppResult<()> {
    let session = session_at("title", None)?;
    let (shutdown_tx, _) = shutdown_channel();
    let (ui_tx, _ui_rx) = watch::channel(DeckView::default());
    let (_key_tx, key_rx) = mpsc::channel(8);
    let shutdown_rx = shutdown_tx.subscribe();

    if shutdown_tx.send(()).is_err() {
        return Err(AppError::validation("Failed to send shutdown"));
    }
    let session = tokio::time::timeout(
        Duration::from_secs(1),
        drive_session(session, key_rx, shutdown_rx, &ui_tx, true),
    )
    .await
    .map_err(|err| AppError::validation(format!("Session loop did not stop: {}", err)))?;
    check(
        !session.should_quit(),
        "Shutdown is not a presenter quit",
    )
}
