use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::{Backend, Frame, text},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::model::{DeckView, ViewBody};

use super::body::{render_body, render_notes};
use super::gate::render_gate;
use super::progress::slide_progress_line;
use super::theme::{
    BODY_MIN_HEIGHT, FOOTER_HEIGHT, HEADER_HEIGHT, NOTES_HEIGHT, UI_MARGIN, app_background_style,
    bold, muted_style, panel_block_style, panel_border_style, panel_title_style,
};

pub fn draw_frame<B: Backend>(f: &mut Frame<'_, B>, view: &DeckView) {
    let size = f.size();
    f.render_widget(
        Block::default().style(app_background_style(view.no_color)),
        size,
    );

    if let Some(gate) = view.gate {
        render_gate(f, gate, view.no_color, size);
        return;
    }

    let notes_height = if view.notes.is_some() { NOTES_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(UI_MARGIN)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(BODY_MIN_HEIGHT),
            Constraint::Length(notes_height),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(size);

    let (header_chunk, body_chunk, notes_chunk, footer_chunk) = match chunks.as_ref() {
        [a, b, c, d] => (*a, *b, *c, *d),
        _ => return,
    };

    render_header(f, view, header_chunk);
    render_body(f, view, body_chunk);
    if let Some(notes) = &view.notes {
        render_notes(f, notes, view.no_color, notes_chunk);
    }
    render_footer(f, view, footer_chunk);
}

fn render_header<B: Backend>(f: &mut Frame<'_, B>, view: &DeckView, area: Rect) {
    let block = Block::default()
        .title(view.label.clone())
        .borders(Borders::ALL)
        .style(panel_block_style(view.no_color))
        .border_style(panel_border_style(view.no_color))
        .title_style(panel_title_style(view.no_color));
    let inner = block.inner(area);

    let lines = vec![
        text::Line::from(Span::styled(
            view.title.clone(),
            bold(panel_title_style(view.no_color)),
        )),
        text::Line::from(Span::styled(
            view.subtitle.clone(),
            muted_style(view.no_color),
        )),
        slide_progress_line(
            view.slide_index.saturating_add(1),
            view.slide_count,
            inner.width,
            view.no_color,
        ),
    ];
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_footer<B: Backend>(f: &mut Frame<'_, B>, view: &DeckView, area: Rect) {
    let hints = if matches!(view.body, ViewBody::Flow(_)) {
        "Space play/pause  [ ] step  r reset  1/2/3 speed  ←/→ slide  n notes  q quit"
    } else {
        "→/Space next  ← previous  Home/End first/last  n notes  q quit"
    };
    f.render_widget(
        Paragraph::new(Span::styled(hints, muted_style(view.no_color))),
        area,
    );
}
