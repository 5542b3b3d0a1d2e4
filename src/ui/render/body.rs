use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::{Backend, Frame, text},
    text::Span,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::ui::model::{DeckView, ViewBody};

use super::flow::render_flow;
use super::theme::{
    muted_style, panel_block_style, panel_border_style, panel_title_style,
};
use super::timing::render_timing;

pub(super) fn render_body<B: Backend>(f: &mut Frame<'_, B>, view: &DeckView, area: Rect) {
    let diagram_area = match &view.body {
        ViewBody::Text => {
            render_lines(f, &view.lines, view.no_color, area);
            return;
        }
        ViewBody::Flow(_) | ViewBody::Timing(_) if view.lines.is_empty() => area,
        ViewBody::Flow(_) | ViewBody::Timing(_) => {
            let text_height = u16::try_from(view.lines.len())
                .unwrap_or(u16::MAX)
                .saturating_add(2);
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(text_height), Constraint::Min(0)])
                .split(area);
            match chunks.as_ref() {
                [text_chunk, diagram_chunk] => {
                    render_lines(f, &view.lines, view.no_color, *text_chunk);
                    *diagram_chunk
                }
                _ => return,
            }
        }
    };

    match &view.body {
        ViewBody::Flow(flow) => render_flow(f, flow, view.no_color, diagram_area),
        ViewBody::Timing(timings) => render_timing(f, timings, view.no_color, diagram_area),
        ViewBody::Text => {}
    }
}

fn render_lines<B: Backend>(f: &mut Frame<'_, B>, lines: &[String], no_color: bool, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .style(panel_block_style(no_color))
        .border_style(panel_border_style(no_color));
    let text: Vec<text::Line<'_>> = lines
        .iter()
        .map(|line| text::Line::from(line.as_str()))
        .collect();
    f.render_widget(
        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

pub(super) fn render_notes<B: Backend>(
    f: &mut Frame<'_, B>,
    notes: &[String],
    no_color: bool,
    area: Rect,
) {
    let block = Block::default()
        .title("Speaker notes")
        .borders(Borders::ALL)
        .style(panel_block_style(no_color))
        .border_style(panel_border_style(no_color))
        .title_style(panel_title_style(no_color));
    let text: Vec<text::Line<'_>> = if notes.is_empty() {
        vec![text::Line::from(Span::styled(
            "No notes for this slide.",
            muted_style(no_color),
        ))]
    } else {
        notes
            .iter()
            .map(|note| text::Line::from(note.as_str()))
            .collect()
    };
    f.render_widget(
        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}
