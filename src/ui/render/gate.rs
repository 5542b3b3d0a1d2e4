use ratatui::{
    layout::{Alignment, Rect},
    prelude::{Backend, Frame, text},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::ui::model::GateView;

use super::theme::{
    ACCENT_RED_RGB, GATE_PANEL_HEIGHT, GATE_PANEL_WIDTH, bold, muted_style, panel_block_style,
    panel_border_style, panel_title_style, rgb, style_color,
};

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x.saturating_add(area.width.saturating_sub(width) / 2),
        y: area.y.saturating_add(area.height.saturating_sub(height) / 2),
        width,
        height,
    }
}

pub(super) fn render_gate<B: Backend>(
    f: &mut Frame<'_, B>,
    gate: GateView,
    no_color: bool,
    area: Rect,
) {
    let panel_area = centered(area, GATE_PANEL_WIDTH, GATE_PANEL_HEIGHT);
    let block = Block::default()
        .title("Locked")
        .borders(Borders::ALL)
        .style(panel_block_style(no_color))
        .border_style(panel_border_style(no_color))
        .title_style(panel_title_style(no_color));

    let status = if gate.error {
        Span::styled(
            "Incorrect passcode",
            bold(style_color(no_color, rgb(ACCENT_RED_RGB))),
        )
    } else {
        Span::raw("")
    };
    let lines = vec![
        text::Line::from(Span::styled(
            "Enter passcode",
            bold(panel_title_style(no_color)),
        )),
        text::Line::from(format!("> {}", "•".repeat(gate.input_len))),
        text::Line::from(status),
        text::Line::from(""),
        text::Line::from(Span::styled(
            "Enter to unlock, Esc to quit",
            muted_style(no_color),
        )),
    ];

    f.render_widget(Clear, panel_area);
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        panel_area,
    );
}
