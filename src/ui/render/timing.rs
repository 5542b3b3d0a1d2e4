use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::{Backend, Frame, text},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::model::{TimingRow, TimingView};

use super::theme::{
    ACCENT_AMBER_RGB, ACCENT_PROGRESS_RGB, TIMING_LABEL_WIDTH, muted_style, panel_block_style,
    panel_border_style, panel_title_style, rgb, style_color,
};

/// Space reserved after the bar for the millisecond figure.
const VALUE_WIDTH: usize = 10;

pub(super) fn render_timing<B: Backend>(
    f: &mut Frame<'_, B>,
    timings: &[TimingView],
    no_color: bool,
    area: Rect,
) {
    if timings.is_empty() {
        return;
    }
    let share = u32::try_from(timings.len()).unwrap_or(u32::MAX);
    let constraints: Vec<Constraint> = timings
        .iter()
        .map(|_| Constraint::Ratio(1, share))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    // One scale across every catalog so bars compare directly.
    let max_ms = timings
        .iter()
        .flat_map(|timing| timing.rows.iter())
        .map(|row| row.timing_ms)
        .max()
        .unwrap_or(0);

    for (timing, chunk) in timings.iter().zip(chunks.iter()) {
        let block = Block::default()
            .title(timing.title.as_str())
            .borders(Borders::ALL)
            .style(panel_block_style(no_color))
            .border_style(panel_border_style(no_color))
            .title_style(panel_title_style(no_color));
        let inner = block.inner(*chunk);
        let bar_width = usize::from(inner.width)
            .saturating_sub(TIMING_LABEL_WIDTH)
            .saturating_sub(VALUE_WIDTH);
        let lines: Vec<text::Line<'_>> = timing
            .rows
            .iter()
            .map(|row| timing_line(row, max_ms, bar_width, no_color))
            .collect();
        f.render_widget(Paragraph::new(lines).block(block), *chunk);
    }
}

pub(super) fn bar_cells(timing_ms: u32, max_ms: u32, bar_width: usize) -> usize {
    if timing_ms == 0 || max_ms == 0 {
        return 0;
    }
    let width = u64::try_from(bar_width).unwrap_or(u64::MAX);
    let cells = u64::from(timing_ms.min(max_ms))
        .saturating_mul(width)
        .checked_div(u64::from(max_ms))
        .unwrap_or(0);
    usize::try_from(cells).unwrap_or(bar_width).max(1).min(bar_width)
}

fn timing_line(row: &TimingRow, max_ms: u32, bar_width: usize, no_color: bool) -> text::Line<'_> {
    let mut label: String = row.label.chars().take(TIMING_LABEL_WIDTH.saturating_sub(1)).collect();
    let pad = TIMING_LABEL_WIDTH.saturating_sub(label.chars().count());
    label.extend(std::iter::repeat_n(' ', pad));

    let color = if row.is_hook {
        ACCENT_AMBER_RGB
    } else {
        ACCENT_PROGRESS_RGB
    };
    let bar = "█".repeat(bar_cells(row.timing_ms, max_ms, bar_width));
    text::Line::from(vec![
        Span::styled(label, muted_style(no_color)),
        Span::styled(bar, style_color(no_color, rgb(color))),
        Span::raw(format!(" {} ms", row.timing_ms)),
    ])
}
