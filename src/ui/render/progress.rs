use ratatui::prelude::text;
use ratatui::text::Span;

use super::theme::{ACCENT_PROGRESS_RGB, PANEL_TEXT_RGB, rgb, style_color};

const PARTIAL_BLOCKS: [&str; 8] = ["", "▏", "▎", "▍", "▌", "▋", "▊", "▉"];

/// Deck progress as a bar with the `current / total` label centered on it.
/// `current` is 1-based.
pub(super) fn slide_progress_line(
    current: usize,
    total: usize,
    width: u16,
    no_color: bool,
) -> text::Line<'static> {
    let label = format!("{} / {}", current, total);
    let bar_width = usize::from(width.saturating_sub(2)).max(1);
    let total_eighths = bar_width.saturating_mul(8);
    let filled_eighths = current
        .min(total)
        .saturating_mul(total_eighths)
        .checked_div(total)
        .unwrap_or(0);
    let full_count = filled_eighths
        .checked_div(8)
        .unwrap_or(0)
        .min(bar_width);
    let rem = filled_eighths.checked_rem(8).unwrap_or(0);
    let partial_char = PARTIAL_BLOCKS
        .get(rem)
        .and_then(|block| block.chars().next())
        .unwrap_or(' ');
    let has_partial = rem > 0 && full_count < bar_width;

    let mut label_chars: Vec<char> = label.chars().collect();
    label_chars.truncate(bar_width);
    let label_start = bar_width.saturating_sub(label_chars.len()) / 2;
    let mut label_cells: Vec<Option<char>> = vec![None; bar_width];
    for (offset, ch) in label_chars.into_iter().enumerate() {
        if let Some(cell) = label_start
            .checked_add(offset)
            .and_then(|pos| label_cells.get_mut(pos))
        {
            *cell = Some(ch);
        }
    }

    let fill_style = style_color(no_color, rgb(ACCENT_PROGRESS_RGB));
    let mut spans = Vec::with_capacity(bar_width.saturating_add(2));
    spans.push(Span::raw("["));
    for idx in 0..bar_width {
        if let Some(ch) = label_cells.get(idx).copied().flatten() {
            spans.push(Span::styled(
                ch.to_string(),
                style_color(no_color, rgb(PANEL_TEXT_RGB)),
            ));
        } else if idx < full_count {
            spans.push(Span::styled("█", fill_style));
        } else if has_partial && idx == full_count {
            spans.push(Span::styled(partial_char.to_string(), fill_style));
        } else {
            spans.push(Span::raw(" "));
        }
    }
    spans.push(Span::raw("]"));
    text::Line::from(spans)
}
