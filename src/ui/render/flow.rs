use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::{Backend, Frame, text},
    text::Span,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::ui::model::{FlowView, StepStatus, StepView};

use super::theme::{
    ACCENT_GREEN_RGB, STATUS_PANEL_WIDTH, bold, hook_color, muted_style, panel_block_style,
    panel_border_style, panel_title_style, rgb, style_color, temperature_color,
};

pub(super) fn render_flow<B: Backend>(
    f: &mut Frame<'_, B>,
    flow: &FlowView,
    no_color: bool,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(STATUS_PANEL_WIDTH)])
        .split(area);

    let (steps_chunk, status_chunk) = match chunks.as_ref() {
        [a, b] => (*a, *b),
        _ => return,
    };

    render_steps(f, flow, no_color, steps_chunk);
    render_status(f, flow, no_color, status_chunk);
}

fn panel(title: &str, no_color: bool) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(panel_block_style(no_color))
        .border_style(panel_border_style(no_color))
        .title_style(panel_title_style(no_color))
}

fn render_steps<B: Backend>(f: &mut Frame<'_, B>, flow: &FlowView, no_color: bool, area: Rect) {
    let lines: Vec<text::Line<'_>> = flow
        .steps
        .iter()
        .map(|step| step_line(step, no_color))
        .collect();
    f.render_widget(
        Paragraph::new(lines).block(panel(&flow.title, no_color)),
        area,
    );
}

fn step_line(step: &StepView, no_color: bool) -> text::Line<'_> {
    let (marker, label_style) = match step.status {
        StepStatus::Current => ("▶ ", bold(panel_title_style(no_color))),
        StepStatus::Done => ("✓ ", style_color(no_color, rgb(ACCENT_GREEN_RGB))),
        StepStatus::Pending => ("  ", muted_style(no_color)),
    };
    let mut spans = vec![
        Span::styled(marker, label_style),
        Span::styled(format!("{:>2}. {}", step.ordinal, step.label), label_style),
        Span::styled(format!("  {}", step.component), muted_style(no_color)),
    ];
    if let Some(hook) = &step.hook {
        let mut tag = format!("  ◆ {}", hook.category);
        if hook.fired {
            tag.push_str(" (fired)");
        }
        spans.push(Span::styled(
            tag,
            style_color(no_color, rgb(hook_color(hook.category))),
        ));
    }
    text::Line::from(spans)
}

fn render_status<B: Backend>(f: &mut Frame<'_, B>, flow: &FlowView, no_color: bool, area: Rect) {
    let temperature = style_color(no_color, rgb(temperature_color(flow.state)));
    let position = flow.position.map_or_else(
        || format!("- / {}", flow.steps.len()),
        |index| format!("{} / {}", index.saturating_add(1), flow.steps.len()),
    );
    let mut lines = vec![
        text::Line::from(Span::styled(flow.state.label(), bold(temperature))),
        text::Line::from(Span::styled(flow.state.sublabel(), muted_style(no_color))),
        text::Line::from(""),
        text::Line::from(format!(
            "Playback: {}",
            if flow.playing { "playing" } else { "paused" }
        )),
        text::Line::from(format!("Speed: {}", flow.speed)),
        text::Line::from(format!("Step: {}", position)),
    ];

    if let Some(step) = flow.current_step() {
        lines.push(text::Line::from(""));
        if let Some(timing) = &step.timing {
            lines.push(text::Line::from(Span::styled(
                format!("Timing: {}", timing),
                muted_style(no_color),
            )));
        }
        if let Some(description) = &flow.description {
            lines.push(text::Line::from(description.as_str()));
        }
        if let Some(hook) = &step.hook {
            lines.push(text::Line::from(""));
            lines.push(text::Line::from(Span::styled(
                hook.label
                    .clone()
                    .unwrap_or_else(|| hook.category.phase_label().to_owned()),
                bold(style_color(no_color, rgb(hook_color(hook.category)))),
            )));
            lines.extend(
                hook.info_available
                    .iter()
                    .map(|info| text::Line::from(format!("• {}", info))),
            );
        }
    }

    f.render_widget(
        Paragraph::new(lines)
            .block(panel("Processor", no_color))
            .wrap(Wrap { trim: true }),
        area,
    );
}
