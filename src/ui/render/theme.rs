use ratatui::style::{Color, Modifier, Style};

use crate::catalog::HookCategory;
use crate::playback::ProcessorState;

pub(super) const UI_MARGIN: u16 = 1;
pub(super) const HEADER_HEIGHT: u16 = 5;
pub(super) const FOOTER_HEIGHT: u16 = 1;
pub(super) const NOTES_HEIGHT: u16 = 6;
pub(super) const BODY_MIN_HEIGHT: u16 = 8;
pub(super) const STATUS_PANEL_WIDTH: u16 = 38;
pub(super) const GATE_PANEL_WIDTH: u16 = 44;
pub(super) const GATE_PANEL_HEIGHT: u16 = 7;
pub(super) const TIMING_LABEL_WIDTH: usize = 22;
pub(super) const CHART_BG_RGB: (u8, u8, u8) = (0x0a, 0x0a, 0x0a);
pub(super) const PANEL_BORDER_RGB: (u8, u8, u8) = (0xe5, 0xe7, 0xeb);
pub(super) const PANEL_TEXT_RGB: (u8, u8, u8) = (0xff, 0xff, 0xff);
pub(super) const PANEL_MUTED_RGB: (u8, u8, u8) = (0xd1, 0xd5, 0xdb);
pub(super) const ACCENT_PROGRESS_RGB: (u8, u8, u8) = (0x22, 0xd3, 0xee);
pub(super) const ACCENT_EARLY_RGB: (u8, u8, u8) = (0x60, 0xa5, 0xfa);
pub(super) const ACCENT_LATE_RGB: (u8, u8, u8) = (0xa7, 0x8b, 0xfa);
pub(super) const ACCENT_BOTH_RGB: (u8, u8, u8) = (0xf4, 0x72, 0xb6);
pub(super) const ACCENT_GREEN_RGB: (u8, u8, u8) = (0x22, 0xc5, 0x5e);
pub(super) const ACCENT_AMBER_RGB: (u8, u8, u8) = (0xf5, 0x9e, 0x0b);
pub(super) const ACCENT_RED_RGB: (u8, u8, u8) = (0xef, 0x44, 0x44);
pub(super) const ACCENT_COLD_RGB: (u8, u8, u8) = (0x38, 0xbd, 0xf8);

pub(super) fn style_color(no_color: bool, color: Color) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().fg(color)
    }
}

pub(super) const fn rgb(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub(super) fn bold(style: Style) -> Style {
    style.add_modifier(Modifier::BOLD)
}

pub(super) fn panel_block_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default()
            .bg(rgb(CHART_BG_RGB))
            .fg(rgb(PANEL_TEXT_RGB))
    }
}

pub(super) fn panel_border_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().fg(rgb(PANEL_BORDER_RGB))
    }
}

pub(super) fn panel_title_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().fg(rgb(PANEL_TEXT_RGB))
    }
}

pub(super) fn muted_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().fg(rgb(PANEL_MUTED_RGB))
    }
}

pub(super) fn app_background_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().bg(rgb(CHART_BG_RGB))
    }
}

pub(super) const fn hook_color(category: HookCategory) -> (u8, u8, u8) {
    match category {
        HookCategory::EarlyBroadcast => ACCENT_EARLY_RGB,
        HookCategory::LateTargeted => ACCENT_LATE_RGB,
        HookCategory::Both => ACCENT_BOTH_RGB,
    }
}

pub(super) const fn temperature_color(state: ProcessorState) -> (u8, u8, u8) {
    match state {
        ProcessorState::Cold => ACCENT_COLD_RGB,
        ProcessorState::Warming => ACCENT_AMBER_RGB,
        ProcessorState::Hot => ACCENT_RED_RGB,
    }
}
