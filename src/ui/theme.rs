use ratatui::style::{Color, Modifier, Style};

use crate::models::ListKind;

pub(crate) const BASE: Color = Color::Rgb(30, 30, 46);
pub(crate) const TEXT: Color = Color::Rgb(205, 214, 244);
pub(crate) const TEXT_DIM: Color = Color::Rgb(127, 132, 156);
pub(crate) const SURFACE: Color = Color::Rgb(49, 50, 68);
pub(crate) const OVERLAY: Color = Color::Rgb(69, 71, 90);
pub(crate) const COMMAND_BG: Color = Color::Rgb(24, 24, 37);
pub(crate) const ACCENT: Color = Color::Rgb(197, 184, 224);
pub(crate) const GREEN: Color = Color::Rgb(166, 227, 161);
pub(crate) const RED: Color = Color::Rgb(243, 139, 168);
pub(crate) const YELLOW: Color = Color::Rgb(249, 226, 175);

/// Lavender ramp for the allocation breakdown.
pub(crate) const ALLOCATION: [Color; 4] = [
    Color::Rgb(232, 213, 242),
    Color::Rgb(212, 197, 232),
    Color::Rgb(197, 184, 224),
    Color::Rgb(184, 168, 216),
];

pub(crate) fn kind_color(kind: ListKind) -> Color {
    match kind {
        ListKind::Income => GREEN,
        ListKind::Expense => RED,
        ListKind::Bill => YELLOW,
        ListKind::Saving => ACCENT,
    }
}

/// Green at or above zero, red below.
pub(crate) fn balance_color(negative: bool) -> Color {
    if negative {
        RED
    } else {
        GREEN
    }
}

/// Colour of a stored progress figure: spending past budget turns red.
pub(crate) fn progress_color(kind: ListKind, percent: f64) -> Color {
    match kind {
        ListKind::Saving if percent >= 100.0 => GREEN,
        ListKind::Saving => ACCENT,
        _ if percent > 100.0 => RED,
        _ if percent > 80.0 => YELLOW,
        _ => GREEN,
    }
}

pub(crate) fn title_style() -> Style {
    Style::default()
        .fg(TEXT_DIM)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn header_row_style() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub(crate) fn selected_style() -> Style {
    Style::default().fg(BASE).bg(ACCENT)
}

pub(crate) fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub(crate) fn alt_row_style() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub(crate) fn border_style() -> Style {
    Style::default().fg(OVERLAY)
}

pub(crate) fn command_bar_style() -> Style {
    Style::default().fg(TEXT).bg(COMMAND_BG)
}

pub(crate) fn status_bar_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(SURFACE)
}
