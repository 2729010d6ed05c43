pub(crate) mod dashboard;
pub(crate) mod debt;
pub(crate) mod items;

use ratatui::{
    text::Span,
    widgets::{Block, Borders},
};

use super::theme;

/// Bordered panel with a dim bold title, shared by every screen.
pub(crate) fn panel(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title(Span::styled(format!(" {title} "), theme::title_style()))
}
