use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::panel;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_amount;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let share = app
        .aggregates
        .allocation()
        .into_iter()
        .find(|s| s.label == "Debt")
        .map(|s| format!("{}% of this month's outflow", s.share))
        .unwrap_or_else(|| "No debt payment recorded".into());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Total Debt Payment", theme::dim_style())),
        Line::from(""),
        Line::from(Span::styled(
            format_amount(app.ledger.debt),
            Style::default()
                .fg(theme::RED)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(share, theme::dim_style())),
        Line::from(""),
        Line::from(Span::styled(
            "Press e to edit, or use :debt <amount>",
            theme::dim_style(),
        )),
    ];

    let para = Paragraph::new(text)
        .centered()
        .block(panel(&format!("Debt - {}", app.month)));
    f.render_widget(para, area);
}
