use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;

use super::panel;
use crate::models::ListKind;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_percent, progress_bar, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App, kind: ListKind) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(area);

    let items = app.ledger.items(kind);
    if items.is_empty() {
        render_empty(f, chunks[0], app, kind);
    } else {
        render_table(f, chunks[0], app, kind);
    }
    render_totals(f, chunks[1], app, kind);
}

fn render_table(f: &mut Frame, area: Rect, app: &App, kind: ListKind) {
    let page = area.height.saturating_sub(3) as usize;
    let tracks = kind.tracks_progress();

    let mut header = vec!["Category", "Budgeted", "Actual"];
    if tracks {
        header.extend(["Progress", ""]);
    }
    let header = Row::new(header).style(theme::header_row_style());

    let rows: Vec<Row> = app
        .ledger
        .items(kind)
        .iter()
        .enumerate()
        .skip(app.item_scroll)
        .take(page.max(1))
        .map(|(i, item)| {
            let style = if i == app.item_index {
                theme::selected_style()
            } else if i % 2 == 0 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let mut cells = vec![
                Cell::from(truncate(&item.category, 28)),
                Cell::from(format_amount(item.budgeted)),
                Cell::from(format_amount(item.actual)),
            ];
            if let Some(progress) = item.progress {
                let color =
                    theme::progress_color(kind, progress.to_f64().unwrap_or(0.0));
                cells.push(Cell::from(Span::styled(
                    format_percent(progress),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )));
                cells.push(Cell::from(Span::styled(
                    progress_bar(progress, 20),
                    Style::default().fg(color),
                )));
            }
            Row::new(cells).style(style)
        })
        .collect();

    let widths: Vec<Constraint> = if tracks {
        vec![
            Constraint::Min(16),
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Length(9),
            Constraint::Length(22),
        ]
    } else {
        vec![
            Constraint::Min(16),
            Constraint::Length(14),
            Constraint::Length(14),
        ]
    };

    let title = format!(
        "{} - {} ({} item{})",
        kind.plural(),
        app.month,
        app.ledger.items(kind).len(),
        if app.ledger.items(kind).len() == 1 { "" } else { "s" }
    );
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .block(panel(&title));
    f.render_widget(table, area);
}

fn render_empty(f: &mut Frame, area: Rect, app: &App, kind: ListKind) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("No {} data added yet", kind.plural().to_lowercase()),
            theme::dim_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press a or use :add <category> <budgeted> <actual>",
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(panel(&format!("{} - {}", kind.plural(), app.month)));
    f.render_widget(msg, area);
}

fn render_totals(f: &mut Frame, area: Rect, app: &App, kind: ListKind) {
    let budgeted = app.ledger.total_budgeted(kind).unwrap_or_default();
    let actual = app.aggregates.total_for(kind);
    let line = Line::from(vec![
        Span::styled(" Budgeted ", theme::dim_style()),
        Span::styled(format_amount(budgeted), theme::normal_style()),
        Span::styled("   Actual ", theme::dim_style()),
        Span::styled(
            format_amount(actual),
            Style::default()
                .fg(theme::kind_color(kind))
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(line).block(panel("Totals")), area);
}
