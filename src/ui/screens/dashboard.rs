use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Cell, Paragraph, Row, Table},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::panel;
use crate::models::ListKind;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_percent, progress_bar, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),  // Summary cards
            Constraint::Length(9),  // Left to spend + charts
            Constraint::Min(6),     // Detail tables
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);
    render_charts(f, chunks[1], app);
    render_details(f, chunks[2], app);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(area);

    for (i, kind) in ListKind::all().iter().enumerate() {
        let count = app.ledger.items(*kind).len();
        render_card(
            f,
            cards[i],
            kind.plural(),
            app.aggregates.total_for(*kind),
            theme::kind_color(*kind),
            format!("{count} item{}", if count == 1 { "" } else { "s" }),
        );
    }
    render_card(
        f,
        cards[4],
        "Debt",
        app.aggregates.total_debt,
        theme::RED,
        "payment".into(),
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, amount: Decimal, color: Color, sub: String) {
    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            format_amount(amount),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(sub, theme::dim_style())),
    ])
    .centered()
    .block(panel(title));
    f.render_widget(text, area);
}

fn render_charts(f: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(26),
            Constraint::Percentage(40),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_left_to_spend(f, cols[0], app);
    render_cash_flow(f, cols[1], app);
    render_allocation(f, cols[2], app);
}

fn render_left_to_spend(f: &mut Frame, area: Rect, app: &App) {
    let color = theme::balance_color(app.aggregates.is_overspent());
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            format_amount(app.aggregates.left_to_spend),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Available", theme::dim_style())),
    ])
    .centered()
    .block(panel("Amount Left to Spend"));
    f.render_widget(text, area);
}

fn render_cash_flow(f: &mut Frame, area: Rect, app: &App) {
    if !app.aggregates.has_cash_flow() {
        render_placeholder(f, area, "Cash Flow Summary", "Add income and expenses to see chart");
        return;
    }

    let bars: Vec<Bar> = app
        .aggregates
        .cash_flow()
        .iter()
        .map(|(label, amount)| {
            Bar::default()
                .value(amount.to_u64().unwrap_or(0))
                .text_value(format_amount(*amount))
                .label(Line::from(*label))
                .style(Style::default().fg(theme::ACCENT))
                .value_style(Style::default().fg(theme::BASE).bg(theme::ACCENT))
        })
        .collect();

    let chart = BarChart::default()
        .block(panel("Cash Flow Summary"))
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(0)
        .label_style(theme::normal_style());
    f.render_widget(chart, area);
}

fn render_allocation(f: &mut Frame, area: Rect, app: &App) {
    let slices = app.aggregates.allocation();
    if slices.is_empty() {
        render_placeholder(f, area, "Allocation Summary", "Add data to see allocation chart");
        return;
    }

    let bar_width = (area.width as usize).saturating_sub(28).clamp(4, 20);
    let lines: Vec<Line> = slices
        .iter()
        .zip(theme::ALLOCATION.iter().cycle())
        .map(|(slice, color)| {
            Line::from(vec![
                Span::styled(format!(" {:<9}", slice.label), theme::normal_style()),
                Span::styled(progress_bar(slice.share, bar_width), Style::default().fg(*color)),
                Span::styled(
                    format!(" {:>6}", format_percent(slice.share)),
                    Style::default().fg(*color).add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(panel("Allocation Summary")), area);
}

fn render_placeholder(f: &mut Frame, area: Rect, title: &str, hint: &str) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(hint.to_string(), theme::dim_style())),
    ])
    .centered()
    .block(panel(title));
    f.render_widget(msg, area);
}

fn render_details(f: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(cols[0]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(cols[1]);

    render_detail_table(f, left[0], app, ListKind::Income);
    render_detail_table(f, left[1], app, ListKind::Bill);
    render_detail_table(f, right[0], app, ListKind::Expense);
    render_detail_table(f, right[1], app, ListKind::Saving);
}

fn render_detail_table(f: &mut Frame, area: Rect, app: &App, kind: ListKind) {
    let title = format!("{} Details", kind.plural());
    let items = app.ledger.items(kind);
    if items.is_empty() {
        let hint = format!("No {} data added yet", kind.plural().to_lowercase());
        let msg = Paragraph::new(Line::from(Span::styled(hint, theme::dim_style())))
            .centered()
            .block(panel(&title));
        f.render_widget(msg, area);
        return;
    }

    let mut header = vec!["Category", "Budgeted", "Actual"];
    if kind.tracks_progress() {
        header.push("Progress");
    }

    let rows: Vec<Row> = items
        .iter()
        .take(area.height.saturating_sub(3) as usize)
        .map(|item| {
            let mut cells = vec![
                Cell::from(truncate(&item.category, 18)),
                Cell::from(format_amount(item.budgeted)),
                Cell::from(format_amount(item.actual)),
            ];
            if let Some(progress) = item.progress {
                cells.push(Cell::from(format_percent(progress)));
            }
            Row::new(cells).style(theme::normal_style())
        })
        .collect();

    let mut widths = vec![
        Constraint::Min(10),
        Constraint::Length(12),
        Constraint::Length(12),
    ];
    if kind.tracks_progress() {
        widths.push(Constraint::Length(9));
    }

    let table = Table::new(rows, widths)
        .header(Row::new(header).style(theme::header_row_style()))
        .block(panel(&title));
    f.render_widget(table, area);
}
