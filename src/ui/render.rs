use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use super::app::{App, InputMode, Screen};
use super::commands;
use super::theme;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Month + tabs
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(f.area());

    render_tab_bar(f, chunks[0], app);
    render_screen(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);
    render_command_bar(f, chunks[3], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let month_label = format!(" ◀ {} ▶ ", app.month);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(month_label.chars().count() as u16),
            Constraint::Min(10),
        ])
        .split(area);

    let month = Paragraph::new(Span::styled(
        month_label,
        Style::default()
            .fg(theme::BASE)
            .bg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
    ));
    f.render_widget(month, cols[0]);

    let titles: Vec<Line> = Screen::all()
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let label = format!("{}:{s}", i + 1);
            if *s == app.screen {
                Line::from(Span::styled(
                    label,
                    Style::default()
                        .fg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(label, theme::dim_style()))
            }
        })
        .collect();

    let tabs = Tabs::new(titles)
        .divider(Span::styled(" | ", Style::default().fg(theme::OVERLAY)))
        .style(Style::default().bg(theme::BASE));
    f.render_widget(tabs, cols[1]);
}

fn render_screen(f: &mut Frame, area: Rect, app: &App) {
    match app.screen {
        Screen::Dashboard => super::screens::dashboard::render(f, area, app),
        Screen::Debt => super::screens::debt::render(f, area, app),
        screen => {
            if let Some(kind) = screen.list_kind() {
                super::screens::items::render(f, area, app, kind);
            }
        }
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_bg = match app.input_mode {
        InputMode::Normal => theme::ACCENT,
        InputMode::Command | InputMode::Editing => theme::GREEN,
        InputMode::Confirm => theme::RED,
    };
    let mode_style = Style::default()
        .fg(theme::BASE)
        .bg(mode_bg)
        .add_modifier(Modifier::BOLD);

    let info = if app.ledger.is_empty() {
        format!(" {} | {} (no entries) ", app.screen, app.month)
    } else {
        format!(" {} | {} ", app.screen, app.month)
    };

    let right = match app.screen {
        Screen::Dashboard => " H/L month | 1-6 tabs | ? help ",
        Screen::Debt => " e edit | :debt <amount> | ? help ",
        _ => " a add | D delete | :clear | ? help ",
    };

    let used = mode_label.chars().count() + info.chars().count() + right.chars().count();
    let pad = (area.width as usize).saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(mode_label, mode_style),
        Span::styled(info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", Style::default().fg(theme::ACCENT)),
                Span::styled(app.command_input.as_str(), theme::command_bar_style()),
            ]),
            Some(1 + app.command_input.chars().count() as u16),
        ),
        InputMode::Editing => (
            Line::from(vec![
                Span::styled("debt> $", Style::default().fg(theme::GREEN)),
                Span::styled(app.command_input.as_str(), theme::command_bar_style()),
            ]),
            Some(7 + app.command_input.chars().count() as u16),
        ),
        InputMode::Confirm => (
            Line::from(vec![
                Span::styled(app.confirm_message.as_str(), Style::default().fg(theme::YELLOW)),
                Span::styled(" [y/N] ", Style::default().fg(theme::RED)),
            ]),
            None,
        ),
        InputMode::Normal if app.status_message.is_empty() => (
            Line::from(Span::styled(
                " Press : for commands, a to add, ? for help",
                theme::dim_style(),
            )),
            None,
        ),
        InputMode::Normal => (
            Line::from(Span::styled(
                app.status_message.as_str(),
                theme::command_bar_style(),
            )),
            None,
        ),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::COMMAND_BG));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

const KEY_HELP: &[(&str, &[&str])] = &[
    (
        "Navigation",
        &[
            "  1-6 / Tab        Switch tabs           H/L        Prev/Next month",
            "  j/k or Up/Down   Move cursor           g/G        Top/Bottom",
            "  Ctrl-q           Quit",
        ],
    ),
    (
        "Editing",
        &[
            "  a (list tabs)    Add an item           D          Delete selected item",
            "  e (Debt tab)     Edit debt payment     :          Command mode",
            "  Esc              Cancel                ?          This help",
        ],
    ),
];

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let section_style = Style::default()
        .fg(theme::YELLOW)
        .add_modifier(Modifier::BOLD);

    let mut help_text = vec![
        Line::from(Span::styled(
            " Budget Dash Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (section, lines) in KEY_HELP {
        help_text.push(Line::from(Span::styled(format!(" {section}"), section_style)));
        help_text.extend(
            lines
                .iter()
                .map(|l| Line::from(Span::styled(*l, theme::normal_style()))),
        );
        help_text.push(Line::from(""));
    }

    help_text.push(Line::from(Span::styled(" Commands", section_style)));
    // One line per command; aliases share a description
    let mut cmd_lines: Vec<(&str, &str)> = Vec::new();
    for (&name, cmd) in commands::COMMANDS.iter() {
        match cmd_lines.iter_mut().find(|(_, d)| *d == cmd.description) {
            Some(entry) if name.len() > entry.0.len() => entry.0 = name,
            Some(_) => {}
            None => cmd_lines.push((name, cmd.description)),
        }
    }
    cmd_lines.sort_by_key(|(name, _)| *name);
    for (name, desc) in &cmd_lines {
        help_text.push(Line::from(Span::styled(
            format!("  :{name:<12} {desc}"),
            theme::normal_style(),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        theme::dim_style(),
    )));

    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 76.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::BASE)),
    );
    f.render_widget(help, popup_area);
}
