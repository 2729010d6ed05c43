use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::info;

use crate::models::Month;
use crate::store::BudgetStore;
use crate::ui::app::{App, InputMode, Screen};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_up};

/// Runs one interactive session. The store lives exactly as long as this call.
pub(crate) fn as_tui(month: Month) -> Result<()> {
    let mut store = BudgetStore::new();
    let mut app = App::new(month);
    app.refresh(&mut store);
    info!(%month, "session started");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &mut store);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(months = store.ledger_count(), "session ended, discarding ledgers");
    if let Err(ref e) = result {
        tracing::error!("session failed: {e:?}");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    store: &mut BudgetStore,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // tab bar, status bar, command bar, panel borders and table header
            let content_height = f.area().height.saturating_sub(10) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, store)?,
                InputMode::Command => handle_command_input(key, app, store)?,
                InputMode::Editing => handle_editing_input(key, app, store),
                InputMode::Confirm => handle_confirm_input(key, app, store),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(
    key: event::KeyEvent,
    app: &mut App,
    store: &mut BudgetStore,
) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char(':') => start_command(app, ""),
        KeyCode::Char('a') if app.screen.list_kind().is_some() => start_command(app, "add "),
        KeyCode::Char('e') if app.screen == Screen::Debt => {
            app.command_input = app.ledger.debt.to_string();
            app.input_mode = InputMode::Editing;
            app.set_status("Type the new debt payment, Enter to save");
        }
        KeyCode::Char('D') | KeyCode::Delete => commands::handle_command("delete", app, store)?,
        KeyCode::Char('j') | KeyCode::Down => {
            let len = app.current_items().len();
            scroll_down(&mut app.item_index, &mut app.item_scroll, len, app.visible_rows);
        }
        KeyCode::Char('k') | KeyCode::Up => scroll_up(&mut app.item_index, &mut app.item_scroll),
        KeyCode::Char('g') => {
            app.item_index = 0;
            app.item_scroll = 0;
        }
        KeyCode::Char('G') => {
            let len = app.current_items().len();
            scroll_to_bottom(&mut app.item_index, &mut app.item_scroll, len, app.visible_rows);
        }
        KeyCode::Char(c @ '1'..='6') => {
            let idx = c as usize - '1' as usize;
            if let Some(screen) = Screen::all().get(idx) {
                app.switch_screen(*screen);
            }
        }
        KeyCode::Tab => cycle_screen(app, 1),
        KeyCode::BackTab => cycle_screen(app, -1),
        KeyCode::Char('H') | KeyCode::Left => commands::handle_command("prev-month", app, store)?,
        KeyCode::Char('L') | KeyCode::Right => commands::handle_command("next-month", app, store)?,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Esc => app.status_message.clear(),
        _ => {}
    }
    Ok(())
}

fn handle_command_input(
    key: event::KeyEvent,
    app: &mut App,
    store: &mut BudgetStore,
) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = std::mem::take(&mut app.command_input);
            app.input_mode = InputMode::Normal;
            commands::handle_command(&input, app, store)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.command_input.clear();
        }
        KeyCode::Char(c) => app.command_input.push(c),
        _ => {}
    }
    Ok(())
}

fn handle_editing_input(key: event::KeyEvent, app: &mut App, store: &mut BudgetStore) {
    match key.code {
        KeyCode::Enter => {
            let input = std::mem::take(&mut app.command_input);
            app.input_mode = InputMode::Normal;
            if !input.trim().is_empty() {
                commands::set_debt(&input, app, store);
            }
        }
        KeyCode::Esc => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
            app.set_status("Edit cancelled");
        }
        KeyCode::Backspace => {
            app.command_input.pop();
        }
        KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, '.' | ',' | '$') => {
            app.command_input.push(c);
        }
        _ => {}
    }
}

fn handle_confirm_input(key: event::KeyEvent, app: &mut App, store: &mut BudgetStore) {
    let confirmed = matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y'));
    let action = app.pending_action.take();
    app.confirm_message.clear();
    app.input_mode = InputMode::Normal;

    match action {
        Some(action) if confirmed => commands::apply_pending(action, app, store),
        _ => app.set_status("Cancelled"),
    }
}

// ── Navigation helpers ───────────────────────────────────────

fn start_command(app: &mut App, prefill: &str) {
    app.command_input = prefill.to_string();
    app.input_mode = InputMode::Command;
}

fn cycle_screen(app: &mut App, step: isize) {
    let screens = Screen::all();
    let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
    let next = (idx as isize + step).rem_euclid(screens.len() as isize) as usize;
    app.switch_screen(screens[next]);
}
