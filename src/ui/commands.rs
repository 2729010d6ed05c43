use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

use rust_decimal::Decimal;

use super::app::{App, InputMode, PendingAction, Screen};
use super::util::{format_amount, scroll_to_bottom};
use crate::models::{ListKind, Month};
use crate::store::BudgetStore;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut BudgetStore) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($registry:expr, $func:expr, $desc:expr, $($name:expr),+) => {{
        $(
            $registry.insert(
                $name,
                Command {
                    description: $desc,
                    run: $func,
                },
            );
        )+
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!(r, cmd_quit, "Quit Budget Dash", "q", "quit");
    register_command!(r, cmd_help, "Show available commands", "h", "help");
    register_command!(r, cmd_dashboard, "Go to Dashboard", "d", "dashboard");
    register_command!(
        r,
        cmd_income,
        "Go to Income, or add one (e.g. :income Salary 3000 3000)",
        "income"
    );
    register_command!(
        r,
        cmd_expense,
        "Go to Expenses, or add one (e.g. :expense Groceries 400 320)",
        "expense",
        "expenses"
    );
    register_command!(
        r,
        cmd_bill,
        "Go to Bills, or add one (e.g. :bill Rent 1200 1200)",
        "bill",
        "bills"
    );
    register_command!(
        r,
        cmd_saving,
        "Go to Savings, or add one (e.g. :saving Vacation 200 150)",
        "saving",
        "savings"
    );
    register_command!(
        r,
        cmd_add,
        "Add to the current list (e.g. :add Groceries 400 320)",
        "a",
        "add"
    );
    register_command!(r, cmd_delete, "Delete selected item", "delete", "del");
    register_command!(
        r,
        cmd_clear,
        "Clear a list (e.g. :clear, :clear bills)",
        "clear"
    );
    register_command!(
        r,
        cmd_debt,
        "Go to Debt, or set the payment (e.g. :debt 250)",
        "debt"
    );
    register_command!(
        r,
        cmd_month,
        "Select month (e.g. :month March, :m 3)",
        "m",
        "month"
    );
    register_command!(r, cmd_next_month, "Go to next month", "next-month");
    register_command!(r, cmd_prev_month, "Go to previous month", "prev-month");

    r
});

pub(crate) fn handle_command(
    input: &str,
    app: &mut App,
    store: &mut BudgetStore,
) -> anyhow::Result<()> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, store)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> &'static str {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1)
        .min_by_key(|k| (edit_distance(input, k), **k))
        .copied()
        .unwrap_or("help")
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ca != *cb);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diag + cost);
            diag = above;
        }
    }

    row[b.len()]
}

/// Parse a user-typed amount. Accepts `$` and thousands separators.
pub(crate) fn parse_amount(s: &str) -> Result<Decimal, String> {
    let cleaned: String = s
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    let amount = Decimal::from_str(&cleaned).map_err(|_| format!("Invalid amount: {s}"))?;
    if amount < Decimal::ZERO {
        return Err(format!("Amount cannot be negative: {s}"));
    }
    Ok(amount)
}

/// Split `<category words...> <budgeted> <actual>`.
pub(crate) fn parse_item_args(args: &str) -> Result<(String, Decimal, Decimal), String> {
    let parts: Vec<&str> = args.rsplitn(3, ' ').collect();
    if parts.len() < 3 || parts[2].trim().is_empty() {
        return Err("Usage: <category> <budgeted> <actual>".into());
    }
    let actual = parse_amount(parts[0])?;
    let budgeted = parse_amount(parts[1])?;
    Ok((parts[2].trim().to_string(), budgeted, actual))
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _store: &mut BudgetStore) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _store: &mut BudgetStore) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, _store: &mut BudgetStore) -> anyhow::Result<()> {
    app.switch_screen(Screen::Dashboard);
    Ok(())
}

fn cmd_income(args: &str, app: &mut App, store: &mut BudgetStore) -> anyhow::Result<()> {
    goto_or_add(ListKind::Income, args, app, store)
}

fn cmd_expense(args: &str, app: &mut App, store: &mut BudgetStore) -> anyhow::Result<()> {
    goto_or_add(ListKind::Expense, args, app, store)
}

fn cmd_bill(args: &str, app: &mut App, store: &mut BudgetStore) -> anyhow::Result<()> {
    goto_or_add(ListKind::Bill, args, app, store)
}

fn cmd_saving(args: &str, app: &mut App, store: &mut BudgetStore) -> anyhow::Result<()> {
    goto_or_add(ListKind::Saving, args, app, store)
}

fn goto_or_add(
    kind: ListKind,
    args: &str,
    app: &mut App,
    store: &mut BudgetStore,
) -> anyhow::Result<()> {
    app.switch_screen(Screen::for_kind(kind));
    if !args.is_empty() {
        add_item(kind, args, app, store);
    }
    Ok(())
}

fn cmd_add(args: &str, app: &mut App, store: &mut BudgetStore) -> anyhow::Result<()> {
    let Some(kind) = app.screen.list_kind() else {
        app.set_status("Switch to Income, Expenses, Bills or Savings first (or use :income, :expense, ...)");
        return Ok(());
    };
    if args.is_empty() {
        app.set_status("Usage: :add <category> <budgeted> <actual>. Example: :add Groceries 400 320");
        return Ok(());
    }
    add_item(kind, args, app, store);
    Ok(())
}

fn add_item(kind: ListKind, args: &str, app: &mut App, store: &mut BudgetStore) {
    let (category, budgeted, actual) = match parse_item_args(args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            app.set_status(msg);
            return;
        }
    };

    match store.add_item(app.month, kind, &category, budgeted, actual) {
        Ok(_) => {
            app.refresh(store);
            let len = app.current_items().len();
            scroll_to_bottom(&mut app.item_index, &mut app.item_scroll, len, app.visible_rows);
            app.set_status(format!("Added {category}"));
        }
        Err(e) => app.set_status(e.to_string()),
    }
}

fn cmd_delete(_args: &str, app: &mut App, _store: &mut BudgetStore) -> anyhow::Result<()> {
    let Some(kind) = app.screen.list_kind() else {
        app.set_status("Nothing to delete on this screen");
        return Ok(());
    };
    match app.selected_item() {
        Some(item) => {
            let action = PendingAction::DeleteItem {
                kind,
                id: item.id,
                category: item.category.clone(),
            };
            let message = format!("Delete '{}'?", item.category);
            app.confirm(message, action);
        }
        None => app.set_status(format!("No {} items to delete", kind.as_str().to_lowercase())),
    }
    Ok(())
}

fn cmd_clear(args: &str, app: &mut App, _store: &mut BudgetStore) -> anyhow::Result<()> {
    let kind = if args.is_empty() {
        app.screen.list_kind()
    } else {
        ListKind::parse(args)
    };
    let Some(kind) = kind else {
        app.set_status("Usage: :clear [income|expenses|bills|savings]");
        return Ok(());
    };
    app.switch_screen(Screen::for_kind(kind));
    app.confirm(
        format!("Clear all {} data for {}?", kind.plural().to_lowercase(), app.month),
        PendingAction::ClearList { kind },
    );
    Ok(())
}

fn cmd_debt(args: &str, app: &mut App, store: &mut BudgetStore) -> anyhow::Result<()> {
    app.switch_screen(Screen::Debt);
    if args.is_empty() {
        return Ok(());
    }
    set_debt(args, app, store);
    Ok(())
}

/// Shared by `:debt <amount>` and the inline debt editor.
pub(crate) fn set_debt(input: &str, app: &mut App, store: &mut BudgetStore) {
    let amount = match parse_amount(input) {
        Ok(a) => a,
        Err(msg) => {
            app.set_status(msg);
            return;
        }
    };
    match store.set_debt(app.month, amount) {
        Ok(()) => {
            app.refresh(store);
            app.set_status(format!("Debt updated to {}", format_amount(amount)));
        }
        Err(e) => app.set_status(e.to_string()),
    }
}

fn cmd_month(args: &str, app: &mut App, store: &mut BudgetStore) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status(format!("Current month: {}. Usage: :month <name>", app.month));
        return Ok(());
    }
    match Month::parse(args) {
        Some(month) => {
            app.select_month(store, month);
            app.set_status(format!("Switched to {month}"));
        }
        None => app.set_status(format!("Unknown month: {args}")),
    }
    Ok(())
}

fn cmd_next_month(_args: &str, app: &mut App, store: &mut BudgetStore) -> anyhow::Result<()> {
    let month = app.month.next();
    app.select_month(store, month);
    app.set_status(format!("Month: {month}"));
    Ok(())
}

fn cmd_prev_month(_args: &str, app: &mut App, store: &mut BudgetStore) -> anyhow::Result<()> {
    let month = app.month.prev();
    app.select_month(store, month);
    app.set_status(format!("Month: {month}"));
    Ok(())
}

/// Runs a confirmed [`PendingAction`] against the store.
pub(crate) fn apply_pending(action: PendingAction, app: &mut App, store: &mut BudgetStore) {
    match action {
        PendingAction::DeleteItem { kind, id, category } => {
            match store.remove_item(app.month, kind, id) {
                Ok(_) => app.set_status(format!("Deleted {category}")),
                Err(e) => app.set_status(e.to_string()),
            }
        }
        PendingAction::ClearList { kind } => {
            let count = store.clear_list(app.month, kind);
            app.set_status(format!(
                "Cleared {count} {} item{}",
                kind.as_str().to_lowercase(),
                if count == 1 { "" } else { "s" }
            ));
        }
    }
    app.refresh(store);
    app.input_mode = InputMode::Normal;
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
