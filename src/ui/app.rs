use crate::models::{ItemId, LineItem, ListKind, Month, MonthlyLedger};
use crate::store::{Aggregates, BudgetStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Income,
    Expenses,
    Bills,
    Savings,
    Debt,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[
            Self::Dashboard,
            Self::Income,
            Self::Expenses,
            Self::Bills,
            Self::Savings,
            Self::Debt,
        ]
    }

    /// The list a tab edits, if it edits one.
    pub(crate) fn list_kind(&self) -> Option<ListKind> {
        match self {
            Self::Income => Some(ListKind::Income),
            Self::Expenses => Some(ListKind::Expense),
            Self::Bills => Some(ListKind::Bill),
            Self::Savings => Some(ListKind::Saving),
            Self::Dashboard | Self::Debt => None,
        }
    }

    pub(crate) fn for_kind(kind: ListKind) -> Self {
        match kind {
            ListKind::Income => Self::Income,
            ListKind::Expense => Self::Expenses,
            ListKind::Bill => Self::Bills,
            ListKind::Saving => Self::Savings,
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Income => write!(f, "Income"),
            Self::Expenses => write!(f, "Expenses"),
            Self::Bills => write!(f, "Bills"),
            Self::Savings => write!(f, "Savings"),
            Self::Debt => write!(f, "Debt"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Editing,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Editing => write!(f, "EDIT"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Destructive action waiting for a y/N answer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PendingAction {
    DeleteItem {
        kind: ListKind,
        id: ItemId,
        category: String,
    },
    ClearList {
        kind: ListKind,
    },
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) month: Month,

    // Snapshot of the selected month, refreshed after every mutation
    pub(crate) ledger: MonthlyLedger,
    pub(crate) aggregates: Aggregates,

    // List tabs
    pub(crate) item_index: usize,
    pub(crate) item_scroll: usize,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(month: Month) -> Self {
        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            month,

            ledger: MonthlyLedger::default(),
            aggregates: Aggregates::default(),

            item_index: 0,
            item_scroll: 0,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    /// Re-reads the selected month from the store.
    pub(crate) fn refresh(&mut self, store: &mut BudgetStore) {
        self.ledger = store.select_month(self.month);
        self.aggregates = store.compute_aggregates(self.month);

        let len = self.current_items().len();
        if self.item_index >= len {
            self.item_index = len.saturating_sub(1);
        }
        if self.item_scroll > self.item_index {
            self.item_scroll = self.item_index;
        }
    }

    pub(crate) fn select_month(&mut self, store: &mut BudgetStore, month: Month) {
        self.month = month;
        self.reset_cursor();
        self.refresh(store);
    }

    pub(crate) fn switch_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            self.screen = screen;
            self.reset_cursor();
        }
    }

    /// Items of the list shown on the current tab; empty on other tabs.
    pub(crate) fn current_items(&self) -> &[LineItem] {
        self.screen
            .list_kind()
            .map(|kind| self.ledger.items(kind))
            .unwrap_or(&[])
    }

    pub(crate) fn selected_item(&self) -> Option<&LineItem> {
        self.current_items().get(self.item_index)
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    pub(crate) fn confirm(&mut self, message: String, action: PendingAction) {
        self.confirm_message = message;
        self.pending_action = Some(action);
        self.input_mode = InputMode::Confirm;
    }

    fn reset_cursor(&mut self) {
        self.item_index = 0;
        self.item_scroll = 0;
    }
}
