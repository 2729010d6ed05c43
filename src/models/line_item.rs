use rust_decimal::Decimal;

/// The four kinds of categorized lists a ledger holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Income,
    Expense,
    Bill,
    Saving,
}

impl ListKind {
    pub fn all() -> &'static [ListKind] {
        &[Self::Income, Self::Expense, Self::Bill, Self::Saving]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
            Self::Bill => "Bill",
            Self::Saving => "Saving",
        }
    }

    /// Plural label used for tabs and table titles.
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expenses",
            Self::Bill => "Bills",
            Self::Saving => "Savings",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" | "incomes" => Some(Self::Income),
            "expense" | "expenses" => Some(Self::Expense),
            "bill" | "bills" => Some(Self::Bill),
            "saving" | "savings" => Some(Self::Saving),
            _ => None,
        }
    }

    /// Income rows carry no progress figure.
    pub fn tracks_progress(&self) -> bool {
        !matches!(self, Self::Income)
    }
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifier handed out by the store when an item is inserted. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub id: ItemId,
    pub category: String,
    pub budgeted: Decimal,
    pub actual: Decimal,
    /// Snapshot taken at insertion; `None` for income.
    pub progress: Option<Decimal>,
}

impl LineItem {
    /// Builds an item, taking the progress snapshot for non-income kinds.
    /// Returns `None` when that percentage is too large to represent.
    pub fn new(
        id: ItemId,
        kind: ListKind,
        category: String,
        budgeted: Decimal,
        actual: Decimal,
    ) -> Option<Self> {
        let progress = if kind.tracks_progress() {
            Some(progress_percent(budgeted, actual)?)
        } else {
            None
        };
        Some(Self {
            id,
            category,
            budgeted,
            actual,
            progress,
        })
    }
}

/// `actual / budgeted * 100` rounded half-to-even to one decimal place, or zero
/// when nothing was budgeted. `None` if the ratio overflows `Decimal`.
pub fn progress_percent(budgeted: Decimal, actual: Decimal) -> Option<Decimal> {
    if budgeted <= Decimal::ZERO {
        return Some(Decimal::ZERO);
    }
    actual
        .checked_div(budgeted)?
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|pct| pct.round_dp(1))
}
