use rust_decimal::Decimal;

use super::{LineItem, ListKind};

/// Everything recorded for one month.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyLedger {
    pub income: Vec<LineItem>,
    pub expenses: Vec<LineItem>,
    pub bills: Vec<LineItem>,
    pub savings: Vec<LineItem>,
    pub debt: Decimal,
}

impl MonthlyLedger {
    pub fn items(&self, kind: ListKind) -> &[LineItem] {
        match kind {
            ListKind::Income => &self.income,
            ListKind::Expense => &self.expenses,
            ListKind::Bill => &self.bills,
            ListKind::Saving => &self.savings,
        }
    }

    pub(crate) fn items_mut(&mut self, kind: ListKind) -> &mut Vec<LineItem> {
        match kind {
            ListKind::Income => &mut self.income,
            ListKind::Expense => &mut self.expenses,
            ListKind::Bill => &mut self.bills,
            ListKind::Saving => &mut self.savings,
        }
    }

    /// Sum of `actual` over one list, `None` on overflow.
    pub fn total_actual(&self, kind: ListKind) -> Option<Decimal> {
        checked_sum(self.items(kind).iter().map(|i| i.actual))
    }

    pub fn total_budgeted(&self, kind: ListKind) -> Option<Decimal> {
        checked_sum(self.items(kind).iter().map(|i| i.budgeted))
    }

    pub fn is_empty(&self) -> bool {
        ListKind::all().iter().all(|k| self.items(*k).is_empty()) && self.debt.is_zero()
    }
}

pub(crate) fn checked_sum(amounts: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
}
