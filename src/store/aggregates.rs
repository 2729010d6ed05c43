use rust_decimal::Decimal;

use crate::models::{checked_sum, ListKind, MonthlyLedger};

/// Totals derived from one ledger. Recomputed on every read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregates {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub total_bills: Decimal,
    pub total_savings: Decimal,
    pub total_debt: Decimal,
    pub left_to_spend: Decimal,
}

impl Aggregates {
    /// Totals for `ledger`, or `None` if any of them (or the combined outflow)
    /// does not fit in a `Decimal`.
    pub fn from_ledger(ledger: &MonthlyLedger) -> Option<Self> {
        let total_income = ledger.total_actual(ListKind::Income)?;
        let total_expenses = ledger.total_actual(ListKind::Expense)?;
        let total_bills = ledger.total_actual(ListKind::Bill)?;
        let total_savings = ledger.total_actual(ListKind::Saving)?;
        let total_debt = ledger.debt;
        let left_to_spend = total_income
            .checked_sub(total_expenses)?
            .checked_sub(total_bills)?
            .checked_sub(total_savings)?
            .checked_sub(total_debt)?;
        let aggregates = Self {
            total_income,
            total_expenses,
            total_bills,
            total_savings,
            total_debt,
            left_to_spend,
        };
        aggregates.outflow()?;
        Some(aggregates)
    }

    pub fn total_for(&self, kind: ListKind) -> Decimal {
        match kind {
            ListKind::Income => self.total_income,
            ListKind::Expense => self.total_expenses,
            ListKind::Bill => self.total_bills,
            ListKind::Saving => self.total_savings,
        }
    }

    pub fn is_overspent(&self) -> bool {
        self.left_to_spend < Decimal::ZERO
    }

    /// Labelled totals for the cash-flow chart, income first.
    pub fn cash_flow(&self) -> [(&'static str, Decimal); 5] {
        [
            ("Income", self.total_income),
            ("Expenses", self.total_expenses),
            ("Bills", self.total_bills),
            ("Savings", self.total_savings),
            ("Debt", self.total_debt),
        ]
    }

    pub fn has_cash_flow(&self) -> bool {
        self.total_income > Decimal::ZERO || self.total_expenses > Decimal::ZERO
    }

    fn outflows(&self) -> [(&'static str, Decimal); 4] {
        [
            ("Expenses", self.total_expenses),
            ("Bills", self.total_bills),
            ("Savings", self.total_savings),
            ("Debt", self.total_debt),
        ]
    }

    fn outflow(&self) -> Option<Decimal> {
        checked_sum(self.outflows().map(|(_, amount)| amount))
    }

    /// Outflows with a positive amount and their share of all outflows, in percent.
    pub fn allocation(&self) -> Vec<AllocationSlice> {
        let Some(outflow) = self.outflow().filter(|o| *o > Decimal::ZERO) else {
            return Vec::new();
        };

        self.outflows()
            .into_iter()
            .filter(|(_, amount)| *amount > Decimal::ZERO)
            .filter_map(|(label, amount)| {
                let share = amount
                    .checked_div(outflow)?
                    .checked_mul(Decimal::ONE_HUNDRED)?
                    .round_dp(1);
                Some(AllocationSlice {
                    label,
                    amount,
                    share,
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AllocationSlice {
    pub label: &'static str,
    pub amount: Decimal,
    pub share: Decimal,
}
