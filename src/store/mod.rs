mod aggregates;
mod error;

pub use aggregates::Aggregates;
pub use error::{Result, StoreError};

use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::models::{ItemId, LineItem, ListKind, Month, MonthlyLedger};

/// All ledgers of one interactive session. Created empty at startup and dropped
/// when the session ends; nothing is written to disk.
#[derive(Debug, Default)]
pub struct BudgetStore {
    ledgers: HashMap<Month, MonthlyLedger>,
    next_id: u64,
}

impl BudgetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the month's ledger, creating an empty one on first access.
    /// An existing ledger is never reset.
    pub fn get_or_create_ledger(&mut self, month: Month) -> &MonthlyLedger {
        self.ledger_mut(month)
    }

    /// Snapshot of the month's ledger for display.
    pub fn select_month(&mut self, month: Month) -> MonthlyLedger {
        self.get_or_create_ledger(month).clone()
    }

    pub fn ledger(&self, month: Month) -> Option<&MonthlyLedger> {
        self.ledgers.get(&month)
    }

    pub fn ledger_count(&self) -> usize {
        self.ledgers.len()
    }

    pub fn add_item(
        &mut self,
        month: Month,
        kind: ListKind,
        category: &str,
        budgeted: Decimal,
        actual: Decimal,
    ) -> Result<ItemId> {
        let category = category.trim();
        let id = ItemId(self.next_id + 1);
        let staged = validate_item(category, budgeted, actual)
            .and_then(|()| {
                LineItem::new(id, kind, category.to_string(), budgeted, actual).ok_or_else(|| {
                    StoreError::Validation(format!(
                        "Progress for {category} is too large to track: {actual} of {budgeted}"
                    ))
                })
            })
            .and_then(|item| self.stage(month, |ledger| ledger.items_mut(kind).push(item)));
        if let Err(e) = staged {
            warn!(%month, %kind, error = %e, "rejected item");
            return Err(e);
        }

        self.next_id += 1;
        debug!(%month, %kind, %id, category, %budgeted, %actual, "added item");
        Ok(id)
    }

    /// Removes the item with `id`. Items after it move up one position.
    pub fn remove_item(&mut self, month: Month, kind: ListKind, id: ItemId) -> Result<LineItem> {
        let found = self.ledgers.get_mut(&month).and_then(|ledger| {
            let items = ledger.items_mut(kind);
            items
                .iter()
                .position(|i| i.id == id)
                .map(|pos| items.remove(pos))
        });
        let Some(removed) = found else {
            warn!(%month, %kind, %id, "remove of unknown item");
            return Err(StoreError::ItemNotFound { kind, id });
        };
        debug!(%month, %kind, %id, category = %removed.category, "removed item");
        Ok(removed)
    }

    /// Empties one list and returns how many items it held.
    pub fn clear_list(&mut self, month: Month, kind: ListKind) -> usize {
        let items = self.ledger_mut(month).items_mut(kind);
        let count = items.len();
        items.clear();
        debug!(%month, %kind, count, "cleared list");
        count
    }

    pub fn set_debt(&mut self, month: Month, amount: Decimal) -> Result<()> {
        if amount < Decimal::ZERO {
            warn!(%month, %amount, "rejected negative debt");
            return Err(StoreError::Validation(format!(
                "Debt cannot be negative: {amount}"
            )));
        }
        if let Err(e) = self.stage(month, |ledger| ledger.debt = amount) {
            warn!(%month, %amount, error = %e, "rejected debt");
            return Err(e);
        }
        debug!(%month, %amount, "set debt");
        Ok(())
    }

    /// Totals for `month`. Never creates a ledger; an unseen month is all zeros.
    pub fn compute_aggregates(&self, month: Month) -> Aggregates {
        // Every stored ledger passed `check_totals`, so `from_ledger` succeeds.
        self.ledger(month)
            .and_then(Aggregates::from_ledger)
            .unwrap_or_default()
    }

    /// Applies `change` to a copy of the month's ledger and keeps the copy only
    /// if every total still fits in a `Decimal`. Only additive changes go
    /// through here; removals cannot push a total out of range.
    fn stage(&mut self, month: Month, change: impl FnOnce(&mut MonthlyLedger)) -> Result<()> {
        let mut draft = self.ledgers.get(&month).cloned().unwrap_or_default();
        change(&mut draft);
        check_totals(&draft)?;
        if self.ledgers.insert(month, draft).is_none() {
            debug!(%month, "created ledger");
        }
        Ok(())
    }

    fn ledger_mut(&mut self, month: Month) -> &mut MonthlyLedger {
        self.ledgers.entry(month).or_insert_with(|| {
            debug!(%month, "created ledger");
            MonthlyLedger::default()
        })
    }
}

fn validate_item(category: &str, budgeted: Decimal, actual: Decimal) -> Result<()> {
    if category.is_empty() {
        return Err(StoreError::Validation("Category cannot be empty".into()));
    }
    if budgeted < Decimal::ZERO {
        return Err(StoreError::Validation(format!(
            "Budgeted amount cannot be negative: {budgeted}"
        )));
    }
    if actual < Decimal::ZERO {
        return Err(StoreError::Validation(format!(
            "Actual amount cannot be negative: {actual}"
        )));
    }
    Ok(())
}

fn check_totals(ledger: &MonthlyLedger) -> Result<()> {
    let budgeted_fits = ListKind::all()
        .iter()
        .all(|kind| ledger.total_budgeted(*kind).is_some());
    if budgeted_fits && Aggregates::from_ledger(ledger).is_some() {
        Ok(())
    } else {
        Err(StoreError::Validation(
            "Amount too large: monthly totals would overflow".into(),
        ))
    }
}
