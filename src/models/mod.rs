mod ledger;
mod line_item;
mod month;

pub(crate) use ledger::checked_sum;
pub use ledger::MonthlyLedger;
pub use line_item::{ItemId, LineItem, ListKind};
pub use month::Month;

#[cfg(test)]
mod tests;
