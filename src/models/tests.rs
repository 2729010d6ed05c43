#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::line_item::progress_percent;
use super::*;

// ── Month ─────────────────────────────────────────────────────

#[test]
fn test_month_parse_full_name() {
    assert_eq!(Month::parse("March"), Some(Month::March));
    assert_eq!(Month::parse("march"), Some(Month::March));
    assert_eq!(Month::parse("  DECEMBER "), Some(Month::December));
}

#[test]
fn test_month_parse_prefix_and_number() {
    assert_eq!(Month::parse("sep"), Some(Month::September));
    assert_eq!(Month::parse("Jan"), Some(Month::January));
    assert_eq!(Month::parse("1"), Some(Month::January));
    assert_eq!(Month::parse("12"), Some(Month::December));
}

#[test]
fn test_month_parse_rejects_garbage() {
    assert_eq!(Month::parse(""), None);
    assert_eq!(Month::parse("ju"), None);
    assert_eq!(Month::parse("0"), None);
    assert_eq!(Month::parse("13"), None);
    assert_eq!(Month::parse("smarch"), None);
}

#[test]
fn test_month_number_matches_position() {
    for (i, m) in Month::all().iter().enumerate() {
        assert_eq!(m.number() as usize, i + 1);
        assert_eq!(Month::from_number(m.number()), Some(*m));
    }
}

#[test]
fn test_month_next_prev_wrap() {
    assert_eq!(Month::December.next(), Month::January);
    assert_eq!(Month::January.prev(), Month::December);
    assert_eq!(Month::June.next(), Month::July);
    assert_eq!(Month::June.prev(), Month::May);
}

#[test]
fn test_month_display() {
    assert_eq!(format!("{}", Month::February), "February");
    assert_eq!(Month::all().len(), 12);
}

// ── ListKind ──────────────────────────────────────────────────

#[test]
fn test_list_kind_parse() {
    assert_eq!(ListKind::parse("income"), Some(ListKind::Income));
    assert_eq!(ListKind::parse("Expenses"), Some(ListKind::Expense));
    assert_eq!(ListKind::parse("BILL"), Some(ListKind::Bill));
    assert_eq!(ListKind::parse("savings"), Some(ListKind::Saving));
    assert_eq!(ListKind::parse("debt"), None);
}

#[test]
fn test_only_income_skips_progress() {
    assert!(!ListKind::Income.tracks_progress());
    assert!(ListKind::Expense.tracks_progress());
    assert!(ListKind::Bill.tracks_progress());
    assert!(ListKind::Saving.tracks_progress());
}

// ── Progress ──────────────────────────────────────────────────

#[test]
fn test_progress_three_quarters() {
    assert_eq!(progress_percent(dec!(200), dec!(150)), Some(dec!(75.0)));
}

#[test]
fn test_progress_zero_budget_is_zero() {
    assert_eq!(progress_percent(Decimal::ZERO, dec!(50)), Some(Decimal::ZERO));
    assert_eq!(progress_percent(Decimal::ZERO, Decimal::ZERO), Some(Decimal::ZERO));
}

#[test]
fn test_progress_rounds_to_one_place() {
    assert_eq!(progress_percent(dec!(3), dec!(1)), Some(dec!(33.3)));
    assert_eq!(progress_percent(dec!(3), dec!(2)), Some(dec!(66.7)));
}

#[test]
fn test_progress_can_exceed_hundred() {
    assert_eq!(progress_percent(dec!(100), dec!(250)), Some(dec!(250.0)));
}

#[test]
fn test_progress_overflow_is_none() {
    assert_eq!(progress_percent(dec!(0.0000000000000000000000000001), dec!(1)), None);
    assert_eq!(progress_percent(dec!(0.5), Decimal::MAX), None);
}

#[test]
fn test_line_item_progress_by_kind() {
    let income =
        LineItem::new(ItemId(1), ListKind::Income, "Salary".into(), dec!(200), dec!(150)).unwrap();
    assert!(income.progress.is_none());

    let bill =
        LineItem::new(ItemId(2), ListKind::Bill, "Rent".into(), dec!(200), dec!(150)).unwrap();
    assert_eq!(bill.progress, Some(dec!(75.0)));
}

#[test]
fn test_line_item_unrepresentable_progress() {
    let tiny = dec!(0.0000000000000000000000000001);
    assert!(LineItem::new(ItemId(1), ListKind::Expense, "X".into(), tiny, dec!(1)).is_none());
    // Income keeps no progress, so the same amounts are fine there.
    assert!(LineItem::new(ItemId(2), ListKind::Income, "X".into(), tiny, dec!(1)).is_some());
}

// ── MonthlyLedger ─────────────────────────────────────────────

#[test]
fn test_empty_ledger() {
    let ledger = MonthlyLedger::default();
    assert!(ledger.is_empty());
    assert_eq!(ledger.debt, Decimal::ZERO);
    for kind in ListKind::all() {
        assert!(ledger.items(*kind).is_empty());
        assert_eq!(ledger.total_actual(*kind), Some(Decimal::ZERO));
    }
}

#[test]
fn test_ledger_totals_per_kind() {
    let mut ledger = MonthlyLedger::default();
    ledger.expenses.push(LineItem::new(
        ItemId(1),
        ListKind::Expense,
        "Food".into(),
        dec!(400),
        dec!(320.50),
    )
    .unwrap());
    ledger.expenses.push(LineItem::new(
        ItemId(2),
        ListKind::Expense,
        "Fuel".into(),
        dec!(100),
        dec!(80),
    )
    .unwrap());
    assert!(!ledger.is_empty());
    assert_eq!(ledger.total_actual(ListKind::Expense), Some(dec!(400.50)));
    assert_eq!(ledger.total_budgeted(ListKind::Expense), Some(dec!(500)));
    assert_eq!(ledger.total_actual(ListKind::Bill), Some(Decimal::ZERO));
}

#[test]
fn test_ledger_total_overflow_is_none() {
    let mut ledger = MonthlyLedger::default();
    for id in 1..=2 {
        ledger.income.push(
            LineItem::new(ItemId(id), ListKind::Income, "Big".into(), Decimal::ZERO, Decimal::MAX)
                .unwrap(),
        );
    }
    assert_eq!(ledger.total_actual(ListKind::Income), None);
    assert_eq!(ledger.total_budgeted(ListKind::Income), Some(Decimal::ZERO));
}

#[test]
fn test_ledger_with_only_debt_is_not_empty() {
    let ledger = MonthlyLedger {
        debt: dec!(10),
        ..Default::default()
    };
    assert!(!ledger.is_empty());
}
