#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::util::*;

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_groups_thousands() {
    assert_eq!(format_amount(dec!(1234.56)), "$1,234.56");
    assert_eq!(format_amount(dec!(1234567.8)), "$1,234,567.80");
    assert_eq!(format_amount(dec!(100000)), "$100,000.00");
}

#[test]
fn test_format_amount_small_values() {
    assert_eq!(format_amount(Decimal::ZERO), "$0.00");
    assert_eq!(format_amount(dec!(7)), "$7.00");
    assert_eq!(format_amount(dec!(999.99)), "$999.99");
}

#[test]
fn test_format_amount_negative_left_to_spend() {
    assert_eq!(format_amount(dec!(-50)), "-$50.00");
    assert_eq!(format_amount(dec!(-2500.5)), "-$2,500.50");
}

// ── format_percent ────────────────────────────────────────────

#[test]
fn test_format_percent_one_place() {
    assert_eq!(format_percent(dec!(75.0)), "75.0%");
    assert_eq!(format_percent(Decimal::ZERO), "0.0%");
    assert_eq!(format_percent(dec!(133.3)), "133.3%");
}

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_fits() {
    assert_eq!(truncate("Rent", 10), "Rent");
    assert_eq!(truncate("Rent", 4), "Rent");
    assert_eq!(truncate("", 3), "");
}

#[test]
fn test_truncate_shortens_with_ellipsis() {
    assert_eq!(truncate("Emergency Fund", 6), "Emerg…");
    assert_eq!(truncate("Groceries", 1), "…");
    assert_eq!(truncate("Groceries", 0), "");
}

#[test]
fn test_truncate_multibyte() {
    assert_eq!(truncate("café crème", 5), "café…");
}

// ── progress_bar ──────────────────────────────────────────────

#[test]
fn test_progress_bar_fill() {
    assert_eq!(progress_bar(Decimal::ZERO, 4), "[░░░░]");
    assert_eq!(progress_bar(dec!(50), 4), "[██░░]");
    assert_eq!(progress_bar(dec!(100), 4), "[████]");
}

#[test]
fn test_progress_bar_clamps_overspend() {
    assert_eq!(progress_bar(dec!(250), 4), "[████]");
}

// ── scrolling ─────────────────────────────────────────────────

#[test]
fn test_scroll_down_moves_page() {
    let (mut index, mut scroll) = (0, 0);
    for _ in 0..4 {
        scroll_down(&mut index, &mut scroll, 10, 3);
    }
    assert_eq!(index, 4);
    assert_eq!(scroll, 2);
}

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (1, 0);
    scroll_down(&mut index, &mut scroll, 2, 5);
    assert_eq!(index, 1);
}

#[test]
fn test_scroll_up_pulls_scroll_back() {
    let (mut index, mut scroll) = (3, 3);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (2, 2));
    let (mut index, mut scroll) = (0, 0);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_scroll_to_bottom() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 10, 4);
    assert_eq!((index, scroll), (9, 6));
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 0, 4);
    assert_eq!((index, scroll), (0, 0));
}
