#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;

// ── rupees ────────────────────────────────────────────────────

#[test]
fn test_rupees_below_a_thousand() {
    assert_eq!(rupees(dec!(0)), "₹0.00");
    assert_eq!(rupees(dec!(999.99)), "₹999.99");
    assert_eq!(rupees(dec!(1.5)), "₹1.50");
}

#[test]
fn test_rupees_thousands() {
    assert_eq!(rupees(dec!(1200)), "₹1,200.00");
    assert_eq!(rupees(dec!(50000)), "₹50,000.00");
}

#[test]
fn test_rupees_lakh_and_crore_grouping() {
    assert_eq!(rupees(dec!(100000)), "₹1,00,000.00");
    assert_eq!(rupees(dec!(1234567.89)), "₹12,34,567.89");
    assert_eq!(rupees(dec!(10000000)), "₹1,00,00,000.00");
}

#[test]
fn test_rupees_negative_remaining() {
    assert_eq!(rupees(dec!(-1250.5)), "-₹1,250.50");
    assert_eq!(rupees(dec!(-150)), "-₹150.00");
}

#[test]
fn test_rupees_rounds_paise() {
    assert_eq!(rupees(dec!(10.005)), "₹10.00");
    assert_eq!(rupees(dec!(10.015)), "₹10.02");
    assert_eq!(rupees(dec!(-0.001)), "₹0.00");
}

// ── due_label ─────────────────────────────────────────────────

#[test]
fn test_due_label() {
    let d = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
    assert_eq!(due_label(Some(d)), "2024-03-09");
    assert_eq!(due_label(None), "—");
}
