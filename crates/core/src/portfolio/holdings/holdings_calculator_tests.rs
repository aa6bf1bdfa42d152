use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::{CalculationError, Error};
use crate::market_data::DailyQuote;
use crate::portfolio::holdings::{
    calculate_held_quantities, merge_daily_series, DailyPositionInput,
};
use crate::transactions::TransactionTotals;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn row(day: &str, quantity: Decimal, split: Decimal, close: Decimal) -> DailyPositionInput {
    DailyPositionInput {
        date: date(day),
        ticker: "NVDA".to_string(),
        close,
        split_factor: split,
        transaction_quantity: quantity,
        transaction_value: Decimal::ZERO,
    }
}

/// Newest-first NVDA week with a 10:1 split on Jan 4 and two fills on Jan 6.
fn nvda_fixture() -> Vec<DailyPositionInput> {
    vec![
        row("2024-01-07", dec!(0), dec!(1), dec!(110)),
        row("2024-01-06", dec!(-1), dec!(1), dec!(100)),
        row("2024-01-06", dec!(3), dec!(1), dec!(95)),
        row("2024-01-05", dec!(0), dec!(1), dec!(100)),
        row("2024-01-04", dec!(0), dec!(10), dec!(90)),
        row("2024-01-03", dec!(3), dec!(1), dec!(1000)),
        row("2024-01-02", dec!(2), dec!(1), dec!(1100)),
        row("2024-01-01", dec!(0), dec!(1), dec!(1000)),
    ]
}

#[test]
fn split_compounds_prior_quantity() {
    let positions = calculate_held_quantities(&nvda_fixture()).unwrap();

    let held: Vec<Decimal> = positions.iter().map(|p| p.held_quantity).collect();
    assert_eq!(
        held,
        vec![
            dec!(52),
            dec!(52),
            dec!(53),
            dec!(50),
            dec!(50),
            dec!(5),
            dec!(2),
            dec!(0),
        ]
    );
}

#[test]
fn oldest_row_equals_its_own_delta() {
    let rows = vec![
        row("2024-01-03", dec!(1), dec!(1), dec!(10)),
        row("2024-01-02", dec!(0), dec!(1), dec!(10)),
        row("2024-01-01", dec!(4), dec!(1), dec!(10)),
    ];

    let positions = calculate_held_quantities(&rows).unwrap();
    assert_eq!(positions.last().unwrap().held_quantity, dec!(4));
    assert_eq!(positions[1].held_quantity, dec!(4));
    assert_eq!(positions[0].held_quantity, dec!(5));
}

#[test]
fn zero_split_factor_is_treated_as_no_split() {
    let rows = vec![
        row("2024-01-02", dec!(0), dec!(0), dec!(10)),
        row("2024-01-01", dec!(4), dec!(0), dec!(10)),
    ];

    let positions = calculate_held_quantities(&rows).unwrap();
    assert_eq!(positions[0].held_quantity, dec!(4));
}

#[test]
fn unsorted_input_is_rejected_with_no_output() {
    let rows = vec![
        row("2024-01-01", dec!(4), dec!(1), dec!(10)),
        row("2024-01-02", dec!(0), dec!(1), dec!(10)),
    ];

    let err = calculate_held_quantities(&rows).unwrap_err();
    assert!(matches!(
        err,
        Error::Calculation(CalculationError::UnsortedData { .. })
    ));
}

#[test]
fn empty_series_yields_empty_output() {
    assert!(calculate_held_quantities(&[]).unwrap().is_empty());
}

#[test]
fn merge_fills_quiet_days_with_zero_deltas() {
    let quotes = vec![
        DailyQuote {
            date: date("2024-01-02"),
            ticker: "NVDA".to_string(),
            close: dec!(1100),
            split_factor: dec!(1),
        },
        DailyQuote {
            date: date("2024-01-01"),
            ticker: "NVDA".to_string(),
            close: dec!(1000),
            split_factor: dec!(1),
        },
    ];
    let refs: Vec<&DailyQuote> = quotes.iter().collect();
    let mut totals = BTreeMap::new();
    totals.insert(
        date("2024-01-02"),
        TransactionTotals {
            quantity: dec!(2),
            value: dec!(-2200),
        },
    );

    let merged = merge_daily_series(&refs, &totals);
    assert_eq!(merged[0].transaction_quantity, dec!(2));
    assert_eq!(merged[0].transaction_value, dec!(-2200));
    assert_eq!(merged[1].transaction_quantity, dec!(0));
    assert_eq!(merged[1].transaction_value, dec!(0));
}
