//! Property-based integration tests for the portfolio engine.
//!
//! These tests verify that the reconstruction invariants hold across all
//! valid inputs, using the `proptest` crate for random test case generation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use foliotrack_core::portfolio::allocation::calculate_allocations;
use foliotrack_core::portfolio::holdings::{calculate_held_quantities, DailyPositionInput};
use foliotrack_core::portfolio::performance::{
    calculate_gain_series, CashFlowPoint, SeriesRole,
};
use foliotrack_core::portfolio::valuation::{calculate_market_values, PositionValuation};
use foliotrack_core::{
    model_portfolio, DailyQuote, Dividend, PortfolioData, PortfolioSettings, Transaction,
    TransactionSide,
};

// =============================================================================
// Generators
// =============================================================================

/// One generated day: (transaction quantity delta, split factor, close).
type DaySpec = (i32, u32, u32);

fn arb_day() -> impl Strategy<Value = DaySpec> {
    (
        -10i32..=10,
        prop_oneof![Just(1u32), Just(1), Just(1), Just(2), Just(10)],
        1u32..=1000,
    )
}

fn arb_days() -> impl Strategy<Value = Vec<DaySpec>> {
    proptest::collection::vec(arb_day(), 1..=40)
}

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// Builds a newest-first single-ticker series from generated day specs.
fn build_rows(days: &[DaySpec]) -> Vec<DailyPositionInput> {
    let base = base_date();
    days.iter()
        .enumerate()
        .map(|(offset, (delta, split, close))| DailyPositionInput {
            date: base + chrono::Days::new((days.len() - 1 - offset) as u64),
            ticker: "TEST".to_string(),
            close: Decimal::from(*close),
            split_factor: Decimal::from(*split),
            transaction_quantity: Decimal::from(*delta),
            transaction_value: Decimal::from(-delta * (*close as i32)),
        })
        .collect()
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The oldest row's held quantity always equals its own delta.
    #[test]
    fn prop_oldest_held_quantity_equals_delta(days in arb_days()) {
        let rows = build_rows(&days);
        let positions = calculate_held_quantities(&rows).unwrap();

        let oldest = positions.last().unwrap();
        prop_assert_eq!(oldest.held_quantity, oldest.transaction_quantity);
    }

    /// Every newer row obeys `held = delta + previous_held * split`.
    #[test]
    fn prop_recurrence_holds_for_every_row(days in arb_days()) {
        let rows = build_rows(&days);
        let positions = calculate_held_quantities(&rows).unwrap();

        for index in 0..positions.len().saturating_sub(1) {
            let today = &positions[index];
            let yesterday = &positions[index + 1];
            prop_assert_eq!(
                today.held_quantity,
                today.transaction_quantity
                    + yesterday.held_quantity * today.split_factor
            );
        }
    }

    /// Market value is the exact quantity/price product, pre-rounding.
    #[test]
    fn prop_market_value_is_exact_product(days in arb_days()) {
        let rows = build_rows(&days);
        let positions = calculate_held_quantities(&rows).unwrap();
        let valued = calculate_market_values(&positions);

        for (position, valuation) in positions.iter().zip(valued.iter()) {
            prop_assert_eq!(
                valuation.market_value,
                position.held_quantity * position.close
            );
        }
    }

    /// The earliest date's gains are always forced to zero, and a zero
    /// money-out denominator never produces an error.
    #[test]
    fn prop_earliest_gain_is_always_zero(days in arb_days()) {
        let rows = build_rows(&days);
        let positions = calculate_held_quantities(&rows).unwrap();
        let valued = calculate_market_values(&positions);

        let points: Vec<CashFlowPoint> = valued
            .iter()
            .map(|row| CashFlowPoint {
                date: row.date,
                market_value: row.market_value,
                cash_flow: row.transaction_value,
            })
            .collect();
        let gains = calculate_gain_series(&points, SeriesRole::Asset).unwrap();

        let earliest = gains.last().unwrap();
        prop_assert_eq!(earliest.absolute_gain, Decimal::ZERO);
        prop_assert_eq!(earliest.percent_gain, Decimal::ZERO);

        for point in &gains {
            if point.money_out.is_zero() {
                prop_assert_eq!(point.percent_gain, Decimal::ZERO);
            }
        }
    }

    /// Money out/in are the running signed-flow sums at every date.
    #[test]
    fn prop_gain_matches_running_flow_sums(days in arb_days()) {
        let rows = build_rows(&days);
        let positions = calculate_held_quantities(&rows).unwrap();
        let valued = calculate_market_values(&positions);

        let points: Vec<CashFlowPoint> = valued
            .iter()
            .map(|row| CashFlowPoint {
                date: row.date,
                market_value: row.market_value,
                cash_flow: row.transaction_value,
            })
            .collect();
        let gains = calculate_gain_series(&points, SeriesRole::Asset).unwrap();

        for (index, gain) in gains.iter().enumerate() {
            let expected_out: Decimal = points[index..]
                .iter()
                .map(|p| p.cash_flow.min(Decimal::ZERO))
                .sum();
            let expected_deposits: Decimal = points[index..]
                .iter()
                .map(|p| p.cash_flow.max(Decimal::ZERO))
                .sum();
            prop_assert_eq!(gain.money_out, expected_out);
            prop_assert_eq!(gain.money_in, points[index].market_value + expected_deposits);
        }
    }

    /// Distribution percentages sum to 100 within rounding for any set of
    /// open positions with a positive total.
    #[test]
    fn prop_allocation_percentages_sum_to_hundred(
        values in proptest::collection::vec((1u32..=10, 1u32..=100_000), 1..=12)
    ) {
        let end = base_date();
        let valuations: Vec<PositionValuation> = values
            .iter()
            .enumerate()
            .map(|(index, (quantity, cents))| PositionValuation {
                date: end,
                ticker: format!("T{index:02}"),
                held_quantity: Decimal::from(*quantity),
                market_value: Decimal::from(*cents) / dec!(100),
                transaction_value: Decimal::ZERO,
            })
            .collect();

        let allocations = calculate_allocations(&valuations, end);

        prop_assert_eq!(allocations.len(), valuations.len());
        let sum: Decimal = allocations.iter().map(|a| a.percent).sum();
        let tolerance = dec!(0.01) * Decimal::from(allocations.len() as i64);
        prop_assert!((sum - dec!(100)).abs() <= tolerance);
    }
}

// =============================================================================
// Idempotence
// =============================================================================

fn engine_fixture() -> (
    PortfolioData,
    Vec<DailyQuote>,
    Vec<Dividend>,
    Vec<DailyQuote>,
    PortfolioSettings,
) {
    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }
    fn quotes(ticker: &str, closes: &[(&str, Decimal)]) -> Vec<DailyQuote> {
        closes
            .iter()
            .map(|(day, close)| DailyQuote {
                date: date(day),
                ticker: ticker.to_string(),
                close: *close,
                split_factor: dec!(1),
            })
            .collect()
    }

    let transactions = vec![
        Transaction::new(
            date("2024-01-01"),
            "NVDA",
            TransactionSide::Buy,
            dec!(10),
            dec!(1000),
        ),
        Transaction::new(
            date("2024-01-03"),
            "NVDA",
            TransactionSide::Sell,
            dec!(4),
            dec!(460),
        ),
    ];
    let data = PortfolioData::new(transactions, date("2024-01-04")).unwrap();

    let asset_quotes = quotes(
        "NVDA",
        &[
            ("2024-01-04", dec!(118)),
            ("2024-01-03", dec!(115)),
            ("2024-01-02", dec!(108)),
            ("2024-01-01", dec!(100)),
        ],
    );
    let dividends = vec![
        Dividend {
            ex_date: date("2024-01-03"),
            ticker: "NVDA".to_string(),
            amount_per_share: dec!(0.25),
        },
        Dividend {
            ex_date: date("2024-01-02"),
            ticker: "NVDA".to_string(),
            amount_per_share: dec!(0.25),
        },
    ];
    let benchmark_quotes = quotes(
        "BENCH",
        &[
            ("2024-01-04", dec!(52)),
            ("2024-01-03", dec!(51)),
            ("2024-01-02", dec!(50)),
            ("2024-01-01", dec!(50)),
        ],
    );
    let settings = PortfolioSettings::new(date("2024-01-01"), Some(date("2024-01-04")), "BENCH");

    (data, asset_quotes, dividends, benchmark_quotes, settings)
}

/// Re-running the full engine on unchanged inputs yields byte-identical
/// output tables.
#[test]
fn rerunning_the_engine_is_byte_identical() {
    let (data, asset_quotes, dividends, benchmark_quotes, settings) = engine_fixture();

    let first =
        model_portfolio(&data, &asset_quotes, &dividends, &benchmark_quotes, &settings).unwrap();
    let second =
        model_portfolio(&data, &asset_quotes, &dividends, &benchmark_quotes, &settings).unwrap();

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);
    assert_eq!(first, second);
}
