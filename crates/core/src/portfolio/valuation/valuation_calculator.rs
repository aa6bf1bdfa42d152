//! Daily position valuation.

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::portfolio::holdings::DailyPosition;

use super::PositionValuation;

/// Values every row exactly: `market_value = held_quantity * close`, one
/// output row per input row, pre-rounding.
pub fn calculate_market_values(positions: &[DailyPosition]) -> Vec<PositionValuation> {
    positions
        .iter()
        .map(|position| PositionValuation {
            date: position.date,
            ticker: position.ticker.clone(),
            held_quantity: position.held_quantity,
            market_value: position.held_quantity * position.close,
            transaction_value: position.transaction_value,
        })
        .collect()
}

/// Keeps the first row per (ticker, date) in current order.
///
/// On a newest-first series the first duplicate carries the day's final
/// accumulated state, so this collapses pre-aggregation noise to one
/// representative row. Data cleaning, not a financial computation.
pub fn collapse_daily_duplicates(rows: Vec<PositionValuation>) -> Vec<PositionValuation> {
    let mut seen: HashSet<(String, NaiveDate)> = HashSet::new();
    rows.into_iter()
        .filter(|row| seen.insert((row.ticker.clone(), row.date)))
        .collect()
}

/// Explicit postcondition sort: ticker ascending, date descending.
pub fn sort_standard(rows: &mut [PositionValuation]) {
    rows.sort_by(|a, b| {
        a.ticker
            .cmp(&b.ticker)
            .then_with(|| b.date.cmp(&a.date))
    });
}

/// Rounds every market value to the given number of decimal places.
/// Applied by callers whose output feeds reporting directly.
pub fn round_market_values(rows: &mut [PositionValuation], precision: u32) {
    for row in rows.iter_mut() {
        row.market_value = row.market_value.round_dp(precision);
    }
}

/// Total market value per date across the given rows, exact.
pub fn sum_values_by_date(
    rows: &[PositionValuation],
) -> std::collections::BTreeMap<NaiveDate, Decimal> {
    let mut totals = std::collections::BTreeMap::new();
    for row in rows {
        *totals.entry(row.date).or_insert(Decimal::ZERO) += row.market_value;
    }
    totals
}
