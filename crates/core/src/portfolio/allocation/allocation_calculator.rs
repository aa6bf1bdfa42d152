//! End-of-period asset distribution.

use chrono::NaiveDate;
use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::portfolio::valuation::PositionValuation;

use super::AssetAllocation;

/// Computes each asset's value and percent share of the portfolio as of
/// `end_date`.
///
/// Closed positions (zero held quantity) are excluded. Percentages are
/// computed from unrounded values, then rounded alongside the values, so
/// the shares sum to 100 up to rounding; an all-zero total yields 0 percent
/// for every row. Output is sorted by value descending.
pub fn calculate_allocations(
    valuations: &[PositionValuation],
    end_date: NaiveDate,
) -> Vec<AssetAllocation> {
    let end_rows: Vec<&PositionValuation> = valuations
        .iter()
        .filter(|row| row.date == end_date && row.held_quantity != Decimal::zero())
        .collect();

    let total: Decimal = end_rows.iter().map(|row| row.market_value).sum();

    let mut allocations: Vec<AssetAllocation> = end_rows
        .iter()
        .map(|row| {
            let percent = if total == Decimal::zero() {
                Decimal::ZERO
            } else {
                (row.market_value / total * dec!(100)).round_dp(DISPLAY_DECIMAL_PRECISION)
            };
            AssetAllocation {
                ticker: row.ticker.clone(),
                quantity: row.held_quantity,
                value: row.market_value.round_dp(DISPLAY_DECIMAL_PRECISION),
                percent,
            }
        })
        .collect();

    allocations.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.ticker.cmp(&b.ticker)));

    debug!(
        "Computed distribution across {} open positions on {}",
        allocations.len(),
        end_date
    );

    allocations
}
