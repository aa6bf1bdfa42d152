//! Daily held-quantity reconstruction.
//!
//! The recurrence walks a newest-first series from its oldest row forward:
//! a split on day D multiplies the quantity accumulated before D, then that
//! day's transaction delta (already post-split at the source) is added on
//! top. The scan is positional, so duplicate-date rows flow through one by
//! one and are collapsed by the valuation stage.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use crate::errors::{CalculationError, Result};
use crate::market_data::DailyQuote;
use crate::transactions::TransactionTotals;
use crate::utils::time_utils::is_monotonic_decreasing;

use super::{DailyPosition, DailyPositionInput};

/// Left-joins one ticker's newest-first quotes with that ticker's per-day
/// transaction totals. Days without a transaction get zero deltas.
pub fn merge_daily_series(
    quotes: &[&DailyQuote],
    daily_totals: &BTreeMap<NaiveDate, TransactionTotals>,
) -> Vec<DailyPositionInput> {
    quotes
        .iter()
        .map(|quote| {
            let totals = daily_totals.get(&quote.date).copied().unwrap_or_default();
            DailyPositionInput {
                date: quote.date,
                ticker: quote.ticker.clone(),
                close: quote.close,
                split_factor: quote.split_factor,
                transaction_quantity: totals.quantity,
                transaction_value: totals.value,
            }
        })
        .collect()
}

/// Reconstructs the held quantity for every row of a newest-first series.
///
/// Oldest row: its own transaction delta. Every newer row:
/// `delta + previous_quantity * split_factor`. A split factor of 0 (provider
/// encoding for "no split") is treated as 1.
///
/// Fails with [`CalculationError::UnsortedData`] when the rows are not in
/// descending-date order; equal dates are permitted.
pub fn calculate_held_quantities(rows: &[DailyPositionInput]) -> Result<Vec<DailyPosition>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    ensure_descending(rows)?;

    let mut held = vec![Decimal::ZERO; rows.len()];
    let mut carried = Decimal::ZERO;
    for index in (0..rows.len()).rev() {
        let row = &rows[index];
        let split = if row.split_factor.is_zero() {
            Decimal::ONE
        } else {
            row.split_factor
        };
        carried = row.transaction_quantity + carried * split;
        held[index] = carried;
    }

    debug!(
        "Reconstructed {} daily quantities for {}",
        rows.len(),
        rows[0].ticker
    );

    Ok(rows
        .iter()
        .zip(held)
        .map(|(row, held_quantity)| DailyPosition {
            date: row.date,
            ticker: row.ticker.clone(),
            close: row.close,
            split_factor: row.split_factor,
            transaction_quantity: row.transaction_quantity,
            transaction_value: row.transaction_value,
            held_quantity,
        })
        .collect())
}

fn ensure_descending(rows: &[DailyPositionInput]) -> Result<()> {
    let dates: Vec<NaiveDate> = rows.iter().map(|row| row.date).collect();
    if is_monotonic_decreasing(&dates) {
        Ok(())
    } else {
        Err(CalculationError::UnsortedData {
            ticker: rows[0].ticker.clone(),
        }
        .into())
    }
}
