//! Market data domain models.
//!
//! These are the collaborator-provided inputs the engine consumes. Quote
//! series must arrive gap-filled: one row per calendar day per ticker over
//! the configured date range, with missing trading-day prices carried
//! forward/backward upstream.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{CalculationError, Result};
use crate::utils::time_utils::get_days_between;

/// Daily close for one instrument.
///
/// `close` is the unadjusted closing price in local currency. `split_factor`
/// is the multiplier applied to previously held shares on that date (1 = no
/// split; 10 = a 10-for-1 forward split).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyQuote {
    pub date: NaiveDate,
    pub ticker: String,
    pub close: Decimal,
    pub split_factor: Decimal,
}

/// A single dividend payment: amount per share on the ex-dividend date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dividend {
    pub ex_date: NaiveDate,
    pub ticker: String,
    pub amount_per_share: Decimal,
}

/// Groups quotes per ticker, preserving the input row order within each
/// ticker (callers rely on the upstream newest-first ordering).
pub fn quotes_by_ticker(quotes: &[DailyQuote]) -> BTreeMap<&str, Vec<&DailyQuote>> {
    let mut grouped: BTreeMap<&str, Vec<&DailyQuote>> = BTreeMap::new();
    for quote in quotes {
        grouped.entry(quote.ticker.as_str()).or_default().push(quote);
    }
    grouped
}

/// Checks that a single ticker's quotes cover every calendar day in
/// `[start, end]` exactly once, newest first.
///
/// Gap-filling is an upstream responsibility; this guard makes a violated
/// contract fail fast instead of feeding the recurrences sparse data.
pub fn ensure_dense_daily(
    ticker: &str,
    quotes: &[&DailyQuote],
    start: NaiveDate,
    end: NaiveDate,
) -> Result<()> {
    let expected = get_days_between(start, end);
    let dense = quotes.len() == expected.len()
        && quotes
            .iter()
            .zip(expected.iter().rev())
            .all(|(quote, day)| quote.date == *day);

    if dense {
        Ok(())
    } else {
        Err(CalculationError::SparseSeries {
            ticker: ticker.to_string(),
            start,
            end,
            expected: expected.len(),
            found: quotes.len(),
        }
        .into())
    }
}
