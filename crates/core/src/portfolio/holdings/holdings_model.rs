//! Holdings domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One calendar-day row for a single instrument: that day's quote merged
/// with the day's net transaction deltas (zero when nothing traded).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyPositionInput {
    pub date: NaiveDate,
    pub ticker: String,
    pub close: Decimal,
    pub split_factor: Decimal,
    pub transaction_quantity: Decimal,
    pub transaction_value: Decimal,
}

/// A daily position row with the reconstructed held quantity.
///
/// `held_quantity` is the number of shares owned as of that date, after all
/// transactions and splits up to and including it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyPosition {
    pub date: NaiveDate,
    pub ticker: String,
    pub close: Decimal,
    pub split_factor: Decimal,
    pub transaction_quantity: Decimal,
    pub transaction_value: Decimal,
    pub held_quantity: Decimal,
}
