//! Valuation domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Daily market value of one instrument's position.
///
/// `transaction_value` is carried along so gain calculations downstream can
/// read the day's cash flow without re-joining the transaction history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionValuation {
    pub date: NaiveDate,
    pub ticker: String,
    pub held_quantity: Decimal,
    pub market_value: Decimal,
    pub transaction_value: Decimal,
}
