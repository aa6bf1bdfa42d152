//! Allocation domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One asset's share of the portfolio as of the end date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetAllocation {
    pub ticker: String,
    pub quantity: Decimal,
    pub value: Decimal,
    pub percent: Decimal,
}
