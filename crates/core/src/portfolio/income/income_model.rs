//! Income domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A dividend payment joined with the held quantity recorded on its
/// ex-dividend date (0 when the date falls outside the position series).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DividendPosition {
    pub ex_date: NaiveDate,
    pub ticker: String,
    pub amount_per_share: Decimal,
    pub held_quantity: Decimal,
}

/// A dividend payment attributed to the holdings entitled to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DividendIncome {
    pub ex_date: NaiveDate,
    pub ticker: String,
    pub amount_per_share: Decimal,
    pub entitled_quantity: Decimal,
    pub total: Decimal,
}

/// Total dividends received from one company.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDividends {
    pub ticker: String,
    pub total: Decimal,
}

/// Total dividends received in one calendar year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YearlyDividends {
    pub year: i32,
    pub total: Decimal,
}
