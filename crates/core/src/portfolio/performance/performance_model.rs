//! Performance domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which series a cash-flow computation operates on.
///
/// The gain routine is shared between per-asset, benchmark and
/// portfolio-level series; the role tags log lines and error context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesRole {
    Asset,
    Benchmark,
    Portfolio,
}

impl SeriesRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeriesRole::Asset => "asset",
            SeriesRole::Benchmark => "benchmark",
            SeriesRole::Portfolio => "portfolio",
        }
    }
}

/// Input point for the gain routine: one date's market value and the net
/// cash flow that moved on that date (negative = purchase/deposit).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowPoint {
    pub date: NaiveDate,
    pub market_value: Decimal,
    pub cash_flow: Decimal,
}

/// Running cash-flow totals carried oldest-to-newest through the gain scan.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlowAccumulator {
    /// Cumulative positive flows (sale proceeds, deposits).
    pub deposits: Decimal,
    /// Cumulative negative flows (purchase costs); stays <= 0.
    pub withdrawals: Decimal,
}

impl FlowAccumulator {
    /// Folds one day's net cash flow into the running totals.
    pub fn absorb(&mut self, cash_flow: Decimal) {
        self.withdrawals += cash_flow.min(Decimal::ZERO);
        self.deposits += cash_flow.max(Decimal::ZERO);
    }
}

/// Daily money-weighted gain.
///
/// `money_out` is the cumulative cost basis paid in (<= 0); `money_in` is
/// the current market value plus cumulative positive flows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GainPoint {
    pub date: NaiveDate,
    pub money_out: Decimal,
    pub money_in: Decimal,
    pub absolute_gain: Decimal,
    pub percent_gain: Decimal,
}

/// Gain realized within one calendar year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YearlyGain {
    pub year: i32,
    pub absolute_gain: Decimal,
    pub percent_gain: Decimal,
}
