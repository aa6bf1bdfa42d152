//! Transaction domain models.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Side of a trade as recorded by the upstream loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionSide {
    Buy,
    Sell,
}

impl TransactionSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionSide::Buy => "BUY",
            TransactionSide::Sell => "SELL",
        }
    }
}

/// A single buy or sell, currency-normalized upstream.
///
/// Sign convention: buys carry a positive quantity delta and a negative cash
/// value (money out of pocket); sells carry a negative quantity delta and a
/// positive cash value. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub date: NaiveDate,
    pub ticker: String,
    pub quantity: Decimal,
    pub value: Decimal,
}

impl Transaction {
    /// Builds a transaction from raw magnitudes, applying the sign
    /// convention so loaders cannot produce inconsistent rows.
    pub fn new(
        date: NaiveDate,
        ticker: impl Into<String>,
        side: TransactionSide,
        quantity: Decimal,
        value: Decimal,
    ) -> Self {
        let (quantity, value) = match side {
            TransactionSide::Buy => (quantity.abs(), -value.abs()),
            TransactionSide::Sell => (-quantity.abs(), value.abs()),
        };
        Self {
            date,
            ticker: ticker.into(),
            quantity,
            value,
        }
    }
}

/// Net quantity and cash-value deltas for one (ticker, date) pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionTotals {
    pub quantity: Decimal,
    pub value: Decimal,
}

/// Sums transactions per (ticker, date). Multiple fills on the same day
/// collapse into a single delta pair, as the quantity recurrence expects.
pub fn aggregate_daily(
    transactions: &[Transaction],
) -> BTreeMap<(String, NaiveDate), TransactionTotals> {
    let mut totals: BTreeMap<(String, NaiveDate), TransactionTotals> = BTreeMap::new();
    for transaction in transactions {
        let entry = totals
            .entry((transaction.ticker.clone(), transaction.date))
            .or_default();
        entry.quantity += transaction.quantity;
        entry.value += transaction.value;
    }
    totals
}

/// Transaction history plus the facts derived from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    pub transactions: Vec<Transaction>,
    pub tickers: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl PortfolioData {
    /// The start date is the oldest transaction date; tickers are unique and
    /// sorted. Fails on an empty history.
    pub fn new(transactions: Vec<Transaction>, end_date: NaiveDate) -> Result<Self> {
        let start_date = transactions
            .iter()
            .map(|t| t.date)
            .min()
            .ok_or(ValidationError::EmptyTransactions)?;

        let tickers: Vec<String> = transactions
            .iter()
            .map(|t| t.ticker.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Ok(Self {
            transactions,
            tickers,
            start_date,
            end_date,
        })
    }

    /// Net cash flow per date across every asset, for portfolio-level series.
    pub fn daily_cash_flows(&self) -> BTreeMap<NaiveDate, Decimal> {
        let mut flows: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
        for transaction in &self.transactions {
            *flows.entry(transaction.date).or_insert(Decimal::ZERO) += transaction.value;
        }
        flows
    }
}
