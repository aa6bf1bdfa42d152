//! Dividend attribution.
//!
//! Entitlement is determined by end-of-prior-day holdings: the quantity
//! recorded on the ex-dividend date already reflects same-day transactions,
//! so each payment reads the held quantity from the next row in descending
//! order (yesterday sits immediately after today in a newest-first series).

use std::collections::BTreeMap;

use chrono::Datelike;
use log::debug;
use rust_decimal::Decimal;

use crate::errors::{CalculationError, Result};
use crate::utils::time_utils::is_monotonic_decreasing;

use super::{CompanyDividends, DividendIncome, DividendPosition, YearlyDividends};

/// Attributes every dividend payment to the holdings entitled to it.
///
/// Input rows must be grouped per ticker and sorted newest-first within each
/// ticker; every ticker's ordering is checked before any output is
/// produced. The last (oldest) payment of a ticker has no prior-day row and
/// is entitled to 0 shares.
pub fn attribute_dividends(rows: &[DividendPosition]) -> Result<Vec<DividendIncome>> {
    let mut by_ticker: BTreeMap<&str, Vec<&DividendPosition>> = BTreeMap::new();
    for row in rows {
        by_ticker.entry(row.ticker.as_str()).or_default().push(row);
    }

    for (ticker, payments) in &by_ticker {
        let dates: Vec<_> = payments.iter().map(|payment| payment.ex_date).collect();
        if !is_monotonic_decreasing(&dates) {
            return Err(CalculationError::UnsortedData {
                ticker: ticker.to_string(),
            }
            .into());
        }
    }

    let mut incomes = Vec::with_capacity(rows.len());
    for payments in by_ticker.values() {
        for (index, payment) in payments.iter().enumerate() {
            let entitled_quantity = payments
                .get(index + 1)
                .map(|prior| prior.held_quantity)
                .unwrap_or(Decimal::ZERO);
            incomes.push(DividendIncome {
                ex_date: payment.ex_date,
                ticker: payment.ticker.clone(),
                amount_per_share: payment.amount_per_share,
                entitled_quantity,
                total: entitled_quantity * payment.amount_per_share,
            });
        }
    }

    debug!("Attributed {} dividend payments", incomes.len());
    Ok(incomes)
}

/// Sums attributed dividends per company, ticker ascending.
pub fn totals_by_company(incomes: &[DividendIncome]) -> Vec<CompanyDividends> {
    let mut totals: BTreeMap<&str, Decimal> = BTreeMap::new();
    for income in incomes {
        *totals.entry(income.ticker.as_str()).or_insert(Decimal::ZERO) += income.total;
    }
    totals
        .into_iter()
        .map(|(ticker, total)| CompanyDividends {
            ticker: ticker.to_string(),
            total,
        })
        .collect()
}

/// Sums attributed dividends per calendar year, ascending.
pub fn totals_by_year(incomes: &[DividendIncome]) -> Vec<YearlyDividends> {
    let mut totals: BTreeMap<i32, Decimal> = BTreeMap::new();
    for income in incomes {
        *totals.entry(income.ex_date.year()).or_insert(Decimal::ZERO) += income.total;
    }
    totals
        .into_iter()
        .map(|(year, total)| YearlyDividends { year, total })
        .collect()
}
