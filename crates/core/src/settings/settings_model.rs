use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::time_utils::valuation_date_today;

/// Configuration for a single portfolio computation run.
///
/// The date range bounds every daily series the engine consumes; price data
/// must be gap-filled over exactly this range. The end date defaults to
/// "today" in the canonical valuation timezone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSettings {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub benchmark_ticker: String,
}

impl PortfolioSettings {
    pub fn new(
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        benchmark_ticker: impl Into<String>,
    ) -> Self {
        Self {
            start_date,
            end_date: end_date.unwrap_or_else(valuation_date_today),
            benchmark_ticker: benchmark_ticker.into(),
        }
    }
}
