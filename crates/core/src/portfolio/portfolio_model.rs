//! Portfolio-level output models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::allocation::AssetAllocation;
use super::benchmark::{AssetBenchmarkComparison, BenchmarkEvolution};
use super::income::{CompanyDividends, DividendIncome, YearlyDividends};
use super::performance::YearlyGain;
use super::valuation::PositionValuation;

/// One day of portfolio-level value and money-weighted gain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioValuePoint {
    pub date: NaiveDate,
    pub value: Decimal,
    pub absolute_gain: Decimal,
    pub percent_gain: Decimal,
}

/// Everything the engine produces for downstream reporting.
///
/// All tables are value objects; re-running the engine on unchanged inputs
/// reproduces this bundle byte for byte.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioModel {
    /// Daily portfolio value and gain, newest first.
    pub portfolio_evolution: Vec<PortfolioValuePoint>,
    /// Per-asset daily positions, ticker ascending / date descending.
    pub asset_valuations: Vec<PositionValuation>,
    /// End-date distribution across open positions, value descending.
    pub allocations: Vec<AssetAllocation>,
    /// Every dividend payment with its entitled quantity.
    pub dividends: Vec<DividendIncome>,
    pub dividends_by_company: Vec<CompanyDividends>,
    pub dividends_by_year: Vec<YearlyDividends>,
    /// Calendar-year portfolio gains, newest year first.
    pub yearly_gains: Vec<YearlyGain>,
    /// Absolute-mode benchmark simulation.
    pub benchmark: BenchmarkEvolution,
    /// Proportional-mode comparison, one row per asset.
    pub assets_vs_benchmark: Vec<AssetBenchmarkComparison>,
}
