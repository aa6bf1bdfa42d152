//! Benchmark domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::performance::GainPoint;
use crate::portfolio::valuation::PositionValuation;

/// Daily value and gain evolution of the simulated benchmark position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkEvolution {
    pub valuations: Vec<PositionValuation>,
    pub gains: Vec<GainPoint>,
}

/// Like-for-like comparison of one asset against the benchmark: what the
/// asset's own cash flows returned versus what they would have returned
/// invested in the benchmark, as of the latest common date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetBenchmarkComparison {
    pub ticker: String,
    pub asset_percent_gain: Decimal,
    pub benchmark_percent_gain: Decimal,
}
