//! Benchmark re-investment simulation.
//!
//! Both modes synthesize benchmark "transactions" from real cash flows and
//! run them through the same holdings / valuation / gain primitives as real
//! positions: whatever cash moved is mirrored into a benchmark buy or sell
//! on the same date.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::Result;
use crate::market_data::DailyQuote;
use crate::portfolio::holdings::{calculate_held_quantities, DailyPositionInput};
use crate::portfolio::performance::{calculate_gain_series, CashFlowPoint, SeriesRole};
use crate::portfolio::valuation::{calculate_market_values, round_market_values, PositionValuation};

use super::{AssetBenchmarkComparison, BenchmarkEvolution};

/// Simulates investing every portfolio cash flow directly into the
/// benchmark.
///
/// `cash_flows` holds the net transaction value per date across the whole
/// portfolio. Produces the benchmark's daily value evolution (rounded for
/// reporting) and its money-weighted gain series.
pub fn simulate_absolute(
    benchmark_quotes: &[&DailyQuote],
    cash_flows: &BTreeMap<NaiveDate, Decimal>,
) -> Result<BenchmarkEvolution> {
    let valuations = simulate_valuations(benchmark_quotes, cash_flows)?;

    let points: Vec<CashFlowPoint> = valuations
        .iter()
        .map(|row| CashFlowPoint {
            date: row.date,
            market_value: row.market_value,
            cash_flow: row.transaction_value,
        })
        .collect();
    let gains = calculate_gain_series(&points, SeriesRole::Benchmark)?;

    debug!(
        "Simulated absolute benchmark evolution over {} days",
        valuations.len()
    );

    Ok(BenchmarkEvolution { valuations, gains })
}

/// Replays each asset's own cash flows into the benchmark and compares the
/// outcomes.
///
/// `asset_valuations` is the collapsed per-asset daily series (ticker
/// ascending, date descending). For every ticker, the asset's final percent
/// gain is measured against the percent gain its cash flows would have
/// produced in the benchmark over the same period, as of the latest common
/// date. Output is ticker ascending.
pub fn simulate_proportional(
    asset_valuations: &[PositionValuation],
    benchmark_quotes: &[&DailyQuote],
) -> Result<Vec<AssetBenchmarkComparison>> {
    let mut by_ticker: BTreeMap<&str, Vec<&PositionValuation>> = BTreeMap::new();
    for row in asset_valuations {
        by_ticker.entry(row.ticker.as_str()).or_default().push(row);
    }

    let mut comparisons = Vec::with_capacity(by_ticker.len());
    for (ticker, rows) in by_ticker {
        let asset_points: Vec<CashFlowPoint> = rows
            .iter()
            .map(|row| CashFlowPoint {
                date: row.date,
                market_value: row.market_value,
                cash_flow: row.transaction_value,
            })
            .collect();
        let asset_gains = calculate_gain_series(&asset_points, SeriesRole::Asset)?;

        let cash_flows: BTreeMap<NaiveDate, Decimal> = rows
            .iter()
            .filter(|row| !row.transaction_value.is_zero())
            .map(|row| (row.date, row.transaction_value))
            .collect();
        let simulated = simulate_valuations(benchmark_quotes, &cash_flows)?;
        let simulated_points: Vec<CashFlowPoint> = simulated
            .iter()
            .map(|row| CashFlowPoint {
                date: row.date,
                market_value: row.market_value,
                cash_flow: row.transaction_value,
            })
            .collect();
        let benchmark_gains = calculate_gain_series(&simulated_points, SeriesRole::Benchmark)?;

        let latest_common = asset_gains
            .iter()
            .find_map(|asset_point| {
                benchmark_gains
                    .iter()
                    .find(|bench_point| bench_point.date == asset_point.date)
                    .map(|bench_point| (asset_point, bench_point))
            });
        if let Some((asset_point, bench_point)) = latest_common {
            comparisons.push(AssetBenchmarkComparison {
                ticker: ticker.to_string(),
                asset_percent_gain: asset_point.percent_gain,
                benchmark_percent_gain: bench_point.percent_gain,
            });
        } else {
            debug!("No common dates between {} and the benchmark", ticker);
        }
    }

    Ok(comparisons)
}

/// Builds and values the synthetic benchmark position for the given cash
/// flows. A zero benchmark price or zero flow yields no simulated position
/// change that day, never an error.
fn simulate_valuations(
    benchmark_quotes: &[&DailyQuote],
    cash_flows: &BTreeMap<NaiveDate, Decimal>,
) -> Result<Vec<PositionValuation>> {
    let inputs: Vec<DailyPositionInput> = benchmark_quotes
        .iter()
        .map(|quote| {
            let flow = cash_flows.get(&quote.date).copied().unwrap_or(Decimal::ZERO);
            let quantity = if quote.close.is_zero() || flow.is_zero() {
                Decimal::ZERO
            } else {
                -flow / quote.close
            };
            DailyPositionInput {
                date: quote.date,
                ticker: quote.ticker.clone(),
                close: quote.close,
                split_factor: quote.split_factor,
                transaction_quantity: quantity,
                transaction_value: flow,
            }
        })
        .collect();

    let positions = calculate_held_quantities(&inputs)?;
    let mut valuations = calculate_market_values(&positions);
    round_market_values(&mut valuations, DISPLAY_DECIMAL_PRECISION);
    Ok(valuations)
}
