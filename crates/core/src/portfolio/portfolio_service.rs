//! Full-pipeline orchestration.
//!
//! Per-ticker reconstruction carries no shared state, so the fan-out runs on
//! a rayon pool and the results are merged back in ticker order; everything
//! downstream of the merge is a deterministic sequential fold.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use log::debug;
use rayon::prelude::*;
use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{CalculationError, Result};
use crate::market_data::{ensure_dense_daily, quotes_by_ticker, DailyQuote, Dividend};
use crate::settings::PortfolioSettings;
use crate::transactions::{aggregate_daily, PortfolioData, TransactionTotals};

use super::allocation::calculate_allocations;
use super::benchmark::{simulate_absolute, simulate_proportional};
use super::holdings::{calculate_held_quantities, merge_daily_series};
use super::income::{
    attribute_dividends, totals_by_company, totals_by_year, DividendPosition,
};
use super::performance::{
    calculate_gain_series, calculate_yearly_gains, CashFlowPoint, SeriesRole,
};
use super::portfolio_model::{PortfolioModel, PortfolioValuePoint};
use super::valuation::{
    calculate_market_values, collapse_daily_duplicates, sort_standard, sum_values_by_date,
    PositionValuation,
};

/// Runs the whole engine: per-asset reconstruction and valuation, dividend
/// attribution, portfolio-level gain, benchmark simulation and end-date
/// distribution.
///
/// Inputs are immutable snapshots. Quote series must be gap-filled over
/// `[settings.start_date, settings.end_date]`; a sparse or missing series
/// fails fast before any computation runs.
pub fn model_portfolio(
    data: &PortfolioData,
    asset_quotes: &[DailyQuote],
    dividends: &[Dividend],
    benchmark_quotes: &[DailyQuote],
    settings: &PortfolioSettings,
) -> Result<PortfolioModel> {
    debug!(
        "Modelling portfolio of {} assets over {}..{}",
        data.tickers.len(),
        settings.start_date,
        settings.end_date
    );

    let grouped_quotes = quotes_by_ticker(asset_quotes);
    for ticker in &data.tickers {
        let quotes = grouped_quotes
            .get(ticker.as_str())
            .ok_or_else(|| CalculationError::MissingSeries(ticker.clone()))?;
        ensure_dense_daily(ticker, quotes, settings.start_date, settings.end_date)?;
    }

    let grouped_benchmark = quotes_by_ticker(benchmark_quotes);
    let benchmark_series = grouped_benchmark
        .get(settings.benchmark_ticker.as_str())
        .ok_or_else(|| CalculationError::MissingSeries(settings.benchmark_ticker.clone()))?;
    ensure_dense_daily(
        &settings.benchmark_ticker,
        benchmark_series,
        settings.start_date,
        settings.end_date,
    )?;

    let daily_totals = aggregate_daily(&data.transactions);

    // Per-ticker reconstruction; results merged back in ticker order.
    let per_ticker: Vec<Vec<PositionValuation>> = data
        .tickers
        .par_iter()
        .map(|ticker| -> Result<Vec<PositionValuation>> {
            let ticker_totals: BTreeMap<NaiveDate, TransactionTotals> = daily_totals
                .range((ticker.clone(), NaiveDate::MIN)..=(ticker.clone(), NaiveDate::MAX))
                .map(|((_, date), totals)| (*date, *totals))
                .collect();
            let inputs = merge_daily_series(&grouped_quotes[ticker.as_str()], &ticker_totals);
            let positions = calculate_held_quantities(&inputs)?;
            Ok(calculate_market_values(&positions))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut asset_valuations: Vec<PositionValuation> =
        collapse_daily_duplicates(per_ticker.into_iter().flatten().collect());
    sort_standard(&mut asset_valuations);

    // Held quantity per (ticker, date) for the dividend join.
    let mut held_by_day: HashMap<(&str, NaiveDate), Decimal> = HashMap::new();
    for row in &asset_valuations {
        held_by_day
            .entry((row.ticker.as_str(), row.date))
            .or_insert(row.held_quantity);
    }

    let dividend_positions: Vec<DividendPosition> = dividends
        .iter()
        .map(|dividend| DividendPosition {
            ex_date: dividend.ex_date,
            ticker: dividend.ticker.clone(),
            amount_per_share: dividend.amount_per_share,
            held_quantity: held_by_day
                .get(&(dividend.ticker.as_str(), dividend.ex_date))
                .copied()
                .unwrap_or(Decimal::ZERO),
        })
        .collect();
    let attributed = attribute_dividends(&dividend_positions)?;
    let dividends_by_company = totals_by_company(&attributed);
    let dividends_by_year = totals_by_year(&attributed);

    // Portfolio-level evolution: per-date value sums fed to the shared gain
    // routine together with the per-date aggregate cash flows.
    let value_by_date = sum_values_by_date(&asset_valuations);
    let cash_flows = data.daily_cash_flows();
    let portfolio_points: Vec<CashFlowPoint> = value_by_date
        .iter()
        .rev()
        .map(|(date, value)| CashFlowPoint {
            date: *date,
            market_value: value.round_dp(DISPLAY_DECIMAL_PRECISION),
            cash_flow: cash_flows.get(date).copied().unwrap_or(Decimal::ZERO),
        })
        .collect();
    let portfolio_gains = calculate_gain_series(&portfolio_points, SeriesRole::Portfolio)?;
    let yearly_gains = calculate_yearly_gains(&portfolio_gains, SeriesRole::Portfolio)?;

    let portfolio_evolution: Vec<PortfolioValuePoint> = portfolio_points
        .iter()
        .zip(portfolio_gains.iter())
        .map(|(point, gain)| PortfolioValuePoint {
            date: point.date,
            value: point.market_value,
            absolute_gain: gain.absolute_gain,
            percent_gain: gain.percent_gain,
        })
        .collect();

    let benchmark = simulate_absolute(benchmark_series, &cash_flows)?;
    let assets_vs_benchmark = simulate_proportional(&asset_valuations, benchmark_series)?;

    let allocations = calculate_allocations(&asset_valuations, settings.end_date);

    debug!(
        "Modelled {} portfolio days, {} dividend payments, {} open positions",
        portfolio_evolution.len(),
        attributed.len(),
        allocations.len()
    );

    Ok(PortfolioModel {
        portfolio_evolution,
        asset_valuations,
        allocations,
        dividends: attributed,
        dividends_by_company,
        dividends_by_year,
        yearly_gains,
        benchmark,
        assets_vs_benchmark,
    })
}
