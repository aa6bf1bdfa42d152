//! Money-weighted gain over a newest-first daily series.
//!
//! This is the single most reused routine in the engine: it runs once per
//! asset, once for the aggregated portfolio and once per benchmark mode.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{CalculationError, Result};
use crate::utils::time_utils::is_monotonic_decreasing;

use super::{CashFlowPoint, FlowAccumulator, GainPoint, SeriesRole, YearlyGain};

/// Computes daily absolute and percentage money-weighted gain.
///
/// Walking the series oldest-to-newest with a [`FlowAccumulator`]:
/// `money_out` accumulates negative flows, `money_in` is the day's market
/// value plus accumulated positive flows. Duplicate-date rows collapse to
/// the first row in newest-first order (the one carrying the full day's
/// flows), and the earliest date's gains are forced to exactly 0: no prior
/// basis exists there by definition.
///
/// A zero `money_out` denominator yields a 0 percent gain by policy, never
/// an error. Unsorted input fails with [`CalculationError::UnsortedData`].
pub fn calculate_gain_series(
    points: &[CashFlowPoint],
    role: SeriesRole,
) -> Result<Vec<GainPoint>> {
    if points.is_empty() {
        return Ok(Vec::new());
    }

    let dates: Vec<NaiveDate> = points.iter().map(|point| point.date).collect();
    if !is_monotonic_decreasing(&dates) {
        return Err(CalculationError::UnsortedData {
            ticker: role.as_str().to_string(),
        }
        .into());
    }

    let mut computed: Vec<GainPoint> = vec![
        GainPoint {
            date: points[0].date,
            money_out: Decimal::ZERO,
            money_in: Decimal::ZERO,
            absolute_gain: Decimal::ZERO,
            percent_gain: Decimal::ZERO,
        };
        points.len()
    ];

    let mut flows = FlowAccumulator::default();
    for index in (0..points.len()).rev() {
        let point = &points[index];
        flows.absorb(point.cash_flow);

        let money_out = flows.withdrawals;
        let money_in = point.market_value + flows.deposits;
        computed[index] = GainPoint {
            date: point.date,
            money_out,
            money_in,
            absolute_gain: (money_out + money_in).round_dp(DISPLAY_DECIMAL_PRECISION),
            percent_gain: percent_gain(money_in, money_out),
        };
    }

    let mut seen: HashSet<NaiveDate> = HashSet::new();
    let mut series: Vec<GainPoint> = computed
        .into_iter()
        .filter(|point| seen.insert(point.date))
        .collect();

    if let Some(earliest) = series.last_mut() {
        earliest.absolute_gain = Decimal::ZERO;
        earliest.percent_gain = Decimal::ZERO;
    }

    debug!(
        "Computed {} gain points for {} series",
        series.len(),
        role.as_str()
    );

    Ok(series)
}

/// Splits a newest-first gain series into calendar-year gains, newest year
/// first.
///
/// Within each year, the gain base is the year's opening `money_in` plus the
/// net cost paid in during the year; the year's gain is the closing
/// `money_in` measured against that base.
pub fn calculate_yearly_gains(
    series: &[GainPoint],
    role: SeriesRole,
) -> Result<Vec<YearlyGain>> {
    let dates: Vec<NaiveDate> = series.iter().map(|point| point.date).collect();
    if !is_monotonic_decreasing(&dates) {
        return Err(CalculationError::UnsortedData {
            ticker: role.as_str().to_string(),
        }
        .into());
    }

    let mut yearly: Vec<YearlyGain> = Vec::new();
    let mut index = 0;
    while index < series.len() {
        let year = series[index].date.year();
        let mut end = index;
        while end + 1 < series.len() && series[end + 1].date.year() == year {
            end += 1;
        }

        let newest = &series[index];
        let oldest = &series[end];
        let base =
            oldest.money_in + (newest.money_out.abs() - oldest.money_out.abs());

        let percent = if base.is_zero() {
            Decimal::ZERO
        } else {
            ((newest.money_in / base - Decimal::ONE) * dec!(100))
                .round_dp(DISPLAY_DECIMAL_PRECISION)
        };
        yearly.push(YearlyGain {
            year,
            absolute_gain: (newest.money_in - base).round_dp(DISPLAY_DECIMAL_PRECISION),
            percent_gain: percent,
        });

        index = end + 1;
    }

    Ok(yearly)
}

fn percent_gain(money_in: Decimal, money_out: Decimal) -> Decimal {
    if money_out.is_zero() {
        Decimal::ZERO
    } else {
        (((money_in / money_out).abs() - Decimal::ONE) * dec!(100))
            .round_dp(DISPLAY_DECIMAL_PRECISION)
    }
}
