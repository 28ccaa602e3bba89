//! Forecast accuracy metrics and residual diagnostics.
//!
//! Used to backtest both models over the forecast periods that already have
//! an observed value, producing the comparison shown on the metrics page.

use chrono::{Datelike, NaiveDate};
use common::MetricKind;
use model::{ForecastResult, MetricComparison, MetricSet};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

use crate::error::{ComputeError, Result};

/// Floor applied to actual values in the MAPE denominator.
const MAPE_DENOMINATOR_FLOOR: f64 = 1e-3;

/// Accuracy of one model over one evaluation window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricValues {
    pub mae: f64,
    pub rmse: f64,
    /// Percent
    pub mape: f64,
    /// Percent
    pub smape: f64,
    /// Undefined when the actual values have no variance
    pub r_squared: Option<f64>,
}

impl MetricValues {
    pub fn get(&self, kind: MetricKind) -> Option<f64> {
        match kind {
            MetricKind::Mae => Some(self.mae),
            MetricKind::Rmse => Some(self.rmse),
            MetricKind::Mape => Some(self.mape),
            MetricKind::Smape => Some(self.smape),
            MetricKind::RSquared => self.r_squared,
        }
    }
}

fn check_inputs(actual: &[f64], predicted: &[f64]) -> Result<()> {
    if actual.is_empty() {
        return Err(ComputeError::Evaluation("no values to evaluate".to_string()));
    }
    if actual.len() != predicted.len() {
        return Err(ComputeError::Evaluation(format!(
            "length mismatch: {} actual vs {} predicted values",
            actual.len(),
            predicted.len()
        )));
    }
    if actual.iter().chain(predicted).any(|v| !v.is_finite()) {
        return Err(ComputeError::Evaluation(
            "values must be finite numbers".to_string(),
        ));
    }
    Ok(())
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Computes MAE, RMSE, MAPE, sMAPE and R² of `predicted` against `actual`.
pub fn evaluate(actual: &[f64], predicted: &[f64]) -> Result<MetricValues> {
    check_inputs(actual, predicted)?;
    let n = actual.len() as f64;
    let pairs = || actual.iter().zip(predicted);

    let mae = pairs().map(|(a, p)| (a - p).abs()).sum::<f64>() / n;
    let mse = pairs().map(|(a, p)| (a - p).powi(2)).sum::<f64>() / n;
    let mape = pairs()
        .map(|(a, p)| ((a - p) / a.max(MAPE_DENOMINATOR_FLOOR)).abs())
        .sum::<f64>()
        / n
        * 100.0;
    let smape = pairs()
        .map(|(a, p)| {
            let denominator = a.abs() + p.abs();
            if denominator > 0.0 {
                2.0 * (a - p).abs() / denominator
            } else {
                0.0
            }
        })
        .sum::<f64>()
        / n
        * 100.0;

    let actual_mean = mean(actual);
    let total = actual.iter().map(|a| (a - actual_mean).powi(2)).sum::<f64>();
    let residual = mse * n;
    let r_squared = (total > 0.0).then(|| 1.0 - residual / total);

    Ok(MetricValues {
        mae,
        rmse: mse.sqrt(),
        mape,
        smape,
        r_squared,
    })
}

/// Backtests both models over the forecast points that carry an actual
/// value and returns the resulting comparison.
#[instrument(skip(result), fields(points = result.forecast().len()))]
pub fn compare_models(result: &ForecastResult) -> Result<MetricComparison> {
    let observed: Vec<_> = result
        .forecast()
        .iter()
        .filter_map(|p| p.actual().map(|actual| (actual, p.prediction_a(), p.prediction_b())))
        .collect();

    if observed.is_empty() {
        return Err(ComputeError::Evaluation(
            "forecast has no periods with observed values".to_string(),
        ));
    }

    let actual: Vec<f64> = observed.iter().map(|o| o.0).collect();
    let model_a: Vec<f64> = observed.iter().map(|o| o.1).collect();
    let model_b: Vec<f64> = observed.iter().map(|o| o.2).collect();

    let values_a = evaluate(&actual, &model_a)?;
    let values_b = evaluate(&actual, &model_b)?;
    debug!(?values_a, ?values_b, "Evaluated both models");

    let metrics = MetricKind::ALL
        .into_iter()
        .filter_map(|kind| Some((kind, values_a.get(kind)?, values_b.get(kind)?)))
        .map(|(kind, a, b)| MetricSet::new(kind, a, b))
        .collect::<model::Result<Vec<_>>>()?;

    info!(
        periods = observed.len(),
        metrics = metrics.len(),
        "Backtested forecast against observed values"
    );
    Ok(MetricComparison::new(result.models().clone(), metrics)?)
}

/// Summary statistics of the residuals `actual - predicted`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResidualSummary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Pearson correlation between consecutive residuals; needs three points
    /// and non-constant residuals
    pub lag1_autocorrelation: Option<f64>,
}

fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    let (mx, my) = (mean(x), mean(y));
    let covariance: f64 = x.iter().zip(y).map(|(a, b)| (a - mx) * (b - my)).sum();
    let var_x: f64 = x.iter().map(|a| (a - mx).powi(2)).sum();
    let var_y: f64 = y.iter().map(|b| (b - my).powi(2)).sum();
    let denominator = (var_x * var_y).sqrt();
    (denominator > 0.0).then(|| covariance / denominator)
}

pub fn residual_summary(actual: &[f64], predicted: &[f64]) -> Result<ResidualSummary> {
    check_inputs(actual, predicted)?;

    let residuals: Vec<f64> = actual.iter().zip(predicted).map(|(a, p)| a - p).collect();
    let residual_mean = mean(&residuals);

    let mut sorted = residuals.clone();
    sorted.sort_by(f64::total_cmp);
    let middle = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[middle - 1] + sorted[middle]) / 2.0
    } else {
        sorted[middle]
    };

    let variance = residuals
        .iter()
        .map(|r| (r - residual_mean).powi(2))
        .sum::<f64>()
        / residuals.len() as f64;

    let lag1_autocorrelation = if residuals.len() >= 3 {
        pearson(&residuals[1..], &residuals[..residuals.len() - 1])
    } else {
        None
    };

    Ok(ResidualSummary {
        count: residuals.len(),
        mean: residual_mean,
        median,
        std_dev: variance.sqrt(),
        lag1_autocorrelation,
    })
}

/// Mean relative error `|actual - predicted| / max(actual, 1e-3)` grouped
/// by calendar cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleErrors {
    /// Month of year (1-12), ascending
    pub by_month: Vec<(u32, f64)>,
    /// Day of week, Monday = 0, ascending
    pub by_weekday: Vec<(u32, f64)>,
}

fn group_mean(groups: BTreeMap<u32, (f64, usize)>) -> Vec<(u32, f64)> {
    groups
        .into_iter()
        .map(|(key, (sum, count))| (key, sum / count as f64))
        .collect()
}

/// Breaks the relative error of `(date, actual, predicted)` observations
/// down by month and by weekday.
pub fn cycle_errors(observations: &[(NaiveDate, f64, f64)]) -> Result<CycleErrors> {
    let actual: Vec<f64> = observations.iter().map(|o| o.1).collect();
    let predicted: Vec<f64> = observations.iter().map(|o| o.2).collect();
    check_inputs(&actual, &predicted)?;

    let mut by_month: BTreeMap<u32, (f64, usize)> = BTreeMap::new();
    let mut by_weekday: BTreeMap<u32, (f64, usize)> = BTreeMap::new();
    for (date, actual, predicted) in observations {
        let error = (actual - predicted).abs() / actual.max(MAPE_DENOMINATOR_FLOOR);
        for (groups, key) in [
            (&mut by_month, date.month()),
            (&mut by_weekday, date.weekday().num_days_from_monday()),
        ] {
            let entry = groups.entry(key).or_insert((0.0, 0));
            entry.0 += error;
            entry.1 += 1;
        }
    }

    Ok(CycleErrors {
        by_month: group_mean(by_month),
        by_weekday: group_mean(by_weekday),
    })
}
