use anyhow::{Context, Result};
use compute::{evaluation, improvements};
use std::fmt::Write;
use tracing::info;

use crate::config::AppConfig;
use crate::demo_data::load_result;
use crate::render::{render_cycle_errors, render_residuals};

pub fn evaluate(config: &AppConfig) -> Result<String> {
    let result = load_result(config.result_path.as_deref())?;
    let comparison = evaluation::compare_models(&result).context("Backtest failed")?;
    let models = comparison.models();

    let mut out = String::new();
    writeln!(out, "Backtest: {} vs {}", models.model_a(), models.model_b())?;
    for (set, (_, improvement)) in comparison.metrics().iter().zip(improvements(&comparison)) {
        writeln!(
            out,
            "{:<6} {:>12.4} {:>12.4}  {}",
            set.kind().label(),
            set.model_a(),
            set.model_b(),
            common::format::format_signed_percent(improvement.percent())
        )?;
    }

    let observed: Vec<_> = result.forecast().iter().filter(|p| p.actual().is_some()).collect();
    let actual: Vec<f64> = observed.iter().filter_map(|p| p.actual()).collect();
    let model_a: Vec<f64> = observed.iter().map(|p| p.prediction_a()).collect();
    let model_b: Vec<f64> = observed.iter().map(|p| p.prediction_b()).collect();

    writeln!(out, "\nResiduals")?;
    out.push_str(&render_residuals(
        models.model_a(),
        &evaluation::residual_summary(&actual, &model_a)?,
    ));
    out.push_str(&render_residuals(
        models.model_b(),
        &evaluation::residual_summary(&actual, &model_b)?,
    ));

    let dates: Vec<_> = observed.iter().map(|p| p.timestamp()).collect();
    let with_dates = |predicted: &[f64]| -> Vec<_> {
        dates
            .iter()
            .zip(&actual)
            .zip(predicted)
            .map(|((date, actual), predicted)| (*date, *actual, *predicted))
            .collect()
    };

    writeln!(out, "\nRelative error by cycle")?;
    out.push_str(&render_cycle_errors(
        models.model_a(),
        &evaluation::cycle_errors(&with_dates(&model_a))?,
    ));
    out.push_str(&render_cycle_errors(
        models.model_b(),
        &evaluation::cycle_errors(&with_dates(&model_b))?,
    ));

    info!(periods = actual.len(), "Evaluation finished");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_bundled_result() {
        let output = evaluate(&AppConfig::default()).unwrap();

        assert!(output.starts_with("Backtest: Quantile LSTM vs Ensemble"));
        assert!(output.contains("MAE"));
        assert!(output.contains("R²"));
        assert!(output.contains("Ensemble: n=3"));
        // observed periods are Oct-Dec 2023
        assert!(output.contains("Ensemble: by month 10="));
        assert!(output.contains(" 12="));
        assert!(output.contains("Ensemble: by weekday"));
    }
}
