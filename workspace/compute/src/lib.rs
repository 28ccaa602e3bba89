pub mod classify;
pub mod error;
pub mod evaluation;
pub mod improvement;
pub mod merge;
pub mod presentation;
pub mod upload;

#[cfg(test)]
mod testing;

pub use classify::{Severity, classify_metric, validated_thresholds};
pub use error::{ComputeError, Result};
pub use evaluation::{
    CycleErrors, MetricValues, ResidualSummary, compare_models, cycle_errors, evaluate,
    residual_summary,
};
pub use improvement::{Improvement, compute_improvement, improvements};
pub use merge::{ChartRow, merge_series_for_chart};
pub use presentation::{
    LegendEntry, MetricBar, MetricCard, MetricRow, MetricsView, Presentation, Render, ResultsView,
    TableRow, metrics_from_dto, present_metrics, present_results, results_from_dto,
};
pub use upload::{Completion, Phase, SubmissionRequest, SubmissionTicket, UploadState};

/// Metric comparison to show for a result: the provided one when present,
/// otherwise a backtest of the result itself.
pub fn comparison_for(
    result: &model::ForecastResult,
    provided: Option<model::MetricComparison>,
) -> Result<model::MetricComparison> {
    match provided {
        Some(comparison) => Ok(comparison),
        None => compare_models(result),
    }
}
