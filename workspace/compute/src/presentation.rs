//! Display-ready views of a forecast result and a model comparison.
//!
//! Views carry already formatted strings so every rendering surface (the
//! Yew front-end, the terminal renderer) shows identical values.

use common::format::{format_currency, format_date, format_number, format_percent, format_signed_percent};
use common::{ForecastResultDto, MetricKind, MetricsPayload, Thresholds};
use model::{ForecastResult, MetricComparison};
use serde::Serialize;
use tracing::{instrument, warn};

use crate::classify::{Severity, classify_metric, validated_thresholds};
use crate::improvement::{Improvement, compute_improvement};
use crate::merge::{ChartRow, merge_series_for_chart};

/// Metrics highlighted as cards for the challenger model.
const CARD_METRICS: [MetricKind; 4] = [
    MetricKind::Mae,
    MetricKind::Rmse,
    MetricKind::Mape,
    MetricKind::RSquared,
];

pub const ACTUAL_LABEL: &str = "Actual";
pub const INTERVAL_LABEL: &str = "Confidence interval";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub date: String,
    pub actual: String,
    pub prediction_a: String,
    pub prediction_b: String,
    pub lower_bound: String,
    pub upper_bound: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsView {
    pub model_a: String,
    pub model_b: String,
    pub horizon: String,
    pub chart: Vec<ChartRow>,
    pub table: Vec<TableRow>,
    pub legend: Vec<LegendEntry>,
}

/// One line of the metric comparison table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRow {
    pub kind: MetricKind,
    pub label: &'static str,
    pub model_a: String,
    pub model_b: String,
    pub improvement: Improvement,
    pub improvement_text: String,
    pub severity_a: Severity,
    pub severity_b: Severity,
    pub model_b_better: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub kind: MetricKind,
    pub title: &'static str,
    pub value: String,
    pub severity: Severity,
    pub description: &'static str,
}

/// Raw values behind one group of the comparison bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricBar {
    pub label: &'static str,
    pub model_a: f64,
    pub model_b: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsView {
    pub model_a: String,
    pub model_b: String,
    pub rows: Vec<MetricRow>,
    pub cards: Vec<MetricCard>,
    pub bars: Vec<MetricBar>,
    /// Summary sentence derived from the MAE improvement
    pub headline: Option<String>,
    /// Summary sentence derived from the challenger's R²
    pub explained_variance: Option<String>,
}

fn format_metric(kind: MetricKind, value: f64) -> String {
    if kind.is_percentage() {
        format_percent(Some(value))
    } else {
        format_number(Some(value))
    }
}

#[instrument(skip(result), fields(points = result.forecast().len()))]
pub fn present_results(result: &ForecastResult) -> ResultsView {
    let models = result.models();

    let chart = merge_series_for_chart(
        &result.actual_series(),
        &result.prediction_a_series(),
        &result.prediction_b_series(),
        &result.bounds(),
    );

    let table = result
        .forecast()
        .iter()
        .map(|point| TableRow {
            date: format_date(point.timestamp()),
            actual: format_currency(point.actual()),
            prediction_a: format_currency(Some(point.prediction_a())),
            prediction_b: format_currency(Some(point.prediction_b())),
            lower_bound: format_currency(Some(point.lower_bound())),
            upper_bound: format_currency(Some(point.upper_bound())),
        })
        .collect();

    let legend = vec![
        LegendEntry {
            label: ACTUAL_LABEL.to_string(),
            description: "Observed sales".to_string(),
        },
        LegendEntry {
            label: models.model_a().to_string(),
            description: "Baseline model prediction".to_string(),
        },
        LegendEntry {
            label: models.model_b().to_string(),
            description: "Challenger model prediction".to_string(),
        },
        LegendEntry {
            label: INTERVAL_LABEL.to_string(),
            description: "Lower and upper prediction bounds".to_string(),
        },
    ];

    ResultsView {
        model_a: models.model_a().to_string(),
        model_b: models.model_b().to_string(),
        horizon: result.horizon().label(),
        chart,
        table,
        legend,
    }
}

#[instrument(skip_all, fields(metrics = comparison.metrics().len()))]
pub fn present_metrics(comparison: &MetricComparison, thresholds: &Thresholds) -> MetricsView {
    let models = comparison.models();

    let rows: Vec<MetricRow> = comparison
        .metrics()
        .iter()
        .map(|set| {
            let kind = set.kind();
            let improvement = compute_improvement(set);
            MetricRow {
                kind,
                label: kind.label(),
                model_a: format_metric(kind, set.model_a()),
                model_b: format_metric(kind, set.model_b()),
                improvement,
                improvement_text: format_signed_percent(improvement.percent()),
                severity_a: classify_metric(kind, set.model_a(), thresholds),
                severity_b: classify_metric(kind, set.model_b(), thresholds),
                model_b_better: improvement.is_positive(),
            }
        })
        .collect();

    let cards = CARD_METRICS
        .into_iter()
        .filter_map(|kind| comparison.get(kind))
        .map(|set| MetricCard {
            kind: set.kind(),
            title: set.kind().full_name(),
            value: format_metric(set.kind(), set.model_b()),
            severity: classify_metric(set.kind(), set.model_b(), thresholds),
            description: set.kind().description(),
        })
        .collect();

    let bars = comparison
        .metrics()
        .iter()
        .map(|set| MetricBar {
            label: set.kind().label(),
            model_a: set.model_a(),
            model_b: set.model_b(),
        })
        .collect();

    let headline = comparison
        .get(MetricKind::Mae)
        .and_then(|set| compute_improvement(set).percent())
        // below half a percent the headline would read "by 0%"
        .filter(|percent| percent.abs() >= 0.5)
        .map(|percent| {
            let verb = if percent >= 0.0 { "reduces" } else { "increases" };
            format!(
                "{} {} the average error by {:.0}% compared to {}",
                models.model_b(),
                verb,
                percent.abs(),
                models.model_a()
            )
        });

    let explained_variance = comparison
        .get(MetricKind::RSquared)
        .map(|set| set.model_b())
        .filter(|r2| (0.0..=1.0).contains(r2))
        .map(|r2| {
            format!(
                "{} explains {:.0}% of the variability in sales",
                models.model_b(),
                r2 * 100.0
            )
        });

    MetricsView {
        model_a: models.model_a().to_string(),
        model_b: models.model_b().to_string(),
        rows,
        cards,
        bars,
        headline,
        explained_variance,
    }
}

/// A view, or the reason it cannot be shown.
#[derive(Debug, Clone, PartialEq)]
pub enum Presentation<V> {
    Ready(V),
    Unavailable { reason: String },
}

impl<V> Presentation<V> {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Presentation::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Presentation::Ready(_))
    }

    pub fn render<R: Render<V>>(&self, renderer: &R) -> R::Output {
        match self {
            Presentation::Ready(view) => renderer.render(view),
            Presentation::Unavailable { reason } => renderer.unavailable(reason),
        }
    }
}

/// A rendering surface for one kind of view.
pub trait Render<V> {
    type Output;

    fn render(&self, view: &V) -> Self::Output;

    fn unavailable(&self, reason: &str) -> Self::Output;
}

/// Validates a transported result; malformed data degrades to
/// `Unavailable` instead of failing the page.
pub fn results_from_dto(dto: ForecastResultDto) -> Presentation<ResultsView> {
    match ForecastResult::try_from(dto) {
        Ok(result) => Presentation::Ready(present_results(&result)),
        Err(e) => {
            warn!("Forecast result unavailable: {}", e);
            Presentation::unavailable(e.to_string())
        }
    }
}

/// Like [`results_from_dto`]. Inconsistent thresholds fall back to the
/// defaults rather than hiding the comparison.
pub fn metrics_from_dto(payload: MetricsPayload) -> Presentation<MetricsView> {
    let thresholds = validated_thresholds(payload.thresholds).unwrap_or_else(|e| {
        warn!("{}; using default thresholds", e);
        Thresholds::default()
    });

    match MetricComparison::try_from(payload.comparison) {
        Ok(comparison) => Presentation::Ready(present_metrics(&comparison, &thresholds)),
        Err(e) => {
            warn!("Metric comparison unavailable: {}", e);
            Presentation::unavailable(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::init_test_tracing;
    use chrono::NaiveDate;
    use common::{ForecastPointDto, MetricComparisonDto, MetricEntryDto, MetricThreshold, ModelLabelsDto};

    fn date(year: i32, month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, 1).unwrap()
    }

    fn sample_result_dto() -> ForecastResultDto {
        ForecastResultDto {
            models: ModelLabelsDto {
                model_a: "Quantile LSTM".to_string(),
                model_b: "Ensemble".to_string(),
            },
            horizon_months: 6,
            history: vec![],
            forecast: vec![
                ForecastPointDto {
                    timestamp: date(2024, 1),
                    actual: Some(6100.0),
                    prediction_a: 6200.123,
                    prediction_b: 6150.0,
                    lower_bound: 5800.0,
                    upper_bound: 6600.0,
                },
                ForecastPointDto {
                    timestamp: date(2024, 2),
                    actual: None,
                    prediction_a: 6500.0,
                    prediction_b: 6450.5,
                    lower_bound: 6000.0,
                    upper_bound: 7000.0,
                },
            ],
        }
    }

    fn sample_payload() -> MetricsPayload {
        let entry = |metric, model_a, model_b| MetricEntryDto {
            metric,
            model_a,
            model_b,
        };
        MetricsPayload {
            comparison: MetricComparisonDto {
                models: ModelLabelsDto {
                    model_a: "Prophet".to_string(),
                    model_b: "Ensemble".to_string(),
                },
                metrics: vec![
                    entry(MetricKind::Mae, 899.18, 242.66),
                    entry(MetricKind::Rmse, 1198.29, 338.68),
                    entry(MetricKind::Mape, 126.4, 46.19),
                    entry(MetricKind::Smape, 46.6, 19.92),
                    entry(MetricKind::RSquared, 0.15, 0.93),
                ],
            },
            thresholds: Thresholds::default(),
        }
    }

    struct CountingRenderer;

    impl Render<ResultsView> for CountingRenderer {
        type Output = String;

        fn render(&self, view: &ResultsView) -> String {
            format!("{} rows", view.table.len())
        }

        fn unavailable(&self, reason: &str) -> String {
            format!("unavailable: {}", reason)
        }
    }

    #[test]
    fn test_results_view() {
        let Presentation::Ready(view) = results_from_dto(sample_result_dto()) else {
            panic!("Sample result is valid");
        };

        assert_eq!(view.horizon, "6 months");
        assert_eq!(view.chart.len(), 2);
        assert_eq!(view.table[0].date, "2024-01-01");
        assert_eq!(view.table[0].prediction_a, "$6,200.12");
        assert_eq!(view.table[1].actual, "n/a");
        assert_eq!(view.legend[2].label, "Ensemble");
    }

    #[test]
    fn test_malformed_result_is_unavailable() {
        let mut dto = sample_result_dto();
        dto.forecast.reverse();

        let presentation = results_from_dto(dto);
        assert!(!presentation.is_ready());
        assert!(presentation.render(&CountingRenderer).starts_with("unavailable"));
    }

    #[test]
    fn test_metrics_view() {
        let Presentation::Ready(view) = metrics_from_dto(sample_payload()) else {
            panic!("Sample metrics are valid");
        };

        assert_eq!(view.rows.len(), 5);
        let mae = &view.rows[0];
        assert_eq!(mae.model_a, "899.18");
        assert_eq!(mae.improvement_text, "+73.01%");
        assert_eq!(mae.severity_a, Severity::Bad);
        assert_eq!(mae.severity_b, Severity::Good);
        assert!(mae.model_b_better);

        let mape = view.rows.iter().find(|r| r.kind == MetricKind::Mape).unwrap();
        assert_eq!(mape.model_b, "46.19%");

        assert_eq!(view.cards.len(), 4);
        assert_eq!(view.cards[3].value, "0.93");
        assert_eq!(
            view.headline.as_deref(),
            Some("Ensemble reduces the average error by 73% compared to Prophet")
        );
        assert_eq!(
            view.explained_variance.as_deref(),
            Some("Ensemble explains 93% of the variability in sales")
        );
    }

    #[test]
    fn test_zero_baseline_shows_placeholder() {
        let models = model::ModelLabels::new("A", "B").unwrap();
        let comparison = MetricComparison::new(
            models,
            vec![model::MetricSet::new(MetricKind::Mae, 0.0, 1.0).unwrap()],
        )
        .unwrap();

        let view = present_metrics(&comparison, &Thresholds::default());
        assert_eq!(view.rows[0].improvement_text, "n/a");
        assert!(!view.rows[0].model_b_better);
        assert_eq!(view.headline, None);
    }

    #[test]
    fn test_inverted_thresholds_fall_back_to_defaults() {
        let mut payload = sample_payload();
        payload.thresholds.mae = Some(MetricThreshold::new(900.0, 100.0));

        let Presentation::Ready(view) = metrics_from_dto(payload) else {
            panic!("Comparison is still valid");
        };
        assert_eq!(view.rows[0].severity_b, Severity::Good);
    }

    struct MetricsTextRenderer;

    impl Render<MetricsView> for MetricsTextRenderer {
        type Output = String;

        fn render(&self, view: &MetricsView) -> String {
            format!("{} metrics", view.rows.len())
        }

        fn unavailable(&self, reason: &str) -> String {
            format!("unavailable: {}", reason)
        }
    }

    #[test]
    fn test_malformed_metrics_are_unavailable() {
        let _guard = init_test_tracing();

        let mut negative = sample_payload();
        negative.comparison.metrics[0].model_b = -1.0;
        let presentation = metrics_from_dto(negative);
        assert!(!presentation.is_ready());
        assert!(presentation.render(&MetricsTextRenderer).starts_with("unavailable"));

        let duplicated: MetricsPayload = serde_json::from_value(serde_json::json!({
            "comparison": {
                "models": { "model_a": "Prophet", "model_b": "Ensemble" },
                "metrics": [
                    { "metric": "MAE", "model_a": 899.18, "model_b": 242.66 },
                    { "metric": "MAE", "model_a": 10.0, "model_b": 5.0 }
                ]
            },
            "thresholds": {}
        }))
        .unwrap();
        let presentation = metrics_from_dto(duplicated);
        assert!(!presentation.is_ready());
        assert!(presentation.render(&MetricsTextRenderer).starts_with("unavailable"));

        let mut blank = sample_payload();
        blank.comparison.models.model_a = "  ".to_string();
        assert!(!metrics_from_dto(blank).is_ready());

        assert_eq!(metrics_from_dto(sample_payload()).render(&MetricsTextRenderer), "5 metrics");
    }

    #[test]
    fn test_negligible_change_has_no_headline() {
        let models = model::ModelLabels::new("A", "B").unwrap();
        let comparison = MetricComparison::new(
            models,
            vec![model::MetricSet::new(MetricKind::Mae, 1000.0, 1003.0).unwrap()],
        )
        .unwrap();

        let view = present_metrics(&comparison, &Thresholds::default());
        assert_eq!(view.rows[0].improvement_text, "-0.30%");
        assert_eq!(view.headline, None);

        let worse = MetricComparison::new(
            model::ModelLabels::new("A", "B").unwrap(),
            vec![model::MetricSet::new(MetricKind::Mae, 1000.0, 1100.0).unwrap()],
        )
        .unwrap();
        assert_eq!(
            present_metrics(&worse, &Thresholds::default()).headline.as_deref(),
            Some("B increases the average error by 10% compared to A")
        );
    }
}
