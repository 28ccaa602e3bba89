use common::{MetricComparisonDto, MetricEntryDto, MetricKind};

use crate::error::{ModelError, Result};
use crate::forecast::ModelLabels;

/// One metric measured for model A (baseline) and model B (challenger).
///
/// Values are finite; error metrics are non-negative. R² is left
/// unbounded because a backtest can legitimately produce a negative one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSet {
    kind: MetricKind,
    model_a: f64,
    model_b: f64,
}

impl MetricSet {
    pub fn new(kind: MetricKind, model_a: f64, model_b: f64) -> Result<Self> {
        for value in [model_a, model_b] {
            if !value.is_finite() {
                return Err(ModelError::InvalidMetric {
                    metric: kind.label(),
                    reason: format!("{} is not a finite number", value),
                });
            }
            if !kind.higher_is_better() && value < 0.0 {
                return Err(ModelError::InvalidMetric {
                    metric: kind.label(),
                    reason: format!("error metric cannot be negative ({})", value),
                });
            }
        }
        Ok(Self {
            kind,
            model_a,
            model_b,
        })
    }

    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    pub fn model_a(&self) -> f64 {
        self.model_a
    }

    pub fn model_b(&self) -> f64 {
        self.model_b
    }
}

/// The metric table of the metrics page: at most one entry per metric,
/// kept in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricComparison {
    models: ModelLabels,
    metrics: Vec<MetricSet>,
}

impl MetricComparison {
    pub fn new(models: ModelLabels, mut metrics: Vec<MetricSet>) -> Result<Self> {
        metrics.sort_by_key(MetricSet::kind);
        if let Some(pair) = metrics.windows(2).find(|pair| pair[0].kind == pair[1].kind) {
            return Err(ModelError::InvalidMetric {
                metric: pair[0].kind.label(),
                reason: "metric listed more than once".to_string(),
            });
        }
        Ok(Self { models, metrics })
    }

    pub fn models(&self) -> &ModelLabels {
        &self.models
    }

    pub fn metrics(&self) -> &[MetricSet] {
        &self.metrics
    }

    pub fn get(&self, kind: MetricKind) -> Option<&MetricSet> {
        self.metrics.iter().find(|set| set.kind == kind)
    }
}

impl TryFrom<MetricComparisonDto> for MetricComparison {
    type Error = ModelError;

    fn try_from(dto: MetricComparisonDto) -> Result<Self> {
        let models = ModelLabels::try_from(dto.models)?;
        let metrics = dto
            .metrics
            .into_iter()
            .map(|entry| MetricSet::new(entry.metric, entry.model_a, entry.model_b))
            .collect::<Result<Vec<_>>>()?;
        Self::new(models, metrics)
    }
}

impl From<&MetricComparison> for MetricComparisonDto {
    fn from(comparison: &MetricComparison) -> Self {
        MetricComparisonDto {
            models: (&comparison.models).into(),
            metrics: comparison
                .metrics
                .iter()
                .map(|set| MetricEntryDto {
                    metric: set.kind,
                    model_a: set.model_a,
                    model_b: set.model_b,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::ModelLabelsDto;

    fn entry(metric: MetricKind, model_a: f64, model_b: f64) -> MetricEntryDto {
        MetricEntryDto {
            metric,
            model_a,
            model_b,
        }
    }

    #[test]
    fn test_negative_error_metric_rejected() {
        let err = MetricSet::new(MetricKind::Rmse, -1.0, 2.0).unwrap_err();
        assert!(matches!(err, ModelError::InvalidMetric { metric: "RMSE", .. }));
    }

    #[test]
    fn test_negative_r_squared_allowed() {
        let set = MetricSet::new(MetricKind::RSquared, -0.2, 0.9).expect("R² may be negative");
        assert_eq!(set.model_a(), -0.2);
    }

    #[test]
    fn test_non_finite_metric_rejected() {
        assert!(MetricSet::new(MetricKind::Mae, f64::NAN, 1.0).is_err());
        assert!(MetricSet::new(MetricKind::RSquared, 0.5, f64::INFINITY).is_err());
    }

    #[test]
    fn test_comparison_sorted_and_unique() {
        let dto = MetricComparisonDto {
            models: ModelLabelsDto {
                model_a: "Prophet".to_string(),
                model_b: "Ensemble".to_string(),
            },
            metrics: vec![
                entry(MetricKind::RSquared, 0.15, 0.93),
                entry(MetricKind::Mae, 899.18, 242.66),
            ],
        };

        let comparison = MetricComparison::try_from(dto).unwrap();
        assert_eq!(comparison.metrics()[0].kind(), MetricKind::Mae);
        assert_eq!(comparison.get(MetricKind::RSquared).unwrap().model_b(), 0.93);
        assert!(comparison.get(MetricKind::Smape).is_none());
    }

    #[test]
    fn test_duplicate_metric_rejected() {
        let dto = MetricComparisonDto {
            models: ModelLabelsDto::default(),
            metrics: vec![
                entry(MetricKind::Mae, 1.0, 2.0),
                entry(MetricKind::Mae, 3.0, 4.0),
            ],
        };
        assert!(MetricComparison::try_from(dto).is_err());
    }
}
