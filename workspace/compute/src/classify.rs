use common::{MetricKind, Thresholds};
use serde::Serialize;
use tracing::trace;

use crate::error::{ComputeError, Result};

/// Visual severity of a metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Good,
    Neutral,
    Bad,
}

/// Labels a metric value using the configured thresholds.
///
/// Values strictly between the `good` and `bad` limits, values of metrics
/// without a configured threshold and non-finite values are `Neutral`.
pub fn classify_metric(kind: MetricKind, value: f64, thresholds: &Thresholds) -> Severity {
    let Some(threshold) = thresholds.get(kind) else {
        return Severity::Neutral;
    };
    if !value.is_finite() {
        return Severity::Neutral;
    }

    let severity = if kind.higher_is_better() {
        if value >= threshold.good {
            Severity::Good
        } else if value <= threshold.bad {
            Severity::Bad
        } else {
            Severity::Neutral
        }
    } else if value <= threshold.good {
        Severity::Good
    } else if value >= threshold.bad {
        Severity::Bad
    } else {
        Severity::Neutral
    };

    trace!(metric = kind.label(), value, ?severity, "Classified metric");
    severity
}

/// Returns the thresholds unchanged if they are consistent.
pub fn validated_thresholds(thresholds: Thresholds) -> Result<Thresholds> {
    thresholds
        .validate()
        .map_err(ComputeError::InvalidThresholds)?;
    Ok(thresholds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::MetricThreshold;

    #[test]
    fn test_error_metric_classification() {
        let thresholds = Thresholds::default();
        assert_eq!(classify_metric(MetricKind::Mae, 242.66, &thresholds), Severity::Good);
        assert_eq!(classify_metric(MetricKind::Mae, 500.0, &thresholds), Severity::Neutral);
        assert_eq!(classify_metric(MetricKind::Mae, 899.18, &thresholds), Severity::Bad);
        assert_eq!(classify_metric(MetricKind::Mape, 126.4, &thresholds), Severity::Bad);
    }

    #[test]
    fn test_r_squared_classification() {
        let thresholds = Thresholds::default();
        assert_eq!(classify_metric(MetricKind::RSquared, 0.93, &thresholds), Severity::Good);
        assert_eq!(classify_metric(MetricKind::RSquared, 0.6, &thresholds), Severity::Neutral);
        assert_eq!(classify_metric(MetricKind::RSquared, 0.15, &thresholds), Severity::Bad);
    }

    #[test]
    fn test_limits_are_inclusive() {
        let thresholds = Thresholds {
            rmse: Some(MetricThreshold::new(10.0, 20.0)),
            ..Thresholds::default()
        };
        assert_eq!(classify_metric(MetricKind::Rmse, 10.0, &thresholds), Severity::Good);
        assert_eq!(classify_metric(MetricKind::Rmse, 20.0, &thresholds), Severity::Bad);
    }

    #[test]
    fn test_missing_threshold_or_nan_is_neutral() {
        let thresholds = Thresholds {
            smape: None,
            ..Thresholds::default()
        };
        assert_eq!(classify_metric(MetricKind::Smape, 0.0, &thresholds), Severity::Neutral);
        assert_eq!(classify_metric(MetricKind::Mae, f64::NAN, &thresholds), Severity::Neutral);
    }

    #[test]
    fn test_validated_thresholds() {
        assert!(validated_thresholds(Thresholds::default()).is_ok());

        let inverted = Thresholds {
            mape: Some(MetricThreshold::new(50.0, 10.0)),
            ..Thresholds::default()
        };
        assert!(matches!(
            validated_thresholds(inverted),
            Err(ComputeError::InvalidThresholds(_))
        ));
    }
}
