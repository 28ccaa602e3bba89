use common::MetricKind;
use model::{MetricComparison, MetricSet};
use serde::Serialize;
use tracing::debug;

/// Relative improvement of model B over model A, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Improvement {
    Percent(f64),
    /// The baseline is zero, so no relative change exists.
    Undefined,
}

impl Improvement {
    pub fn percent(&self) -> Option<f64> {
        match self {
            Improvement::Percent(value) => Some(*value),
            Improvement::Undefined => None,
        }
    }

    /// True when model B is strictly better than model A.
    pub fn is_positive(&self) -> bool {
        self.percent().is_some_and(|value| value > 0.0)
    }
}

/// Computes how much better model B does than model A on one metric.
///
/// Error metrics improve when they shrink: `(A - B) / A * 100`.
/// R² improves when it grows: `(B - A) / |A| * 100`; the absolute value
/// keeps the sign meaningful for a negative baseline.
pub fn compute_improvement(set: &MetricSet) -> Improvement {
    let (baseline, challenger) = (set.model_a(), set.model_b());
    if baseline == 0.0 || !baseline.is_finite() || !challenger.is_finite() {
        debug!(metric = set.kind().label(), baseline, "Improvement undefined");
        return Improvement::Undefined;
    }

    let delta = if set.kind().higher_is_better() {
        challenger - baseline
    } else {
        baseline - challenger
    };
    let percent = delta / baseline.abs() * 100.0;

    if percent.is_finite() {
        Improvement::Percent(percent)
    } else {
        Improvement::Undefined
    }
}

/// Improvement of every metric of a comparison, in display order.
pub fn improvements(comparison: &MetricComparison) -> Vec<(MetricKind, Improvement)> {
    comparison
        .metrics()
        .iter()
        .map(|set| (set.kind(), compute_improvement(set)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(kind: MetricKind, a: f64, b: f64) -> MetricSet {
        MetricSet::new(kind, a, b).unwrap()
    }

    #[test]
    fn test_mae_sample_improvement() {
        let improvement = compute_improvement(&set(MetricKind::Mae, 899.18, 242.66));
        let percent = improvement.percent().expect("Baseline is non-zero");
        assert!((percent - 73.0).abs() < 0.1, "got {}", percent);
        assert!(improvement.is_positive());
    }

    #[test]
    fn test_r_squared_is_higher_is_better() {
        let percent = compute_improvement(&set(MetricKind::RSquared, 0.15, 0.93))
            .percent()
            .unwrap();
        assert!((percent - 520.0).abs() < 1e-9);

        let worse = compute_improvement(&set(MetricKind::RSquared, 0.9, 0.45));
        assert!(worse.percent().unwrap() < 0.0);
    }

    #[test]
    fn test_negative_r_squared_baseline_keeps_sign() {
        let improvement = compute_improvement(&set(MetricKind::RSquared, -0.5, 0.5));
        assert_eq!(improvement, Improvement::Percent(200.0));
    }

    #[test]
    fn test_zero_baseline_is_undefined() {
        for kind in MetricKind::ALL {
            let improvement = compute_improvement(&set(kind, 0.0, 5.0));
            assert_eq!(improvement, Improvement::Undefined);
            assert_eq!(improvement.percent(), None);
        }
    }

    #[test]
    fn test_tiny_baseline_never_yields_infinity() {
        let improvement = compute_improvement(&set(MetricKind::Mae, f64::MIN_POSITIVE / 4.0, 1e300));
        if let Some(percent) = improvement.percent() {
            assert!(percent.is_finite());
        }
    }

    #[test]
    fn test_better_error_metric_never_negative() {
        let values = [0.001, 0.5, 1.0, 3.3, 42.0, 899.18, 1e4, 1e6];
        for kind in [MetricKind::Mae, MetricKind::Rmse, MetricKind::Mape, MetricKind::Smape] {
            for &a in &values {
                for &b in values.iter().filter(|&&b| b <= a) {
                    let percent = compute_improvement(&set(kind, a, b)).percent().unwrap();
                    assert!(percent >= 0.0, "{} A={} B={} gave {}", kind.label(), a, b, percent);
                }
            }
        }
    }
}
