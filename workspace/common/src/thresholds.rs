use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use utoipa::ToSchema;

use crate::metrics::MetricKind;

/// Severity limits for one metric.
///
/// For error metrics a value at or below `good` is good and a value at or
/// above `bad` is bad. For R² the comparison is reversed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MetricThreshold {
    pub good: f64,
    pub bad: f64,
}

impl MetricThreshold {
    pub const fn new(good: f64, bad: f64) -> Self {
        Self { good, bad }
    }
}

/// Classification thresholds per metric.
///
/// Field names are lowercase so the struct can be loaded straight from
/// configuration files and environment variables.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(default)]
pub struct Thresholds {
    pub mae: Option<MetricThreshold>,
    pub rmse: Option<MetricThreshold>,
    pub mape: Option<MetricThreshold>,
    pub smape: Option<MetricThreshold>,
    pub r_squared: Option<MetricThreshold>,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            mae: Some(MetricThreshold::new(300.0, 800.0)),
            rmse: Some(MetricThreshold::new(400.0, 1000.0)),
            mape: Some(MetricThreshold::new(20.0, 100.0)),
            smape: Some(MetricThreshold::new(15.0, 40.0)),
            r_squared: Some(MetricThreshold::new(0.8, 0.5)),
        }
    }
}

impl Thresholds {
    pub fn get(&self, kind: MetricKind) -> Option<&MetricThreshold> {
        match kind {
            MetricKind::Mae => self.mae.as_ref(),
            MetricKind::Rmse => self.rmse.as_ref(),
            MetricKind::Mape => self.mape.as_ref(),
            MetricKind::Smape => self.smape.as_ref(),
            MetricKind::RSquared => self.r_squared.as_ref(),
        }
    }

    /// Checks that every configured threshold is finite and not inverted.
    pub fn validate(&self) -> Result<(), String> {
        for kind in MetricKind::ALL {
            let Some(threshold) = self.get(kind) else {
                continue;
            };

            if !threshold.good.is_finite() || !threshold.bad.is_finite() {
                warn!(metric = kind.label(), "Non-finite threshold");
                return Err(format!("{} threshold must be finite", kind.label()));
            }

            let inverted = if kind.higher_is_better() {
                threshold.good < threshold.bad
            } else {
                threshold.good > threshold.bad
            };
            if inverted {
                warn!(
                    metric = kind.label(),
                    good = threshold.good,
                    bad = threshold.bad,
                    "Inverted threshold"
                );
                return Err(format!(
                    "{} threshold is inverted: good={} bad={}",
                    kind.label(),
                    threshold.good,
                    threshold.bad
                ));
            }
        }
        debug!("Thresholds validated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds_are_valid() {
        assert!(Thresholds::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_error_threshold_rejected() {
        let thresholds = Thresholds {
            mae: Some(MetricThreshold::new(900.0, 100.0)),
            ..Thresholds::default()
        };
        let err = thresholds.validate().unwrap_err();
        assert!(err.contains("MAE"));
    }

    #[test]
    fn test_inverted_r_squared_threshold_rejected() {
        let thresholds = Thresholds {
            r_squared: Some(MetricThreshold::new(0.3, 0.9)),
            ..Thresholds::default()
        };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let thresholds: Thresholds =
            serde_json::from_str(r#"{"mae": {"good": 10.0, "bad": 20.0}}"#).unwrap();
        assert_eq!(thresholds.mae, Some(MetricThreshold::new(10.0, 20.0)));
        assert_eq!(thresholds.rmse, Thresholds::default().rmse);
    }

    #[test]
    fn test_thresholds_schema() {
        let (name, schema) = <Thresholds as ToSchema>::schema();
        assert_eq!(name, "Thresholds");

        let json = serde_json::to_value(schema).unwrap();
        assert!(json["properties"]["mae"].is_object());
        assert!(json["properties"]["r_squared"].is_object());
    }
}
