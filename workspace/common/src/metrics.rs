use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::forecast::ModelLabelsDto;
use crate::thresholds::Thresholds;

/// Forecast accuracy metrics shown on the metrics page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum MetricKind {
    #[serde(rename = "MAE")]
    Mae,
    #[serde(rename = "RMSE")]
    Rmse,
    #[serde(rename = "MAPE")]
    Mape,
    #[serde(rename = "sMAPE")]
    Smape,
    #[serde(rename = "R2")]
    RSquared,
}

impl MetricKind {
    /// Display order used by tables and charts.
    pub const ALL: [MetricKind; 5] = [
        MetricKind::Mae,
        MetricKind::Rmse,
        MetricKind::Mape,
        MetricKind::Smape,
        MetricKind::RSquared,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::Mae => "MAE",
            MetricKind::Rmse => "RMSE",
            MetricKind::Mape => "MAPE",
            MetricKind::Smape => "sMAPE",
            MetricKind::RSquared => "R²",
        }
    }

    /// R² grows with quality, every other metric is an error measure.
    pub fn higher_is_better(&self) -> bool {
        matches!(self, MetricKind::RSquared)
    }

    /// MAPE and sMAPE are already expressed in percent.
    pub fn is_percentage(&self) -> bool {
        matches!(self, MetricKind::Mape | MetricKind::Smape)
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            MetricKind::Mae => "Mean Absolute Error",
            MetricKind::Rmse => "Root Mean Squared Error",
            MetricKind::Mape => "Mean Absolute Percentage Error",
            MetricKind::Smape => "Symmetric Mean Absolute Percentage Error",
            MetricKind::RSquared => "Coefficient of Determination",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MetricKind::Mae => {
                "Average absolute difference between predictions and actual values. Lower is better."
            }
            MetricKind::Rmse => {
                "Penalizes large errors more heavily. Useful to spot predictions far from reality."
            }
            MetricKind::Mape => {
                "Error expressed as a percentage: 10% means a 10% average error."
            }
            MetricKind::Smape => {
                "Symmetric MAPE that avoids the bias of MAPE when actual values are very small."
            }
            MetricKind::RSquared => {
                "How much of the variability of the data the model explains. 1.0 is perfect, 0.0 is poor."
            }
        }
    }
}

/// One metric measured for both models.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MetricEntryDto {
    pub metric: MetricKind,
    pub model_a: f64,
    pub model_b: f64,
}

/// Model comparison payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MetricComparisonDto {
    #[serde(default)]
    pub models: ModelLabelsDto,
    pub metrics: Vec<MetricEntryDto>,
}

/// Response body of the metrics endpoint: the comparison plus the
/// classification thresholds the backend is configured with.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MetricsPayload {
    pub comparison: MetricComparisonDto,
    pub thresholds: Thresholds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_kind_wire_names() {
        let json = serde_json::to_string(&MetricKind::ALL).unwrap();
        assert_eq!(json, r#"["MAE","RMSE","MAPE","sMAPE","R2"]"#);

        let parsed: MetricKind = serde_json::from_str(r#""sMAPE""#).unwrap();
        assert_eq!(parsed, MetricKind::Smape);
    }

    #[test]
    fn test_metric_kind_direction() {
        assert!(MetricKind::RSquared.higher_is_better());
        assert!(!MetricKind::Mae.higher_is_better());
        assert!(MetricKind::Mape.is_percentage());
        assert!(!MetricKind::Rmse.is_percentage());
    }
}
