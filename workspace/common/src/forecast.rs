use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Display names of the two compared models.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ModelLabelsDto {
    /// Baseline model (e.g. "Prophet" or "Quantile LSTM")
    pub model_a: String,
    /// Challenger model (e.g. "Ensemble")
    pub model_b: String,
}

impl Default for ModelLabelsDto {
    fn default() -> Self {
        Self {
            model_a: "Quantile LSTM".to_string(),
            model_b: "Ensemble".to_string(),
        }
    }
}

/// One observed value of the sales history.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SeriesPointDto {
    pub timestamp: NaiveDate,
    pub value: f64,
}

/// One forecast period as returned by the prediction service.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ForecastPointDto {
    pub timestamp: NaiveDate,
    /// Observed value, absent inside the forecast horizon
    #[serde(default)]
    pub actual: Option<f64>,
    pub prediction_a: f64,
    pub prediction_b: f64,
    /// Lower limit of the prediction interval (yhat_lower)
    pub lower_bound: f64,
    /// Upper limit of the prediction interval (yhat_upper)
    pub upper_bound: f64,
}

/// Forecast result payload.
///
/// This is the unvalidated wire shape; the `model` crate converts it into a
/// `ForecastResult` and rejects anything that breaks the bound or ordering
/// invariants.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ForecastResultDto {
    #[serde(default)]
    pub models: ModelLabelsDto,
    /// Requested horizon in months (1, 6, 12 or 24)
    pub horizon_months: u32,
    #[serde(default)]
    pub history: Vec<SeriesPointDto>,
    pub forecast: Vec<ForecastPointDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_result_dto_defaults() {
        let json = r#"{
            "horizon_months": 6,
            "forecast": [{
                "timestamp": "2024-01-01",
                "prediction_a": 6200.0,
                "prediction_b": 6180.0,
                "lower_bound": 5600.0,
                "upper_bound": 6800.0
            }]
        }"#;

        let dto: ForecastResultDto = serde_json::from_str(json).expect("Should parse payload");
        assert_eq!(dto.models, ModelLabelsDto::default());
        assert!(dto.history.is_empty());
        assert_eq!(dto.forecast.len(), 1);
        assert_eq!(dto.forecast[0].actual, None);
        assert_eq!(
            dto.forecast[0].timestamp,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_forecast_point_dto_null_actual() {
        let json = r#"{
            "timestamp": "2023-10-01",
            "actual": null,
            "prediction_a": 4750.0,
            "prediction_b": 4820.0,
            "lower_bound": 4200.0,
            "upper_bound": 5400.0
        }"#;

        let point: ForecastPointDto = serde_json::from_str(json).expect("Should parse point");
        assert_eq!(point.actual, None);
    }
}
