use chrono::NaiveDate;
use common::{ForecastPointDto, ForecastResultDto, ModelLabelsDto, SeriesPointDto};
use tracing::{debug, warn};

use crate::error::{ModelError, Result};
use crate::horizon::Horizon;

fn ensure_finite(value: f64, field: &str, timestamp: NaiveDate) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ModelError::MalformedResult(format!(
            "{} at {} is not a finite number",
            field, timestamp
        )))
    }
}

/// Display names of the baseline (A) and challenger (B) models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelLabels {
    model_a: String,
    model_b: String,
}

impl ModelLabels {
    pub fn new(model_a: impl Into<String>, model_b: impl Into<String>) -> Result<Self> {
        let model_a = model_a.into().trim().to_string();
        let model_b = model_b.into().trim().to_string();
        if model_a.is_empty() || model_b.is_empty() {
            return Err(ModelError::MalformedResult(
                "model labels must not be blank".to_string(),
            ));
        }
        Ok(Self { model_a, model_b })
    }

    pub fn model_a(&self) -> &str {
        &self.model_a
    }

    pub fn model_b(&self) -> &str {
        &self.model_b
    }
}

impl TryFrom<ModelLabelsDto> for ModelLabels {
    type Error = ModelError;

    fn try_from(dto: ModelLabelsDto) -> Result<Self> {
        Self::new(dto.model_a, dto.model_b)
    }
}

impl From<&ModelLabels> for ModelLabelsDto {
    fn from(labels: &ModelLabels) -> Self {
        ModelLabelsDto {
            model_a: labels.model_a.clone(),
            model_b: labels.model_b.clone(),
        }
    }
}

/// A single dated value of one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    timestamp: NaiveDate,
    value: f64,
}

impl SeriesPoint {
    pub fn new(timestamp: NaiveDate, value: f64) -> Result<Self> {
        ensure_finite(value, "value", timestamp)?;
        Ok(Self { timestamp, value })
    }

    pub fn timestamp(&self) -> NaiveDate {
        self.timestamp
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Prediction interval limits at one timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalPoint {
    pub timestamp: NaiveDate,
    pub lower: f64,
    pub upper: f64,
}

/// One forecast period: both model predictions, the interval and the
/// observed value when the period is already in the past.
///
/// Invariant: `lower_bound <= prediction_a, prediction_b <= upper_bound`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastPoint {
    timestamp: NaiveDate,
    actual: Option<f64>,
    prediction_a: f64,
    prediction_b: f64,
    lower_bound: f64,
    upper_bound: f64,
}

impl ForecastPoint {
    pub fn new(
        timestamp: NaiveDate,
        actual: Option<f64>,
        prediction_a: f64,
        prediction_b: f64,
        lower_bound: f64,
        upper_bound: f64,
    ) -> Result<Self> {
        if let Some(actual) = actual {
            ensure_finite(actual, "actual", timestamp)?;
        }
        ensure_finite(prediction_a, "prediction_a", timestamp)?;
        ensure_finite(prediction_b, "prediction_b", timestamp)?;
        ensure_finite(lower_bound, "lower_bound", timestamp)?;
        ensure_finite(upper_bound, "upper_bound", timestamp)?;

        for (field, prediction) in [("prediction_a", prediction_a), ("prediction_b", prediction_b)] {
            if prediction < lower_bound || prediction > upper_bound {
                return Err(ModelError::MalformedResult(format!(
                    "{} {} at {} lies outside [{}, {}]",
                    field, prediction, timestamp, lower_bound, upper_bound
                )));
            }
        }

        Ok(Self {
            timestamp,
            actual,
            prediction_a,
            prediction_b,
            lower_bound,
            upper_bound,
        })
    }

    pub fn timestamp(&self) -> NaiveDate {
        self.timestamp
    }

    pub fn actual(&self) -> Option<f64> {
        self.actual
    }

    pub fn prediction_a(&self) -> f64 {
        self.prediction_a
    }

    pub fn prediction_b(&self) -> f64 {
        self.prediction_b
    }

    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    /// True when the point lies inside the forecast horizon.
    pub fn is_future(&self) -> bool {
        self.actual.is_none()
    }
}

impl TryFrom<ForecastPointDto> for ForecastPoint {
    type Error = ModelError;

    fn try_from(dto: ForecastPointDto) -> Result<Self> {
        Self::new(
            dto.timestamp,
            dto.actual,
            dto.prediction_a,
            dto.prediction_b,
            dto.lower_bound,
            dto.upper_bound,
        )
    }
}

fn ensure_increasing<I>(series: &str, timestamps: I) -> Result<()>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut previous: Option<NaiveDate> = None;
    for timestamp in timestamps {
        if let Some(previous) = previous {
            if timestamp <= previous {
                return Err(ModelError::MalformedResult(format!(
                    "{} timestamps are not strictly increasing ({} after {})",
                    series, timestamp, previous
                )));
            }
        }
        previous = Some(timestamp);
    }
    Ok(())
}

/// A complete forecast as handed back by the prediction service.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResult {
    models: ModelLabels,
    horizon: Horizon,
    history: Vec<SeriesPoint>,
    forecast: Vec<ForecastPoint>,
}

impl ForecastResult {
    pub fn new(
        models: ModelLabels,
        horizon: Horizon,
        history: Vec<SeriesPoint>,
        forecast: Vec<ForecastPoint>,
    ) -> Result<Self> {
        if forecast.is_empty() {
            return Err(ModelError::MalformedResult(
                "forecast contains no points".to_string(),
            ));
        }
        ensure_increasing("history", history.iter().map(SeriesPoint::timestamp))?;
        ensure_increasing("forecast", forecast.iter().map(ForecastPoint::timestamp))?;

        debug!(
            history = history.len(),
            forecast = forecast.len(),
            horizon = horizon.months(),
            "Validated forecast result"
        );

        Ok(Self {
            models,
            horizon,
            history,
            forecast,
        })
    }

    pub fn models(&self) -> &ModelLabels {
        &self.models
    }

    pub fn horizon(&self) -> Horizon {
        self.horizon
    }

    pub fn history(&self) -> &[SeriesPoint] {
        &self.history
    }

    pub fn forecast(&self) -> &[ForecastPoint] {
        &self.forecast
    }

    /// Observed values: the history followed by the actuals carried by
    /// forecast points. Timestamps present in both appear twice.
    pub fn actual_series(&self) -> Vec<SeriesPoint> {
        self.history
            .iter()
            .copied()
            .chain(self.forecast.iter().filter_map(|point| {
                point.actual.map(|value| SeriesPoint {
                    timestamp: point.timestamp,
                    value,
                })
            }))
            .collect()
    }

    pub fn prediction_a_series(&self) -> Vec<SeriesPoint> {
        self.forecast
            .iter()
            .map(|point| SeriesPoint {
                timestamp: point.timestamp,
                value: point.prediction_a,
            })
            .collect()
    }

    pub fn prediction_b_series(&self) -> Vec<SeriesPoint> {
        self.forecast
            .iter()
            .map(|point| SeriesPoint {
                timestamp: point.timestamp,
                value: point.prediction_b,
            })
            .collect()
    }

    pub fn bounds(&self) -> Vec<IntervalPoint> {
        self.forecast
            .iter()
            .map(|point| IntervalPoint {
                timestamp: point.timestamp,
                lower: point.lower_bound,
                upper: point.upper_bound,
            })
            .collect()
    }

    /// Forecast points without an observed value.
    pub fn future_points(&self) -> impl Iterator<Item = &ForecastPoint> {
        self.forecast.iter().filter(|point| point.is_future())
    }
}

impl TryFrom<ForecastResultDto> for ForecastResult {
    type Error = ModelError;

    fn try_from(dto: ForecastResultDto) -> Result<Self> {
        let models = ModelLabels::try_from(dto.models)?;
        let horizon = Horizon::try_from(dto.horizon_months).map_err(|e| {
            warn!(months = dto.horizon_months, "Forecast result carries unsupported horizon");
            ModelError::MalformedResult(e.to_string())
        })?;
        let history = dto
            .history
            .into_iter()
            .map(|p| SeriesPoint::new(p.timestamp, p.value))
            .collect::<Result<Vec<_>>>()?;
        let forecast = dto
            .forecast
            .into_iter()
            .map(ForecastPoint::try_from)
            .collect::<Result<Vec<_>>>()?;

        Self::new(models, horizon, history, forecast)
    }
}

impl From<&ForecastResult> for ForecastResultDto {
    fn from(result: &ForecastResult) -> Self {
        ForecastResultDto {
            models: ModelLabelsDto::from(&result.models),
            horizon_months: result.horizon.months(),
            history: result
                .history
                .iter()
                .map(|p| SeriesPointDto {
                    timestamp: p.timestamp,
                    value: p.value,
                })
                .collect(),
            forecast: result
                .forecast
                .iter()
                .map(|p| ForecastPointDto {
                    timestamp: p.timestamp,
                    actual: p.actual,
                    prediction_a: p.prediction_a,
                    prediction_b: p.prediction_b,
                    lower_bound: p.lower_bound,
                    upper_bound: p.upper_bound,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, 1).unwrap()
    }

    fn point_dto(month: u32, actual: Option<f64>, a: f64, b: f64, lower: f64, upper: f64) -> ForecastPointDto {
        ForecastPointDto {
            timestamp: date(2024, month),
            actual,
            prediction_a: a,
            prediction_b: b,
            lower_bound: lower,
            upper_bound: upper,
        }
    }

    fn sample_dto() -> ForecastResultDto {
        ForecastResultDto {
            models: ModelLabelsDto::default(),
            horizon_months: 6,
            history: vec![
                SeriesPointDto { timestamp: date(2023, 12), value: 5800.0 },
            ],
            forecast: vec![
                point_dto(1, Some(6100.0), 6200.0, 6180.0, 5600.0, 6800.0),
                point_dto(2, None, 6500.0, 6480.0, 5900.0, 7100.0),
            ],
        }
    }

    #[test]
    fn test_forecast_result_from_dto() {
        let result = ForecastResult::try_from(sample_dto()).expect("Should accept valid payload");
        assert_eq!(result.horizon(), Horizon::SixMonths);
        assert_eq!(result.models().model_b(), "Ensemble");
        assert_eq!(result.forecast().len(), 2);
        assert_eq!(result.future_points().count(), 1);

        let actuals = result.actual_series();
        assert_eq!(actuals.len(), 2);
        assert_eq!(actuals[1].value(), 6100.0);
    }

    #[test]
    fn test_prediction_outside_bounds_is_malformed() {
        let mut dto = sample_dto();
        dto.forecast[1].prediction_b = 7200.0;

        let err = ForecastResult::try_from(dto).unwrap_err();
        assert!(matches!(err, ModelError::MalformedResult(ref msg) if msg.contains("prediction_b")));
    }

    #[test]
    fn test_unordered_forecast_is_malformed() {
        let mut dto = sample_dto();
        dto.forecast.swap(0, 1);
        assert!(matches!(
            ForecastResult::try_from(dto),
            Err(ModelError::MalformedResult(_))
        ));
    }

    #[test]
    fn test_duplicate_history_timestamp_is_malformed() {
        let mut dto = sample_dto();
        dto.history.push(SeriesPointDto { timestamp: date(2023, 12), value: 1.0 });
        assert!(ForecastResult::try_from(dto).is_err());
    }

    #[test]
    fn test_non_finite_values_are_malformed() {
        let mut dto = sample_dto();
        dto.forecast[0].actual = Some(f64::NAN);
        assert!(ForecastResult::try_from(dto).is_err());
    }

    #[test]
    fn test_empty_forecast_and_bad_horizon_are_malformed() {
        let mut dto = sample_dto();
        dto.forecast.clear();
        assert!(ForecastResult::try_from(dto).is_err());

        let mut dto = sample_dto();
        dto.horizon_months = 7;
        assert!(matches!(
            ForecastResult::try_from(dto),
            Err(ModelError::MalformedResult(_))
        ));
    }

    #[test]
    fn test_dto_round_trip_preserves_payload() {
        let dto = sample_dto();
        let result = ForecastResult::try_from(dto.clone()).unwrap();
        assert_eq!(ForecastResultDto::from(&result), dto);
    }
}
