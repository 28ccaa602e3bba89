use common::{ForecastResultDto, MetricComparisonDto};
use compute::ComputeError;
use model::{ForecastResult, MetricComparison, ModelError};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::config::AppConfig;

const SAMPLE_RESULT: &str = include_str!("../data/sample_result.json");
const SAMPLE_METRICS: &str = include_str!("../data/sample_metrics.json");

#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Rejected {origin}: {source}")]
    Invalid {
        origin: String,
        #[source]
        source: ModelError,
    },

    #[error(transparent)]
    Compute(#[from] ComputeError),
}

/// Where the served metric comparison came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonSource {
    Fixture,
    Backtest,
}

/// Everything the demo data service serves, validated up front.
#[derive(Debug, Clone)]
pub struct DemoData {
    pub result: ForecastResult,
    pub comparison: MetricComparison,
    pub comparison_source: ComparisonSource,
}

fn read_fixture<T: DeserializeOwned>(path: Option<&Path>, bundled: &str) -> Result<(T, String), DataError> {
    let (text, origin) = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| DataError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            (text, path.display().to_string())
        }
        None => (bundled.to_string(), "bundled sample".to_string()),
    };

    let value = serde_json::from_str(&text).map_err(|source| DataError::Json {
        origin: origin.clone(),
        source,
    })?;
    Ok((value, origin))
}

pub fn load_result(path: Option<&Path>) -> Result<ForecastResult, DataError> {
    let (dto, origin) = read_fixture::<ForecastResultDto>(path, SAMPLE_RESULT)?;
    let result = ForecastResult::try_from(dto).map_err(|source| DataError::Invalid {
        origin: origin.clone(),
        source,
    })?;
    debug!(origin, points = result.forecast().len(), "Loaded forecast result");
    Ok(result)
}

pub fn load_comparison(path: Option<&Path>) -> Result<MetricComparison, DataError> {
    let (dto, origin) = read_fixture::<MetricComparisonDto>(path, SAMPLE_METRICS)?;
    let comparison = MetricComparison::try_from(dto).map_err(|source| DataError::Invalid {
        origin: origin.clone(),
        source,
    })?;
    debug!(origin, metrics = comparison.metrics().len(), "Loaded metric comparison");
    Ok(comparison)
}

#[instrument(skip(config))]
pub fn load_demo_data(config: &AppConfig) -> Result<DemoData, DataError> {
    let result = load_result(config.result_path.as_deref())?;

    let (provided, comparison_source) = if config.backtest_metrics {
        (None, ComparisonSource::Backtest)
    } else {
        (
            Some(load_comparison(config.metrics_path.as_deref())?),
            ComparisonSource::Fixture,
        )
    };
    let comparison = compute::comparison_for(&result, provided)?;

    info!(
        forecast_points = result.forecast().len(),
        metrics = comparison.metrics().len(),
        source = ?comparison_source,
        "Demo data ready"
    );
    Ok(DemoData {
        result,
        comparison,
        comparison_source,
    })
}
