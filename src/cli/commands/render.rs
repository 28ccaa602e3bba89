use anyhow::Result;
use compute::{Presentation, present_metrics, present_results};
use tracing::warn;

use crate::config::AppConfig;
use crate::demo_data::{load_comparison, load_result};
use crate::render::TerminalRenderer;

/// Text rendition of the results and metrics pages. A fixture that fails
/// validation is reported as unavailable instead of aborting the command.
pub fn render(config: &AppConfig) -> Result<String> {
    let renderer = TerminalRenderer;

    let results = match load_result(config.result_path.as_deref()) {
        Ok(result) => Presentation::Ready(present_results(&result)),
        Err(e) => {
            warn!("{}", e);
            Presentation::unavailable(e.to_string())
        }
    };

    let metrics = match load_comparison(config.metrics_path.as_deref()) {
        Ok(comparison) => Presentation::Ready(present_metrics(&comparison, &config.thresholds)),
        Err(e) => {
            warn!("{}", e);
            Presentation::unavailable(e.to_string())
        }
    };

    Ok(format!(
        "{}\n{}",
        results.render(&renderer),
        metrics.render(&renderer)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_render_bundled_samples() {
        let output = render(&AppConfig::default()).unwrap();
        assert!(output.contains("Predictions"));
        assert!(output.contains("Model comparison: Prophet vs Ensemble"));
    }

    #[test]
    fn test_unreadable_result_degrades() {
        let config = AppConfig {
            result_path: Some(PathBuf::from("/nonexistent/result.json")),
            ..AppConfig::default()
        };
        let output = render(&config).unwrap();
        assert!(output.starts_with("Forecast data unavailable"));
        assert!(output.contains("Model comparison"));
    }
}
