use anyhow::{Context, Result};
use common::Thresholds;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_CONFIG_FILE: &str = "salesvision";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const ENV_PREFIX: &str = "SALESVISION";

/// Settings of the demo data service and the CLI.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
    pub bind_address: String,
    /// Forecast result fixture; the bundled sample when unset
    pub result_path: Option<PathBuf>,
    /// Metric comparison fixture; the bundled sample when unset
    pub metrics_path: Option<PathBuf>,
    /// Serve metrics backtested from the result instead of a fixture
    #[serde(default)]
    pub backtest_metrics: bool,
    #[serde(default)]
    pub thresholds: Thresholds,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            result_path: None,
            metrics_path: None,
            backtest_metrics: false,
            thresholds: Thresholds::default(),
        }
    }
}

/// Loads configuration from `.env`, an optional TOML file and
/// `SALESVISION__*` environment variables, later sources winning.
///
/// Without an explicit `file`, `salesvision.toml` in the working directory
/// is used when present.
pub fn load_config(file: Option<&Path>) -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let source = match file {
        Some(path) => File::from(path).required(true),
        None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let config: AppConfig = Config::builder()
        .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
        .add_source(source)
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()
        .context("Failed to read configuration")?
        .try_deserialize()
        .context("Invalid configuration")?;

    config
        .thresholds
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid thresholds: {}", e))?;

    debug!(?config, "Configuration loaded");
    info!("Configuration loaded (bind address {})", config.bind_address);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("salesvision-{}-{}.toml", name, std::process::id()));
        let mut file = std::fs::File::create(&path).expect("Failed to create config file");
        file.write_all(contents.as_bytes()).expect("Failed to write config file");
        path
    }

    #[test]
    fn test_file_overrides_defaults() {
        let path = write_config(
            "override",
            r#"
bind_address = "127.0.0.1:8080"
backtest_metrics = true

[thresholds.mae]
good = 100.0
bad = 200.0
"#,
        );

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert!(config.backtest_metrics);

        let mae = config.thresholds.mae.unwrap();
        assert_eq!((mae.good, mae.bad), (100.0, 200.0));
        // untouched metrics keep their defaults
        assert_eq!(config.thresholds.rmse, Thresholds::default().rmse);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let path = write_config(
            "inverted",
            r#"
[thresholds.r_squared]
good = 0.2
bad = 0.9
"#,
        );

        assert!(load_config(Some(&path)).is_err());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let path = std::env::temp_dir().join("salesvision-does-not-exist.toml");
        assert!(load_config(Some(&path)).is_err());
    }
}
