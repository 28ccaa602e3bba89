use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use commands::{evaluate, render, serve};

#[derive(Parser)]
#[command(name = "salesvision")]
#[command(about = "SalesVision demo data service and forecast presentation tools")]
#[command(version)]
pub struct Cli {
    /// Configuration file (TOML)
    ///
    /// Defaults to salesvision.toml in the working directory when present.
    #[arg(short, long, global = true, env = "SALESVISION_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the demo data service
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS")]
        bind_address: Option<String>,
    },
    /// Print the results and metrics pages as text tables
    Render {
        /// Forecast result JSON; the configured or bundled one when omitted
        #[arg(short, long)]
        result: Option<PathBuf>,

        /// Metric comparison JSON; the configured or bundled one when omitted
        #[arg(short, long)]
        metrics: Option<PathBuf>,
    },
    /// Backtest both models on the observed periods of a forecast result
    ///
    /// Prints MAE, RMSE, MAPE, sMAPE and R² per model followed by residual
    /// diagnostics.
    Evaluate {
        /// Forecast result JSON; the configured or bundled one when omitted
        #[arg(short, long)]
        result: Option<PathBuf>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let mut config = crate::config::load_config(self.config.as_deref())?;

        match self.command {
            Commands::Serve { bind_address } => {
                if let Some(bind_address) = bind_address {
                    config.bind_address = bind_address;
                }
                serve(config).await?;
            }
            Commands::Render { result, metrics } => {
                config.result_path = result.or(config.result_path);
                config.metrics_path = metrics.or(config.metrics_path);
                print!("{}", render(&config)?);
            }
            Commands::Evaluate { result } => {
                config.result_path = result.or(config.result_path);
                print!("{}", evaluate(&config)?);
            }
        }
        Ok(())
    }
}
