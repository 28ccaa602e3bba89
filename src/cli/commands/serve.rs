use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::AppConfig;
use crate::demo_data::load_demo_data;
use crate::router::create_router;
use crate::schemas::AppState;

pub async fn serve(config: AppConfig) -> Result<()> {
    trace!("Entering serve function");
    info!("SalesVision demo data service starting up");
    debug!("Bind address: {}", config.bind_address);

    // Fixtures are validated once; handlers only read them
    let data = match load_demo_data(&config) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to load demo data: {}", e);
            return Err(e.into());
        }
    };
    let state = AppState::new(data, config.thresholds);

    trace!("Creating application router");
    let app = create_router(state);

    info!("Starting server on {}", config.bind_address);
    let listener = match TcpListener::bind(&config.bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to address {}: {}", config.bind_address, e);
            return Err(e.into());
        }
    };

    info!("SalesVision API running on http://{}", config.bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", config.bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
