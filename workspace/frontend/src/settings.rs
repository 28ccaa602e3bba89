use log::Level;
use web_sys::{window, Storage};

const STORAGE_PREFIX: &str = "salesvision_";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Demo data service host (e.g., "localhost" or "api.example.com")
    pub api_host: String,

    /// Demo data service port (e.g., 3000)
    pub api_port: u16,

    /// API path prefix (e.g., "/api/v1")
    pub api_path: String,

    /// Use HTTPS for API requests
    pub api_use_https: bool,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,

    /// How long the simulated prediction service takes to answer
    pub submission_delay_ms: u32,

    /// Make the simulated prediction service report a failure
    pub simulate_failure: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: "localhost".to_string(),
            api_port: 3000,
            api_path: "/api/v1".to_string(),
            api_use_https: false,
            log_level: Level::Info,
            debug_mode: false,
            toast_duration_ms: 5000,
            submission_delay_ms: 3000,
            simulate_failure: false,
        }
    }
}

fn read(storage: &Storage, key: &str) -> Option<String> {
    storage
        .get_item(&format!("{}{}", STORAGE_PREFIX, key))
        .ok()
        .flatten()
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

impl AppSettings {
    /// Create settings from the window location and localStorage overrides
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        let Ok(Some(storage)) = window.local_storage() else {
            return settings;
        };

        if let Some(api_host) = read(&storage, "api_host") {
            settings.api_host = api_host;
        }
        if let Some(port) = read(&storage, "api_port").and_then(|v| v.parse().ok()) {
            settings.api_port = port;
        }
        if let Some(api_path) = read(&storage, "api_path") {
            settings.api_path = api_path;
        }
        if let Some(use_https) = read(&storage, "api_use_https") {
            settings.api_use_https = use_https.eq_ignore_ascii_case("true");
        }
        if let Some(level) = read(&storage, "log_level").as_deref().and_then(parse_level) {
            settings.log_level = level;
        }
        if let Some(delay) = read(&storage, "submission_delay_ms").and_then(|v| v.parse().ok()) {
            settings.submission_delay_ms = delay;
        }
        if let Some(fail) = read(&storage, "simulate_failure") {
            settings.simulate_failure = fail.eq_ignore_ascii_case("true");
        }

        settings
    }

    /// Get the base API URL (protocol + host + port + path)
    pub fn api_base_url(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!("{}://{}:{}{}", protocol, self.api_host, self.api_port, self.api_path)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
