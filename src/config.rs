//! Service configuration
//!
//! Values are layered, later sources winning:
//! 1. built-in defaults
//! 2. TOML file (`feedback-monitor.toml` in the working directory, or an
//!    explicit path which must then exist)
//! 3. environment variables prefixed `FEEDBACK_MONITOR_`
//!    (e.g. `FEEDBACK_MONITOR_STORE_PATH`)
//!
//! Command-line flags are applied on top by the binary.

use crate::error::Result;
use crate::monitoring::DEFAULT_LATENCY_WARN_MS;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::debug;

const DEFAULT_CONFIG_FILE: &str = "feedback-monitor";
const ENV_PREFIX: &str = "FEEDBACK_MONITOR";

pub const DEFAULT_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_STORE_PATH: &str = "feedback_data.json";
pub const DEFAULT_MONITOR_LOG: &str = "chatbot_monitor.log";

/// Runtime settings for the service and CLI
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// HTTP listen address
    pub addr: SocketAddr,
    /// Feedback collection file
    pub store_path: PathBuf,
    /// File that receives a copy of the log stream; empty disables it
    pub monitor_log: String,
    /// Latency above which responses are reported as slow
    pub latency_warn_ms: f64,
    /// Log level for this crate's targets
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            monitor_log: DEFAULT_MONITOR_LOG.to_string(),
            latency_warn_ms: DEFAULT_LATENCY_WARN_MS,
            log_level: "info".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from defaults, file and environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) => File::from(p.to_path_buf()).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = Config::builder()
            .set_default("addr", DEFAULT_ADDR)?
            .set_default("store_path", DEFAULT_STORE_PATH)?
            .set_default("monitor_log", DEFAULT_MONITOR_LOG)?
            .set_default("latency_warn_ms", DEFAULT_LATENCY_WARN_MS)?
            .set_default("log_level", "info")?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let config: ServiceConfig = settings.try_deserialize()?;
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Monitor log file, if enabled
    pub fn monitor_log_path(&self) -> Option<PathBuf> {
        let trimmed = self.monitor_log.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PathBuf::from(trimmed))
        }
    }
}
