use crate::presentation::config::{Environment, LoggingSettings};

pub const DEFAULT_LOG_FILTER: &str = "info,medmentor=debug,tower_http=debug";

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
    pub filter: String,
}

impl TracingConfig {
    pub fn from_settings(environment: Environment, logging: &LoggingSettings) -> Self {
        let filter = if logging.level.trim().is_empty() {
            DEFAULT_LOG_FILTER.to_string()
        } else {
            logging.level.clone()
        };

        Self {
            environment,
            json_format: logging.enable_json,
            filter,
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Local,
            json_format: false,
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
