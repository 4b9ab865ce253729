use crate::shared::api::url::{location_base, normalize_base_url};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub service_worker: ServiceWorkerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Explicit backend base URL; derived from the page location when absent
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationsConfig {
    pub poll_interval_secs: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServiceWorkerConfig {
    pub enabled: bool,
    pub script_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

fn default_port() -> u16 {
    3000
}

fn default_timeout_ms() -> u32 {
    15_000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            port: default_port(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: 30,
        }
    }
}

impl Default for ServiceWorkerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            script_url: "/sw.js".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            notifications: NotificationsConfig::default(),
            service_worker: ServiceWorkerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000
timeout_ms = 15000

[notifications]
poll_interval_secs = 30

[service_worker]
enabled = true
script_url = "/sw.js"

[logging]
level = "info"
"#;

pub fn parse_config(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

/// Load configuration.
///
/// Resolution order:
/// 1. Embedded default TOML
/// 2. `RETAIL_API_BASE` set at build time overrides `api.base_url`
pub fn load_config() -> Config {
    let mut config = match parse_config(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            // logger is not up yet, so this only shows when a previous init succeeded
            log::warn!("embedded config is invalid, using defaults: {}", e);
            Config::default()
        }
    };

    if let Some(base) = option_env!("RETAIL_API_BASE") {
        if !base.trim().is_empty() {
            config.api.base_url = Some(base.to_string());
        }
    }

    config
}

impl Config {
    /// Backend base URL, normalized (no trailing slash, no trailing `/api`)
    pub fn api_base(&self) -> String {
        match self.api.base_url.as_deref() {
            Some(explicit) if !explicit.trim().is_empty() => normalize_base_url(explicit),
            _ => normalize_base_url(&location_base(self.api.port)),
        }
    }

    pub fn log_level(&self) -> log::Level {
        self.logging.level.parse().unwrap_or(log::Level::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.api.timeout_ms, 15_000);
        assert_eq!(config.notifications.poll_interval_secs, 30);
        assert_eq!(config.service_worker.script_url, "/sw.js");
        assert_eq!(config.logging, LoggingConfig::default());
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_missing_sections_fall_back() {
        let config = parse_config("[api]\nbase_url = \"https://shop.example.vn/api/\"\n").unwrap();
        assert_eq!(config.notifications, NotificationsConfig::default());
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.api_base(), "https://shop.example.vn");
    }

    #[test]
    fn test_bad_log_level_defaults_to_info() {
        let mut config = Config::default();
        config.logging.level = "loud".into();
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
