use crate::directory::{DEFAULT_MAX_DISTANCE, DEFAULT_MAX_RESULTS};
use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// TOML roster file; the built-in roster is used when unset.
    #[serde(default)]
    pub roster_path: Option<String>,
    #[serde(default = "default_max_distance")]
    pub max_distance: f64,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            roster_path: None,
            max_distance: DEFAULT_MAX_DISTANCE,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_max_distance() -> f64 {
    DEFAULT_MAX_DISTANCE
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

fn default_level() -> String {
    "info".to_string()
}

/// Loads settings from `path` (or `config/default` when present), then
/// `TRIAGE__SECTION__KEY` environment overrides.
pub fn load(path: Option<&str>) -> Result<AppConfig> {
    let mut settings = config::Config::builder();
    if let Some(p) = path {
        settings = settings.add_source(config::File::with_name(p));
    } else {
        settings = settings.add_source(config::File::with_name("config/default").required(false));
    }
    settings = settings.add_source(
        config::Environment::with_prefix("TRIAGE")
            .prefix_separator("__")
            .separator("__"),
    );
    let cfg = settings.build()?;
    Ok(cfg.try_deserialize()?)
}
