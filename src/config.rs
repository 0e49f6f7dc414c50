use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub predictor: PredictorSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PredictorSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for PredictorSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with FARECAST_)
    /// 4. PREDICTION_API_URL for the service base URL
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with FARECAST_)
            // e.g., FARECAST_PREDICTOR__BASE_URL -> predictor.base_url
            .add_source(
                Environment::with_prefix("FARECAST")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("FARECAST")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply the well-known base URL environment override
///
/// PREDICTION_API_URL wins over FARECAST_PREDICTOR__BASE_URL, which wins
/// over the config-file value and the built-in default.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let base_url = env::var("PREDICTION_API_URL")
        .or_else(|_| env::var("FARECAST_PREDICTOR__BASE_URL"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(url) = base_url {
        builder = builder.set_override("predictor.base_url", url)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_predictor_settings() {
        let predictor = PredictorSettings::default();
        assert_eq!(predictor.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("farecast_config_test.toml");
        std::fs::write(
            &path,
            "[predictor]\nbase_url = \"http://predictor.test:9000\"\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.predictor.base_url, "http://predictor.test:9000");
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.logging.format, "json");

        let _ = std::fs::remove_file(&path);
    }
}
