use crate::error::CoreError;
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines with file/line info instead of human-readable output.
    #[serde(default)]
    pub json: bool,
    /// OTLP gRPC collector, e.g. http://tempo:4317. Export is disabled when unset.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            otlp_endpoint: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Load layered settings: `<config_dir>/base.yaml` (optional), then
/// `APP_*` environment variables with `__` as the nesting separator
/// (e.g. `APP_API__BASE_URL`).
///
/// A `.env` file in the working directory is loaded first if present.
pub fn load_settings<T: DeserializeOwned>(config_dir: &Path) -> Result<T, CoreError> {
    dotenvy::dotenv().ok();

    let settings = Config::builder()
        .add_source(File::from(config_dir.join("base.yaml")).required(false))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize::<T>()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default)]
        logging: LoggingSettings,
    }

    #[test]
    fn test_defaults_without_sources() {
        let dir = std::env::temp_dir().join("verita-core-missing-config");
        let sample: Sample = load_settings(&dir).unwrap();
        assert!(!sample.logging.json);
        assert!(sample.logging.otlp_endpoint.is_none());
    }
}
