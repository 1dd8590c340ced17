use serde::Deserialize;
use std::path::PathBuf;
use verita_core::config::{load_settings, LoggingSettings};
use verita_core::error::CoreError;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    /// Base URL of the platform API, without the `/api/v1` prefix.
    /// Overridden by `APP_API__BASE_URL`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout, including the response body.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiSettings {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("verita-client/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    File,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    #[serde(default)]
    pub kind: StorageKind,
    /// JSON file holding `access_token`/`refresh_token` between runs.
    #[serde(default = "default_token_file")]
    pub token_file: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            kind: StorageKind::default(),
            token_file: default_token_file(),
        }
    }
}

fn default_token_file() -> PathBuf {
    PathBuf::from(".verita").join("tokens.json")
}

pub fn get_configuration() -> Result<Settings, CoreError> {
    let base_path = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    // Running from the workspace root or from the crate directory
    let configuration_directory = if base_path.ends_with("verita-client") {
        base_path.join("config")
    } else {
        base_path.join("verita-client").join("config")
    };

    load_settings(&configuration_directory)
}
