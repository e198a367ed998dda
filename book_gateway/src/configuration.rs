use common::helper::error_chain_fmt;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub upstream: UpstreamSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

/// Third-party book catalog the gateway proxies
#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamSettings {
    /// Scheme and authority only, ex: `https://the-one-api.dev`
    pub base_url: String,
    /// Page size requested from the catalog. Only the first page is ever fetched.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub limit: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
    /// When false, transport and parsing failures are answered with the same
    /// generic message as upstream rejections instead of their own description.
    pub forward_error_messages: bool,
}

impl UpstreamSettings {
    pub fn books_url(&self) -> String {
        format!(
            "{}/v2/book?limit={}",
            self.base_url.trim_end_matches('/'),
            self.limit
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

/// Extracts app settings from configuration files and env variables
///
/// `base.yaml` contains the settings shared by all environments, and each environment
/// has its own file: `local.yaml` and `production.yaml`.
/// The environment is selected with the env var `APP_ENVIRONMENT`, `local` by default.
///
/// Settings can be overridden by environment variables with a prefix of APP and '__' as separator.
/// For ex: `APP_UPSTREAM__TIMEOUT_MILLISECONDS=2000` sets `Settings.upstream.timeout_milliseconds`
pub fn get_configuration() -> Result<Settings, ConfigurationError> {
    let base_path = std::env::current_dir()?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigurationError::UnknownEnvironment)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.yaml"),
        ))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize::<Settings>()?)
}

#[derive(thiserror::Error)]
pub enum ConfigurationError {
    #[error("Failed to determine the current directory: {0}")]
    CurrentDirError(#[from] std::io::Error),
    #[error("{0}")]
    UnknownEnvironment(String),
    #[error(transparent)]
    ConfigError(#[from] config::ConfigError),
}

impl std::fmt::Debug for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// The possible runtime environment for our application.
#[derive(Debug, PartialEq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
