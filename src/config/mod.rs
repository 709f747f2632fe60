pub mod toml_config;

use crate::adapters::http::DEFAULT_TIMEOUT_SECS;
use crate::core::cep_service::VIACEP_BASE_URL;
use crate::core::weather_service::WEATHER_API_BASE_URL;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use toml_config::TomlConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Command line / environment arguments. Unset values fall back to the
/// config file, then to built-in defaults.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "weather-cep")]
#[command(about = "Current temperature for a Brazilian postal code (CEP)")]
pub struct CliArgs {
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    #[arg(long, env = "WEATHER_API_KEY", hide_env_values = true)]
    pub weather_api_key: Option<String>,

    #[arg(long, env = "VIACEP_BASE_URL")]
    pub viacep_base_url: Option<String>,

    #[arg(long, env = "WEATHER_API_BASE_URL")]
    pub weather_base_url: Option<String>,

    #[arg(long, env = "REQUEST_TIMEOUT_SECONDS")]
    pub request_timeout_seconds: Option<u64>,

    #[arg(long, env = "WEATHER_CEP_CONFIG", help = "Path to a TOML settings file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, env = "LOG_JSON", help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub weather_api_key: Option<String>,
    pub viacep_base_url: String,
    pub weather_base_url: String,
    pub request_timeout_seconds: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            weather_api_key: None,
            viacep_base_url: VIACEP_BASE_URL.to_string(),
            weather_base_url: WEATHER_API_BASE_URL.to_string(),
            request_timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Reads the config file named by `args` (if any) and merges it under `args`.
    pub fn load(args: &CliArgs) -> Result<Self> {
        let file = match &args.config {
            Some(path) => {
                tracing::debug!("Loading settings file {}", path.display());
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        let settings = Self::merge(args, file);
        settings.validate()?;
        Ok(settings)
    }

    pub fn merge(args: &CliArgs, file: TomlConfig) -> Self {
        let defaults = Settings::default();

        Self {
            host: args
                .host
                .clone()
                .or(file.server.host)
                .unwrap_or(defaults.host),
            port: args.port.or(file.server.port).unwrap_or(defaults.port),
            weather_api_key: args
                .weather_api_key
                .clone()
                .or(file.weather.api_key)
                .filter(|key| !key.trim().is_empty()),
            viacep_base_url: args
                .viacep_base_url
                .clone()
                .or(file.viacep.base_url)
                .unwrap_or(defaults.viacep_base_url),
            weather_base_url: args
                .weather_base_url
                .clone()
                .or(file.weather.base_url)
                .unwrap_or(defaults.weather_base_url),
            request_timeout_seconds: args
                .request_timeout_seconds
                .or(file.http.timeout_seconds)
                .unwrap_or(defaults.request_timeout_seconds),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_positive_number("port", u64::from(self.port), 1)?;
        validate_url("viacep_base_url", &self.viacep_base_url)?;
        validate_url("weather_base_url", &self.weather_base_url)?;
        validate_range("request_timeout_seconds", self.request_timeout_seconds, 1, 300)?;
        Ok(())
    }
}
