use thiserror::Error;

/// Startup and configuration failures.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Failure of the outbound GET capability itself.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("reading response body from {url} failed: {message}")]
    Body { url: String, message: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CepError {
    #[error("invalid zipcode")]
    InvalidFormat { cep: String },

    #[error("can not find zipcode")]
    NotFound { cep: String },

    #[error("error fetching CEP data: {message}")]
    Transport { message: String },
}

impl From<TransportError> for CepError {
    fn from(err: TransportError) -> Self {
        CepError::Transport {
            message: err.to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WeatherError {
    #[error("weather API key not configured")]
    MissingCredential,

    #[error("error fetching weather data: {message}")]
    Transport { message: String },
}

impl From<TransportError> for WeatherError {
    fn from(err: TransportError) -> Self {
        WeatherError::Transport {
            message: err.to_string(),
        }
    }
}
