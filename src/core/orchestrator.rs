use crate::domain::model::Temperature;
use crate::domain::ports::{LocationResolver, WeatherLookup};
use crate::utils::error::CepError;
use thiserror::Error;

/// Client-visible outcome of a failed temperature request.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupFailure {
    #[error("invalid zipcode")]
    InvalidZipcode,

    #[error("can not find zipcode")]
    ZipcodeNotFound,

    #[error("internal server error")]
    LocationUnavailable,

    #[error("error fetching weather data")]
    WeatherUnavailable,
}

impl LookupFailure {
    pub fn status_code(&self) -> u16 {
        match self {
            LookupFailure::InvalidZipcode => 422,
            LookupFailure::ZipcodeNotFound => 404,
            LookupFailure::LocationUnavailable | LookupFailure::WeatherUnavailable => 500,
        }
    }
}

impl From<CepError> for LookupFailure {
    fn from(err: CepError) -> Self {
        match err {
            CepError::InvalidFormat { .. } => LookupFailure::InvalidZipcode,
            CepError::NotFound { .. } => LookupFailure::ZipcodeNotFound,
            CepError::Transport { .. } => LookupFailure::LocationUnavailable,
        }
    }
}

/// CEP -> location -> current temperature.
pub struct TemperatureService<R: LocationResolver, W: WeatherLookup> {
    resolver: R,
    weather: W,
}

impl<R: LocationResolver, W: WeatherLookup> TemperatureService<R, W> {
    pub fn new(resolver: R, weather: W) -> Self {
        Self { resolver, weather }
    }

    pub async fn temperature_for(&self, cep: &str) -> Result<Temperature, LookupFailure> {
        if cep.is_empty() {
            return Err(LookupFailure::InvalidZipcode);
        }

        let location = self.resolver.resolve(cep).await.map_err(|e| {
            tracing::warn!("CEP lookup failed for {:?}: {}", cep, e);
            LookupFailure::from(e)
        })?;

        let temperature = self
            .weather
            .lookup(&location.city, &location.state)
            .await
            .map_err(|e| {
                tracing::warn!(
                    "Weather lookup failed for {}, {} (CEP {}): {}",
                    location.city,
                    location.state,
                    location.cep,
                    e
                );
                LookupFailure::WeatherUnavailable
            })?;

        tracing::info!(
            "CEP {} -> {}/{}: {:.1}°C",
            location.cep,
            location.city,
            location.state,
            temperature.celsius
        );
        Ok(temperature)
    }
}
