use crate::domain::model::{Location, Temperature};
use crate::utils::error::{CepError, TransportError, WeatherError};
use async_trait::async_trait;

/// Status and body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Outbound GET; the only thing the lookup services need from the network.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
pub trait LocationResolver: Send + Sync {
    async fn resolve(&self, cep: &str) -> Result<Location, CepError>;
}

#[async_trait]
pub trait WeatherLookup: Send + Sync {
    async fn lookup(&self, city: &str, state: &str) -> Result<Temperature, WeatherError>;
}
