pub mod cep_service;
pub mod orchestrator;
pub mod weather_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::domain::model::{Location, Temperature};
pub use crate::domain::ports::{HttpClient, LocationResolver, WeatherLookup};
pub use cep_service::ViaCepResolver;
pub use orchestrator::{LookupFailure, TemperatureService};
pub use weather_service::WeatherApiClient;
