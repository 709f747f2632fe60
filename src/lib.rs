pub mod adapters;
pub mod api;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::http::ReqwestHttpClient;
pub use crate::config::{CliArgs, Settings};
pub use crate::core::{LookupFailure, TemperatureService, ViaCepResolver, WeatherApiClient};
pub use crate::domain::model::{Location, Temperature};
pub use crate::utils::error::{AppError, Result};
