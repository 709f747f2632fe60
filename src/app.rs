//! Wiring of the production services and the server lifecycle.

use crate::adapters::http::ReqwestHttpClient;
use crate::api;
use crate::config::Settings;
use crate::core::{TemperatureService, ViaCepResolver, WeatherApiClient};
use crate::utils::error::{AppError, Result};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

pub fn build_router(settings: &Settings) -> Result<Router> {
    let http = ReqwestHttpClient::new(settings.request_timeout()).map_err(|e| {
        AppError::ConfigError {
            message: e.to_string(),
        }
    })?;

    if settings.weather_api_key.is_none() {
        tracing::warn!("WEATHER_API_KEY is not set; temperature requests will fail");
    }

    let resolver = ViaCepResolver::with_base_url(http.clone(), &settings.viacep_base_url);
    let weather = WeatherApiClient::with_base_url(
        http,
        settings.weather_api_key.clone(),
        &settings.weather_base_url,
    );

    Ok(api::router(TemperatureService::new(resolver, weather)))
}

pub async fn serve(settings: &Settings) -> Result<()> {
    let router = build_router(settings)?;
    let address = settings.bind_address();
    let listener = TcpListener::bind(&address).await?;

    tracing::info!("Server listening on {}", address);
    tracing::info!("Endpoints:");
    tracing::info!("  GET /health - health check");
    tracing::info!("  GET /temperature/{{cep}} - current temperature by CEP");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Error handling Ctrl+C signal: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut handler) => {
                handler.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, stopping server");
}
