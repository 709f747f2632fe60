//! HTTP surface: `GET /health` and `GET /temperature/{cep}`.

use crate::core::{LocationResolver, LookupFailure, TemperatureService, WeatherLookup};
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Request, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub const HEALTH_MESSAGE: &str = "Weather CEP API is running";

const CORS_ALLOW_METHODS: &str = "GET, POST, OPTIONS";
const CORS_ALLOW_HEADERS: &str =
    "Origin, Content-Type, Content-Length, Accept-Encoding, X-CSRF-Token, Authorization";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl IntoResponse for LookupFailure {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, self.to_string()).into_response()
    }
}

pub fn router<R, W>(service: TemperatureService<R, W>) -> Router
where
    R: LocationResolver + 'static,
    W: WeatherLookup + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/temperature", get(missing_cep))
        .route("/temperature/", get(missing_cep))
        .route("/temperature/{cep}", get(get_temperature::<R, W>))
        .layer(middleware::from_fn(cors_headers))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(service))
}

/// Adds permissive CORS headers to every response and answers any
/// `OPTIONS` request with 204 without routing it.
pub async fn cors_headers(request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(CORS_ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(CORS_ALLOW_HEADERS),
    );
    response
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: HEALTH_MESSAGE.to_string(),
    })
}

async fn missing_cep() -> LookupFailure {
    LookupFailure::InvalidZipcode
}

async fn get_temperature<R, W>(
    State(service): State<Arc<TemperatureService<R, W>>>,
    cep: Result<Path<String>, PathRejection>,
) -> Response
where
    R: LocationResolver + 'static,
    W: WeatherLookup + 'static,
{
    let Ok(Path(cep)) = cep else {
        return LookupFailure::InvalidZipcode.into_response();
    };

    match service.temperature_for(&cep).await {
        Ok(temperature) => Json(temperature).into_response(),
        Err(failure) => failure.into_response(),
    }
}
