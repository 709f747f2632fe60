use crate::domain::model::{Temperature, WeatherApiResponse};
use crate::domain::ports::{HttpClient, WeatherLookup};
use crate::utils::error::WeatherError;
use async_trait::async_trait;
use url::form_urlencoded;

pub const WEATHER_API_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Current temperature for a Brazilian city through WeatherAPI.
pub struct WeatherApiClient<C: HttpClient> {
    client: C,
    base_url: String,
    api_key: Option<String>,
}

impl<C: HttpClient> WeatherApiClient<C> {
    /// A blank `api_key` counts as missing.
    pub fn new(client: C, api_key: Option<String>) -> Self {
        Self::with_base_url(client, api_key, WEATHER_API_BASE_URL)
    }

    pub fn with_base_url(client: C, api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    fn current_url(&self, api_key: &str, query: &str) -> String {
        format!(
            "{}/current.json?key={}&q={}&aqi=no",
            self.base_url,
            encode(api_key),
            encode(query)
        )
    }

    /// Request target as logged: no `key` parameter.
    fn loggable_url(&self, query: &str) -> String {
        format!("{}/current.json?q={}", self.base_url, encode(query))
    }
}

/// The free-text location WeatherAPI is queried with.
pub fn location_query(city: &str, state: &str) -> String {
    format!("{}, {}, Brazil", city, state)
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[async_trait]
impl<C: HttpClient> WeatherLookup for WeatherApiClient<C> {
    async fn lookup(&self, city: &str, state: &str) -> Result<Temperature, WeatherError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(WeatherError::MissingCredential)?;

        let query = location_query(city, state);
        let url = self.current_url(api_key, &query);

        tracing::debug!(
            "Fetching current weather for {:?} via {}",
            query,
            self.loggable_url(&query)
        );
        let response = self.client.get(&url).await?;

        if response.status != 200 {
            return Err(WeatherError::Transport {
                message: format!("status {}", response.status),
            });
        }

        let payload: WeatherApiResponse =
            serde_json::from_str(&response.body).map_err(|e| WeatherError::Transport {
                message: format!("error decoding weather response: {}", e),
            })?;

        if let Some(location) = &payload.location {
            tracing::debug!(
                "WeatherAPI matched {}, {}, {}",
                location.name,
                location.region,
                location.country
            );
        }

        Ok(Temperature::from_celsius(payload.current.temp_c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::StubHttpClient;
    use serde_json::json;

    fn current(temp_c: f64) -> serde_json::Value {
        json!({
            "location": {"name": "Sao Paulo", "region": "Sao Paulo", "country": "Brazil"},
            "current": {"temp_c": temp_c, "temp_f": temp_c * 1.8 + 32.0, "condition": {"text": "Sunny"}}
        })
    }

    #[tokio::test]
    async fn test_lookup_converts_current_temperature() {
        let client = WeatherApiClient::new(
            StubHttpClient::json(200, current(25.0)),
            Some("test-key".to_string()),
        );

        let temperature = client.lookup("São Paulo", "SP").await.unwrap();

        assert_eq!(
            temperature,
            Temperature {
                celsius: 25.0,
                fahrenheit: 77.0,
                kelvin: 298.0,
            }
        );
    }

    #[tokio::test]
    async fn test_lookup_builds_encoded_query() {
        let http = StubHttpClient::json(200, current(20.0));
        let client = WeatherApiClient::new(http.clone(), Some("test-key".to_string()));

        client.lookup("São Paulo", "SP").await.unwrap();

        assert_eq!(
            http.requests(),
            vec![
                "https://api.weatherapi.com/v1/current.json?key=test-key&q=S%C3%A3o+Paulo%2C+SP%2C+Brazil&aqi=no"
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_location_query_passes_city_and_state_unmodified() {
        assert_eq!(location_query("Rio de Janeiro", "RJ"), "Rio de Janeiro, RJ, Brazil");
        assert_eq!(location_query("", ""), ", , Brazil");
    }

    #[test]
    fn test_loggable_url_omits_key_and_keeps_query() {
        let client = WeatherApiClient::new(
            StubHttpClient::json(200, current(20.0)),
            Some("SP".to_string()),
        );

        let logged = client.loggable_url(&location_query("São Paulo", "SP"));

        assert_eq!(
            logged,
            "https://api.weatherapi.com/v1/current.json?q=S%C3%A3o+Paulo%2C+SP%2C+Brazil"
        );
        assert!(!logged.contains("key="));
    }

    #[tokio::test]
    async fn test_missing_key_short_circuits() {
        for key in [None, Some(String::new()), Some("   ".to_string())] {
            let http = StubHttpClient::json(200, current(20.0));
            let client = WeatherApiClient::new(http.clone(), key);

            let err = client.lookup("São Paulo", "SP").await.unwrap_err();

            assert_eq!(err, WeatherError::MissingCredential);
            assert!(http.requests().is_empty());
        }
    }

    #[tokio::test]
    async fn test_non_200_status_is_transport_error_with_code() {
        for status in [201, 401, 403, 500] {
            let client = WeatherApiClient::new(
                StubHttpClient::ok(status, r#"{"error":{"code":2006}}"#),
                Some("k".to_string()),
            );

            let err = client.lookup("Campinas", "SP").await.unwrap_err();

            assert_eq!(
                err,
                WeatherError::Transport {
                    message: format!("status {}", status)
                }
            );
        }
    }

    #[tokio::test]
    async fn test_transport_and_decode_failures() {
        let client = WeatherApiClient::new(StubHttpClient::failing("timed out"), Some("k".into()));
        let err = client.lookup("Campinas", "SP").await.unwrap_err();
        assert!(matches!(err, WeatherError::Transport { ref message } if message.contains("timed out")));

        let client = WeatherApiClient::new(
            StubHttpClient::json(200, json!({"current": {}})),
            Some("k".into()),
        );
        let err = client.lookup("Campinas", "SP").await.unwrap_err();
        assert!(
            matches!(err, WeatherError::Transport { ref message } if message.starts_with("error decoding weather response"))
        );
    }
}
