use crate::domain::cep::{format_cep, is_valid_cep, normalize_cep};
use crate::domain::model::{Location, ViaCepResponse};
use crate::domain::ports::{HttpClient, LocationResolver};
use crate::utils::error::CepError;
use async_trait::async_trait;

pub const VIACEP_BASE_URL: &str = "https://viacep.com.br/ws";

/// Resolves a CEP to city/state through ViaCEP.
pub struct ViaCepResolver<C: HttpClient> {
    client: C,
    base_url: String,
}

impl<C: HttpClient> ViaCepResolver<C> {
    pub fn new(client: C) -> Self {
        Self::with_base_url(client, VIACEP_BASE_URL)
    }

    pub fn with_base_url(client: C, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn lookup_url(&self, normalized_cep: &str) -> String {
        format!("{}/{}/json/", self.base_url, normalized_cep)
    }
}

#[async_trait]
impl<C: HttpClient> LocationResolver for ViaCepResolver<C> {
    async fn resolve(&self, cep: &str) -> Result<Location, CepError> {
        if !is_valid_cep(cep) {
            return Err(CepError::InvalidFormat {
                cep: cep.to_string(),
            });
        }

        let normalized = normalize_cep(cep);
        let url = self.lookup_url(&normalized);

        tracing::debug!("Resolving CEP {} via {}", normalized, url);
        let response = self.client.get(&url).await?;
        tracing::debug!("ViaCEP response status: {}", response.status);

        if response.status != 200 {
            tracing::warn!(
                "ViaCEP returned status {} for CEP {}",
                response.status,
                normalized
            );
            return Err(CepError::NotFound { cep: normalized });
        }

        let payload: ViaCepResponse =
            serde_json::from_str(&response.body).map_err(|e| CepError::Transport {
                message: format!("error decoding CEP response: {}", e),
            })?;

        if payload.erro || payload.localidade.is_empty() {
            tracing::debug!("ViaCEP has no locality for CEP {}", normalized);
            return Err(CepError::NotFound { cep: normalized });
        }

        Ok(Location {
            city: payload.localidade,
            state: payload.uf,
            cep: format_cep(&normalized),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::StubHttpClient;
    use serde_json::json;

    fn paulista() -> serde_json::Value {
        json!({
            "cep": "01310-100",
            "logradouro": "Avenida Paulista",
            "complemento": "de 612 a 1510 - lado par",
            "bairro": "Bela Vista",
            "localidade": "São Paulo",
            "uf": "SP",
            "ibge": "3550308",
            "gia": "1004",
            "ddd": "11",
            "siafi": "7107"
        })
    }

    #[tokio::test]
    async fn test_resolve_maps_locality_and_state() {
        let client = StubHttpClient::json(200, paulista());
        let resolver = ViaCepResolver::new(client.clone());

        let location = resolver.resolve("01310100").await.unwrap();

        assert_eq!(
            location,
            Location {
                city: "São Paulo".to_string(),
                state: "SP".to_string(),
                cep: "01310-100".to_string(),
            }
        );
        assert_eq!(
            client.requests(),
            vec!["https://viacep.com.br/ws/01310100/json/".to_string()]
        );
    }

    #[tokio::test]
    async fn test_resolve_normalizes_hyphen_and_whitespace() {
        let client = StubHttpClient::json(200, paulista());
        let resolver = ViaCepResolver::with_base_url(client.clone(), "http://local/ws/");

        let location = resolver.resolve("  01310-100 ").await.unwrap();

        assert_eq!(location.cep, "01310-100");
        assert_eq!(
            client.requests(),
            vec!["http://local/ws/01310100/json/".to_string()]
        );
    }

    #[tokio::test]
    async fn test_invalid_format_short_circuits() {
        let client = StubHttpClient::json(200, paulista());
        let resolver = ViaCepResolver::new(client.clone());

        for cep in ["123456", "123456789", "1234567a", "", "   "] {
            let err = resolver.resolve(cep).await.unwrap_err();
            assert!(matches!(err, CepError::InvalidFormat { .. }), "{cep:?}");
        }
        assert!(client.requests().is_empty());
    }

    #[tokio::test]
    async fn test_erro_flag_is_not_found() {
        let resolver = ViaCepResolver::new(StubHttpClient::json(200, json!({"erro": true})));
        let err = resolver.resolve("99999999").await.unwrap_err();
        assert_eq!(
            err,
            CepError::NotFound {
                cep: "99999999".to_string()
            }
        );

        let resolver = ViaCepResolver::new(StubHttpClient::json(200, json!({"erro": "true"})));
        let err = resolver.resolve("99999999").await.unwrap_err();
        assert!(matches!(err, CepError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_empty_locality_is_not_found() {
        let resolver = ViaCepResolver::new(StubHttpClient::json(
            200,
            json!({"cep": "01310-100", "localidade": "", "uf": "SP"}),
        ));

        let err = resolver.resolve("01310100").await.unwrap_err();
        assert!(matches!(err, CepError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_non_200_status_is_not_found() {
        for status in [400, 404, 500] {
            let resolver = ViaCepResolver::new(StubHttpClient::ok(status, "Bad Request"));
            let err = resolver.resolve("01310100").await.unwrap_err();
            assert!(matches!(err, CepError::NotFound { .. }), "status {status}");
        }
    }

    #[tokio::test]
    async fn test_transport_failure_is_transport_error() {
        let resolver = ViaCepResolver::new(StubHttpClient::failing("connection reset"));

        let err = resolver.resolve("01310100").await.unwrap_err();

        match err {
            CepError::Transport { message } => assert!(message.contains("connection reset")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_transport_error() {
        let resolver = ViaCepResolver::new(StubHttpClient::ok(200, "<html>oops</html>"));

        let err = resolver.resolve("01310100").await.unwrap_err();

        match err {
            CepError::Transport { message } => {
                assert!(message.starts_with("error decoding CEP response"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
