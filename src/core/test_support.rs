use crate::domain::ports::{HttpClient, HttpResponse};
use crate::utils::error::TransportError;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Canned `HttpClient` that records every URL it is asked for.
#[derive(Clone)]
pub struct StubHttpClient {
    reply: Result<HttpResponse, TransportError>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubHttpClient {
    pub fn ok(status: u16, body: &str) -> Self {
        Self::with_reply(Ok(HttpResponse::new(status, body)))
    }

    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self::ok(status, &body.to_string())
    }

    pub fn failing(message: &str) -> Self {
        Self::with_reply(Err(TransportError::Request {
            url: "stub".to_string(),
            message: message.to_string(),
        }))
    }

    fn with_reply(reply: Result<HttpResponse, TransportError>) -> Self {
        Self {
            reply,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for StubHttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.reply.clone()
    }
}
