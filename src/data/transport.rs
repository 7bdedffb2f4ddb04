//! Outbound HTTP capability shared by both provider integrations.
//!
//! Providers only see `HttpTransport`: one request in, status + body out.
//! `ReqwestTransport` is the real implementation; tests substitute a scripted one.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;
use thiserror::Error;

/// Default per-request timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// JSON body, sent with `Content-Type: application/json`.
    pub body: Option<Value>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            body: None,
        }
    }

    pub fn post_json(url: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            body: Some(body),
        }
    }
}

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

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request to {url} timed out")]
    Timeout { url: String },
    #[error("could not connect to {url}: {message}")]
    Connect { url: String, message: String },
    #[error("request to {url} failed: {message}")]
    Other { url: String, message: String },
    #[error("failed to build HTTP client: {0}")]
    Build(String),
}

/// Sends a single request and waits for the full response body.
///
/// Implementations must not retry; callers rely on one attempt per call.
pub trait HttpTransport: Send + Sync {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// `HttpTransport` backed by a blocking `reqwest` client.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Build(e.to_string()))?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut req = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        if let Some(body) = &request.body {
            req = req.json(body);
        }

        let resp = req.send().map_err(|e| classify(&request.url, e))?;
        let status = resp.status().as_u16();
        let body = resp.text().map_err(|e| classify(&request.url, e))?;

        Ok(HttpResponse { status, body })
    }
}

fn classify(url: &str, err: reqwest::Error) -> TransportError {
    let url = url.to_string();
    if err.is_timeout() {
        TransportError::Timeout { url }
    } else if err.is_connect() {
        TransportError::Connect {
            url,
            message: err.to_string(),
        }
    } else {
        TransportError::Other {
            url,
            message: err.to_string(),
        }
    }
}
