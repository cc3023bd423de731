//! HTTP transport used by the request pipeline.
//!
//! The pipeline only needs "send this request, give me status and body".
//! [`GlooTransport`] does that with the browser `fetch` API; tests plug in
//! a scripted implementation.

use async_trait::async_trait;
use gloo_net::http::Request;
use thiserror::Error;

/// HTTP method
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

/// Fully resolved request handed to a [`Transport`]
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Raw response: status code plus body text
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
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

/// Failure of a single request. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// The request never produced a response
    #[error("{0}")]
    Network(String),
    /// Non-2xx answer; `message` comes from the error envelope when present
    #[error("{message}")]
    Http { status: u16, message: String },
    /// A 2xx answer whose body is not the expected JSON
    #[error("invalid response: {0}")]
    Decode(String),
    /// The request body could not be serialized
    #[error("invalid request body: {0}")]
    Encode(String),
}

#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, RequestError>;
}

/// Browser `fetch` through gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, RequestError> {
        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
        };
        let builder = request
            .headers
            .iter()
            .fold(builder, |b, (name, value)| b.header(name, value));

        let sent = match request.body {
            Some(body) => builder
                .body(body)
                .map_err(|e| RequestError::Network(format!("Failed to build request: {}", e)))?
                .send()
                .await,
            None => builder.send().await,
        };
        let response =
            sent.map_err(|e| RequestError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RequestError::Network(format!("Failed to read response: {}", e)))?;
        Ok(ApiResponse { status, body })
    }
}
