//! Request pipeline for frontend-backend communication
//!
//! Every call to the REST back-ends goes through [`ApiClient::make_request`]:
//! it resolves the URL against a fixed prefix, merges headers, normalizes
//! failures into [`RequestError`] and mirrors each failure into the log feed.

use crate::shared::log_feed::ConsoleLog;
use crate::shared::transport::{ApiRequest, Method, RequestError, Transport};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON: &str = "application/json";

/// Build a full API URL from a base prefix and a path suffix
///
/// # Example
/// ```ignore
/// let url = api_url("/api/banking", "/accounts");
/// assert_eq!(url, "/api/banking/accounts");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    match (base.ends_with('/'), path.starts_with('/')) {
        (true, true) => format!("{}{}", base, &path[1..]),
        (false, false) if !path.is_empty() => format!("{}/{}", base, path),
        _ => format!("{}{}", base, path),
    }
}

/// Method, body and extra headers of one request. Defaults to a bodiless GET.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post() -> Self {
        Self {
            method: Method::Post,
            ..Self::default()
        }
    }

    pub fn put() -> Self {
        Self {
            method: Method::Put,
            ..Self::default()
        }
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, RequestError> {
        let text =
            serde_json::to_string(body).map_err(|e| RequestError::Encode(e.to_string()))?;
        self.body = Some(text);
        Ok(self)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Default JSON content type, then caller headers on top. Names compare
    /// case-insensitively and the caller wins.
    pub fn merged_headers(&self) -> Vec<(String, String)> {
        let mut merged = vec![(CONTENT_TYPE.to_string(), JSON.to_string())];
        for (name, value) in &self.headers {
            merged.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
            merged.push((name.clone(), value.clone()));
        }
        merged
    }
}

/// Client bound to one API prefix, e.g. `/api/banking`
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    transport: Arc<dyn Transport>,
    log: ConsoleLog,
}

impl ApiClient {
    pub fn new(base: impl Into<String>, transport: Arc<dyn Transport>, log: ConsoleLog) -> Self {
        Self {
            base: base.into(),
            transport,
            log,
        }
    }

    /// Send one request and decode its JSON body.
    ///
    /// Any failure is written to the log feed exactly once, prefixed with
    /// "Request failed", before it is handed back to the caller.
    pub async fn make_request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, RequestError> {
        let url = api_url(&self.base, path);
        let method = options.method;
        let outcome = self.execute(&url, options).await;
        if let Err(err) = &outcome {
            log::warn!("{} {} failed: {:?}", method.as_str(), url, err);
            self.log.error(format!("Request failed: {}", err));
        }
        outcome
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<T, RequestError> {
        let request = ApiRequest {
            method: options.method,
            url: url.to_string(),
            headers: options.merged_headers(),
            body: options.body,
        };
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(RequestError::Http {
                status: response.status,
                message: error_message(response.status, &response.body),
            });
        }
        decode_body(&response.body)
    }
}

/// `message` from the error envelope, else `HTTP <status>`
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("HTTP {}", status))
}

fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, RequestError> {
    let parsed = if body.trim().is_empty() {
        serde_json::from_value(Value::Null)
    } else {
        serde_json::from_str(body)
    };
    parsed.map_err(|e| RequestError::Decode(e.to_string()))
}
