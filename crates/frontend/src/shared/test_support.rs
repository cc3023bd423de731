//! Scripted collaborators for driving the controller without a browser.

use crate::shared::prompt::UserPrompt;
use crate::shared::transport::{ApiRequest, ApiResponse, Method, RequestError, Transport};
use async_trait::async_trait;
use contracts::shared::logger::Severity;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Answers from a fixed route table; unknown routes fail like an
/// unreachable server.
#[derive(Default)]
pub struct ScriptedTransport {
    routes: Mutex<HashMap<(Method, String), ApiResponse>>,
    sent: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, method: Method, url: &str, status: u16, body: &str) {
        self.routes
            .lock()
            .unwrap()
            .insert((method, url.to_string()), ApiResponse::new(status, body));
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.lock().unwrap().clone()
    }

    /// `"METHOD url"` for each request, in send order
    pub fn calls(&self) -> Vec<String> {
        self.sent()
            .iter()
            .map(|r| format!("{} {}", r.method.as_str(), r.url))
            .collect()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, RequestError> {
        let key = (request.method, request.url.clone());
        self.sent.lock().unwrap().push(request);
        self.routes
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .ok_or_else(|| RequestError::Network("Failed to fetch".to_string()))
    }
}

/// Records every prompt; confirmations get a fixed answer.
pub struct ScriptedPrompt {
    answer: bool,
    pub confirms: Mutex<Vec<String>>,
    pub alerts: Mutex<Vec<String>>,
    pub toasts: Mutex<Vec<(String, Severity)>>,
}

impl ScriptedPrompt {
    pub fn answering(answer: bool) -> Arc<Self> {
        Arc::new(Self {
            answer,
            confirms: Mutex::new(Vec::new()),
            alerts: Mutex::new(Vec::new()),
            toasts: Mutex::new(Vec::new()),
        })
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn toasts(&self) -> Vec<(String, Severity)> {
        self.toasts.lock().unwrap().clone()
    }
}

impl UserPrompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.confirms.lock().unwrap().push(message.to_string());
        self.answer
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    fn toast(&self, message: &str, severity: Severity) {
        self.toasts
            .lock()
            .unwrap()
            .push((message.to_string(), severity));
    }
}
