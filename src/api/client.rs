//! HTTP client for the ToDoGPT chat endpoint.
//!
//! One request shape: `POST {endpoint}/chat` with `{"query": "<text>"}`,
//! answered by `{"response": "<text>"}`. No auth, no streaming, no retry.
//!
//! The HTTP status code is logged but not checked before the body is
//! parsed: a non-2xx reply carrying a valid JSON `response` field is
//! treated as a normal answer.

use std::fmt;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::types::{ChatRequest, ChatResponse};

/// Errors that can occur while talking to the chat endpoint.
/// Both variants collapse to the same fallback message in the UI;
/// the distinction only feeds the log.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Transport-level failure (DNS, connection refused, broken stream).
    Network(String),
    /// The body was not valid JSON.
    Parse(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Network(msg) => write!(f, "network error: {msg}"),
            ClientError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {}

/// The seam between the UI and the network. Tests substitute a mock.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Sends one query and resolves to the assistant's reply text.
    async fn send(&self, query: &str) -> Result<String, ClientError>;
}

/// Reqwest-backed client for the fixed local chat service.
pub struct HttpChatClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpChatClient {
    /// `endpoint` is the service base URL, e.g. `http://localhost:8000`.
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ChatBackend for HttpChatClient {
    async fn send(&self, query: &str) -> Result<String, ClientError> {
        let request = ChatRequest {
            query: query.to_string(),
        };

        info!("POST {}/chat ({} bytes)", self.endpoint, query.len());

        let response = self
            .client
            .post(format!("{}/chat", self.endpoint))
            .json(&request)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Chat endpoint status: {}", status);
        if !status.is_success() {
            // Not a failure path: the body is still parsed below.
            warn!("Chat endpoint returned non-2xx status {}", status);
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;

        debug!("Assistant reply ({} bytes)", body.response.len());
        Ok(body.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_display() {
        let net = ClientError::Network("connection refused".to_string());
        let parse = ClientError::Parse("expected value".to_string());
        assert_eq!(net.to_string(), "network error: connection refused");
        assert_eq!(parse.to_string(), "parse error: expected value");
    }
}
