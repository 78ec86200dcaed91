use crate::i18n::Locale;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Body of a chat submission, as accepted by `POST /api/chat`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
}

#[derive(Debug, Error)]
pub enum ChatClientError {
    #[error("{0}")]
    Network(String),

    /// Non-2xx answer. The message is what the server said, or `HTTP <code>`.
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Invalid response from server")]
    InvalidBody,
}

/// Where the chat panel sends its messages.
#[async_trait]
pub trait ChatTransport: Send + Sync + 'static {
    async fn send(&self, request: ChatRequest) -> Result<String, ChatClientError>;
}

/// Pick the reply text out of a backend answer.
///
/// Backends answer with one of `response`, `reply` or `message`; the first
/// present string wins.
pub fn extract_reply(body: &Value) -> Option<&str> {
    ["response", "reply", "message"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
}

/// Transport posting to the site's `/api/chat` proxy.
#[derive(Debug, Clone)]
pub struct HttpChatTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpChatTransport {
    /// `site_url` is the site root, e.g. `http://127.0.0.1:3000`.
    pub fn new(site_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/api/chat", site_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    async fn send(&self, request: ChatRequest) -> Result<String, ChatClientError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| ChatClientError::Network(e.to_string()))?;

        let status = response.status();
        let body: Option<Value> = response.json().await.ok();

        if !status.is_success() {
            let message = body
                .as_ref()
                .and_then(|b| {
                    b.get("message")
                        .or_else(|| b.get("detail"))
                        .and_then(Value::as_str)
                })
                .map(String::from)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            return Err(ChatClientError::Http {
                status: status.as_u16(),
                message,
            });
        }

        body.as_ref()
            .and_then(extract_reply)
            .map(String::from)
            .ok_or(ChatClientError::InvalidBody)
    }
}
