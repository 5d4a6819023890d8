//! Chat endpoint client.
//!
//! [`ChatClient`] is the seam between the orchestrator and the network.
//! [`HttpChatClient`] is the real implementation; on `wasm32` reqwest runs
//! on top of the browser's `fetch`.

use async_trait::async_trait;
use url::Url;

use super::error::WidgetError;
use crate::protocol::{ChatReply, ChatRequest};

/// Sends one exchange to the chat endpoint.
///
/// Futures are not `Send`: the widget runs on the single UI thread.
#[async_trait(?Send)]
pub trait ChatClient {
    /// Send `request` and return the reply text.
    async fn send(&self, request: &ChatRequest) -> Result<String, WidgetError>;
}

/// HTTP implementation of [`ChatClient`].
#[derive(Debug, Clone)]
pub struct HttpChatClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpChatClient {
    /// Resolve `endpoint` against `base` (usually the page origin).
    pub fn new(base: &str, endpoint: &str) -> Result<Self, WidgetError> {
        Self::with_client(base, endpoint, reqwest::Client::new())
    }

    /// Same as [`HttpChatClient::new`] with a preconfigured reqwest client.
    pub fn with_client(
        base: &str,
        endpoint: &str,
        http: reqwest::Client,
    ) -> Result<Self, WidgetError> {
        let endpoint = Url::parse(base)?.join(endpoint)?;
        Ok(Self { http, endpoint })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl ChatClient for HttpChatClient {
    async fn send(&self, request: &ChatRequest) -> Result<String, WidgetError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            history_len = request.history.len(),
            "Posting chat request"
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| WidgetError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WidgetError::Status {
                code: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("Unknown Status")
                    .to_string(),
            });
        }

        let reply: ChatReply = response
            .json()
            .await
            .map_err(|e| WidgetError::Decode(e.to_string()))?;
        Ok(reply.response)
    }
}
