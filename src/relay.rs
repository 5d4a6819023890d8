//! Relay for `POST /chat`.
//!
//! The widget talks to its own origin; the relay forwards each exchange to
//! the configured upstream chat service and hands back its status and body
//! untouched. No completion logic lives here.

use std::time::Duration;

use axum::http::StatusCode;
use serde_json::{Value, json};
use thiserror::Error;
use url::Url;

use crate::config::RelayConfig;
use crate::protocol::ChatRequest;

/// Relay failures, each mapped to a gateway-style status.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("No chat upstream is configured")]
    NotConfigured,

    #[error("Invalid upstream URL: {0}")]
    InvalidUpstream(#[from] url::ParseError),

    #[error("HTTP client setup failed: {0}")]
    Client(String),

    #[error("Chat upstream timed out")]
    Timeout,

    #[error("Chat upstream unreachable: {0}")]
    Unreachable(String),
}

impl RelayError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::InvalidUpstream(_) | Self::Client(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Unreachable(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn from_reqwest(e: &reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::Unreachable(e.to_string())
        }
    }
}

/// What the upstream answered.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: StatusCode,
    /// JSON body; non-JSON bodies are wrapped as `{"detail": <text>}`.
    pub body: Value,
}

/// Forwards chat exchanges to the upstream service.
#[derive(Debug, Clone)]
pub struct ChatRelay {
    http: reqwest::Client,
    upstream: Option<Url>,
}

impl ChatRelay {
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        let upstream = config
            .upstream_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(Url::parse)
            .transpose()?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RelayError::Client(e.to_string()))?;

        Ok(Self { http, upstream })
    }

    #[must_use]
    pub fn upstream(&self) -> Option<&Url> {
        self.upstream.as_ref()
    }

    pub async fn forward(&self, request: &ChatRequest) -> Result<UpstreamReply, RelayError> {
        let upstream = self.upstream.as_ref().ok_or(RelayError::NotConfigured)?;

        let response = self
            .http
            .post(upstream.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| RelayError::from_reqwest(&e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| RelayError::from_reqwest(&e))?;

        let body = serde_json::from_str(&text).unwrap_or_else(|_| json!({ "detail": text }));
        Ok(UpstreamReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relay_config(upstream_url: Option<&str>) -> RelayConfig {
        RelayConfig {
            upstream_url: upstream_url.map(str::to_string),
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_blank_upstream_is_unconfigured() {
        let relay = ChatRelay::new(&relay_config(Some("  "))).unwrap();
        assert!(relay.upstream().is_none());
    }

    #[test]
    fn test_invalid_upstream_is_rejected() {
        let err = ChatRelay::new(&relay_config(Some("::not a url"))).unwrap_err();
        assert!(matches!(err, RelayError::InvalidUpstream(_)));
    }

    #[tokio::test]
    async fn test_forward_without_upstream() {
        let relay = ChatRelay::new(&relay_config(None)).unwrap();
        let err = relay
            .forward(&ChatRequest::new("Hello", &[]))
            .await
            .unwrap_err();

        assert!(matches!(err, RelayError::NotConfigured));
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
