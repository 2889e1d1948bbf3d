use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use quill_core::suggestion::{null_as_empty, Suggestion};

/// Longest response body excerpt kept in a status error.
const BODY_EXCERPT: usize = 200;

#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("suggestion service unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("suggestion service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed suggestion response: {0}")]
    Decode(#[from] serde_json::Error),
}

// ════════════════════════════════════════════════════════════════════
// Wire format
// ════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
pub struct SuggestRequest<'a> {
    pub code_context: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestResponse {
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub suggestions: Vec<Suggestion>,
}

// ════════════════════════════════════════════════════════════════════
// Backend
// ════════════════════════════════════════════════════════════════════

/// Anything that can turn the current document into suggestions.
#[async_trait]
pub trait SuggestionBackend: Send + Sync {
    async fn suggest(&self, code_context: &str) -> Result<SuggestResponse, SuggestError>;
}

/// Direct HTTP client for the suggestion service.
pub struct HttpSuggestClient {
    http: Client,
    endpoint: String,
}

impl std::fmt::Debug for HttpSuggestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSuggestClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl HttpSuggestClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.trim().to_string(),
        }
    }

    /// Build a client whose requests give up after `timeout`.
    /// `None` waits indefinitely.
    pub fn with_timeout(endpoint: &str, timeout: Option<Duration>) -> Result<Self, SuggestError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            endpoint: endpoint.trim().to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SuggestionBackend for HttpSuggestClient {
    async fn suggest(&self, code_context: &str) -> Result<SuggestResponse, SuggestError> {
        tracing::debug!(endpoint = %self.endpoint, bytes = code_context.len(), "requesting suggestions");

        let resp = self
            .http
            .post(&self.endpoint)
            .json(&SuggestRequest { code_context })
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(SuggestError::Status {
                status: status.as_u16(),
                body: excerpt(&text, BODY_EXCERPT).to_string(),
            });
        }

        let parsed: SuggestResponse = serde_json::from_str(&text)?;

        if let Some(message) = &parsed.message {
            tracing::info!(%message, count = parsed.suggestions.len(), "suggestion service replied");
        }

        Ok(parsed)
    }
}

/// At most `max` bytes of `text`, cut on a char boundary.
fn excerpt(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
