//! Application state and boot logic.

use crate::messages::Message;
use crate::renderer::ThemeName;
use crate::session::Session;

use quill_core::{EditorConfig, Grammar};
use quill_suggest::{HttpSuggestClient, SuggestionBackend};

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use iced::widget::text_editor;
use iced::Task;

// ────────────────────────────────────────────────────────────────
// QuillApp
// ────────────────────────────────────────────────────────────────

pub struct QuillApp {
    pub config: EditorConfig,

    /// The editing surface. `session.document()` mirrors its text.
    pub content: text_editor::Content,

    pub session: Session,

    /// Where suggestion requests go.
    pub backend: Arc<dyn SuggestionBackend>,
}

impl QuillApp {
    pub fn new(config: EditorConfig, backend: Arc<dyn SuggestionBackend>) -> Self {
        let grammar = config.grammar().unwrap_or_else(|e| {
            tracing::warn!("{}; falling back to {}", e, Grammar::default().label());
            Grammar::default()
        });
        let theme_name = config.theme.parse::<ThemeName>().unwrap_or_else(|e| {
            tracing::warn!("{}; using {}", e, ThemeName::default().label());
            ThemeName::default()
        });

        Self {
            content: text_editor::Content::with_text(&config.initial_text),
            session: Session::new(&config.initial_text, grammar, theme_name),
            backend,
            config,
        }
    }
}

// ────────────────────────────────────────────────────────────────
// Boot
// ────────────────────────────────────────────────────────────────

/// Build the HTTP backend described by `config`.
pub fn build_backend(config: &EditorConfig) -> anyhow::Result<Arc<dyn SuggestionBackend>> {
    let timeout = config.request_timeout_secs.map(Duration::from_secs);
    let client = HttpSuggestClient::with_timeout(&config.endpoint, timeout)
        .context("Failed to build suggestion client")?;
    Ok(Arc::new(client))
}

pub fn boot() -> (QuillApp, Task<Message>) {
    let config = EditorConfig::load();

    let backend = build_backend(&config).unwrap_or_else(|e| {
        tracing::error!("{:#}; using a client without timeout", e);
        Arc::new(HttpSuggestClient::new(&config.endpoint))
    });

    tracing::info!(
        endpoint = %config.endpoint,
        trigger = config.trigger_key.label(),
        "Quill editor ready"
    );

    (QuillApp::new(config, backend), Task::none())
}
