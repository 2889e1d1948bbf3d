//! Shared utility functions.
//!
//! Zero UI dependencies. Used by the view and by tests.

use crate::session::Session;

use quill_core::TriggerKey;

// ────────────────────────────────────────────────────────────────
// Formatting
// ────────────────────────────────────────────────────────────────

/// Strip scheme and path from an endpoint URL for status display.
pub fn short_endpoint(endpoint: &str) -> &str {
    let rest = endpoint
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(endpoint);
    rest.split('/').next().unwrap_or(rest)
}

/// Text of the status bar.
pub fn status_line(session: &Session, trigger: TriggerKey, endpoint: &str) -> String {
    let cursor = session.cursor();
    format!(
        " Ln {}, Col {}  │  {} lines  │  {}  │  🎨 {}  │  ⚡ {} @ {}  │  {} to suggest",
        cursor.line,
        cursor.column,
        session.document().line_count(),
        session.grammar().label(),
        session.theme_name().label(),
        session.fetch_status().label(),
        short_endpoint(endpoint),
        trigger.label(),
    )
}
