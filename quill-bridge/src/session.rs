//! Editor session state.
//!
//! Zero UI dependencies: everything the view renders is derived from here,
//! and every message handler in `update` funnels into one of these methods.

use std::sync::Arc;

use quill_core::highlight::{self, Grammar, Markup};
use quill_core::{CursorPosition, Document, RequestSequencer, SuggestionList, Ticket};
use quill_suggest::SuggestResponse;

use crate::renderer::ThemeName;

/// Result of a suggestion request as carried in a `Message`.
pub type FetchOutcome = Result<SuggestResponse, String>;

// ────────────────────────────────────────────────────────────────
// Fetch status
// ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus {
    Idle,
    Pending(Ticket),
    Ready(usize),
    Failed(String),
}

impl FetchStatus {
    pub fn label(&self) -> String {
        match self {
            FetchStatus::Idle => "idle".to_string(),
            FetchStatus::Pending(t) => format!("fetching #{}", t.number()),
            FetchStatus::Ready(1) => "1 suggestion".to_string(),
            FetchStatus::Ready(n) => format!("{} suggestions", n),
            FetchStatus::Failed(reason) => format!("failed: {}", reason),
        }
    }
}

/// What happened to a completed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Applied,
    Stale,
    Failed,
}

// ────────────────────────────────────────────────────────────────
// Session
// ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct Session {
    document: Document,
    grammar: Grammar,
    markup: Arc<Markup>,
    /// Bumped whenever `markup` or the theme changes.
    revision: u64,
    suggestions: SuggestionList,
    sequencer: RequestSequencer,
    fetch_status: FetchStatus,
    theme_name: ThemeName,
}

impl Session {
    pub fn new(text: &str, grammar: Grammar, theme_name: ThemeName) -> Self {
        let mut session = Self {
            document: Document::new(text),
            grammar,
            markup: Arc::new(Markup::plain(text)),
            revision: 0,
            suggestions: SuggestionList::new(),
            sequencer: RequestSequencer::new(),
            fetch_status: FetchStatus::Idle,
            theme_name,
        };
        session.rehighlight();
        session
    }

    // ── Accessors ──

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn cursor(&self) -> CursorPosition {
        self.document.cursor()
    }

    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    pub fn markup(&self) -> &Arc<Markup> {
        &self.markup
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn suggestions(&self) -> &SuggestionList {
        &self.suggestions
    }

    pub fn fetch_status(&self) -> &FetchStatus {
        &self.fetch_status
    }

    pub fn theme_name(&self) -> ThemeName {
        self.theme_name
    }

    // ── Editing ──

    /// Take the editor's new text. Recomputes cursor and markup.
    pub fn text_changed(&mut self, text: String) {
        if self.document.replace(text) {
            self.rehighlight();
        }
    }

    fn rehighlight(&mut self) {
        let text = self.document.text();
        let markup = highlight::highlight(text, self.grammar).unwrap_or_else(|e| {
            tracing::warn!("highlighting failed: {}", e);
            Markup::plain(text)
        });
        self.markup = Arc::new(markup);
        self.revision += 1;
    }

    pub fn set_theme(&mut self, theme_name: ThemeName) {
        if theme_name != self.theme_name {
            self.theme_name = theme_name;
            self.revision += 1;
        }
    }

    // ── Suggestions ──

    /// Register a new outgoing request. Any older request becomes stale.
    pub fn begin_fetch(&mut self) -> Ticket {
        let ticket = self.sequencer.issue();
        self.fetch_status = FetchStatus::Pending(ticket);
        ticket
    }

    /// Apply a finished request. Only the latest ticket may change state;
    /// a failure leaves the current suggestions untouched.
    pub fn finish_fetch(&mut self, ticket: Ticket, outcome: FetchOutcome) -> Disposition {
        if !self.sequencer.is_current(ticket) {
            tracing::debug!(ticket = ticket.number(), "discarding stale suggestion response");
            return Disposition::Stale;
        }

        match outcome {
            Ok(response) => {
                tracing::debug!(
                    ticket = ticket.number(),
                    count = response.suggestions.len(),
                    "applying suggestions"
                );
                self.fetch_status = FetchStatus::Ready(response.suggestions.len());
                self.suggestions.replace(response.suggestions);
                Disposition::Applied
            }
            Err(reason) => {
                tracing::warn!(ticket = ticket.number(), "suggestion request failed: {}", reason);
                self.fetch_status = FetchStatus::Failed(reason);
                Disposition::Failed
            }
        }
    }

    pub fn toggle_suggestion(&mut self, index: usize) {
        self.suggestions.toggle(index);
    }

    pub fn dismiss_suggestions(&mut self) {
        self.suggestions.clear();
    }
}
