pub mod config;
pub mod document;
pub mod highlight;
pub mod sequencer;
pub mod suggestion;

// Re-export the main types so users can just use `quill_core::Document`
pub use config::{EditorConfig, TriggerKey};
pub use document::{CursorPosition, Document};
pub use highlight::{Grammar, HighlightKind, HighlightSpan, Markup};
pub use sequencer::{RequestSequencer, Ticket};
pub use suggestion::{Suggestion, SuggestionList, SuggestionType};
