//! Message enum.

use crate::renderer::ThemeName;
use crate::session::FetchOutcome;

use iced::widget::text_editor;
use quill_core::Ticket;

// ────────────────────────────────────────────────────────────────
// Message enum
// ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub enum Message {
    /// Any action coming out of the text editor (typing, clicks, motion).
    Edit(text_editor::Action),

    /// The trigger key was pressed inside the editor.
    RequestSuggestions,
    SuggestionsFetched(Ticket, FetchOutcome),

    SuggestionClicked(usize),
    DismissSuggestions,

    CycleTheme,
    ThemeChanged(ThemeName),
}
