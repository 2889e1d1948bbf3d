// quill-core/src/document.rs

use std::ops::RangeInclusive;

// ════════════════════════════════════════════════════════════════════
// Cursor tracking
// ════════════════════════════════════════════════════════════════════

/// End-of-document position derived from the text.
///
/// `line` is 1-based (one more than the number of line breaks), `column`
/// is the number of characters after the last line break. The value is
/// recomputed from scratch on every edit and never maintained incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

impl Default for CursorPosition {
    fn default() -> Self {
        Self { line: 1, column: 0 }
    }
}

impl CursorPosition {
    pub fn from_text(text: &str) -> Self {
        let line = line_count(text);
        let tail = match text.rfind('\n') {
            Some(idx) => &text[idx + 1..],
            None => text,
        };

        Self {
            line,
            column: tail.chars().count(),
        }
    }

    /// Heuristic pixel anchor `(left, top)` for popups near this position.
    ///
    /// Uses fixed per-character metrics rather than measured font metrics,
    /// so the result is only an approximation of the caret location.
    pub fn pixel_offset(&self, char_width: f32, line_height: f32) -> (f32, f32) {
        let left = self.column as f32 * char_width + PANEL_LEFT_MARGIN;
        let top = self.line as f32 * line_height + PANEL_TOP_MARGIN;
        (left, top)
    }
}

/// Horizontal space taken by the gutter and editor padding.
pub const PANEL_LEFT_MARGIN: f32 = 60.0;
/// Vertical space taken by the editor padding and border.
pub const PANEL_TOP_MARGIN: f32 = 45.0;

/// Number of lines in `text`. Always at least 1.
pub fn line_count(text: &str) -> usize {
    text.bytes().filter(|b| *b == b'\n').count() + 1
}

// ════════════════════════════════════════════════════════════════════
// Document
// ════════════════════════════════════════════════════════════════════

/// The editor buffer: raw text plus its derived cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    text: String,
    cursor: CursorPosition,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = CursorPosition::from_text(&text);
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    /// Replace the whole text and recompute the cursor.
    /// Returns `false` when the text did not actually change.
    pub fn replace(&mut self, text: String) -> bool {
        if text == self.text {
            return false;
        }
        self.cursor = CursorPosition::from_text(&text);
        self.text = text;
        true
    }

    pub fn line_count(&self) -> usize {
        self.cursor.line
    }

    /// Labels for the line-number gutter, one per line.
    pub fn line_numbers(&self) -> RangeInclusive<usize> {
        1..=self.line_count()
    }
}
