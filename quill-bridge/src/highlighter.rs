//! Bridges precomputed `Markup` into iced's `text_editor`.
//!
//! The markup itself is produced by `quill_core::highlight` after each edit;
//! this adapter only hands the spans of each line to the editor. A new
//! revision (or theme) makes the editor re-request every line.

use std::ops::Range;
use std::sync::Arc;

use iced::advanced::text::highlighter::Format;
use iced::advanced::text::Highlighter;
use iced::{Font, Theme};

use quill_core::{HighlightKind, Markup};

use crate::renderer::{self, ThemeName};

#[derive(Debug, Clone)]
pub struct MarkupSettings {
    pub markup: Arc<Markup>,
    pub revision: u64,
    pub theme_name: ThemeName,
}

impl PartialEq for MarkupSettings {
    fn eq(&self, other: &Self) -> bool {
        self.revision == other.revision && self.theme_name == other.theme_name
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    pub kind: HighlightKind,
    pub theme_name: ThemeName,
}

impl Highlight {
    pub fn to_format(&self, _theme: &Theme) -> Format<Font> {
        Format {
            color: Some(renderer::kind_color(self.kind, self.theme_name)),
            font: None,
        }
    }
}

pub struct MarkupHighlighter {
    settings: MarkupSettings,
    current_line: usize,
}

impl Highlighter for MarkupHighlighter {
    type Settings = MarkupSettings;
    type Highlight = Highlight;
    type Iterator<'a> = std::vec::IntoIter<(Range<usize>, Highlight)>;

    fn new(settings: &Self::Settings) -> Self {
        Self {
            settings: settings.clone(),
            current_line: 0,
        }
    }

    fn update(&mut self, new_settings: &Self::Settings) {
        self.settings = new_settings.clone();
        self.current_line = 0;
    }

    fn change_line(&mut self, line: usize) {
        self.current_line = self.current_line.min(line);
    }

    fn highlight_line(&mut self, line: &str) -> Self::Iterator<'_> {
        let theme_name = self.settings.theme_name;
        let spans: Vec<(Range<usize>, Highlight)> = self
            .settings
            .markup
            .line(self.current_line)
            .iter()
            // Markup can lag one frame behind an edit; drop spans that no
            // longer fit the line instead of slicing out of bounds.
            .filter(|s| {
                s.range.end <= line.len()
                    && line.is_char_boundary(s.range.start)
                    && line.is_char_boundary(s.range.end)
            })
            .map(|s| {
                (
                    s.range.clone(),
                    Highlight {
                        kind: s.kind,
                        theme_name,
                    },
                )
            })
            .collect();

        self.current_line += 1;
        spans.into_iter()
    }

    fn current_line(&self) -> usize {
        self.current_line
    }
}
