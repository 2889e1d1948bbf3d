//! Syntax renderer: maps highlight kinds onto iced `Color`s.
//!
//! Supports multiple editor color themes.

use std::str::FromStr;

use iced::Color;
use quill_core::HighlightKind;

// ════════════════════════════════════════════════════════════════════
// Theme System
// ════════════════════════════════════════════════════════════════════

/// A named editor color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeName {
    #[default]
    Default,
    Cyberpunk,
    Solarized,
    Monokai,
}

const THEMES: [ThemeName; 4] = [
    ThemeName::Default,
    ThemeName::Cyberpunk,
    ThemeName::Solarized,
    ThemeName::Monokai,
];

impl ThemeName {
    pub fn all() -> &'static [ThemeName] {
        &THEMES
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeName::Default => "Default",
            ThemeName::Cyberpunk => "Cyberpunk",
            ThemeName::Solarized => "Solarized",
            ThemeName::Monokai => "Monokai",
        }
    }

    /// The theme after this one, wrapping around.
    pub fn next(&self) -> ThemeName {
        THEMES[(*self as usize + 1) % THEMES.len()]
    }
}

impl FromStr for ThemeName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        THEMES
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("unknown theme '{}'", s))
    }
}

/// Editor color palette. One color per highlight kind plus chrome.
pub struct Palette {
    pub default_fg: Color,
    pub keyword: Color,
    pub function: Color,
    pub type_name: Color,
    pub string: Color,
    pub number: Color,
    pub constant: Color,
    pub comment: Color,
    pub decorator: Color,
    pub operator: Color,
    pub punctuation: Color,
    pub gutter_fg: Color,
    pub panel_bg: Color,
    pub panel_hover: Color,
    pub panel_border: Color,
}

pub fn palette_for(theme: ThemeName) -> Palette {
    match theme {
        ThemeName::Default => Palette {
            default_fg:   Color::from_rgb(0.85, 0.85, 0.85),
            keyword:      Color::from_rgb(0.85, 0.40, 0.85),
            function:     Color::from_rgb(0.40, 0.55, 0.95),
            type_name:    Color::from_rgb(0.40, 0.90, 0.90),
            string:       Color::from_rgb(0.35, 0.90, 0.35),
            number:       Color::from_rgb(0.95, 0.85, 0.30),
            constant:     Color::from_rgb(0.95, 0.60, 0.30),
            comment:      Color::from_rgb(0.45, 0.45, 0.45),
            decorator:    Color::from_rgb(0.55, 0.70, 1.0),
            operator:     Color::from_rgb(0.90, 0.30, 0.30),
            punctuation:  Color::from_rgb(0.65, 0.65, 0.65),
            gutter_fg:    Color::from_rgb(0.50, 0.50, 0.50),
            panel_bg:     Color::from_rgb(0.14, 0.15, 0.17),
            panel_hover:  Color::from_rgb(0.22, 0.23, 0.26),
            panel_border: Color::from_rgb(0.30, 0.32, 0.35),
        },
        ThemeName::Cyberpunk => Palette {
            default_fg:   Color::from_rgb(0.0, 1.0, 0.85),      // neon cyan
            keyword:      Color::from_rgb(1.0, 0.0, 0.80),      // magenta
            function:     Color::from_rgb(1.0, 0.85, 0.0),      // electric yellow
            type_name:    Color::from_rgb(0.40, 0.55, 1.0),
            string:       Color::from_rgb(0.0, 1.0, 0.45),      // neon green
            number:       Color::from_rgb(1.0, 0.35, 0.55),
            constant:     Color::from_rgb(1.0, 0.15, 0.40),     // hot pink
            comment:      Color::from_rgb(0.35, 0.30, 0.45),
            decorator:    Color::from_rgb(1.0, 0.40, 1.0),
            operator:     Color::from_rgb(0.0, 1.0, 1.0),
            punctuation:  Color::from_rgb(0.90, 0.90, 0.95),
            gutter_fg:    Color::from_rgb(0.35, 0.30, 0.45),
            panel_bg:     Color::from_rgb(0.05, 0.02, 0.10),
            panel_hover:  Color::from_rgb(0.15, 0.05, 0.25),
            panel_border: Color::from_rgb(1.0, 0.0, 0.80),
        },
        ThemeName::Solarized => Palette {
            default_fg:   Color::from_rgb(0.51, 0.58, 0.59),    // base0
            keyword:      Color::from_rgb(0.52, 0.60, 0.0),     // green
            function:     Color::from_rgb(0.15, 0.55, 0.82),    // blue
            type_name:    Color::from_rgb(0.71, 0.54, 0.0),     // yellow
            string:       Color::from_rgb(0.16, 0.63, 0.60),    // cyan
            number:       Color::from_rgb(0.83, 0.21, 0.51),    // magenta
            constant:     Color::from_rgb(0.80, 0.29, 0.09),    // orange
            comment:      Color::from_rgb(0.35, 0.43, 0.46),    // base01
            decorator:    Color::from_rgb(0.42, 0.44, 0.77),    // violet
            operator:     Color::from_rgb(0.86, 0.20, 0.18),    // red
            punctuation:  Color::from_rgb(0.58, 0.63, 0.63),    // base1
            gutter_fg:    Color::from_rgb(0.40, 0.48, 0.51),    // base00
            panel_bg:     Color::from_rgb(0.0, 0.17, 0.21),     // base03
            panel_hover:  Color::from_rgb(0.0, 0.26, 0.33),     // base02
            panel_border: Color::from_rgb(0.35, 0.43, 0.46),
        },
        ThemeName::Monokai => Palette {
            default_fg:   Color::from_rgb(0.97, 0.97, 0.95),    // #f8f8f2
            keyword:      Color::from_rgb(0.98, 0.15, 0.45),    // #f92672
            function:     Color::from_rgb(0.65, 0.89, 0.18),    // #a6e22e
            type_name:    Color::from_rgb(0.40, 0.85, 0.94),    // #66d9ef
            string:       Color::from_rgb(0.90, 0.86, 0.45),    // #e6db74
            number:       Color::from_rgb(0.68, 0.51, 1.0),     // #ae81ff
            constant:     Color::from_rgb(0.68, 0.51, 1.0),
            comment:      Color::from_rgb(0.46, 0.44, 0.37),    // #75715e
            decorator:    Color::from_rgb(0.65, 0.89, 0.18),
            operator:     Color::from_rgb(0.98, 0.15, 0.45),
            punctuation:  Color::from_rgb(0.97, 0.97, 0.95),
            gutter_fg:    Color::from_rgb(0.46, 0.44, 0.37),
            panel_bg:     Color::from_rgb(0.15, 0.16, 0.13),    // #272822
            panel_hover:  Color::from_rgb(0.24, 0.24, 0.20),
            panel_border: Color::from_rgb(0.46, 0.44, 0.37),
        },
    }
}

// ════════════════════════════════════════════════════════════════════
// Highlight color conversion
// ════════════════════════════════════════════════════════════════════

/// Convert a highlight kind into an iced `Color` using the given theme.
pub fn kind_color(kind: HighlightKind, theme: ThemeName) -> Color {
    let p = palette_for(theme);
    match kind {
        HighlightKind::Keyword => p.keyword,
        HighlightKind::Function => p.function,
        HighlightKind::Type => p.type_name,
        HighlightKind::String => p.string,
        HighlightKind::Number => p.number,
        HighlightKind::Constant => p.constant,
        HighlightKind::Comment => p.comment,
        HighlightKind::Decorator => p.decorator,
        HighlightKind::Operator => p.operator,
        HighlightKind::Punctuation => p.punctuation,
    }
}
