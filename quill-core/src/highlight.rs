//! Syntax highlighting adapter.
//!
//! A pure function from `(text, grammar)` to per-line markup. Tokenizing is
//! delegated to tree-sitter; this module only maps syntax nodes onto a
//! small set of highlight kinds and splits them into line-relative spans.

use std::ops::Range;
use std::str::FromStr;

use thiserror::Error;
use tree_sitter::{Language, Node, Parser};

#[derive(Debug, Error)]
pub enum HighlightError {
    #[error("unknown grammar: {0}")]
    UnknownGrammar(String),

    #[error("failed to load grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
}

// ════════════════════════════════════════════════════════════════════
// Grammar
// ════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Grammar {
    #[default]
    Python,
    Plain,
}

impl Grammar {
    pub fn label(&self) -> &'static str {
        match self {
            Grammar::Python => "python",
            Grammar::Plain => "plain",
        }
    }

    fn language(&self) -> Option<Language> {
        match self {
            Grammar::Python => Some(tree_sitter_python::LANGUAGE.into()),
            Grammar::Plain => None,
        }
    }
}

impl FromStr for Grammar {
    type Err = HighlightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "python" | "py" => Ok(Grammar::Python),
            "plain" | "text" | "txt" => Ok(Grammar::Plain),
            other => Err(HighlightError::UnknownGrammar(other.to_string())),
        }
    }
}

// ════════════════════════════════════════════════════════════════════
// Markup
// ════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightKind {
    Keyword,
    Function,
    Type,
    String,
    Number,
    Constant,
    Comment,
    Decorator,
    Operator,
    Punctuation,
}

/// A colored run within one line. `range` is a byte range relative to the
/// start of that line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    pub range: Range<usize>,
    pub kind: HighlightKind,
}

/// Highlight spans grouped by line, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup {
    lines: Vec<Vec<HighlightSpan>>,
}

impl Markup {
    /// Markup with the right number of lines and no spans.
    pub fn plain(text: &str) -> Self {
        Self {
            lines: vec![Vec::new(); text.split('\n').count()],
        }
    }

    pub fn line(&self, index: usize) -> &[HighlightSpan] {
        self.lines.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn span_count(&self) -> usize {
        self.lines.iter().map(Vec::len).sum()
    }

    /// Every span, tagged with its line index.
    pub fn spans(&self) -> impl Iterator<Item = (usize, &HighlightSpan)> {
        self.lines
            .iter()
            .enumerate()
            .flat_map(|(row, spans)| spans.iter().map(move |s| (row, s)))
    }
}

// ════════════════════════════════════════════════════════════════════
// Highlighting
// ════════════════════════════════════════════════════════════════════

/// Highlight `text` with `grammar`.
///
/// Deterministic: the same inputs always yield the same markup. If the
/// tokenizer cannot produce a tree, the text is returned unhighlighted.
pub fn highlight(text: &str, grammar: Grammar) -> Result<Markup, HighlightError> {
    let mut markup = Markup::plain(text);

    let Some(language) = grammar.language() else {
        return Ok(markup);
    };

    let mut parser = Parser::new();
    parser.set_language(&language)?;

    let Some(tree) = parser.parse(text, None) else {
        tracing::warn!(grammar = grammar.label(), "tokenizer produced no tree");
        return Ok(markup);
    };

    let line_lens: Vec<usize> = text.split('\n').map(str::len).collect();

    let mut cursor = tree.walk();
    'walk: loop {
        let node = cursor.node();
        let kind = classify(node);

        if let Some(kind) = kind {
            push_node(&mut markup, &line_lens, node, kind);
        }

        // Classified nodes are colored as a whole; don't descend into them.
        if kind.is_none() && cursor.goto_first_child() {
            continue;
        }

        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                break 'walk;
            }
        }
    }

    Ok(markup)
}

/// Map a syntax node onto a highlight kind, if it gets one.
fn classify(node: Node) -> Option<HighlightKind> {
    let kind = node.kind();

    // Anonymous nodes are literal tokens; their text decides the kind.
    if !node.is_named() {
        return match kind {
            "(" | ")" | "[" | "]" | "{" | "}" | "," | "." | ":" | ";" | "->" => {
                Some(HighlightKind::Punctuation)
            }
            k if k.chars().all(|c| c.is_ascii_alphabetic() || c == '_') => {
                Some(HighlightKind::Keyword)
            }
            k if k.chars().all(|c| "+-*/%=<>!&|^~@".contains(c)) => Some(HighlightKind::Operator),
            _ => None,
        };
    }

    match kind {
        "comment" => Some(HighlightKind::Comment),
        "string" | "concatenated_string" => Some(HighlightKind::String),
        "integer" | "float" => Some(HighlightKind::Number),
        "true" | "false" | "none" | "ellipsis" => Some(HighlightKind::Constant),
        "decorator" => Some(HighlightKind::Decorator),
        "type" => Some(HighlightKind::Type),
        "identifier" => classify_identifier(node),
        _ => None,
    }
}

fn classify_identifier(node: Node) -> Option<HighlightKind> {
    let parent = node.parent()?;
    match parent.kind() {
        "function_definition" if parent.child_by_field_name("name") == Some(node) => {
            Some(HighlightKind::Function)
        }
        "class_definition" if parent.child_by_field_name("name") == Some(node) => {
            Some(HighlightKind::Type)
        }
        "call" if parent.child_by_field_name("function") == Some(node) => {
            Some(HighlightKind::Function)
        }
        // `obj.method(...)`: color the attribute name.
        "attribute" if parent.child_by_field_name("attribute") == Some(node) => {
            let call = parent.parent()?;
            (call.kind() == "call" && call.child_by_field_name("function") == Some(parent))
                .then_some(HighlightKind::Function)
        }
        _ => None,
    }
}

/// Split a node's extent into per-line spans.
fn push_node(markup: &mut Markup, line_lens: &[usize], node: Node, kind: HighlightKind) {
    let start = node.start_position();
    let end = node.end_position();

    for row in start.row..=end.row {
        let Some(&line_len) = line_lens.get(row) else {
            break;
        };
        let from = if row == start.row { start.column } else { 0 };
        let to = if row == end.row { end.column } else { line_len };
        let to = to.min(line_len);

        if from < to {
            markup.lines[row].push(HighlightSpan {
                range: from..to,
                kind,
            });
        }
    }
}
