//! Suggestion records and the expandable suggestion list.
//!
//! Records come verbatim from the suggestion service. The list is always
//! replaced as a whole; at most one entry is expanded at a time.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

// ════════════════════════════════════════════════════════════════════
// Data types
// ════════════════════════════════════════════════════════════════════

/// Type tag(s) of a suggested parameter: a single name or a union.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SuggestionType {
    Single(String),
    Union(Vec<String>),
}

impl Default for SuggestionType {
    fn default() -> Self {
        SuggestionType::Single(String::new())
    }
}

impl fmt::Display for SuggestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionType::Single(name) => f.write_str(name),
            SuggestionType::Union(names) => f.write_str(&names.join("|")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type", default, deserialize_with = "lenient_type")]
    pub kind: SuggestionType,

    #[serde(default, deserialize_with = "scalar_or_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "scalar_or_none")]
    pub default_value: Option<String>,

    /// Candidate values already present in the document.
    #[serde(default, deserialize_with = "scalar_list")]
    pub suggestions: Vec<String>,
}

impl Suggestion {
    /// One-line label: `name (type)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.kind)
    }

    /// Detail lines revealed when the entry is expanded.
    /// Each line is present only when its field is non-empty.
    pub fn details(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(desc) = &self.description {
            lines.push(desc.clone());
        }
        if let Some(default) = &self.default_value {
            lines.push(format!("default: {}", default));
        }
        if !self.suggestions.is_empty() {
            lines.push(format!("Suggested values: {}", self.suggestions.join(",")));
        }
        lines
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Accept any JSON scalar as text. `null` and `""` count as absent.
fn scalar_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(scalar_text))
}

/// A list of scalars as text. Absent entries are dropped; a lone scalar
/// becomes a one-element list.
fn scalar_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(values)) => values.into_iter().filter_map(scalar_text).collect(),
        Some(other) => scalar_text(other).into_iter().collect(),
        None => Vec::new(),
    })
}

/// `null` means no type; array members go through the scalar rule.
fn lenient_type<'de, D>(deserializer: D) -> Result<SuggestionType, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(values)) => {
            SuggestionType::Union(values.into_iter().filter_map(scalar_text).collect())
        }
        Some(other) => SuggestionType::Single(scalar_text(other).unwrap_or_default()),
        None => SuggestionType::default(),
    })
}

/// A missing or `null` sequence deserializes as empty.
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// ════════════════════════════════════════════════════════════════════
// SuggestionList
// ════════════════════════════════════════════════════════════════════

/// The suggestions on screen plus one "expanded" flag per entry.
///
/// `expanded.len() == items.len()` always holds, and at most one flag is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionList {
    items: Vec<Suggestion>,
    expanded: Vec<bool>,
}

impl SuggestionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a fresh set of suggestions. All entries start collapsed.
    pub fn replace(&mut self, items: Vec<Suggestion>) {
        self.expanded = vec![false; items.len()];
        self.items = items;
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.expanded.clear();
    }

    /// Expand exactly entry `index`. An out-of-range index collapses all.
    pub fn select(&mut self, index: usize) {
        self.expanded = vec![false; self.items.len()];
        if let Some(flag) = self.expanded.get_mut(index) {
            *flag = true;
        }
    }

    /// Expand `index`, or collapse everything if it is already expanded.
    pub fn toggle(&mut self, index: usize) {
        if self.is_expanded(index) {
            self.expanded = vec![false; self.items.len()];
        } else {
            self.select(index);
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    pub fn expanded_index(&self) -> Option<usize> {
        self.expanded.iter().position(|f| *f)
    }

    pub fn expanded_flags(&self) -> &[bool] {
        &self.expanded
    }

    pub fn items(&self) -> &[Suggestion] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entries paired with their expanded flag, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&Suggestion, bool)> {
        self.items.iter().zip(self.expanded.iter().copied())
    }
}
