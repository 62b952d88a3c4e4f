use serde::{Deserialize, Serialize};

use crate::style::Style;

pub const LINE_BREAK_ESCAPE: &str = "%n";

pub fn split_lines(raw: &str) -> std::str::Split<'_, &'static str> {
    raw.split(LINE_BREAK_ESCAPE)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "type")]
pub enum TextEntry {
    Text { style: Style, content: String },
    LineBreak,
}

impl TextEntry {
    pub fn content(&self) -> &str {
        match self {
            Self::Text { content, .. } => content,
            Self::LineBreak => LINE_BREAK_ESCAPE,
        }
    }

    pub fn style(&self) -> Option<&Style> {
        match self {
            Self::Text { style, .. } => Some(style),
            Self::LineBreak => None,
        }
    }

    pub fn is_line_break(&self) -> bool {
        matches!(self, Self::LineBreak)
    }

    /// Default-styled text, free to differ between translations.
    pub fn is_ignorable(&self) -> bool {
        match self {
            Self::Text { style, .. } => style.is_default(),
            Self::LineBreak => false,
        }
    }

    /// Both entries are line breaks, or both are text with the same style.
    pub fn has_same_format(&self, other: &TextEntry) -> bool {
        match (self, other) {
            (Self::LineBreak, Self::LineBreak) => true,
            (Self::Text { style, .. }, Self::Text { style: other, .. }) => style == other,
            _ => false,
        }
    }
}

/// A parsed questbook article.
///
/// Line breaks only ever sit between text entries: never first, never last.
/// Every line between two text entries keeps its own break, so an empty line
/// shows up as two breaks in a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    texts: Vec<TextEntry>,
}

impl Article {
    pub fn texts(&self) -> &[TextEntry] {
        &self.texts
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn line_break_count(&self) -> usize {
        self.texts.iter().filter(|t| t.is_line_break()).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TextEntry> {
        self.texts.iter()
    }
}

impl<'a> IntoIterator for &'a Article {
    type Item = &'a TextEntry;
    type IntoIter = std::slice::Iter<'a, TextEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.texts.iter()
    }
}

pub struct ArticleBuilder {
    texts: Vec<TextEntry>,
    pending_line_breaks: usize,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        ArticleBuilder {
            texts: Vec::new(),
            pending_line_breaks: 0,
        }
    }

    // Called for every line after the first. Breaks before the first text
    // are dropped; the rest wait for the next text.
    pub fn push_line_break(&mut self) {
        if !self.texts.is_empty() {
            self.pending_line_breaks += 1;
        }
    }

    pub fn push_text(&mut self, style: Style, content: String) {
        if content.is_empty() {
            return;
        }

        for _ in 0..self.pending_line_breaks {
            self.texts.push(TextEntry::LineBreak);
        }
        self.pending_line_breaks = 0;

        self.texts.push(TextEntry::Text { style, content });
    }

    // breaks still pending trail the last text and are dropped
    pub fn build(self) -> Article {
        Article { texts: self.texts }
    }
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
