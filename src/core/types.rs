// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a token produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    Word,
    Whitespace,
    Punctuation,
}

/// A substring of the source text with its original casing preserved.
/// Concatenating all tokens of a text in order reproduces it exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self { text: text.into(), kind }
    }
}

/// Topical category assigned to a linkable word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Science,
    Philosophy,
    Psychology,
    Art,
    History,
    Technology,
    General,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Science => "science",
            Category::Philosophy => "philosophy",
            Category::Psychology => "psychology",
            Category::Art => "art",
            Category::History => "history",
            Category::Technology => "technology",
            Category::General => "general",
        };
        f.write_str(name)
    }
}

/// A word token scored for potential interactivity.
/// `word` is the lowercase form; `position` indexes the full token sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub word: String,
    pub position: usize,
    pub importance: f64,
    pub category: Category,
    pub confidence: f64,
}

/// Visual weight tier for a linkable word, derived from its importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStyle {
    High,
    Medium,
    Standard,
}

impl LinkStyle {
    pub fn from_importance(importance: f64) -> Self {
        if importance > 0.8 {
            LinkStyle::High
        } else if importance > 0.6 {
            LinkStyle::Medium
        } else {
            LinkStyle::Standard
        }
    }
}

/// Final per-token output of the engine: render verbatim, or render as a link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LinkDecision {
    PassThrough {
        text: String,
    },
    Linkable {
        text: String,
        category: Category,
        importance: f64,
        confidence: f64,
        /// True when this token is the word currently being re-fetched.
        active: bool,
    },
}

impl LinkDecision {
    /// The literal text of the underlying token.
    pub fn text(&self) -> &str {
        match self {
            LinkDecision::PassThrough { text } => text,
            LinkDecision::Linkable { text, .. } => text,
        }
    }

    pub fn is_linkable(&self) -> bool {
        matches!(self, LinkDecision::Linkable { .. })
    }

    /// Styling tier for linkable decisions; None for pass-through.
    pub fn style(&self) -> Option<LinkStyle> {
        match self {
            LinkDecision::Linkable { importance, .. } => {
                Some(LinkStyle::from_importance(*importance))
            }
            LinkDecision::PassThrough { .. } => None,
        }
    }
}
