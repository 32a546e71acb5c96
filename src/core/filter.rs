// src/core/filter.rs
use crate::core::tables::{PRONOUN_BLACKLIST, STOP_WORDS};
use std::collections::HashSet;

/// Fast reject of tokens that can never be linkable. Built once by the
/// engine; read-only afterwards.
pub struct WordFilter {
    stop_words: HashSet<&'static str>,
    pronouns: HashSet<&'static str>,
}

/// Shape test shared with the degraded fallback path: ASCII-alphabetic and
/// at least two characters long.
pub fn is_word_shape(token: &str) -> bool {
    token.len() >= 2 && token.chars().all(|c| c.is_ascii_alphabetic())
}

impl WordFilter {
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            pronouns: PRONOUN_BLACKLIST.iter().copied().collect(),
        }
    }

    /// Whether a lowercase word may enter the scoring pipeline.
    pub fn is_candidate(&self, word: &str) -> bool {
        if !is_word_shape(word) {
            return false;
        }
        if self.stop_words.contains(word) {
            return false;
        }
        // Too short to carry meaning on its own.
        if word.len() < 3 {
            return false;
        }
        if self.pronouns.contains(word) {
            return false;
        }
        true
    }
}

impl Default for WordFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_alphabetic_and_short() {
        let filter = WordFilter::new();
        assert!(!filter.is_candidate("a"));
        assert!(!filter.is_candidate("ab"));
        assert!(!filter.is_candidate("x9y"));
        assert!(!filter.is_candidate("don't"));
        assert!(!filter.is_candidate(""));
    }

    #[test]
    fn rejects_stop_words_and_pronouns() {
        let filter = WordFilter::new();
        assert!(!filter.is_candidate("the"));
        assert!(!filter.is_candidate("because"));
        assert!(!filter.is_candidate("they"));
        assert!(!filter.is_candidate("our"));
    }

    #[test]
    fn accepts_content_words() {
        let filter = WordFilter::new();
        assert!(filter.is_candidate("quantum"));
        assert!(filter.is_candidate("art"));
        assert!(filter.is_candidate("consciousness"));
    }
}
