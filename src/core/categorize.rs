// src/core/categorize.rs
use crate::core::tables::DOMAIN_KEYWORDS;
use crate::core::types::Category;

const SIMILARITY_THRESHOLD: f64 = 0.7;

/// Assigns a topical category from the fixed domain-keyword table.
pub struct Categorizer;

impl Categorizer {
    pub fn new() -> Self {
        Self
    }

    /// First domain (in table order) whose keyword the lowercase word
    /// contains, is contained in, or approximately matches. `General` when
    /// nothing matches.
    pub fn categorize(&self, word: &str) -> Category {
        for (category, keywords) in DOMAIN_KEYWORDS {
            let hit = keywords.iter().any(|k| {
                word.contains(k)
                    || k.contains(word)
                    || char_overlap(word, k) > SIMILARITY_THRESHOLD
            });
            if hit {
                return *category;
            }
        }
        Category::General
    }
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Order-insensitive approximate match: the share of the shorter string's
/// characters that occur anywhere in the longer string. Intentionally not an
/// edit distance; false positives on short words are an accepted trade-off.
pub fn char_overlap(a: &str, b: &str) -> f64 {
    let (longer, shorter) = if a.len() > b.len() { (a, b) } else { (b, a) };
    let longer_len = longer.chars().count();
    if longer_len == 0 {
        return 0.0;
    }
    let matches = shorter.chars().filter(|&c| longer.contains(c)).count();
    matches as f64 / longer_len as f64
}
