// src/core/tables.rs
//
// The reference tables the whole pipeline reads. They are deliberately plain
// named constants so they can be reviewed, tuned, and tested in isolation.

use crate::core::types::Category;

/// Punctuation characters that split word tokens. Everything else that is not
/// whitespace belongs to a word token.
pub const PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '!', '?', '(', ')', '[', ']', '{', '}', '"', '-', '–', '—',
];

/// Closed list of articles, conjunctions, pronouns, auxiliary verbs, and
/// common adverbs that are never worth linking.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of",
    "with", "by", "from", "up", "about", "into", "through", "during", "before",
    "after", "above", "below", "between", "among", "this", "that", "these",
    "those", "i", "me", "my", "myself", "we", "our", "ours", "ourselves",
    "you", "your", "yours", "yourself", "yourselves", "he", "him", "his",
    "himself", "she", "her", "hers", "herself", "it", "its", "itself", "they",
    "them", "their", "theirs", "themselves", "what", "which", "who", "whom",
    "whose", "am", "is", "are", "was", "were", "be", "been", "being", "have",
    "has", "had", "having", "do", "does", "did", "doing", "will", "would",
    "could", "should", "may", "might", "must", "can", "shall", "not", "no",
    "nor", "so", "than", "too", "very", "just", "now", "here", "there",
    "where", "when", "why", "how", "all", "any", "both", "each", "few",
    "more", "most", "other", "some", "such", "only", "own", "same", "also",
    "as", "if", "because", "while", "since", "until", "although", "unless",
    "whether",
];

/// Pronouns rejected even if the stop-word table were trimmed.
pub const PRONOUN_BLACKLIST: &[&str] =
    &["he", "she", "it", "we", "they", "his", "her", "its", "our"];

/// A productive affix or root signaling abstract or technical vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordPattern {
    Suffix(&'static str),
    Prefix(&'static str),
    Root(&'static str),
}

impl WordPattern {
    /// Match against a lowercase word. Affixes require the word to be
    /// strictly longer than the affix itself.
    pub fn matches(&self, word: &str) -> bool {
        match *self {
            WordPattern::Suffix(s) => word.len() > s.len() && word.ends_with(s),
            WordPattern::Prefix(p) => word.len() > p.len() && word.starts_with(p),
            WordPattern::Root(r) => word.contains(r),
        }
    }
}

/// High-value morphological patterns, tried in order; first match wins.
pub const WORD_PATTERNS: &[WordPattern] = &[
    WordPattern::Suffix("ism"),
    WordPattern::Suffix("ology"),
    WordPattern::Suffix("graphy"),
    WordPattern::Suffix("tion"),
    WordPattern::Suffix("ness"),
    WordPattern::Suffix("ment"),
    WordPattern::Suffix("ical"),
    WordPattern::Suffix("eous"),
    WordPattern::Suffix("ous"),
    WordPattern::Suffix("ing"),
    WordPattern::Prefix("un"),
    WordPattern::Prefix("re"),
    WordPattern::Prefix("pre"),
    WordPattern::Prefix("meta"),
    WordPattern::Root("phon"),
    WordPattern::Root("graph"),
    WordPattern::Root("psych"),
    WordPattern::Root("philosoph"),
];

/// Per-domain keyword table, iterated in this fixed order by the categorizer.
pub const DOMAIN_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Science,
        &["quantum", "molecular", "atomic", "neural", "genetic", "chemical", "physical", "biological"],
    ),
    (
        Category::Philosophy,
        &["existential", "metaphysical", "ethical", "consciousness", "reality", "truth", "meaning"],
    ),
    (
        Category::Psychology,
        &["cognitive", "behavioral", "emotional", "mental", "psychological", "subconscious"],
    ),
    (
        Category::Art,
        &["aesthetic", "creative", "artistic", "visual", "musical", "literary", "cultural"],
    ),
    (
        Category::History,
        &["ancient", "medieval", "renaissance", "historical", "traditional", "classical"],
    ),
    (
        Category::Technology,
        &["digital", "computational", "algorithmic", "technological", "innovative", "systematic"],
    ),
];

/// Abstraction nouns that make their neighborhood score-worthy.
pub const HIGH_SIGNAL_NOUNS: &[&str] =
    &["concept", "theory", "principle", "phenomenon", "paradigm", "methodology"];

pub const MEDIUM_SIGNAL_NOUNS: &[&str] =
    &["process", "system", "structure", "function", "element", "factor"];

/// Overly common verbs that drag confidence down even when they score well.
pub const COMMON_VERBS: &[&str] = &[
    "time", "make", "take", "come", "know", "get", "give", "think", "look",
    "use", "find", "want", "tell", "ask", "seem", "feel", "try", "leave",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affixes_need_a_remainder() {
        assert!(WordPattern::Suffix("ism").matches("capitalism"));
        assert!(!WordPattern::Suffix("ism").matches("ism"));
        assert!(WordPattern::Prefix("un").matches("unusual"));
        assert!(!WordPattern::Prefix("un").matches("un"));
        assert!(WordPattern::Root("psych").matches("psyche"));
    }

    #[test]
    fn first_pattern_match_is_the_suffix_for_unending() {
        // "unending" carries both -ing and un-; suffixes are tried first.
        let hit = WORD_PATTERNS.iter().find(|p| p.matches("unending"));
        assert_eq!(hit, Some(&WordPattern::Suffix("ing")));
    }

    #[test]
    fn stop_words_stay_lowercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for word in STOP_WORDS {
            assert_eq!(*word, word.to_lowercase());
            assert!(seen.insert(word), "duplicate stop word: {}", word);
        }
    }
}
