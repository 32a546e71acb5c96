// src/core/scorer.rs
use crate::core::tables::{
    DOMAIN_KEYWORDS, HIGH_SIGNAL_NOUNS, MEDIUM_SIGNAL_NOUNS, WORD_PATTERNS,
};
use crate::core::types::Token;

const CONTEXT_WINDOW_SIZE: usize = 3;

/// Deterministic, explainable importance heuristic. Additive bonuses on a
/// 0.5 base, clamped to [0, 1]. Same input always yields the same score.
pub struct RelevanceScorer;

impl RelevanceScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score a lowercase word at `position` within the full token sequence.
    /// The original token is consulted only for the capitalization signal.
    pub fn importance(&self, word: &str, position: usize, tokens: &[Token]) -> f64 {
        let mut score = 0.5;

        // Longer words tend to be more meaningful; both bonuses can apply.
        if word.len() > 6 {
            score += 0.2;
        }
        if word.len() > 9 {
            score += 0.1;
        }

        if WORD_PATTERNS.iter().any(|p| p.matches(word)) {
            score += 0.3;
        }

        // Cheap proper-noun / sentence-initial signal from the original casing.
        if tokens
            .get(position)
            .and_then(|t| t.text.chars().next())
            .map_or(false, |c| c.is_ascii_uppercase())
        {
            score += 0.2;
        }

        if DOMAIN_KEYWORDS.iter().any(|(_, keywords)| {
            keywords
                .iter()
                .any(|k| word.contains(k) || k.contains(word))
        }) {
            score += 0.25;
        }

        score += self.context_score(position, tokens) * 0.1;

        score.min(1.0)
    }

    /// How many inherently important words sit within the ±3-token window,
    /// 0.2 each, capped at 1.0.
    pub fn context_score(&self, position: usize, tokens: &[Token]) -> f64 {
        let start = position.saturating_sub(CONTEXT_WINDOW_SIZE);
        let end = (position + CONTEXT_WINDOW_SIZE).min(tokens.len().saturating_sub(1));

        let mut score: f64 = 0.0;
        for i in start..=end {
            if i == position || i >= tokens.len() {
                continue;
            }
            if is_inherently_important(&tokens[i].text.to_lowercase()) {
                score += 0.2;
            }
        }
        score.min(1.0)
    }
}

impl Default for RelevanceScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Abstraction nouns and pattern-matching words anchor their neighborhood.
fn is_inherently_important(word: &str) -> bool {
    HIGH_SIGNAL_NOUNS.contains(&word)
        || MEDIUM_SIGNAL_NOUNS.contains(&word)
        || WORD_PATTERNS.iter().any(|p| p.matches(word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tokenizer::tokenize;

    fn lone(word: &str) -> (Vec<Token>, f64) {
        let tokens = tokenize(word);
        let scorer = RelevanceScorer::new();
        let score = scorer.importance(&word.to_lowercase(), 0, &tokens);
        (tokens, score)
    }

    #[test]
    fn base_score_for_a_plain_word() {
        let (_, score) = lone("melon");
        assert!((score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn length_bonuses_are_cumulative() {
        let (_, seven) = lone("monarch"); // 7 chars, no pattern/domain hit
        assert!((seven - 0.7).abs() < 1e-9);
        let (_, eleven) = lone("candelabrum"); // 11 chars
        assert!((eleven - 0.8).abs() < 1e-9);
    }

    #[test]
    fn pattern_bonus_is_flat() {
        // A single +0.3 regardless of which pattern hits.
        let (_, score) = lone("aging"); // 5 chars, matches -ing
        assert!((score - 0.8).abs() < 1e-9);
        let (_, root) = lone("siphon"); // 6 chars, matches the phon root
        assert!((root - 0.8).abs() < 1e-9);
    }

    #[test]
    fn capitalization_reads_the_original_token() {
        let tokens = tokenize("Melon");
        let scorer = RelevanceScorer::new();
        let score = scorer.importance("melon", 0, &tokens);
        assert!((score - 0.7).abs() < 1e-9);
    }

    #[test]
    fn domain_membership_is_substring_in_either_direction() {
        let (_, score) = lone("quantum"); // 7 chars + science keyword
        assert!((score - 0.95).abs() < 1e-9);
        let (_, contained) = lone("art"); // contained in "artistic"
        assert!((contained - 0.75).abs() < 1e-9);
    }

    #[test]
    fn context_counts_important_neighbors() {
        let tokens = tokenize("melon theory nearby");
        let scorer = RelevanceScorer::new();
        // "theory" (position 2) is one important neighbor of "melon".
        assert!((scorer.context_score(0, &tokens) - 0.2).abs() < 1e-9);
        // The scanned token never counts itself.
        assert!((scorer.context_score(2, &tokens) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn context_score_is_capped() {
        let tokens = tokenize("theory concept paradigm principle factor");
        let scorer = RelevanceScorer::new();
        assert!(scorer.context_score(2, &tokens) <= 1.0);
    }

    #[test]
    fn importance_never_exceeds_one() {
        let tokens = tokenize("Consciousness theory");
        let scorer = RelevanceScorer::new();
        let score = scorer.importance("consciousness", 0, &tokens);
        assert!((score - 1.0).abs() < 1e-9);
    }
}
