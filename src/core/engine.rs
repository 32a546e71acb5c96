// src/core/engine.rs
use crate::core::categorize::Categorizer;
use crate::core::filter::{is_word_shape, WordFilter};
use crate::core::rank::{confidence, select};
use crate::core::scorer::RelevanceScorer;
use crate::core::tokenizer::tokenize;
use crate::core::types::{Candidate, Category, LinkDecision, Token, TokenKind};
use std::collections::{HashMap, HashSet};

/// The word-relevance scoring and linking engine.
///
/// Holds only immutable reference tables built once at construction; every
/// call is a pure function of its arguments, so a shared instance may be
/// used from any number of concurrent render passes without coordination.
pub struct LinkingEngine {
    pub filter: WordFilter,
    pub scorer: RelevanceScorer,
    pub categorizer: Categorizer,
}

impl LinkingEngine {
    pub fn new() -> Self {
        Self {
            filter: WordFilter::new(),
            scorer: RelevanceScorer::new(),
            categorizer: Categorizer::new(),
        }
    }

    /// Tokenize `text`, score and select the words worth linking, and emit
    /// one decision per token, in token order. Total over all string inputs:
    /// anything unscorable degrades to pass-through, never an error.
    ///
    /// `active_word` is the word currently being re-fetched (compared on the
    /// lowercase form); `exclusions` are never offered as links regardless of
    /// score.
    pub fn generate_links(
        &self,
        text: &str,
        active_word: &str,
        exclusions: &[String],
    ) -> Vec<LinkDecision> {
        let tokens = tokenize(text);
        let excluded: HashSet<String> =
            exclusions.iter().map(|w| w.to_lowercase()).collect();

        let mut candidates = Vec::new();
        let mut word_token_count = 0usize;

        for (position, token) in tokens.iter().enumerate() {
            if token.kind != TokenKind::Word {
                continue;
            }
            word_token_count += 1;

            let word = token.text.to_lowercase();
            if excluded.contains(&word) || !self.filter.is_candidate(&word) {
                continue;
            }

            let importance = self.scorer.importance(&word, position, &tokens);
            let category = self.categorizer.categorize(&word);
            let confidence = confidence(&word, importance, category);

            candidates.push(Candidate {
                word,
                position,
                importance,
                category,
                confidence,
            });
        }

        let selected = select(candidates, word_token_count);
        materialize(&tokens, &selected, active_word)
    }

    /// Degraded fallback for callers whose scoring pipeline is bypassed
    /// (e.g. the content source failed and plain text is being re-rendered):
    /// every word-shaped token becomes a default-weight general link.
    pub fn plain_links(&self, text: &str, active_word: &str) -> Vec<LinkDecision> {
        let active = active_word.to_lowercase();
        tokenize(text)
            .into_iter()
            .map(|token| {
                if token.kind == TokenKind::Word && is_word_shape(&token.text) {
                    let word = token.text.to_lowercase();
                    LinkDecision::Linkable {
                        text: token.text,
                        category: Category::General,
                        importance: 0.5,
                        confidence: 0.5,
                        active: word == active,
                    }
                } else {
                    LinkDecision::PassThrough { text: token.text }
                }
            })
            .collect()
    }
}

impl Default for LinkingEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Re-join the selection against the original token stream. Emits exactly one
/// decision per input token, in order; all occurrences of a selected word
/// share one candidate record (last write wins on duplicate lowercase forms),
/// while the active flag is evaluated per occurrence.
fn materialize(
    tokens: &[Token],
    selected: &[Candidate],
    active_word: &str,
) -> Vec<LinkDecision> {
    let mut lookup: HashMap<&str, &Candidate> = HashMap::new();
    for candidate in selected {
        lookup.insert(candidate.word.as_str(), candidate);
    }
    let active = active_word.to_lowercase();

    tokens
        .iter()
        .map(|token| {
            if token.kind == TokenKind::Word {
                let word = token.text.to_lowercase();
                if let Some(candidate) = lookup.get(word.as_str()) {
                    return LinkDecision::Linkable {
                        text: token.text.clone(),
                        category: candidate.category,
                        importance: candidate.importance,
                        confidence: candidate.confidence,
                        active: word == active,
                    };
                }
            }
            LinkDecision::PassThrough {
                text: token.text.clone(),
            }
        })
        .collect()
}
