// src/core/rank.rs
use crate::core::tables::COMMON_VERBS;
use crate::core::types::{Candidate, Category};
use std::cmp::Ordering;

const LINK_FRACTION_CAP: f64 = 0.7;
const CONFIDENCE_FLOOR: f64 = 0.4;

/// Merge importance and category into a single confidence value, penalizing
/// generic high-frequency words. Clamped to [0, 1].
pub fn confidence(word: &str, importance: f64, category: Category) -> f64 {
    let mut confidence = importance;

    if category != Category::General {
        confidence += 0.1;
    }

    if COMMON_VERBS.contains(&word) {
        confidence -= 0.3;
    }

    confidence.clamp(0.0, 1.0)
}

/// Two-stage selection, in this exact order:
/// 1. stable sort by confidence descending (ties keep token order) and keep
///    at most `ceil(0.7 × word_token_count)` entries — the anti-over-linking
///    cap, measured against the number of word-shaped tokens in the text;
/// 2. drop everything at or below the 0.4 confidence floor.
/// The floor runs after the cap so rank alone can never admit a
/// sub-threshold candidate.
pub fn select(mut candidates: Vec<Candidate>, word_token_count: usize) -> Vec<Candidate> {
    candidates.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });

    let max_links = (word_token_count as f64 * LINK_FRACTION_CAP).ceil() as usize;
    candidates.truncate(max_links);

    candidates.retain(|c| c.confidence > CONFIDENCE_FLOOR);
    candidates
}
