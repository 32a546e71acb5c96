// src/history.rs
use serde::{Deserialize, Serialize};

/// Most entries kept before the oldest are dropped.
pub const MAX_HISTORY_SIZE: usize = 100;
/// How much of the explanation text is kept for searching.
pub const PREVIEW_LEN: usize = 500;

/// One explored word with a content preview for history search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub word: String,
    pub preview: String,
    /// Caller-supplied milliseconds since the epoch.
    pub timestamp: u64,
}

/// In-memory store of previously explored words, newest first, keyed by word
/// with last-write-wins. Timestamps come from the caller so the store stays
/// pure and testable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchHistory {
    entries: Vec<HistoryEntry>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an exploration. Any prior entry for the same word is replaced
    /// and the store is trimmed to `MAX_HISTORY_SIZE`.
    pub fn put(&mut self, word: &str, content: &str, timestamp: u64) {
        self.entries.retain(|entry| entry.word != word);
        self.entries.insert(
            0,
            HistoryEntry {
                word: word.to_string(),
                preview: content.chars().take(PREVIEW_LEN).collect(),
                timestamp,
            },
        );
        self.entries.truncate(MAX_HISTORY_SIZE);
    }

    pub fn get_all(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn word_count(&self) -> usize {
        self.entries.len()
    }

    /// The explored words, newest first. Callers typically feed these to
    /// `LinkingEngine::generate_links` as the exclusion set.
    pub fn explored_words(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.word.clone()).collect()
    }

    /// Case-insensitive substring search over words and previews, newest
    /// first. A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&HistoryEntry> {
        let term = query.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }
        let mut hits: Vec<&HistoryEntry> = self
            .entries
            .iter()
            .filter(|e| {
                e.word.to_lowercase().contains(&term)
                    || e.preview.to_lowercase().contains(&term)
            })
            .collect();
        hits.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        hits
    }

    /// The most recent explorations, newest first.
    pub fn recent(&self, limit: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().take(limit).collect()
    }
}
