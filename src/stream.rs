// src/stream.rs
//
// The content-source seam. The backend streams NDJSON events: an `init` line
// naming the word, then `content` fragments until one carries `done: true`.
// The engine never sees fragments; callers accumulate them in a StreamBuffer
// and re-run link generation over the whole buffer after each increment.

use serde::{Deserialize, Serialize};

/// One line of the content-source protocol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StreamEvent {
    Init {
        word: String,
    },
    Content {
        content: String,
        #[serde(default)]
        done: bool,
    },
}

/// Parse a single protocol line. Invalid JSON is skipped, never an error.
pub fn parse_line(line: &str) -> Option<StreamEvent> {
    serde_json::from_str(line.trim()).ok()
}

/// An ordered, finite, restartable provider of explanation fragments for a
/// word. Implemented over the network by the surrounding application; tests
/// and the demo binary use scripted sources.
pub trait ContentSource {
    /// Begin (or restart) streaming for `word`, discarding any in-flight
    /// sequence.
    fn start(&mut self, word: &str);
    /// Next event of the current sequence; `None` once exhausted.
    fn next_event(&mut self) -> Option<StreamEvent>;
}

/// Accumulates fragments for one word into the text the engine scores.
#[derive(Debug, Clone, Default)]
pub struct StreamBuffer {
    word: String,
    text: String,
    complete: bool,
}

impl StreamBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the buffer. An `init` resets the buffer for the
    /// named word, so a re-click mid-stream simply starts over.
    pub fn apply(&mut self, event: StreamEvent) {
        match event {
            StreamEvent::Init { word } => {
                self.word = word;
                self.text.clear();
                self.complete = false;
            }
            StreamEvent::Content { content, done } => {
                self.text.push_str(&content);
                if done {
                    self.complete = true;
                }
            }
        }
    }

    /// The full accumulated text so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }
}
