//! Puzzle definition shared by the daily rotation and the share codec.

use serde::{Deserialize, Serialize};

/// A hidden subject plus the emoji clue describing it.
///
/// The serde field names are the wire shape used both in the persisted blob
/// and inside share tokens, so they stay in camelCase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleDefinition {
    /// Opaque identifier of the thing to guess (a candidate id).
    #[serde(rename = "id")]
    pub subject_id: String,
    /// Emoji sequence encoding the clue.
    #[serde(rename = "emojiText")]
    pub clue_text: String,
    /// Optional handle of whoever authored the puzzle.
    #[serde(rename = "author", default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl PuzzleDefinition {
    /// Create a puzzle with no attribution.
    #[must_use]
    pub fn new(subject_id: impl Into<String>, clue_text: impl Into<String>) -> Self {
        Self {
            subject_id: subject_id.into(),
            clue_text: clue_text.into(),
            author: None,
        }
    }

    /// Attach an attribution tag.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

// Two puzzles are the same puzzle iff subject and clue match; attribution
// does not participate in identity.
impl PartialEq for PuzzleDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.subject_id == other.subject_id && self.clue_text == other.clue_text
    }
}

impl Eq for PuzzleDefinition {}
