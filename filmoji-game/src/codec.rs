//! Reversible puzzle <-> share-token codec.
//!
//! Byte-level contract: the puzzle's wire JSON (`{"id":…,"emojiText":…}`,
//! optionally `"author"`) is taken as UTF-8 bytes and re-encoded with the
//! URL-safe base64 alphabet (RFC 4648 §5) without padding, so the token can
//! ride in a path segment without percent-encoding. Encoding is injective:
//! the JSON serialization of a given definition is deterministic, and base64
//! is a bijection on byte strings, so distinct puzzles yield distinct tokens.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use thiserror::Error;

use crate::puzzle::PuzzleDefinition;

/// Why a share token failed to decode. Never partial: a token either yields
/// a complete puzzle or one of these.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The token is not URL-safe base64.
    #[error("share token is not valid base64: {0}")]
    Alphabet(#[from] base64::DecodeError),
    /// The decoded bytes are not a puzzle's wire JSON.
    #[error("share token payload is not a puzzle: {0}")]
    Payload(#[from] serde_json::Error),
    /// Structurally valid JSON, but no subject to guess.
    #[error("decoded puzzle has an empty subject id")]
    MissingSubject,
}

/// Encode a puzzle definition into an opaque URL-safe token.
#[must_use]
pub fn encode(puzzle: &PuzzleDefinition) -> String {
    let json = serde_json::to_vec(puzzle).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

/// Decode a share token back into the puzzle definition that produced it.
///
/// # Errors
///
/// Returns a [`DecodeError`] for any malformed, truncated, or structurally
/// incomplete token.
pub fn decode(token: &str) -> Result<PuzzleDefinition, DecodeError> {
    let bytes = URL_SAFE_NO_PAD.decode(token.trim())?;
    let puzzle: PuzzleDefinition = serde_json::from_slice(&bytes)?;
    if puzzle.subject_id.is_empty() {
        return Err(DecodeError::MissingSubject);
    }
    Ok(puzzle)
}
