//! Share links and the copyable result text.

use crate::codec;
use crate::constants::{MAX_TRIES, SHARE_PATH};
use crate::puzzle::PuzzleDefinition;
use crate::session::GuessSession;

/// Shareable link that opens this exact puzzle: `<origin>/guess/<token>`.
/// The token alphabet is already URL-safe, so no percent-encoding is needed.
#[must_use]
pub fn share_url(origin: &str, puzzle: &PuzzleDefinition) -> String {
    format!(
        "{}/{}/{}",
        origin.trim_end_matches('/'),
        SHARE_PATH,
        codec::encode(puzzle)
    )
}

/// Result grid for one session: a red square per miss, a green square for
/// the solving guess, white squares for unspent slots.
#[must_use]
pub fn result_grid(session: &GuessSession) -> String {
    let misses = session.miss_count();
    let mut grid = "🟥".repeat(misses);
    if session.outcome().is_solved() {
        grid.push('🟩');
    }
    grid.push_str(&"⬜".repeat(MAX_TRIES.saturating_sub(misses + 1)));
    grid
}

/// Copyable share text for a finished (or abandoned) session.
///
/// Daily sessions carry their ordinal number and link back to the origin;
/// shared-link sessions link to the puzzle itself so the recipient plays the
/// same one.
#[must_use]
pub fn share_text(origin: &str, session: &GuessSession, daily_number: Option<i64>) -> String {
    let header = match daily_number {
        Some(number) => format!("#Filmoji 🎬 #{number}"),
        None => "#Filmoji 🎬".to_string(),
    };
    let link = match daily_number {
        Some(_) => origin.to_string(),
        None => share_url(origin, session.puzzle()),
    };
    [
        header,
        session.puzzle().clue_text.clone(),
        result_grid(session),
        link,
    ]
    .join("\n")
}

/// Invitation text for a freshly minted puzzle.
#[must_use]
pub fn mint_share_text(origin: &str, puzzle: &PuzzleDefinition) -> String {
    [
        "#Filmoji 🎬 #MyFilmoji".to_string(),
        "Guess this movie:".to_string(),
        puzzle.clue_text.clone(),
        share_url(origin, puzzle),
    ]
    .join("\n")
}
