//! Seam to the external candidate database.
//!
//! The movie list, its fuzzy search, and its artwork live outside this
//! crate; sessions and hints only need an ordered candidate list and a
//! per-candidate detail lookup.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// One guessable candidate as shown in the picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    /// Display label, e.g. the movie title.
    pub title: String,
}

/// Detail fields backing the hint tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDetails {
    pub year: u16,
    /// Short crew summary (director, leads).
    pub crew: String,
}

/// External candidate source consumed by sessions, hints, and puzzle minting.
pub trait CandidateSource {
    /// All candidates, in the source's display order.
    fn all_candidates(&self) -> &[Candidate];

    /// Hint details for one candidate, if known.
    fn details_of(&self, id: &str) -> Option<CandidateDetails>;
}

/// Pick a random candidate to mint a puzzle for.
#[must_use]
pub fn pick_random<'a, S, R>(source: &'a S, rng: &mut R) -> Option<&'a Candidate>
where
    S: CandidateSource + ?Sized,
    R: Rng,
{
    source.all_candidates().choose(rng)
}
