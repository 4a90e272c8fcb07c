//! Ordered hint tiers.
//!
//! The session only counts how many tiers are unlocked; the content comes
//! from the candidate source, resolved positionally through this list rather
//! than through per-count conditionals.

use crate::candidates::CandidateDetails;
use crate::constants::HINT_TIER_COUNT;

/// One hint tier: a label and how to derive its content from the candidate's
/// details.
pub struct HintTier {
    pub label: &'static str,
    resolve: fn(&CandidateDetails) -> String,
}

impl HintTier {
    /// Resolve this tier's content for a candidate.
    #[must_use]
    pub fn resolve(&self, details: &CandidateDetails) -> String {
        (self.resolve)(details)
    }
}

/// Hint tiers in unlock order.
pub const HINT_TIERS: [HintTier; HINT_TIER_COUNT] = [
    HintTier {
        label: "Year",
        resolve: |details| details.year.to_string(),
    },
    HintTier {
        label: "Crew",
        resolve: |details| details.crew.clone(),
    },
];

/// A resolved, unlocked hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub label: &'static str,
    pub value: String,
}

/// Resolve the first `unlocked` hint tiers for a candidate.
#[must_use]
pub fn unlocked_hints(details: &CandidateDetails, unlocked: usize) -> Vec<Hint> {
    HINT_TIERS
        .iter()
        .take(unlocked)
        .map(|tier| Hint {
            label: tier.label,
            value: tier.resolve(details),
        })
        .collect()
}
