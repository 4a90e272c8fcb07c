//! Per-puzzle guess session state machine.
//!
//! A session walks `InProgress -> Solved | Failed` and never leaves a
//! terminal state. Every hint request and every wrong guess consumes one of
//! the [`MAX_TRIES`] attempt slots; the solving guess consumes none, it ends
//! the session.

use smallvec::SmallVec;
use thiserror::Error;

use crate::constants::{HINT_TIER_COUNT, MAX_TRIES};
use crate::history::HistoryRecord;
use crate::puzzle::PuzzleDefinition;

/// One non-solving attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt {
    /// The player asked for a hint instead of naming a candidate.
    Hint,
    /// A wrong candidate guess.
    Wrong(String),
    /// An attempt restored from history; only its existence survived the
    /// reload, not which candidate it named.
    Unrecorded,
}

/// Ordered non-solving attempts of one session.
pub type GuessRecord = SmallVec<[Attempt; MAX_TRIES]>;

/// Tagged session state. `InProgress` is the only non-terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    InProgress,
    /// Solved on the `guess_count`-th attempt (1-indexed).
    Solved { guess_count: usize },
    Failed,
}

impl SessionOutcome {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::InProgress)
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }
}

/// Rejected session mutations. None of these change the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Mutating a terminal session is a no-op failure.
    #[error("session is already finished")]
    AlreadyFinished,
    /// The remaining attempt slot is reserved for a real guess.
    #[error("no hint slots remain before the final guess")]
    HintsExhausted,
}

/// One player's attempt at one puzzle instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessSession {
    puzzle: PuzzleDefinition,
    attempts: GuessRecord,
    outcome: SessionOutcome,
}

impl GuessSession {
    /// Fresh session with no attempts and no hints unlocked.
    #[must_use]
    pub fn new(puzzle: PuzzleDefinition) -> Self {
        Self {
            puzzle,
            attempts: GuessRecord::new(),
            outcome: SessionOutcome::InProgress,
        }
    }

    /// Rebuild a session from its persisted aggregate record.
    ///
    /// Only the miss count and the solved/failed flag survive a reload; the
    /// restored attempts carry no candidate identities.
    #[must_use]
    pub fn rehydrate(puzzle: PuzzleDefinition, record: &HistoryRecord) -> Self {
        let misses = record.miss_count().min(MAX_TRIES);
        let attempts: GuessRecord = (0..misses).map(|_| Attempt::Unrecorded).collect();
        let outcome = if record.solved {
            SessionOutcome::Solved {
                guess_count: misses + 1,
            }
        } else if misses >= MAX_TRIES {
            SessionOutcome::Failed
        } else {
            SessionOutcome::InProgress
        };
        Self {
            puzzle,
            attempts,
            outcome,
        }
    }

    #[must_use]
    pub const fn puzzle(&self) -> &PuzzleDefinition {
        &self.puzzle
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Non-solving attempts taken so far.
    #[must_use]
    pub fn miss_count(&self) -> usize {
        self.attempts.len()
    }

    /// Hint tiers unlocked so far. Each miss unlocks one tier, capped at
    /// [`HINT_TIER_COUNT`]; the final attempt never unlocks another.
    #[must_use]
    pub fn hints_unlocked(&self) -> usize {
        self.miss_count().min(HINT_TIER_COUNT)
    }

    /// Whether a hint request would currently be accepted.
    #[must_use]
    pub fn hint_available(&self) -> bool {
        !self.is_terminal() && self.miss_count() < MAX_TRIES - 1
    }

    #[must_use]
    pub const fn outcome(&self) -> &SessionOutcome {
        &self.outcome
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Spend an attempt slot on a hint, returning the new unlocked count.
    ///
    /// Legal only while the session is in progress and at least one slot
    /// beyond the reserved final guess remains.
    ///
    /// # Errors
    ///
    /// [`SessionError::AlreadyFinished`] on a terminal session,
    /// [`SessionError::HintsExhausted`] once only the final slot is left.
    pub fn request_hint(&mut self) -> Result<usize, SessionError> {
        if self.is_terminal() {
            return Err(SessionError::AlreadyFinished);
        }
        if self.miss_count() >= MAX_TRIES - 1 {
            return Err(SessionError::HintsExhausted);
        }
        self.attempts.push(Attempt::Hint);
        Ok(self.hints_unlocked())
    }

    /// Submit a candidate guess.
    ///
    /// A matching id solves the session immediately with
    /// `guess_count = misses + 1`; a wrong id spends a slot and fails the
    /// session once the budget is exhausted.
    ///
    /// # Errors
    ///
    /// [`SessionError::AlreadyFinished`] on a terminal session.
    pub fn submit_guess(&mut self, candidate_id: &str) -> Result<SessionOutcome, SessionError> {
        if self.is_terminal() {
            return Err(SessionError::AlreadyFinished);
        }
        if candidate_id == self.puzzle.subject_id {
            self.outcome = SessionOutcome::Solved {
                guess_count: self.miss_count() + 1,
            };
        } else {
            self.attempts.push(Attempt::Wrong(candidate_id.to_string()));
            if self.miss_count() >= MAX_TRIES {
                self.outcome = SessionOutcome::Failed;
            }
        }
        Ok(self.outcome.clone())
    }

    /// Concede the session, spending the remaining slots and failing it.
    /// This is what the hint control degrades into once hints are exhausted.
    ///
    /// # Errors
    ///
    /// [`SessionError::AlreadyFinished`] on a terminal session.
    pub fn give_up(&mut self) -> Result<(), SessionError> {
        if self.is_terminal() {
            return Err(SessionError::AlreadyFinished);
        }
        while self.miss_count() < MAX_TRIES {
            self.attempts.push(Attempt::Hint);
        }
        self.outcome = SessionOutcome::Failed;
        Ok(())
    }

    /// Aggregate record of this session for the history store.
    #[must_use]
    pub fn to_record(&self) -> HistoryRecord {
        let wrong_guess_ids = self
            .attempts
            .iter()
            .map(|attempt| match attempt {
                Attempt::Wrong(id) => id.clone(),
                Attempt::Hint | Attempt::Unrecorded => String::new(),
            })
            .collect();
        HistoryRecord::new(self.outcome.is_solved(), wrong_guess_ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle() -> PuzzleDefinition {
        PuzzleDefinition::new("tt0114709", "🥔🤠👨‍🚀🐊🐖🐶")
    }

    #[test]
    fn solves_on_first_through_last_attempt() {
        for misses_before_solve in 0..MAX_TRIES {
            let mut session = GuessSession::new(puzzle());
            for _ in 0..misses_before_solve {
                session.submit_guess("tt0000000").unwrap();
            }
            let outcome = session.submit_guess("tt0114709").unwrap();
            assert_eq!(
                outcome,
                SessionOutcome::Solved {
                    guess_count: misses_before_solve + 1
                }
            );
            assert!(session.is_terminal());
        }
    }

    #[test]
    fn fails_after_max_tries_wrong_guesses() {
        let mut session = GuessSession::new(puzzle());
        for i in 0..MAX_TRIES {
            let outcome = session.submit_guess(&format!("tt000000{i}")).unwrap();
            if i + 1 < MAX_TRIES {
                assert_eq!(outcome, SessionOutcome::InProgress);
            } else {
                assert_eq!(outcome, SessionOutcome::Failed);
            }
        }
        assert_eq!(session.miss_count(), MAX_TRIES);
    }

    #[test]
    fn hints_stop_before_the_final_slot() {
        let mut session = GuessSession::new(puzzle());
        assert_eq!(session.request_hint(), Ok(1));
        assert_eq!(session.request_hint(), Ok(2));
        assert_eq!(session.request_hint(), Err(SessionError::HintsExhausted));
        assert!(!session.hint_available());
        // The reserved slot still allows one real guess.
        assert_eq!(
            session.submit_guess("tt0114709").unwrap(),
            SessionOutcome::Solved { guess_count: 3 }
        );
    }

    #[test]
    fn hint_unlock_count_caps_at_two_tiers() {
        let mut session = GuessSession::new(puzzle());
        assert_eq!(session.hints_unlocked(), 0);
        session.submit_guess("tt0000001").unwrap();
        assert_eq!(session.hints_unlocked(), 1);
        session.submit_guess("tt0000002").unwrap();
        assert_eq!(session.hints_unlocked(), 2);
        session.submit_guess("tt0000003").unwrap();
        assert_eq!(session.hints_unlocked(), 2);
    }

    #[test]
    fn terminal_sessions_reject_mutation_unchanged() {
        let mut session = GuessSession::new(puzzle());
        session.submit_guess("tt0114709").unwrap();
        let before = session.clone();

        assert_eq!(
            session.submit_guess("tt0000001"),
            Err(SessionError::AlreadyFinished)
        );
        assert_eq!(session.request_hint(), Err(SessionError::AlreadyFinished));
        assert_eq!(session.give_up(), Err(SessionError::AlreadyFinished));
        assert_eq!(session, before);
    }

    #[test]
    fn give_up_spends_the_budget_and_fails() {
        let mut session = GuessSession::new(puzzle());
        session.submit_guess("tt0000001").unwrap();
        session.give_up().unwrap();
        assert_eq!(*session.outcome(), SessionOutcome::Failed);
        assert_eq!(session.to_record().miss_count(), MAX_TRIES);
    }

    #[test]
    fn rehydration_restores_counts_without_identities() {
        let record = HistoryRecord::new(false, vec!["tt0000001".into(), String::new()]);
        let session = GuessSession::rehydrate(puzzle(), &record);
        assert_eq!(*session.outcome(), SessionOutcome::InProgress);
        assert_eq!(session.miss_count(), 2);
        assert!(
            session
                .attempts()
                .iter()
                .all(|attempt| *attempt == Attempt::Unrecorded)
        );

        let solved = HistoryRecord::new(true, vec!["tt0000001".into()]);
        let session = GuessSession::rehydrate(puzzle(), &solved);
        assert_eq!(*session.outcome(), SessionOutcome::Solved { guess_count: 2 });

        let failed = HistoryRecord::new(false, vec![String::new(); 3]);
        let session = GuessSession::rehydrate(puzzle(), &failed);
        assert_eq!(*session.outcome(), SessionOutcome::Failed);
    }

    #[test]
    fn record_marks_hints_with_the_empty_sentinel() {
        let mut session = GuessSession::new(puzzle());
        session.request_hint().unwrap();
        session.submit_guess("tt0000001").unwrap();
        let record = session.to_record();
        assert_eq!(record.wrong_guess_ids, vec!["", "tt0000001"]);
        assert!(!record.solved);

        session.submit_guess("tt0114709").unwrap();
        let record = session.to_record();
        assert!(record.solved);
        assert_eq!(record.attempt_count(), 3);
    }
}
