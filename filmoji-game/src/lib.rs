//! Filmoji Game Engine
//!
//! Platform-agnostic core logic for the Filmoji daily emoji-movie guessing
//! game. This crate owns the day/puzzle/history mapping, the per-puzzle
//! guess session state machine, streak statistics, and the reversible share
//! codec; rendering, the movie database, clipboard, and routing live in the
//! platform layers and are reached through the traits exported here.

pub mod calendar;
pub mod candidates;
pub mod codec;
pub mod constants;
pub mod history;
pub mod hints;
pub mod puzzle;
pub mod registry;
pub mod session;
pub mod share;
pub mod streak;

// Re-export commonly used types
pub use calendar::{Calendar, day_string, epoch, ordinal, parse_day};
pub use candidates::{Candidate, CandidateDetails, CandidateSource, pick_random};
pub use codec::{DecodeError, decode, encode};
pub use constants::{HINT_TIER_COUNT, HISTORY_STORAGE_KEY, MAX_TRIES};
pub use history::{BlobHistory, History, HistoryRecord, HistoryStore, MemoryHistory, StorageMedium};
pub use hints::{HINT_TIERS, Hint, HintTier, unlocked_hints};
pub use puzzle::PuzzleDefinition;
pub use registry::{DailyEntry, DailyRegistry};
pub use session::{Attempt, GuessRecord, GuessSession, SessionError, SessionOutcome};
pub use share::{mint_share_text, result_grid, share_text, share_url};
pub use streak::{StreakSeed, StreakStats, compute_streaks};

/// A session bound to a calendar day of the rotation.
#[derive(Debug, Clone)]
pub struct DailyRound {
    day: String,
    number: i64,
    session: GuessSession,
}

impl DailyRound {
    /// Day string this round is bound to.
    #[must_use]
    pub fn day(&self) -> &str {
        &self.day
    }

    /// Ordinal puzzle number, counting from 1 on the epoch day.
    #[must_use]
    pub const fn number(&self) -> i64 {
        self.number
    }

    #[must_use]
    pub const fn session(&self) -> &GuessSession {
        &self.session
    }
}

/// Engine tying the calendar, the daily rotation, and the play history
/// together for one player.
///
/// Every successful mutation is persisted into the history store before it
/// returns, so a reload always rehydrates the latest state; statistics are
/// re-derived from the store on demand.
pub struct DailyGame<H: HistoryStore> {
    registry: DailyRegistry,
    calendar: Calendar,
    history: H,
    seed: StreakSeed,
}

impl<H: HistoryStore> DailyGame<H> {
    /// Engine over an explicit registry, calendar, and history store.
    #[must_use]
    pub fn new(registry: DailyRegistry, calendar: Calendar, history: H) -> Self {
        Self {
            registry,
            calendar,
            history,
            seed: StreakSeed::launch_period(),
        }
    }

    /// Replace the streak seed table (default is the launch-period table).
    #[must_use]
    pub fn with_streak_seed(mut self, seed: StreakSeed) -> Self {
        self.seed = seed;
        self
    }

    /// Today's day string.
    #[must_use]
    pub fn today(&self) -> String {
        self.calendar.today_string()
    }

    /// Ordinal number of today's puzzle.
    #[must_use]
    pub fn daily_number(&self) -> i64 {
        ordinal(epoch(), self.calendar.today())
    }

    /// Today's puzzle, if the rotation covers today.
    #[must_use]
    pub fn todays_puzzle(&self) -> Option<&PuzzleDefinition> {
        self.registry.lookup(&self.today())
    }

    /// Whether a decoded shared puzzle is exactly today's daily; hosts
    /// redirect that case into the daily flow instead of a one-off session.
    #[must_use]
    pub fn is_todays_puzzle(&self, puzzle: &PuzzleDefinition) -> bool {
        self.todays_puzzle() == Some(puzzle)
    }

    /// Start (or resume) today's round. `None` when the rotation has no
    /// puzzle for today; hosts fall back to their "no puzzle today" state.
    #[must_use]
    pub fn start_today(&self) -> Option<DailyRound> {
        let day = self.today();
        let puzzle = self.registry.lookup(&day)?.clone();
        let session = match self.history.get(&day) {
            Some(record) => GuessSession::rehydrate(puzzle, record),
            None => GuessSession::new(puzzle),
        };
        Some(DailyRound {
            number: ordinal(epoch(), self.calendar.today()),
            day,
            session,
        })
    }

    /// Submit a guess for a daily round and persist the updated record.
    ///
    /// # Errors
    ///
    /// Propagates [`SessionError`] from the session; rejected mutations are
    /// not persisted.
    pub fn submit_guess(
        &mut self,
        round: &mut DailyRound,
        candidate_id: &str,
    ) -> Result<SessionOutcome, SessionError> {
        let outcome = round.session.submit_guess(candidate_id)?;
        self.persist(round);
        Ok(outcome)
    }

    /// Unlock a hint for a daily round and persist the updated record.
    ///
    /// # Errors
    ///
    /// Propagates [`SessionError`] from the session; rejected mutations are
    /// not persisted.
    pub fn request_hint(&mut self, round: &mut DailyRound) -> Result<usize, SessionError> {
        let unlocked = round.session.request_hint()?;
        self.persist(round);
        Ok(unlocked)
    }

    /// Concede a daily round and persist the failed record.
    ///
    /// # Errors
    ///
    /// Propagates [`SessionError`] from the session.
    pub fn give_up(&mut self, round: &mut DailyRound) -> Result<(), SessionError> {
        round.session.give_up()?;
        self.persist(round);
        Ok(())
    }

    fn persist(&mut self, round: &DailyRound) {
        self.history.upsert(&round.day, round.session.to_record());
    }

    /// Streak statistics derived from the full history.
    #[must_use]
    pub fn stats(&self) -> StreakStats {
        compute_streaks(self.history.all(), &self.seed)
    }

    #[must_use]
    pub const fn history(&self) -> &H {
        &self.history
    }

    #[must_use]
    pub const fn registry(&self) -> &DailyRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_engine(day: NaiveDate) -> DailyGame<MemoryHistory> {
        DailyGame::new(
            DailyRegistry::builtin(),
            Calendar::fixed(day),
            MemoryHistory::new(),
        )
    }

    fn launch_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 7, 17).unwrap()
    }

    #[test]
    fn start_today_binds_day_and_ordinal() {
        let engine = fixed_engine(launch_day());
        let round = engine.start_today().unwrap();
        assert_eq!(round.day(), "2022-07-17");
        assert_eq!(round.number(), 1);
        assert_eq!(round.session().puzzle().subject_id, "tt0114709");

        let later = fixed_engine(NaiveDate::from_ymd_opt(2022, 8, 31).unwrap());
        assert_eq!(later.start_today().unwrap().number(), 46);
    }

    #[test]
    fn no_puzzle_outside_the_rotation() {
        let engine = fixed_engine(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert!(engine.todays_puzzle().is_none());
        assert!(engine.start_today().is_none());
    }

    #[test]
    fn mutations_persist_and_rehydrate() {
        let mut engine = fixed_engine(launch_day());
        let mut round = engine.start_today().unwrap();

        engine.request_hint(&mut round).unwrap();
        engine.submit_guess(&mut round, "tt0073195").unwrap();

        // A reload mid-session resumes with the same miss count.
        let resumed = engine.start_today().unwrap();
        assert_eq!(resumed.session().miss_count(), 2);
        assert!(!resumed.session().is_terminal());

        let mut resumed = resumed;
        let outcome = engine.submit_guess(&mut resumed, "tt0114709").unwrap();
        assert_eq!(outcome, SessionOutcome::Solved { guess_count: 3 });

        let record = engine.history().get("2022-07-17").unwrap();
        assert!(record.solved);
        assert_eq!(record.attempt_count(), 3);
    }

    #[test]
    fn rejected_mutations_do_not_touch_history() {
        let mut engine = fixed_engine(launch_day());
        let mut round = engine.start_today().unwrap();
        engine.submit_guess(&mut round, "tt0114709").unwrap();
        let before = engine.history().all().clone();

        assert_eq!(
            engine.submit_guess(&mut round, "tt0073195"),
            Err(SessionError::AlreadyFinished)
        );
        assert_eq!(engine.history().all(), &before);
    }

    #[test]
    fn shared_puzzle_matching_today_is_detected() {
        let engine = fixed_engine(launch_day());
        let daily = engine.todays_puzzle().unwrap().clone();
        let token = encode(&daily);
        let decoded = decode(&token).unwrap();
        assert!(engine.is_todays_puzzle(&decoded));

        let other = PuzzleDefinition::new("tt0073195", "🦈😱");
        assert!(!engine.is_todays_puzzle(&other));
    }
}
