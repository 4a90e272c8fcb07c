//! Current/maximum streak derivation over the play history.

use chrono::{Duration, NaiveDate};

use crate::calendar::parse_day;
use crate::constants::LAUNCH_STREAK_SEED;
use crate::history::History;

/// Derived streak statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakStats {
    /// Consecutive solved days ending at the most recent played day.
    pub current: u32,
    /// Longest streak ever reached.
    pub max: u32,
}

/// Starting value for the streak walk, keyed by the chronologically first
/// played day. A launch-period accommodation: players who joined mid-launch
/// week keep the streak they would have had. Configurable data, not logic.
#[derive(Debug, Clone, Default)]
pub struct StreakSeed {
    entries: Vec<(String, u32)>,
}

impl StreakSeed {
    /// No seeding; every history starts from zero.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The historical launch-week bonus table.
    #[must_use]
    pub fn launch_period() -> Self {
        Self {
            entries: LAUNCH_STREAK_SEED
                .iter()
                .map(|(day, bonus)| ((*day).to_string(), *bonus))
                .collect(),
        }
    }

    /// Seed table from explicit (day, bonus) pairs.
    #[must_use]
    pub fn from_entries(entries: Vec<(String, u32)>) -> Self {
        Self { entries }
    }

    fn bonus_for(&self, day: &str) -> u32 {
        self.entries
            .iter()
            .find(|(key, _)| key == day)
            .map_or(0, |(_, bonus)| *bonus)
    }
}

/// Walk the history once, in write order, deriving streak statistics.
///
/// A solved day extends the streak only when the previous *played* day is the
/// immediately preceding calendar day (or there is no previous day); a solved
/// day after a gap restarts at 1; an unsolved day resets to 0. The seed only
/// ever applies to the chronologically first record.
#[must_use]
pub fn compute_streaks(history: &History, seed: &StreakSeed) -> StreakStats {
    let mut current = history
        .iter()
        .next()
        .map_or(0, |(day, _)| seed.bonus_for(day));
    let mut max = 0u32;
    let mut previous: Option<NaiveDate> = None;

    for (day, record) in history.iter() {
        let date = parse_day(day);
        if record.solved {
            let adjacent = match (previous, date) {
                (None, _) => true,
                (Some(prev), Some(cur)) => prev + Duration::days(1) == cur,
                (Some(_), None) => false,
            };
            if adjacent {
                current += 1;
            } else {
                current = 1;
            }
        } else {
            current = 0;
        }
        max = max.max(current);
        previous = date;
    }

    StreakStats { current, max }
}
