//! Fixed policy constants for the daily puzzle engine.
//!
//! These values are gameplay policy, not tuning knobs: changing any of them
//! changes what counts as a finished session or a continued streak, so they
//! live in code rather than in external assets.

/// Total attempt budget for one session. Every hint request and every wrong
/// guess consumes one slot; the session fails once all slots are spent.
pub const MAX_TRIES: usize = 3;

/// Number of hint tiers that can be unlocked. The final attempt slot is
/// reserved for a real guess, so only `MAX_TRIES - 1` hints ever exist.
pub const HINT_TIER_COUNT: usize = MAX_TRIES - 1;

/// First calendar day with a daily puzzle; day ordinals count from 1 here.
pub(crate) const EPOCH_YMD: (i32, u32, u32) = (2022, 7, 17);

/// Well-known storage key for the persisted history blob.
pub const HISTORY_STORAGE_KEY: &str = "guesses";

/// Path segment of a share link: `<origin>/guess/<token>`.
pub(crate) const SHARE_PATH: &str = "guess";

/// Launch-period streak bonus, keyed by day. Applied only when the keyed day
/// is the chronologically first record in the player's history.
pub(crate) const LAUNCH_STREAK_SEED: &[(&str, u32)] = &[
    ("2022-07-17", 0),
    ("2022-07-18", 1),
    ("2022-07-19", 2),
    ("2022-07-20", 3),
    ("2022-07-21", 4),
];
