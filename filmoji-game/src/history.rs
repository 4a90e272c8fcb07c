//! Persisted per-day play history.
//!
//! The durable shape is a single JSON object under one well-known key,
//! mapping `YYYY-MM-DD` day strings to per-day records:
//!
//! ```json
//! { "2022-07-17": { "movieGuessed": true, "invalidGuessIds": ["tt0167260"] } }
//! ```
//!
//! `invalidGuessIds` lists the non-solving attempts in order; a `""` entry is
//! the sentinel for a hint request. Iteration order of the map is write
//! order, which for an honest clock is chronological - the streak walk
//! depends on that. Malformed persisted data is never fatal: it degrades to
//! an empty history and the player loses statistics, not the ability to play.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Aggregate outcome of one day's session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Whether the subject was guessed.
    #[serde(rename = "movieGuessed")]
    pub solved: bool,
    /// Non-solving attempts in order; `""` marks a hint request.
    #[serde(rename = "invalidGuessIds", default)]
    pub wrong_guess_ids: Vec<String>,
}

impl HistoryRecord {
    /// Record for a finished or in-flight session.
    #[must_use]
    pub fn new(solved: bool, wrong_guess_ids: Vec<String>) -> Self {
        Self {
            solved,
            wrong_guess_ids,
        }
    }

    /// Number of non-solving attempts (hints and wrong guesses).
    #[must_use]
    pub fn miss_count(&self) -> usize {
        self.wrong_guess_ids.len()
    }

    /// Total attempts taken, counting the solving guess when there was one.
    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.miss_count() + usize::from(self.solved)
    }
}

/// Write-ordered mapping from day string to [`HistoryRecord`].
///
/// Upserting an existing day replaces the record in place without moving it,
/// so repeated writes within one session keep their original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<(String, HistoryRecord)>,
}

impl History {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record for a day, if that day was ever played.
    #[must_use]
    pub fn get(&self, day: &str) -> Option<&HistoryRecord> {
        self.entries
            .iter()
            .find(|(key, _)| key == day)
            .map(|(_, record)| record)
    }

    /// Insert or replace the record for a day; last write wins.
    pub fn upsert(&mut self, day: &str, record: HistoryRecord) {
        if let Some((_, existing)) = self.entries.iter_mut().find(|(key, _)| key == day) {
            *existing = record;
        } else {
            self.entries.push((day.to_string(), record));
        }
    }

    /// Entries in write order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HistoryRecord)> {
        self.entries
            .iter()
            .map(|(day, record)| (day.as_str(), record))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse the persisted blob, degrading to an empty history on malformed
    /// input.
    #[must_use]
    pub fn from_json(payload: &str) -> Self {
        match serde_json::from_str(payload) {
            Ok(history) => history,
            Err(err) => {
                log::warn!("discarding malformed history blob: {err}");
                Self::new()
            }
        }
    }

    /// Serialize to the persisted blob shape.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Serialize for History {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (day, record) in &self.entries {
            map.serialize_entry(day, record)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for History {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HistoryVisitor;

        impl<'de> Visitor<'de> for HistoryVisitor {
            type Value = History;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from day string to history record")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut history = History::new();
                while let Some((day, record)) = access.next_entry::<String, HistoryRecord>()? {
                    history.upsert(&day, record);
                }
                Ok(history)
            }
        }

        deserializer.deserialize_map(HistoryVisitor)
    }
}

/// Injected persistence seam for play history.
///
/// There is exactly one writer (the live session), so implementations need no
/// locking; each `upsert` must land as a single atomic replacement of the
/// day's record.
pub trait HistoryStore {
    /// Record for a day, if present.
    fn get(&self, day: &str) -> Option<&HistoryRecord>;

    /// Insert or replace the record for a day.
    fn upsert(&mut self, day: &str, record: HistoryRecord);

    /// Full history in write order.
    fn all(&self) -> &History;
}

/// In-memory store, used in tests and as the fallback when no durable medium
/// exists.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    history: History,
}

impl MemoryHistory {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            history: History::new(),
        }
    }
}

impl HistoryStore for MemoryHistory {
    fn get(&self, day: &str) -> Option<&HistoryRecord> {
        self.history.get(day)
    }

    fn upsert(&mut self, day: &str, record: HistoryRecord) {
        self.history.upsert(day, record);
    }

    fn all(&self) -> &History {
        &self.history
    }
}

/// Durable string medium behind [`BlobHistory`]. Platform layers implement
/// this over whatever key-value storage they have (browser localStorage, a
/// file, ...).
pub trait StorageMedium {
    /// Read the whole blob, or `None` when nothing was ever stored or the
    /// medium is unavailable.
    fn read(&self) -> Option<String>;

    /// Replace the whole blob.
    ///
    /// # Errors
    ///
    /// Returns an error when the medium cannot be written; callers treat this
    /// as a degraded session, not a fatal condition.
    fn write(&mut self, payload: &str) -> anyhow::Result<()>;
}

/// Write-through [`HistoryStore`] over a durable [`StorageMedium`].
///
/// The blob is parsed once at load; every upsert rewrites it. A failing
/// medium only costs durability - the in-memory copy stays authoritative for
/// the rest of the session.
#[derive(Debug)]
pub struct BlobHistory<M: StorageMedium> {
    medium: M,
    history: History,
}

impl<M: StorageMedium> BlobHistory<M> {
    /// Load the history from the medium, treating absent or malformed data
    /// as an empty history.
    #[must_use]
    pub fn load(medium: M) -> Self {
        let history = medium
            .read()
            .map(|payload| History::from_json(&payload))
            .unwrap_or_default();
        Self { medium, history }
    }

    fn flush(&mut self) {
        let payload = self.history.to_json();
        if let Err(err) = self.medium.write(&payload) {
            log::warn!("history write failed, continuing in memory: {err}");
        }
    }
}

impl<M: StorageMedium> HistoryStore for BlobHistory<M> {
    fn get(&self, day: &str) -> Option<&HistoryRecord> {
        self.history.get(day)
    }

    fn upsert(&mut self, day: &str, record: HistoryRecord) {
        self.history.upsert(day, record);
        self.flush();
    }

    fn all(&self) -> &History {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeMedium {
        cell: Rc<RefCell<Option<String>>>,
        fail_writes: bool,
    }

    impl StorageMedium for FakeMedium {
        fn read(&self) -> Option<String> {
            self.cell.borrow().clone()
        }

        fn write(&mut self, payload: &str) -> anyhow::Result<()> {
            if self.fail_writes {
                anyhow::bail!("medium unavailable");
            }
            *self.cell.borrow_mut() = Some(payload.to_string());
            Ok(())
        }
    }

    #[test]
    fn upsert_replaces_in_place_and_keeps_order() {
        let mut history = History::new();
        history.upsert("2022-07-17", HistoryRecord::new(false, vec![String::new()]));
        history.upsert("2022-07-18", HistoryRecord::new(true, vec![]));
        history.upsert(
            "2022-07-17",
            HistoryRecord::new(true, vec!["tt0167260".into()]),
        );

        let days: Vec<&str> = history.iter().map(|(day, _)| day).collect();
        assert_eq!(days, ["2022-07-17", "2022-07-18"]);
        assert!(history.get("2022-07-17").unwrap().solved);
        assert_eq!(history.get("2022-07-17").unwrap().attempt_count(), 2);
    }

    #[test]
    fn blob_shape_roundtrips_in_write_order() {
        let mut history = History::new();
        history.upsert("2022-07-18", HistoryRecord::new(true, vec![]));
        history.upsert(
            "2022-07-19",
            HistoryRecord::new(false, vec![String::new(), "tt0054215".into()]),
        );

        let json = history.to_json();
        assert!(json.starts_with(r#"{"2022-07-18""#));
        assert!(json.contains(r#""movieGuessed":false"#));
        assert!(json.contains(r#""invalidGuessIds":["","tt0054215"]"#));
        assert_eq!(History::from_json(&json), history);
    }

    #[test]
    fn malformed_blob_degrades_to_empty() {
        assert!(History::from_json("not json").is_empty());
        assert!(History::from_json("[1,2,3]").is_empty());
        assert!(History::from_json(r#"{"2022-07-17": {"movieGuessed": 42}}"#).is_empty());
    }

    #[test]
    fn record_counts_include_the_solving_guess() {
        let solved = HistoryRecord::new(true, vec!["tt0076759".into()]);
        assert_eq!(solved.miss_count(), 1);
        assert_eq!(solved.attempt_count(), 2);

        let failed = HistoryRecord::new(false, vec![String::new(); 3]);
        assert_eq!(failed.attempt_count(), 3);
    }

    #[test]
    fn blob_history_writes_through_and_reloads() {
        let medium = FakeMedium::default();
        let mut store = BlobHistory::load(medium.clone());
        assert!(store.all().is_empty());

        store.upsert("2022-07-17", HistoryRecord::new(true, vec![]));
        let reloaded = BlobHistory::load(medium);
        assert_eq!(reloaded.get("2022-07-17").unwrap().attempt_count(), 1);
    }

    #[test]
    fn failing_medium_keeps_the_memory_copy() {
        let medium = FakeMedium {
            fail_writes: true,
            ..FakeMedium::default()
        };
        let mut store = BlobHistory::load(medium);
        store.upsert("2022-07-17", HistoryRecord::new(false, vec![]));
        assert!(store.get("2022-07-17").is_some());
    }
}
