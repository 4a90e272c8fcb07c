//! Static daily puzzle rotation.
//!
//! One puzzle per calendar day, keyed by the `YYYY-MM-DD` day string. A
//! subject may appear at most once across the whole rotation; offending
//! entries are skipped at construction and reported, the registry keeps
//! serving every other day.

use std::collections::BTreeMap;
use std::collections::HashSet;

use crate::puzzle::PuzzleDefinition;

/// A puzzle bound to a specific calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyEntry {
    pub day: String,
    pub puzzle: PuzzleDefinition,
}

/// Immutable day -> puzzle table, validated at construction.
#[derive(Debug, Clone, Default)]
pub struct DailyRegistry {
    entries: BTreeMap<String, PuzzleDefinition>,
    skipped: Vec<DailyEntry>,
}

impl DailyRegistry {
    /// Build a registry from (day, puzzle) pairs, in day order.
    ///
    /// Entries whose subject id duplicates an earlier entry's, or whose day
    /// is already taken, are skipped and logged; they stay inspectable via
    /// [`skipped`](Self::skipped) so hosts can surface the defect.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = DailyEntry>) -> Self {
        let mut registry = Self::default();
        let mut seen_subjects: HashSet<String> = HashSet::new();

        for entry in entries {
            if registry.entries.contains_key(&entry.day) {
                log::warn!("daily table: day {} is already taken, skipping", entry.day);
                registry.skipped.push(entry);
                continue;
            }
            if !seen_subjects.insert(entry.puzzle.subject_id.clone()) {
                log::warn!(
                    "daily table: duplicate subject {} on {}, skipping",
                    entry.puzzle.subject_id,
                    entry.day
                );
                registry.skipped.push(entry);
                continue;
            }
            registry.entries.insert(entry.day, entry.puzzle);
        }

        registry
    }

    /// The shipped rotation.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_entries(DAILY_TABLE.iter().map(|(day, id, clue, author)| {
            let mut puzzle = PuzzleDefinition::new(*id, *clue);
            if let Some(author) = author {
                puzzle = puzzle.with_author(*author);
            }
            DailyEntry {
                day: (*day).to_string(),
                puzzle,
            }
        }))
    }

    /// Puzzle for a day, if the rotation covers it.
    #[must_use]
    pub fn lookup(&self, day: &str) -> Option<&PuzzleDefinition> {
        self.entries.get(day)
    }

    /// Entries rejected during construction.
    #[must_use]
    pub fn skipped(&self) -> &[DailyEntry] {
        &self.skipped
    }

    /// (day, puzzle) pairs in day order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PuzzleDefinition)> {
        self.entries
            .iter()
            .map(|(day, puzzle)| (day.as_str(), puzzle))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The launch rotation: day, subject id, clue, author.
const DAILY_TABLE: &[(&str, &str, &str, Option<&str>)] = &[
    ("2022-07-17", "tt0114709", "🥔🤠👨‍🚀🐊🐖🐶", Some("teuteuf")),
    ("2022-07-18", "tt0167260", "💍🌋🧙‍♂️👑", None),
    ("2022-07-19", "tt0103639", "🧞‍♂️🪔💍👸🤴", None),
    ("2022-07-20", "tt0211915", "👩‍🦰🏠🗼🥖🇫🇷", None),
    ("2022-07-21", "tt1745960", "✈️🇺🇸🕶️", None),
    ("2022-07-22", "tt0109830", "🏃🍫🦐", None),
    ("2022-07-23", "tt0120382", "🙍‍♂️🎥⛵😨📺", None),
    ("2022-07-24", "tt4633694", "🕷️🦸🦹🦸‍♂️🦹‍♂️🦸‍♀️🦹‍♀️🎨✍️", None),
    ("2022-07-25", "tt0090605", "👽🤰🩸😱", None),
    ("2022-07-26", "tt0062622", "👁️🖥️🛰️🚀", None),
    ("2022-07-27", "tt0054215", "🔪🚿🧓", None),
    ("2022-07-28", "tt0101414", "🌹👸🧌", None),
    ("2022-07-29", "tt0264464", "🏃‍♂️✈️💰🃏", None),
    ("2022-07-30", "tt0045152", "☔🎤😃", None),
    ("2022-07-31", "tt0107290", "🦟💉🥚🦕🦖🚨🏃‍♂️", None),
    ("2022-08-01", "tt0993846", "🐺🧱🛣️〽️🦁💵", None),
    ("2022-08-02", "tt0382932", "🐭💆‍♂️👨‍🍳🍲", None),
    ("2022-08-03", "tt10648342", "🦸🔨❤️➕⛈️", None),
    ("2022-08-04", "tt0482571", "🏃🚪🎩🚪🏃▶️👬", None),
    ("2022-08-05", "tt2380307", "🎸💀👦🇲🇽", None),
    ("2022-08-06", "tt0107048", "🔄⏰🦔", None),
    ("2022-08-07", "tt0133093", "🕵️🕵️‍♀️🤜🤵🔌💊", None),
    ("2022-08-08", "tt1130884", "👮‍♂️💊🏝️😨", None),
    ("2022-08-09", "tt2293640", "🤓🤓🤓🌍🧒", None),
    ("2022-08-10", "tt0114369", "😋😛😴🤢😡😍🤤👀", None),
    ("2022-08-11", "tt5311514", "👦💬⁉️↔️⁉️🗨️👧🗾🌊☄️", None),
    ("2022-08-12", "tt0119217", "🧹🏫👨‍🏫🧠🍎", None),
    ("2022-08-13", "tt12412888", "🦔👟✌️", None),
    ("2022-08-14", "tt0088763", "🚗🔙⌚👨‍🔬🎙️", None),
    ("2022-08-15", "tt0435761", "👨‍🚀🤠🏫🍓🧸", None),
    ("2022-08-16", "tt0116629", "🇺🇸🎆👽👊", None),
    ("2022-08-17", "tt0325980", "🏴‍☠️🌊💀⚔️⚫📿", None),
    ("2022-08-18", "tt6467266", "🐷🦍🦁🎹🐧🦔", None),
    ("2022-08-19", "tt1160419", "👩‍👦🗡️⏳🐛🪐", None),
    ("2022-08-20", "tt0066921", "👁️🎩🦯🥛🍊", None),
    ("2022-08-21", "tt1049413", "👴🧒🎈🏠🏞️🐕🔼", None),
    ("2022-08-22", "tt2582802", "🥁👨‍🦲⏱️🩸🚗🎓🎶", None),
    ("2022-08-23", "tt0120338", "💑🚢🧊🥶👵", None),
    ("2022-08-24", "tt2096673", "😡😭😊🤢😱🧠", None),
    ("2022-08-25", "tt0050083", "😠😠😠😠😠😠😠😠😠😠😠😠", None),
    ("2022-08-26", "tt1396484", "🤡👿🎈", None),
    ("2022-08-27", "tt0073195", "🦈😱", None),
    ("2022-08-28", "tt0137523", "🥊♣️🧼", None),
    ("2022-08-29", "tt1877830", "🦇🐱🐧❓", None),
    ("2022-08-30", "tt0088247", "🤖🕶️🔫", None),
    ("2022-08-31", "tt0110413", "🧔🔫🥛👧", None),
];
