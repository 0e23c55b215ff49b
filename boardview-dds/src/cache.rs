use std::fmt;

use rustc_hash::FxHashMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::{BoardAnalysis, DdError, DoubleDummyResult};

/// Cache key: event id plus board number, written `"<eventId>_<board>"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardKey {
    pub event_id: String,
    pub board_number: u32,
}

impl BoardKey {
    pub fn new(event_id: impl Into<String>, board_number: u32) -> Self {
        BoardKey {
            event_id: event_id.into(),
            board_number,
        }
    }

    /// Split a document key at its last underscore
    pub fn parse(key: &str) -> Option<Self> {
        let (event_id, board) = key.rsplit_once('_')?;
        if event_id.is_empty() {
            return None;
        }
        let board_number = board.trim().parse().ok()?;
        Some(BoardKey::new(event_id, board_number))
    }
}

impl fmt::Display for BoardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.event_id, self.board_number)
    }
}

#[derive(Debug, Default, Deserialize)]
struct DdDocument {
    #[serde(default)]
    boards: FxHashMap<String, Value>,
}

/// Double-dummy results for every known board.
///
/// Built once from the fetched results document and only read afterwards,
/// so it can be shared by reference with every renderer.
#[derive(Debug, Clone, Default)]
pub struct DdCache {
    boards: FxHashMap<BoardKey, BoardAnalysis>,
}

impl DdCache {
    /// A cache with no boards; every lookup misses
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse the results document `{ "boards": { "<eventId>_<board>": {...} } }`.
    ///
    /// Only a document that is not JSON, or whose `boards` is not an object,
    /// is an error. Entries whose key or body cannot be read are skipped.
    pub fn from_json(json: &str) -> Result<Self, DdError> {
        let document: DdDocument = serde_json::from_str(json)?;
        let mut boards = FxHashMap::default();
        for (raw_key, entry) in document.boards {
            let Some(key) = BoardKey::parse(&raw_key) else {
                warn!(key = %raw_key, "skipping double dummy entry with unreadable key");
                continue;
            };
            match serde_json::from_value::<BoardAnalysis>(entry) {
                Ok(analysis) => {
                    boards.insert(key, analysis);
                }
                Err(err) => {
                    warn!(key = %raw_key, error = %err, "skipping unreadable double dummy entry")
                }
            }
        }
        info!(boards = boards.len(), "loaded double dummy results");
        Ok(DdCache { boards })
    }

    /// Like [`DdCache::from_json`], but a bad document yields an empty cache
    pub fn from_json_or_empty(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|err| {
            warn!(error = %err, "double dummy results unavailable, continuing without them");
            Self::empty()
        })
    }

    pub fn get(&self, event_id: &str, board_number: u32) -> Option<&BoardAnalysis> {
        self.boards.get(&BoardKey::new(event_id, board_number))
    }

    /// Trick table for a board, if the document had one
    pub fn tricks(&self, event_id: &str, board_number: u32) -> Option<&DoubleDummyResult> {
        self.get(event_id, board_number)
            .and_then(|analysis| analysis.tricks.as_ref())
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}

impl FromIterator<(BoardKey, BoardAnalysis)> for DdCache {
    fn from_iter<I: IntoIterator<Item = (BoardKey, BoardAnalysis)>>(iter: I) -> Self {
        DdCache {
            boards: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Denomination;
    use boardview_core::Position;

    #[test]
    fn test_parse_key() {
        assert_eq!(BoardKey::parse("405596_12"), Some(BoardKey::new("405596", 12)));
        assert_eq!(
            BoardKey::parse("club_night_3"),
            Some(BoardKey::new("club_night", 3))
        );
        assert_eq!(BoardKey::parse("405596"), None);
        assert_eq!(BoardKey::parse("_4"), None);
        assert_eq!(BoardKey::parse("405596_x"), None);
        assert_eq!(BoardKey::new("405596", 12).to_string(), "405596_12");
    }

    #[test]
    fn test_from_json() {
        let json = r#"{"boards": {
            "405596_1": {"tricks": {"N": {"S": 10}}, "dealer": "N", "vuln": "None"},
            "405596_2": {"dealer": "E"},
            "garbage": {"tricks": {}}
        }}"#;
        let cache = DdCache::from_json(json).unwrap();
        assert_eq!(cache.len(), 2);

        let tricks = cache.tricks("405596", 1).unwrap();
        assert_eq!(tricks.get_tricks(Denomination::Spades, Position::North), Some(10));
        assert!(cache.get("405596", 2).is_some());
        assert!(cache.tricks("405596", 2).is_none());
        assert!(cache.get("405596", 3).is_none());
        assert!(cache.get("999", 1).is_none());
    }

    #[test]
    fn test_bad_entry_does_not_drop_the_rest() {
        let json = r#"{"boards": {
            "405596_1": {"tricks": {"N": {"S": 10}}, "dealer": "N"},
            "405596_2": {"tricks": {"N": {"S": 9.0}}},
            "405596_3": {"dealer": "X"},
            "405596_4": {"lott": {"total_tricks": 300}}
        }}"#;
        let cache = DdCache::from_json(json).unwrap();
        assert_eq!(cache.len(), 1);
        let tricks = cache.tricks("405596", 1).unwrap();
        assert_eq!(tricks.get_tricks(Denomination::Spades, Position::North), Some(10));
        assert!(cache.get("405596", 2).is_none());
        assert_eq!(DdCache::from_json_or_empty(json).len(), 1);
    }

    #[test]
    fn test_boards_not_an_object() {
        assert!(DdCache::from_json(r#"{"boards": [1, 2]}"#).is_err());
    }

    #[test]
    fn test_missing_boards_field() {
        let cache = DdCache::from_json("{}").unwrap();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_bad_document_falls_back_to_empty() {
        assert!(DdCache::from_json("not json").is_err());
        assert!(DdCache::from_json_or_empty("not json").is_empty());
    }

    #[test]
    fn test_from_iter() {
        let cache: DdCache = vec![(BoardKey::new("e1", 4), BoardAnalysis::default())]
            .into_iter()
            .collect();
        assert!(cache.get("e1", 4).is_some());
    }
}
