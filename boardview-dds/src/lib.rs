//! Precomputed double-dummy results for tournament boards.
//!
//! Results are never solved here: they arrive in a JSON document keyed by
//! `"<eventId>_<boardNumber>"`, are loaded once into a [`DdCache`] and then
//! looked up and formatted for display.

mod cache;
mod document;
mod lott;
mod table;

use std::collections::BTreeMap;

use boardview_core::{Position, Suit};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use cache::{BoardKey, DdCache};
pub use document::{BoardAnalysis, Optimum};
pub use lott::{Fit, Lott};
pub use table::{
    format_dd_table, DdCell, DdMarkers, DdRow, DdTable, NOT_AVAILABLE_TEXT, ROW_ORDER,
};

/// Error type for double-dummy documents
#[derive(Debug, Error)]
pub enum DdError {
    #[error("malformed double dummy document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Denomination for double-dummy analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Denomination {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
    NoTrump,
}

impl Denomination {
    /// All five denominations
    pub const ALL: [Denomination; 5] = [
        Denomination::Clubs,
        Denomination::Diamonds,
        Denomination::Hearts,
        Denomination::Spades,
        Denomination::NoTrump,
    ];

    /// Column order of the trick table: S, H, D, C, NT
    pub const TABLE_ORDER: [Denomination; 5] = [
        Denomination::Spades,
        Denomination::Hearts,
        Denomination::Diamonds,
        Denomination::Clubs,
        Denomination::NoTrump,
    ];

    /// Convert from Suit
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Clubs => Denomination::Clubs,
            Suit::Diamonds => Denomination::Diamonds,
            Suit::Hearts => Denomination::Hearts,
            Suit::Spades => Denomination::Spades,
        }
    }

    /// Convert to Suit (NoTrump returns None)
    pub fn to_suit(&self) -> Option<Suit> {
        match self {
            Denomination::Clubs => Some(Suit::Clubs),
            Denomination::Diamonds => Some(Suit::Diamonds),
            Denomination::Hearts => Some(Suit::Hearts),
            Denomination::Spades => Some(Suit::Spades),
            Denomination::NoTrump => None,
        }
    }

    /// Key used in the results document (S, H, D, C, NT)
    pub fn key(&self) -> &'static str {
        match self {
            Denomination::Clubs => "C",
            Denomination::Diamonds => "D",
            Denomination::Hearts => "H",
            Denomination::Spades => "S",
            Denomination::NoTrump => "NT",
        }
    }

    /// Column heading: suit symbol, or `NT`
    pub fn label(&self) -> String {
        match self.to_suit() {
            Some(suit) => suit.symbol().to_string(),
            None => "NT".to_string(),
        }
    }
}

/// Most tricks a declarer can take
pub const MAX_TRICKS: u8 = 13;

/// Tricks each declarer takes in each denomination.
///
/// Entries missing from the source document stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SeatTable", into = "SeatTable")]
pub struct DoubleDummyResult {
    /// Index: [denomination][declarer]
    tricks: [[Option<u8>; 4]; 5],
}

impl DoubleDummyResult {
    /// Create a new empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Set tricks for a specific denomination and declarer.
    /// Counts above [`MAX_TRICKS`] are discarded and leave the entry unchanged.
    pub fn set_tricks(&mut self, denomination: Denomination, declarer: Position, tricks: u8) {
        if tricks > MAX_TRICKS {
            warn_out_of_range(denomination, declarer, i64::from(tricks));
            return;
        }
        self.tricks[denomination as usize][declarer.offset()] = Some(tricks);
    }

    /// Get tricks for a specific denomination and declarer
    pub fn get_tricks(&self, denomination: Denomination, declarer: Position) -> Option<u8> {
        self.tricks[denomination as usize][declarer.offset()]
    }

    /// No-trump tricks summed per side: (N + S, E + W). Missing entries count 0.
    pub fn side_notrump_tricks(&self) -> (u8, u8) {
        let nt = |pos| self.get_tricks(Denomination::NoTrump, pos).unwrap_or(0);
        (
            nt(Position::North).saturating_add(nt(Position::South)),
            nt(Position::East).saturating_add(nt(Position::West)),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.tricks.iter().flatten().all(Option::is_none)
    }
}

/// Document form of the trick table: `{ "N": { "S": 9, ..., "NT": 7 }, ... }`
type SeatTable = BTreeMap<Position, SeatTricks>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SeatTricks {
    #[serde(rename = "S", default, skip_serializing_if = "Option::is_none")]
    spades: Option<i64>,
    #[serde(rename = "H", default, skip_serializing_if = "Option::is_none")]
    hearts: Option<i64>,
    #[serde(rename = "D", default, skip_serializing_if = "Option::is_none")]
    diamonds: Option<i64>,
    #[serde(rename = "C", default, skip_serializing_if = "Option::is_none")]
    clubs: Option<i64>,
    #[serde(rename = "NT", default, skip_serializing_if = "Option::is_none")]
    notrump: Option<i64>,
}

impl SeatTricks {
    fn slot(&mut self, denomination: Denomination) -> &mut Option<i64> {
        match denomination {
            Denomination::Clubs => &mut self.clubs,
            Denomination::Diamonds => &mut self.diamonds,
            Denomination::Hearts => &mut self.hearts,
            Denomination::Spades => &mut self.spades,
            Denomination::NoTrump => &mut self.notrump,
        }
    }
}

impl From<SeatTable> for DoubleDummyResult {
    fn from(table: SeatTable) -> Self {
        let mut result = DoubleDummyResult::new();
        for (position, mut seat) in table {
            for denomination in Denomination::ALL {
                let Some(raw) = *seat.slot(denomination) else {
                    continue;
                };
                match u8::try_from(raw) {
                    Ok(tricks) => result.set_tricks(denomination, position, tricks),
                    Err(_) => warn_out_of_range(denomination, position, raw),
                }
            }
        }
        result
    }
}

fn warn_out_of_range(denomination: Denomination, declarer: Position, value: i64) {
    tracing::warn!(
        declarer = %declarer,
        denomination = denomination.key(),
        value,
        "discarding out-of-range trick count"
    );
}

impl From<DoubleDummyResult> for SeatTable {
    fn from(result: DoubleDummyResult) -> Self {
        let mut table = SeatTable::new();
        for position in Position::ALL {
            let mut seat = SeatTricks::default();
            for denomination in Denomination::ALL {
                *seat.slot(denomination) = result.get_tricks(denomination, position).map(i64::from);
            }
            table.insert(position, seat);
        }
        table
    }
}
