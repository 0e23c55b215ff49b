use std::fmt;

use boardview_core::Position;
use serde::{Deserialize, Serialize};

use crate::{Denomination, DoubleDummyResult};

/// Row order of the trick table. South is listed before East.
pub const ROW_ORDER: [Position; 4] = [
    Position::North,
    Position::South,
    Position::East,
    Position::West,
];

/// Text of a table with no result behind it
pub const NOT_AVAILABLE_TEXT: &str = "DD Data Not Available";

/// Tricks needed before a contract counts (the book)
const BOOK: u8 = 6;

/// Display value of one table cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "level", rename_all = "snake_case")]
pub enum DdCell {
    /// Contract level that makes: tricks above book
    Makes(u8),
    /// Fewer than seven tricks
    NotMakeable,
    NoData,
}

impl DdCell {
    pub fn from_tricks(tricks: Option<u8>) -> Self {
        match tricks {
            Some(t) if t > BOOK => DdCell::Makes(t - BOOK),
            Some(_) => DdCell::NotMakeable,
            None => DdCell::NoData,
        }
    }

    pub fn render(&self, markers: &DdMarkers) -> String {
        match self {
            DdCell::Makes(level) => level.to_string(),
            DdCell::NotMakeable => markers.not_makeable.clone(),
            DdCell::NoData => markers.no_data.clone(),
        }
    }
}

/// Text shown for cells without a making level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DdMarkers {
    pub not_makeable: String,
    pub no_data: String,
}

impl Default for DdMarkers {
    fn default() -> Self {
        DdMarkers {
            not_makeable: "-".to_string(),
            no_data: "?".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DdRow {
    pub position: Position,
    /// S, H, D, C, NT
    pub cells: [DdCell; 5],
}

/// The 4x5 trick matrix, or a marker that no result exists for the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DdTable {
    NotAvailable,
    Available { rows: [DdRow; 4] },
}

/// Format a double-dummy result into the display table
pub fn format_dd_table(result: Option<&DoubleDummyResult>) -> DdTable {
    let Some(result) = result else {
        return DdTable::NotAvailable;
    };

    let rows = ROW_ORDER.map(|position| DdRow {
        position,
        cells: Denomination::TABLE_ORDER
            .map(|denomination| DdCell::from_tricks(result.get_tricks(denomination, position))),
    });
    DdTable::Available { rows }
}

impl DdTable {
    pub fn is_available(&self) -> bool {
        matches!(self, DdTable::Available { .. })
    }

    pub fn rows(&self) -> &[DdRow] {
        match self {
            DdTable::Available { rows } => rows,
            DdTable::NotAvailable => &[],
        }
    }

    /// Look up a cell by declarer and denomination
    pub fn cell(&self, position: Position, denomination: Denomination) -> Option<DdCell> {
        let column = Denomination::TABLE_ORDER
            .iter()
            .position(|d| *d == denomination)?;
        self.rows()
            .iter()
            .find(|row| row.position == position)
            .map(|row| row.cells[column])
    }
}

impl fmt::Display for DdTable {
    /// Plain-text grid using the default markers
    ///
    /// ```text
    ///     ♠  ♥  ♦  ♣ NT
    /// N   4  -  2  1  3
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = match self {
            DdTable::NotAvailable => return f.write_str(NOT_AVAILABLE_TEXT),
            DdTable::Available { rows } => rows,
        };

        let markers = DdMarkers::default();
        write!(f, " ")?;
        for denomination in Denomination::TABLE_ORDER {
            write!(f, "{:>3}", denomination.label())?;
        }
        for row in rows {
            write!(f, "\n{}", row.position)?;
            for cell in &row.cells {
                write!(f, "{:>3}", cell.render(&markers))?;
            }
        }
        Ok(())
    }
}
