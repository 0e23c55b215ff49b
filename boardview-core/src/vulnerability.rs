use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{DealError, Position};

/// Which sides are vulnerable on a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Vulnerability {
    #[default]
    #[serde(alias = "-", alias = "Love")]
    None,
    #[serde(alias = "N-S")]
    NS,
    #[serde(alias = "E-W")]
    EW,
    #[serde(alias = "All")]
    Both,
}

/// Board vulnerability, indexed by `(board - 1) % 32`.
///
/// The table repeats a four-board cycle (None, NS, EW, Both) eight times,
/// which is what the tournament records carry; it is not the 16-board
/// duplicate rotation.
const BOARD_VULNERABILITY: [Vulnerability; 32] = {
    use Vulnerability::{Both, None, EW, NS};
    [
        None, NS, EW, Both, None, NS, EW, Both, //
        None, NS, EW, Both, None, NS, EW, Both, //
        None, NS, EW, Both, None, NS, EW, Both, //
        None, NS, EW, Both, None, NS, EW, Both,
    ]
};

impl Vulnerability {
    /// Vulnerability for a board number. Board 0 falls back to `None`.
    pub fn for_board(board_number: u32) -> Self {
        if board_number == 0 {
            return Vulnerability::None;
        }
        BOARD_VULNERABILITY[((board_number - 1) % 32) as usize]
    }

    /// Check whether a seat is vulnerable
    pub fn is_vulnerable(&self, position: Position) -> bool {
        match self {
            Vulnerability::None => false,
            Vulnerability::Both => true,
            Vulnerability::NS => position.is_north_south(),
            Vulnerability::EW => !position.is_north_south(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Vulnerability::None => "None",
            Vulnerability::NS => "NS",
            Vulnerability::EW => "EW",
            Vulnerability::Both => "Both",
        }
    }
}

impl fmt::Display for Vulnerability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vulnerability {
    type Err = DealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "None" | "none" | "-" | "Love" => Ok(Vulnerability::None),
            "NS" | "N-S" | "ns" => Ok(Vulnerability::NS),
            "EW" | "E-W" | "ew" => Ok(Vulnerability::EW),
            "Both" | "All" | "both" | "all" => Ok(Vulnerability::Both),
            other => Err(DealError::UnknownVulnerability(other.to_string())),
        }
    }
}

/// How a seat is highlighted in a diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatEmphasis {
    /// The dealer, whatever the vulnerability
    Dealer,
    /// A vulnerable seat that is not the dealer
    Vulnerable,
    Neutral,
}

impl SeatEmphasis {
    pub fn for_seat(position: Position, dealer: Position, vulnerability: Vulnerability) -> Self {
        if position == dealer {
            SeatEmphasis::Dealer
        } else if vulnerability.is_vulnerable(position) {
            SeatEmphasis::Vulnerable
        } else {
            SeatEmphasis::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_cycle() {
        assert_eq!(Vulnerability::for_board(1), Vulnerability::None);
        assert_eq!(Vulnerability::for_board(2), Vulnerability::NS);
        assert_eq!(Vulnerability::for_board(3), Vulnerability::EW);
        assert_eq!(Vulnerability::for_board(4), Vulnerability::Both);
        assert_eq!(Vulnerability::for_board(5), Vulnerability::None);
        assert_eq!(Vulnerability::for_board(16), Vulnerability::Both);
        assert_eq!(Vulnerability::for_board(32), Vulnerability::Both);
        assert_eq!(Vulnerability::for_board(33), Vulnerability::None);
    }

    #[test]
    fn test_board_zero_falls_back() {
        assert_eq!(Vulnerability::for_board(0), Vulnerability::None);
    }

    #[test]
    fn test_table_is_four_periodic() {
        for board in 1..=200u32 {
            assert_eq!(
                Vulnerability::for_board(board),
                Vulnerability::for_board(board + 4),
                "board {}",
                board
            );
        }
    }

    #[test]
    fn test_is_vulnerable() {
        for pos in Position::ALL {
            assert!(!Vulnerability::None.is_vulnerable(pos));
            assert!(Vulnerability::Both.is_vulnerable(pos));
        }
        assert!(Vulnerability::NS.is_vulnerable(Position::North));
        assert!(Vulnerability::NS.is_vulnerable(Position::South));
        assert!(!Vulnerability::NS.is_vulnerable(Position::East));
        assert!(Vulnerability::EW.is_vulnerable(Position::West));
        assert!(!Vulnerability::EW.is_vulnerable(Position::North));
    }

    #[test]
    fn test_seat_emphasis() {
        // Dealer wins over vulnerability
        assert_eq!(
            SeatEmphasis::for_seat(Position::North, Position::North, Vulnerability::Both),
            SeatEmphasis::Dealer
        );
        assert_eq!(
            SeatEmphasis::for_seat(Position::South, Position::North, Vulnerability::NS),
            SeatEmphasis::Vulnerable
        );
        assert_eq!(
            SeatEmphasis::for_seat(Position::East, Position::North, Vulnerability::NS),
            SeatEmphasis::Neutral
        );
    }

    #[test]
    fn test_parse_vulnerability() {
        assert_eq!("All".parse::<Vulnerability>().unwrap(), Vulnerability::Both);
        assert_eq!("N-S".parse::<Vulnerability>().unwrap(), Vulnerability::NS);
        assert!("XY".parse::<Vulnerability>().is_err());
    }
}
