use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{rotation, DealError, Hand, Vulnerability};

/// Represents the four positions at a bridge table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Position {
    #[serde(rename = "N", alias = "North")]
    North = 0,
    #[serde(rename = "E", alias = "East")]
    East = 1,
    #[serde(rename = "S", alias = "South")]
    South = 2,
    #[serde(rename = "W", alias = "West")]
    West = 3,
}

impl Position {
    /// All positions in clockwise order starting at North
    pub const ALL: [Position; 4] = [
        Position::North,
        Position::East,
        Position::South,
        Position::West,
    ];

    /// Convert from index (0-3)
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Position::North),
            1 => Some(Position::East),
            2 => Some(Position::South),
            3 => Some(Position::West),
            _ => None,
        }
    }

    /// Clockwise offset from North (N=0, E=1, S=2, W=3)
    pub fn offset(&self) -> usize {
        *self as usize
    }

    /// Parse a position letter (N, E, S, W)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Position::North),
            'E' => Some(Position::East),
            'S' => Some(Position::South),
            'W' => Some(Position::West),
            _ => None,
        }
    }

    /// Get position as a character (N, E, S, W)
    pub fn to_char(&self) -> char {
        match self {
            Position::North => 'N',
            Position::East => 'E',
            Position::South => 'S',
            Position::West => 'W',
        }
    }

    /// Get partner position
    pub fn partner(&self) -> Position {
        match self {
            Position::North => Position::South,
            Position::South => Position::North,
            Position::East => Position::West,
            Position::West => Position::East,
        }
    }

    /// Next seat clockwise
    pub fn next(&self) -> Position {
        Self::ALL[(self.offset() + 1) % 4]
    }

    pub fn is_north_south(&self) -> bool {
        matches!(self, Position::North | Position::South)
    }

    /// Four seats clockwise, starting with this one
    pub fn clockwise(&self) -> [Position; 4] {
        std::array::from_fn(|i| Self::ALL[(self.offset() + i) % 4])
    }

    /// Dealer rotation by board number: board 1 is North, 2 East, 3 South, 4 West
    pub fn dealer_for_board(board_number: u32) -> Position {
        Self::ALL[(board_number.saturating_sub(1) % 4) as usize]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Position {
    type Err = DealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Position::from_char(c),
            _ => match trimmed.to_ascii_lowercase().as_str() {
                "north" => Some(Position::North),
                "east" => Some(Position::East),
                "south" => Some(Position::South),
                "west" => Some(Position::West),
                _ => None,
            },
        }
        .ok_or_else(|| DealError::UnknownPosition(s.to_string()))
    }
}

/// A complete board: four hands, dealer, board number and vulnerability.
///
/// Built once from upstream records and not modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    /// Indexed by [`Position::offset`]
    hands: [Hand; 4],
    dealer: Position,
    board_number: u32,
    vulnerability: Vulnerability,
    date: Option<NaiveDate>,
}

impl Deal {
    /// Create a deal; vulnerability is derived from the board number
    pub fn new(hands: [Hand; 4], dealer: Position, board_number: u32) -> Self {
        Deal {
            hands,
            dealer,
            board_number,
            vulnerability: Vulnerability::for_board(board_number),
            date: None,
        }
    }

    /// Parse compass hand strings given in N, E, S, W order
    pub fn from_hand_strings(
        hands: [&str; 4],
        dealer: Position,
        board_number: u32,
    ) -> Result<Self, DealError> {
        let mut parsed: [Hand; 4] = Default::default();
        for position in Position::ALL {
            let input = hands[position.offset()];
            parsed[position.offset()] =
                Hand::parse(input).ok_or_else(|| DealError::InvalidHand {
                    position,
                    input: input.to_string(),
                })?;
        }
        Ok(Deal::new(parsed, dealer, board_number))
    }

    /// Parse hand strings stored in fixed slot order and seat them for `dealer`
    pub fn from_raw_slots(
        raw: [&str; 4],
        dealer: Position,
        board_number: u32,
    ) -> Result<Self, DealError> {
        Deal::from_hand_strings(rotation::map_slots(&raw, dealer), dealer, board_number)
    }

    /// Override the board-derived vulnerability
    pub fn with_vulnerability(mut self, vulnerability: Vulnerability) -> Self {
        self.vulnerability = vulnerability;
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Get a reference to a hand by position
    pub fn hand(&self, position: Position) -> &Hand {
        &self.hands[position.offset()]
    }

    pub fn hands(&self) -> &[Hand; 4] {
        &self.hands
    }

    pub fn dealer(&self) -> Position {
        self.dealer
    }

    pub fn board_number(&self) -> u32 {
        self.board_number
    }

    pub fn vulnerability(&self) -> Vulnerability {
        self.vulnerability
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Hands back in stored slot order (inverse of [`Deal::from_raw_slots`])
    pub fn raw_slots(&self) -> [Hand; 4] {
        rotation::unmap_slots(&self.hands, self.dealer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HANDS: [&str; 4] = [
        "AKQ.432.Q98.765",
        "JT9.AKQ.765.432",
        "876.JT9.AKQ.JT9",
        "5432.8765.JT432.AKQ8",
    ];

    #[test]
    fn test_partner_positions() {
        assert_eq!(Position::North.partner(), Position::South);
        assert_eq!(Position::South.partner(), Position::North);
        assert_eq!(Position::East.partner(), Position::West);
        assert_eq!(Position::West.partner(), Position::East);
    }

    #[test]
    fn test_clockwise_from_dealer() {
        assert_eq!(
            Position::East.clockwise(),
            [Position::East, Position::South, Position::West, Position::North]
        );
        assert_eq!(Position::West.next(), Position::North);
    }

    #[test]
    fn test_dealer_for_board() {
        assert_eq!(Position::dealer_for_board(1), Position::North);
        assert_eq!(Position::dealer_for_board(2), Position::East);
        assert_eq!(Position::dealer_for_board(3), Position::South);
        assert_eq!(Position::dealer_for_board(4), Position::West);
        assert_eq!(Position::dealer_for_board(5), Position::North);
    }

    #[test]
    fn test_parse_position() {
        assert_eq!("n".parse::<Position>().unwrap(), Position::North);
        assert_eq!("West".parse::<Position>().unwrap(), Position::West);
        assert!(matches!(
            "X".parse::<Position>(),
            Err(DealError::UnknownPosition(_))
        ));
    }

    #[test]
    fn test_deal_derives_vulnerability() {
        let deal = Deal::from_hand_strings(HANDS, Position::North, 2).unwrap();
        assert_eq!(deal.vulnerability(), Vulnerability::NS);

        let overridden = deal.with_vulnerability(Vulnerability::EW);
        assert_eq!(overridden.vulnerability(), Vulnerability::EW);
    }

    #[test]
    fn test_invalid_hand_reports_position() {
        let mut hands = HANDS;
        hands[2] = "AKQ.432";
        let err = Deal::from_hand_strings(hands, Position::North, 1).unwrap_err();
        assert_eq!(
            err,
            DealError::InvalidHand {
                position: Position::South,
                input: "AKQ.432".to_string()
            }
        );
    }

    #[test]
    fn test_raw_slots_round_trip() {
        for dealer in Position::ALL {
            let deal = Deal::from_raw_slots(HANDS, dealer, 7).unwrap();
            let restored: Vec<String> = deal.raw_slots().iter().map(|h| h.to_string()).collect();
            assert_eq!(restored, HANDS);
        }
    }

    #[test]
    fn test_raw_slots_seat_for_west_dealer() {
        let deal = Deal::from_raw_slots(HANDS, Position::West, 4).unwrap();
        // West dealer: N <- slot 1, E <- slot 2, S <- slot 3, W <- slot 0
        assert_eq!(deal.hand(Position::North).to_string(), HANDS[1]);
        assert_eq!(deal.hand(Position::West).to_string(), HANDS[0]);
    }
}
