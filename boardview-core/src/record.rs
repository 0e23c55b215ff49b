use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{rotation, Deal, DealError, Hand, Position, Vulnerability};

/// Accepted layouts for board dates
const DATE_FORMATS: [&str; 3] = ["%d.%m.%Y", "%Y-%m-%d", "%Y.%m.%d"];

/// Parse a board date such as `17.01.2026` or `2026-01-17`
pub fn parse_board_date(input: &str) -> Result<NaiveDate, DealError> {
    let trimmed = input.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| DealError::InvalidDate(input.to_string()))
}

/// One board as delivered by the tournament data, before validation.
///
/// Hands are compass strings keyed by seat. Any of them may be absent;
/// dealer and vulnerability fall back to the board-number rotation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRecord {
    #[serde(rename = "N", default)]
    pub north: Option<String>,
    #[serde(rename = "E", default)]
    pub east: Option<String>,
    #[serde(rename = "S", default)]
    pub south: Option<String>,
    #[serde(rename = "W", default)]
    pub west: Option<String>,
    #[serde(default)]
    pub dealer: Option<Position>,
    #[serde(default, alias = "vuln")]
    pub vulnerability: Option<Vulnerability>,
    #[serde(default)]
    pub date: Option<String>,
}

impl BoardRecord {
    /// Build a record from hands stored in fixed slot order
    pub fn from_raw_slots(raw: [&str; 4], dealer: Position) -> Self {
        let [north, east, south, west] =
            rotation::map_slots(&raw, dealer).map(|h| Some(h.to_string()));
        BoardRecord {
            north,
            east,
            south,
            west,
            dealer: Some(dealer),
            ..Default::default()
        }
    }

    pub fn hand_string(&self, position: Position) -> Option<&str> {
        match position {
            Position::North => self.north.as_deref(),
            Position::East => self.east.as_deref(),
            Position::South => self.south.as_deref(),
            Position::West => self.west.as_deref(),
        }
    }

    /// Validate the record into a [`Deal`].
    ///
    /// Every seat must be present (`MissingHand`) and parse as a compass
    /// string (`InvalidHand`). A date that cannot be read is dropped.
    pub fn to_deal(&self, board_number: u32) -> Result<Deal, DealError> {
        let mut hands: [Hand; 4] = Default::default();
        for position in Position::ALL {
            let input = self
                .hand_string(position)
                .filter(|s| !s.trim().is_empty())
                .ok_or(DealError::MissingHand(position))?;
            hands[position.offset()] = Hand::parse(input).ok_or_else(|| DealError::InvalidHand {
                position,
                input: input.to_string(),
            })?;
        }

        let dealer = self
            .dealer
            .unwrap_or_else(|| Position::dealer_for_board(board_number));
        let mut deal = Deal::new(hands, dealer, board_number);
        if let Some(vulnerability) = self.vulnerability {
            deal = deal.with_vulnerability(vulnerability);
        }
        if let Some(date) = self.date.as_deref().and_then(|d| parse_board_date(d).ok()) {
            deal = deal.with_date(date);
        }
        Ok(deal)
    }
}
