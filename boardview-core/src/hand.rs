use std::fmt;

use crate::{Card, Rank, Suit};

/// Placeholder shown for a void suit in compass hand strings
pub const VOID_MARKER: &str = "-";

/// A single player's hand, held as one rank string per suit.
///
/// Holdings are stored exactly as received (highest to lowest, `T` for ten).
/// Card uniqueness across the deal is not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    /// Indexed by [`Suit::display_index`]: S, H, D, C
    holdings: [String; 4],
}

impl Hand {
    /// Create a new empty hand
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a compass hand string `"<spades>.<hearts>.<diamonds>.<clubs>"`.
    ///
    /// Empty segments and `-` are voids. Anything other than exactly four
    /// dot-separated segments yields `None`.
    pub fn parse(input: &str) -> Option<Hand> {
        let segments: Vec<&str> = input.trim().split('.').collect();
        if segments.len() != 4 {
            return None;
        }

        let mut hand = Hand::new();
        for (slot, segment) in segments.iter().enumerate() {
            let segment = segment.trim();
            if segment != VOID_MARKER {
                hand.holdings[slot] = segment.to_string();
            }
        }
        Some(hand)
    }

    /// Build a hand from cards, sorting each suit from Ace down
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut hand = Hand::new();
        for suit in Suit::DISPLAY_ORDER {
            let mut ranks: Vec<Rank> = cards
                .iter()
                .filter(|c| c.suit == suit)
                .map(|c| c.rank)
                .collect();
            ranks.sort_by(|a, b| b.cmp(a));
            hand.holdings[suit.display_index()] = ranks.iter().map(|r| r.to_char()).collect();
        }
        hand
    }

    /// Raw holding for a suit; empty for a void
    pub fn holding(&self, suit: Suit) -> &str {
        &self.holdings[suit.display_index()]
    }

    /// Number of cards held in a suit
    pub fn suit_length(&self, suit: Suit) -> usize {
        self.holding(suit).chars().count()
    }

    /// Suit lengths in S, H, D, C order
    pub fn suit_lengths(&self) -> [usize; 4] {
        Suit::DISPLAY_ORDER.map(|suit| self.suit_length(suit))
    }

    /// Total number of cards in the hand
    pub fn len(&self) -> usize {
        self.suit_lengths().iter().sum()
    }

    /// Check if the hand holds no cards
    pub fn is_empty(&self) -> bool {
        self.holdings.iter().all(|h| h.is_empty())
    }

    /// Calculate total High Card Points (HCP)
    /// A=4, K=3, Q=2, J=1; anything else, lowercase letters included, counts 0
    pub fn hcp(&self) -> u32 {
        self.holdings
            .iter()
            .flat_map(|h| h.chars())
            .filter(char::is_ascii_uppercase)
            .filter_map(Rank::from_char)
            .map(|r| u32::from(r.hcp()))
            .sum()
    }

    /// Cards of the hand; characters that are not ranks are skipped
    pub fn cards(&self) -> Vec<Card> {
        Suit::DISPLAY_ORDER
            .iter()
            .flat_map(|&suit| {
                self.holding(suit)
                    .chars()
                    .filter_map(Rank::from_char)
                    .map(move |rank| Card::new(suit, rank))
            })
            .collect()
    }
}

impl fmt::Display for Hand {
    /// Compass notation with `-` for voids, e.g. `AKQ.-.Q98.765`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (slot, holding) in self.holdings.iter().enumerate() {
            if slot > 0 {
                f.write_str(".")?;
            }
            if holding.is_empty() {
                f.write_str(VOID_MARKER)?;
            } else {
                f.write_str(holding)?;
            }
        }
        Ok(())
    }
}

/// HCP of a compass hand string; malformed input counts 0
pub fn hcp_of(input: &str) -> u32 {
    Hand::parse(input).map_or(0, |hand| hand.hcp())
}
