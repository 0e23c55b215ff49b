use serde::{Deserialize, Serialize};

/// Represents the four suits in bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    #[serde(rename = "C", alias = "♣")]
    Clubs = 0,
    #[serde(rename = "D", alias = "♦")]
    Diamonds = 1,
    #[serde(rename = "H", alias = "♥")]
    Hearts = 2,
    #[serde(rename = "S", alias = "♠")]
    Spades = 3,
}

impl Suit {
    /// All suits in rank order (clubs lowest)
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Order used by hand strings, diagrams and LIN: S, H, D, C
    pub const DISPLAY_ORDER: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Convert from numeric index (0-3)
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Suit::Clubs),
            1 => Some(Suit::Diamonds),
            2 => Some(Suit::Hearts),
            3 => Some(Suit::Spades),
            _ => None,
        }
    }

    /// Parse a suit letter (S, H, D, C) or symbol
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' | '♣' => Some(Suit::Clubs),
            'D' | '♦' => Some(Suit::Diamonds),
            'H' | '♥' => Some(Suit::Hearts),
            'S' | '♠' => Some(Suit::Spades),
            _ => None,
        }
    }

    /// Get the suit as a character symbol
    pub fn symbol(&self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    /// Get the suit as a single character (C, D, H, S)
    pub fn to_char(&self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    /// Hearts and diamonds
    pub fn is_red(&self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    /// Position of this suit within a S.H.D.C hand string
    pub fn display_index(&self) -> usize {
        3 - *self as usize
    }
}

/// Represents card ranks from 2 to Ace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    /// All ranks from Ace down to Two
    pub const DESCENDING: [Rank; 13] = [
        Rank::Ace,
        Rank::King,
        Rank::Queen,
        Rank::Jack,
        Rank::Ten,
        Rank::Nine,
        Rank::Eight,
        Rank::Seven,
        Rank::Six,
        Rank::Five,
        Rank::Four,
        Rank::Three,
        Rank::Two,
    ];

    /// Convert from numeric value (2-14)
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            11 => Some(Rank::Jack),
            12 => Some(Rank::Queen),
            13 => Some(Rank::King),
            14 => Some(Rank::Ace),
            _ => None,
        }
    }

    /// Parse a rank character (2-9, T, J, Q, K, A)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Rank::Ace),
            'K' => Some(Rank::King),
            'Q' => Some(Rank::Queen),
            'J' => Some(Rank::Jack),
            'T' => Some(Rank::Ten),
            '9' => Some(Rank::Nine),
            '8' => Some(Rank::Eight),
            '7' => Some(Rank::Seven),
            '6' => Some(Rank::Six),
            '5' => Some(Rank::Five),
            '4' => Some(Rank::Four),
            '3' => Some(Rank::Three),
            '2' => Some(Rank::Two),
            _ => None,
        }
    }

    /// Get the rank as a character (2-9, T, J, Q, K, A)
    pub fn to_char(&self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    /// Get HCP (High Card Points) value for this rank
    /// A=4, K=3, Q=2, J=1, others=0
    pub fn hcp(&self) -> u8 {
        match self {
            Rank::Ace => 4,
            Rank::King => 3,
            Rank::Queen => 2,
            Rank::Jack => 1,
            _ => 0,
        }
    }
}

/// Represents a single playing card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Create a new card
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Card { suit, rank }
    }

    /// Create a card from an index (0-51)
    /// Index is calculated as: suit * 13 + (rank - 2)
    pub fn from_index(index: u8) -> Option<Self> {
        if index >= 52 {
            return None;
        }
        let suit = Suit::from_index(index / 13)?;
        let rank = Rank::from_value((index % 13) + 2)?;
        Some(Card::new(suit, rank))
    }

    /// Convert card to index (0-51)
    pub fn to_index(&self) -> u8 {
        (self.suit as u8) * 13 + (self.rank as u8 - 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_index_conversion() {
        for i in 0..52 {
            let card = Card::from_index(i).unwrap();
            assert_eq!(card.to_index(), i);
        }
        assert!(Card::from_index(52).is_none());
    }

    #[test]
    fn test_hcp_values() {
        assert_eq!(Rank::Ace.hcp(), 4);
        assert_eq!(Rank::King.hcp(), 3);
        assert_eq!(Rank::Queen.hcp(), 2);
        assert_eq!(Rank::Jack.hcp(), 1);
        assert_eq!(Rank::Ten.hcp(), 0);
        assert_eq!(Rank::Seven.hcp(), 0);
    }

    #[test]
    fn test_rank_char_round_trip() {
        for rank in Rank::DESCENDING {
            assert_eq!(Rank::from_char(rank.to_char()), Some(rank));
        }
        assert_eq!(Rank::from_char('t'), Some(Rank::Ten));
        assert_eq!(Rank::from_char('1'), None);
    }

    #[test]
    fn test_suit_colors() {
        assert!(Suit::Hearts.is_red());
        assert!(Suit::Diamonds.is_red());
        assert!(!Suit::Spades.is_red());
        assert!(!Suit::Clubs.is_red());
    }

    #[test]
    fn test_display_order() {
        for (i, suit) in Suit::DISPLAY_ORDER.iter().enumerate() {
            assert_eq!(suit.display_index(), i);
        }
        assert_eq!(Suit::from_char('♥'), Some(Suit::Hearts));
        assert_eq!(Suit::from_char('s'), Some(Suit::Spades));
    }

    #[test]
    fn test_suit_serde_accepts_symbols() {
        let suit: Suit = serde_json::from_str("\"♠\"").unwrap();
        assert_eq!(suit, Suit::Spades);
        let suit: Suit = serde_json::from_str("\"D\"").unwrap();
        assert_eq!(suit, Suit::Diamonds);
        assert_eq!(serde_json::to_string(&Suit::Clubs).unwrap(), "\"C\"");
    }
}
