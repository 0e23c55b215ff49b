use boardview_core::{Deal, Position, Suit};
use serde::{Deserialize, Serialize};

use crate::{Denomination, DoubleDummyResult};

/// A side's longest trump fit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fit {
    pub suit: Suit,
    /// Combined length of both partners
    pub length: u8,
    /// Double-dummy tricks for the better-placed partner
    #[serde(default)]
    pub tricks: Option<u8>,
}

/// Law of Total Tricks summary for a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lott {
    pub total_tricks: u8,
    #[serde(default)]
    pub ns_fit: Option<Fit>,
    #[serde(default)]
    pub ew_fit: Option<Fit>,
}

impl Lott {
    /// Build the summary from the hands and their double-dummy tricks.
    ///
    /// Each side's fit is its longest combined suit, ties going to the suit
    /// with more tricks and then to the higher-ranking suit. Total tricks is
    /// the sum of both fits' tricks; missing trick counts count 0.
    pub fn compute(deal: &Deal, result: &DoubleDummyResult) -> Self {
        let ns = best_fit(deal, result, Position::North);
        let ew = best_fit(deal, result, Position::East);
        Lott {
            total_tricks: ns.tricks.unwrap_or(0).saturating_add(ew.tricks.unwrap_or(0)),
            ns_fit: Some(ns),
            ew_fit: Some(ew),
        }
    }
}

fn best_fit(deal: &Deal, result: &DoubleDummyResult, seat: Position) -> Fit {
    let partner = seat.partner();
    let mut best: Option<Fit> = None;

    for suit in Suit::DISPLAY_ORDER {
        let length = deal.hand(seat).suit_length(suit) + deal.hand(partner).suit_length(suit);
        let denomination = Denomination::from_suit(suit);
        let tricks = result
            .get_tricks(denomination, seat)
            .unwrap_or(0)
            .max(result.get_tricks(denomination, partner).unwrap_or(0));
        let candidate = Fit {
            suit,
            length: u8::try_from(length).unwrap_or(u8::MAX),
            tricks: Some(tricks),
        };

        let better = match best {
            None => true,
            Some(current) => {
                (candidate.length, candidate.tricks) > (current.length, current.tricks)
            }
        };
        if better {
            best = Some(candidate);
        }
    }

    best.unwrap_or(Fit {
        suit: Suit::Spades,
        length: 0,
        tricks: Some(0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal() -> Deal {
        // NS: 9 spades; EW: 8 diamonds and 8 clubs
        Deal::from_hand_strings(
            [
                "AKQ98.K32.32.Q32",
                "J2.JT9.KQT9.A987",
                "7654.A654.A54.K5",
                "T3.Q87.J876.JT64",
            ],
            Position::North,
            1,
        )
        .unwrap()
    }

    fn tricks() -> DoubleDummyResult {
        let mut result = DoubleDummyResult::new();
        result.set_tricks(Denomination::Spades, Position::North, 9);
        result.set_tricks(Denomination::Spades, Position::South, 10);
        result.set_tricks(Denomination::Diamonds, Position::East, 7);
        result.set_tricks(Denomination::Diamonds, Position::West, 6);
        result.set_tricks(Denomination::Clubs, Position::East, 8);
        result
    }

    #[test]
    fn test_compute_lott() {
        let lott = Lott::compute(&deal(), &tricks());
        let ns = lott.ns_fit.unwrap();
        assert_eq!(ns.suit, Suit::Spades);
        assert_eq!(ns.length, 9);
        assert_eq!(ns.tricks, Some(10));

        // Diamonds and clubs are both 8 long; clubs take more tricks
        let ew = lott.ew_fit.unwrap();
        assert_eq!(ew.suit, Suit::Clubs);
        assert_eq!(ew.length, 8);
        assert_eq!(ew.tricks, Some(8));

        assert_eq!(lott.total_tricks, 18);
    }

    #[test]
    fn test_total_of_maximal_fits() {
        let mut result = DoubleDummyResult::new();
        for position in Position::ALL {
            for denomination in Denomination::ALL {
                result.set_tricks(denomination, position, 13);
            }
        }
        assert_eq!(Lott::compute(&deal(), &result).total_tricks, 26);
    }

    #[test]
    fn test_tie_prefers_higher_suit() {
        let lott = Lott::compute(&deal(), &DoubleDummyResult::new());
        // Both EW eight-card fits take 0 tricks without data: diamonds outranks clubs
        assert_eq!(lott.ew_fit.unwrap().suit, Suit::Diamonds);
        assert_eq!(lott.total_tricks, 0);
    }
}
