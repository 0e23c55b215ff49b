use boardview_core::{Card, Deal, Hand, Position, Rank, Suit, Vulnerability};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Error type for LIN decoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinError {
    #[error("LIN string has no md field")]
    MissingDeal,
    #[error("invalid dealer code in md field: {0:?}")]
    InvalidDealer(String),
    #[error("expected at least 3 hands in md field, got {0}")]
    TooFewHands(usize),
    #[error("invalid card character {0:?} in LIN hand")]
    InvalidCard(char),
    #[error("rank {0:?} appears before any suit letter")]
    MissingSuit(char),
    #[error("card {0} is held twice")]
    DuplicateCard(String),
    #[error("invalid vulnerability code: {0:?}")]
    InvalidVulnerability(String),
    #[error("invalid board label: {0:?}")]
    InvalidBoard(String),
}

static BOARD_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Board\s*(\d*)$").expect("board label pattern"));

/// Numeric dealer code used in the md field (N=1, E=2, S=3, W=4)
pub fn dealer_code(dealer: Position) -> u8 {
    dealer as u8 + 1
}

/// Numeric vulnerability code used in the sv field
pub fn vulnerability_code(vulnerability: Vulnerability) -> u8 {
    match vulnerability {
        Vulnerability::None => 0,
        Vulnerability::NS => 1,
        Vulnerability::EW => 2,
        Vulnerability::Both => 3,
    }
}

/// Format a hand as `S<holding>H<holding>D<holding>C<holding>`.
/// Voids are left empty.
pub fn format_hand_lin(hand: &Hand) -> String {
    let mut result = String::new();
    for suit in Suit::DISPLAY_ORDER {
        result.push(suit.to_char());
        result.push_str(hand.holding(suit));
    }
    result
}

/// Encode a deal for the hand viewer.
///
/// Lists the first three hands clockwise from the dealer; the viewer
/// rebuilds the fourth from the remaining cards.
///
/// Example output:
/// ```text
/// qx|o1|md|1SAKQH432DQ98C765,SJT9HAKQD765C432,S876HJT9DAKQCJT9,|rh||ah|Board 5|sv|0|pg||
/// ```
pub fn encode(deal: &Deal) -> String {
    let hands: Vec<String> = deal.dealer().clockwise()[..3]
        .iter()
        .map(|&pos| format_hand_lin(deal.hand(pos)))
        .collect();

    format!(
        "qx|o1|md|{}{},|rh||ah|Board {}|sv|{}|pg||",
        dealer_code(deal.dealer()),
        hands.join(","),
        deal.board_number(),
        vulnerability_code(deal.vulnerability())
    )
}

/// Decode a LIN string produced by [`encode`] (or any LIN with an md field).
///
/// Hands are seated clockwise from the dealer. A missing fourth hand is
/// rebuilt from the cards nobody else holds.
pub fn parse_lin(input: &str) -> Result<Deal, LinError> {
    let tokens: Vec<&str> = input.trim().split('|').collect();

    let mut deal_field = None;
    let mut board_field = None;
    let mut vuln_field = None;
    for pair in tokens.chunks(2) {
        let value = pair.get(1).copied().unwrap_or("");
        match pair[0].trim() {
            "md" => deal_field = Some(value),
            "ah" => board_field = Some(value),
            "sv" => vuln_field = Some(value),
            _ => {}
        }
    }

    let deal_field = deal_field.ok_or(LinError::MissingDeal)?;
    let mut chars = deal_field.chars();
    let dealer = chars
        .next()
        .and_then(|c| c.to_digit(10))
        .filter(|d| (1..=4).contains(d))
        .and_then(|d| Position::from_index(d as u8 - 1))
        .ok_or_else(|| LinError::InvalidDealer(deal_field.to_string()))?;

    let listed: Vec<&str> = chars
        .as_str()
        .split(',')
        .filter(|h| !h.trim().is_empty())
        .collect();
    if listed.len() < 3 {
        return Err(LinError::TooFewHands(listed.len()));
    }

    let mut seen = [false; 52];
    let mut hands: [Hand; 4] = Default::default();
    let seats = dealer.clockwise();
    for (seat, hand_str) in seats.iter().zip(listed.iter().take(4)) {
        let cards = parse_hand_lin(hand_str)?;
        for card in &cards {
            let idx = card.to_index() as usize;
            if seen[idx] {
                return Err(LinError::DuplicateCard(format!(
                    "{}{}",
                    card.suit.to_char(),
                    card.rank.to_char()
                )));
            }
            seen[idx] = true;
        }
        hands[seat.offset()] = Hand::from_cards(&cards);
    }

    if listed.len() == 3 {
        let remaining: Vec<Card> = (0..52u8)
            .filter(|&i| !seen[i as usize])
            .filter_map(Card::from_index)
            .collect();
        hands[seats[3].offset()] = Hand::from_cards(&remaining);
    }

    let board_number = match board_field {
        Some(label) => parse_board_label(label)?,
        None => 0,
    };

    let mut deal = Deal::new(hands, dealer, board_number);
    if let Some(code) = vuln_field {
        deal = deal.with_vulnerability(parse_vulnerability_code(code)?);
    }
    Ok(deal)
}

/// Parse `SAK2H52DA8CAQT62` into cards
fn parse_hand_lin(s: &str) -> Result<Vec<Card>, LinError> {
    let mut cards = Vec::new();
    let mut suit = None;
    for c in s.trim().chars() {
        if let Some(next) = Suit::from_char(c).filter(|_| c.is_ascii_alphabetic()) {
            suit = Some(next);
            continue;
        }
        let rank = Rank::from_char(c).ok_or(LinError::InvalidCard(c))?;
        let suit = suit.ok_or(LinError::MissingSuit(c))?;
        cards.push(Card::new(suit, rank));
    }
    Ok(cards)
}

fn parse_board_label(label: &str) -> Result<u32, LinError> {
    let caps = BOARD_LABEL
        .captures(label.trim())
        .ok_or_else(|| LinError::InvalidBoard(label.to_string()))?;
    let digits = &caps[1];
    if digits.is_empty() {
        return Ok(0);
    }
    digits
        .parse()
        .map_err(|_| LinError::InvalidBoard(label.to_string()))
}

fn parse_vulnerability_code(code: &str) -> Result<Vulnerability, LinError> {
    match code.trim() {
        "0" | "o" | "O" => Ok(Vulnerability::None),
        "1" | "n" | "N" => Ok(Vulnerability::NS),
        "2" | "e" | "E" => Ok(Vulnerability::EW),
        "3" | "b" | "B" => Ok(Vulnerability::Both),
        other => Err(LinError::InvalidVulnerability(other.to_string())),
    }
}
