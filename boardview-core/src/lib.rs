mod card;
mod deal;
mod error;
mod hand;
mod record;
pub mod rotation;
mod vulnerability;

pub use card::{Card, Rank, Suit};
pub use deal::{Deal, Position};
pub use error::DealError;
pub use hand::{hcp_of, Hand, VOID_MARKER};
pub use record::{parse_board_date, BoardRecord};
pub use vulnerability::{SeatEmphasis, Vulnerability};
