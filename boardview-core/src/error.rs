use thiserror::Error;

use crate::Position;

/// Errors raised while turning stored board data into a [`crate::Deal`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DealError {
    #[error("no hand stored for {0}")]
    MissingHand(Position),
    #[error("hand for {position} is not in S.H.D.C form: {input:?}")]
    InvalidHand { position: Position, input: String },
    #[error("unknown position: {0:?}")]
    UnknownPosition(String),
    #[error("unknown vulnerability: {0:?}")]
    UnknownVulnerability(String),
    #[error("unrecognised board date: {0:?}")]
    InvalidDate(String),
}
