use thiserror::Error;

/// Failures reported by a rules engine when loading a position or applying a move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    #[error("invalid position: {0}")]
    InvalidPosition(String),
    #[error("invalid square: {0}")]
    InvalidSquare(String),
    #[error("illegal move {from}-{to}")]
    IllegalMove { from: String, to: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("session {0} is no longer attached to the game room")]
    Detached(String),
}

/// Why the game room refused to relay a move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveRejected {
    #[error("session {0} holds no seat")]
    Spectator(String),
    #[error("not your turn")]
    NotYourTurn,
    #[error(transparent)]
    Rules(#[from] RulesError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    #[error("cell ({row}, {col}) is off the board")]
    OutOfRange { row: usize, col: usize },
    #[error("not an algebraic square: {0:?}")]
    BadSquare(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid bind address {value:?} in {var}")]
    InvalidBindAddr { var: &'static str, value: String },
}
