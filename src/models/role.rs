use serde::{Deserialize, Serialize};

use super::piece::PieceColor;

/// Seat a session holds in the game.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    White,
    Black,
    Spectator,
}

impl Role {
    pub fn from_color(color: PieceColor) -> Self {
        match color {
            PieceColor::White => Role::White,
            PieceColor::Black => Role::Black,
        }
    }

    pub fn color(self) -> Option<PieceColor> {
        match self {
            Role::White => Some(PieceColor::White),
            Role::Black => Some(PieceColor::Black),
            Role::Spectator => None,
        }
    }

    /// A role may drag only its own pieces; spectators drag nothing.
    pub fn can_drag(self, color: PieceColor) -> bool {
        self.color() == Some(color)
    }
}
