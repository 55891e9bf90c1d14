use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    #[serde(rename = "w")]
    White,
    #[serde(rename = "b")]
    Black,
}

impl PieceColor {
    /// CSS class name for pieces of this color.
    pub fn class_name(self) -> &'static str {
        match self {
            PieceColor::White => "white",
            PieceColor::Black => "black",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    #[serde(rename = "p")]
    Pawn,
    #[serde(rename = "n")]
    Knight,
    #[serde(rename = "b")]
    Bishop,
    #[serde(rename = "r")]
    Rook,
    #[serde(rename = "q")]
    Queen,
    #[serde(rename = "k")]
    King,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

impl Piece {
    pub fn new(kind: PieceKind, color: PieceColor) -> Self {
        Self { kind, color }
    }

    /// Unicode chess glyph, outlined for white and filled for black.
    pub fn glyph(&self) -> char {
        match (self.color, self.kind) {
            (PieceColor::White, PieceKind::King) => '\u{2654}',
            (PieceColor::White, PieceKind::Queen) => '\u{2655}',
            (PieceColor::White, PieceKind::Rook) => '\u{2656}',
            (PieceColor::White, PieceKind::Bishop) => '\u{2657}',
            (PieceColor::White, PieceKind::Knight) => '\u{2658}',
            (PieceColor::White, PieceKind::Pawn) => '\u{2659}',
            (PieceColor::Black, PieceKind::King) => '\u{265A}',
            (PieceColor::Black, PieceKind::Queen) => '\u{265B}',
            (PieceColor::Black, PieceKind::Rook) => '\u{265C}',
            (PieceColor::Black, PieceKind::Bishop) => '\u{265D}',
            (PieceColor::Black, PieceKind::Knight) => '\u{265E}',
            (PieceColor::Black, PieceKind::Pawn) => '\u{265F}',
        }
    }
}
