use chess::{Board, BoardStatus, Color};

use crate::models::{PieceColor, PieceKind};

/// Convert a chess color to our piece color
pub fn piece_color(color: Color) -> PieceColor {
    match color {
        Color::White => PieceColor::White,
        Color::Black => PieceColor::Black,
    }
}

/// Convert a chess piece to our piece kind
pub fn piece_kind(piece: chess::Piece) -> PieceKind {
    match piece {
        chess::Piece::Pawn => PieceKind::Pawn,
        chess::Piece::Knight => PieceKind::Knight,
        chess::Piece::Bishop => PieceKind::Bishop,
        chess::Piece::Rook => PieceKind::Rook,
        chess::Piece::Queen => PieceKind::Queen,
        chess::Piece::King => PieceKind::King,
    }
}

pub fn chess_piece(kind: PieceKind) -> chess::Piece {
    match kind {
        PieceKind::Pawn => chess::Piece::Pawn,
        PieceKind::Knight => chess::Piece::Knight,
        PieceKind::Bishop => chess::Piece::Bishop,
        PieceKind::Rook => chess::Piece::Rook,
        PieceKind::Queen => chess::Piece::Queen,
        PieceKind::King => chess::Piece::King,
    }
}

/// Get the position status as a string, for logs
pub fn position_status(board: &Board) -> &'static str {
    match board.status() {
        BoardStatus::Ongoing => match board.side_to_move() {
            Color::White => "white_turn",
            Color::Black => "black_turn",
        },
        BoardStatus::Checkmate => match board.side_to_move() {
            Color::White => "black_wins",
            Color::Black => "white_wins",
        },
        BoardStatus::Stalemate => "stalemate",
    }
}
