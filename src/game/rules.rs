//! Rules engine seam.
//!
//! The board view never decides legality itself; it hands positions and moves
//! to a [`RulesEngine`] and renders whatever board the engine reports.

use std::str::FromStr;

use chess::{Board, ChessMove, File, Rank, Square};
use log::debug;

use crate::error::RulesError;
use crate::game::coords::Cell;
use crate::game::utils::{chess_piece, piece_color, piece_kind};
use crate::models::{BoardState, MoveMessage, Piece, PieceColor, PieceKind};

pub trait RulesEngine {
    /// Current piece placement.
    fn board(&self) -> BoardState;

    /// Apply a move to the engine's position.
    fn apply_move(&mut self, mv: &MoveMessage) -> Result<(), RulesError>;

    /// Replace the engine's position with a FEN string.
    fn load(&mut self, fen: &str) -> Result<(), RulesError>;
}

/// [`RulesEngine`] backed by the `chess` crate. Starts from the standard position.
#[derive(Debug, Clone, Default)]
pub struct ChessRules {
    board: Board,
}

impl ChessRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        let mut rules = Self::new();
        rules.load(fen)?;
        Ok(rules)
    }

    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    pub fn side_to_move(&self) -> PieceColor {
        piece_color(self.board.side_to_move())
    }

    pub fn position(&self) -> &Board {
        &self.board
    }

    fn square(name: &str) -> Result<Square, RulesError> {
        let cell = Cell::from_algebraic(name.trim())
            .map_err(|_| RulesError::InvalidSquare(name.to_string()))?;
        Ok(square_of(cell))
    }
}

fn square_of(cell: Cell) -> Square {
    Square::make_square(Rank::from_index(7 - cell.row()), File::from_index(cell.col()))
}

impl RulesEngine for ChessRules {
    fn board(&self) -> BoardState {
        let mut state = BoardState::empty();
        for cell in Cell::all() {
            let square = square_of(cell);
            if let (Some(piece), Some(color)) =
                (self.board.piece_on(square), self.board.color_on(square))
            {
                state.set(cell, Some(Piece::new(piece_kind(piece), piece_color(color))));
            }
        }
        state
    }

    fn apply_move(&mut self, mv: &MoveMessage) -> Result<(), RulesError> {
        let from = Self::square(&mv.from)?;
        let to = Self::square(&mv.to)?;

        // Promotion only means something for a pawn reaching the last rank.
        let promotes = self.board.piece_on(from) == Some(chess::Piece::Pawn)
            && matches!(to.get_rank(), Rank::First | Rank::Eighth);
        let promotion = if promotes {
            Some(chess_piece(mv.promotion.unwrap_or(PieceKind::Queen)))
        } else {
            None
        };

        let chess_move = ChessMove::new(from, to, promotion);
        if !self.board.legal(chess_move) {
            return Err(RulesError::IllegalMove {
                from: mv.from.clone(),
                to: mv.to.clone(),
            });
        }
        self.board = self.board.make_move_new(chess_move);
        debug!("Applied {} -> {}, position now {}", mv.from, mv.to, self.board);
        Ok(())
    }

    fn load(&mut self, fen: &str) -> Result<(), RulesError> {
        self.board = Board::from_str(fen.trim())
            .map_err(|_| RulesError::InvalidPosition(fen.to_string()))?;
        Ok(())
    }
}
