use crate::game::coords::Cell;

use super::piece::{Piece, PieceColor};

/// 8x8 snapshot of piece placement, row 0 being rank 8 and column 0 file a.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardState {
    cells: [[Option<Piece>; 8]; 8],
}

impl BoardState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, cell: Cell) -> Option<Piece> {
        self.cells[cell.row()][cell.col()]
    }

    pub fn set(&mut self, cell: Cell, piece: Option<Piece>) {
        self.cells[cell.row()][cell.col()] = piece;
    }

    /// Row-major walk over all 64 cells.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Option<Piece>)> + '_ {
        Cell::all().map(move |cell| (cell, self.get(cell)))
    }

    pub fn count(&self, color: PieceColor) -> usize {
        self.iter().filter(|(_, piece)| piece.map_or(false, |p| p.color == color)).count()
    }
}
