//! Grid cells and their algebraic names.
//!
//! Row 0 is the eighth rank as seen from white, column 0 the a-file:
//! `file = 'a' + col`, `rank = 8 - row`.

use std::fmt;
use std::str::FromStr;

use crate::error::CoordError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Result<Self, CoordError> {
        if row < 8 && col < 8 {
            Ok(Self { row: row as u8, col: col as u8 })
        } else {
            Err(CoordError::OutOfRange { row, col })
        }
    }

    pub fn row(self) -> usize {
        usize::from(self.row)
    }

    pub fn col(self) -> usize {
        usize::from(self.col)
    }

    /// Light squares have an even coordinate sum.
    pub fn is_light(self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// All 64 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Cell { row, col }))
    }

    pub fn to_algebraic(self) -> String {
        let file = char::from(b'a' + self.col);
        let rank = 8 - self.row;
        format!("{}{}", file, rank)
    }

    pub fn from_algebraic(square: &str) -> Result<Self, CoordError> {
        let bad = || CoordError::BadSquare(square.to_string());
        let mut chars = square.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file.to_ascii_lowercase(), rank),
            _ => return Err(bad()),
        };
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(bad());
        }
        let col = file as u8 - b'a';
        let row = 8 - (rank as u8 - b'0');
        Ok(Self { row, col })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_algebraic())
    }
}

impl FromStr for Cell {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cell::from_algebraic(s)
    }
}

pub fn to_algebraic(row: usize, col: usize) -> Result<String, CoordError> {
    Cell::new(row, col).map(Cell::to_algebraic)
}

pub fn from_algebraic(square: &str) -> Result<(usize, usize), CoordError> {
    Cell::from_algebraic(square).map(|cell| (cell.row(), cell.col()))
}
