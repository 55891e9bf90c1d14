use std::fmt::Write;

use crate::game::coords::Cell;
use crate::models::{BoardState, Piece, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

impl Shade {
    fn class_name(self) -> &'static str {
        match self {
            Shade::Light => "light",
            Shade::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPiece {
    pub piece: Piece,
    pub glyph: char,
    pub draggable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSquare {
    pub cell: Cell,
    pub shade: Shade,
    pub piece: Option<RenderedPiece>,
}

/// The visual grid: 64 squares in row-major order plus the orientation flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBoard {
    squares: Vec<RenderedSquare>,
    flipped: bool,
}

impl RenderedBoard {
    pub fn build(board: &BoardState, role: Option<Role>) -> Self {
        let squares = board
            .iter()
            .map(|(cell, piece)| RenderedSquare {
                cell,
                shade: if cell.is_light() { Shade::Light } else { Shade::Dark },
                piece: piece.map(|piece| RenderedPiece {
                    piece,
                    glyph: piece.glyph(),
                    draggable: role.map_or(false, |role| role.can_drag(piece.color)),
                }),
            })
            .collect();

        Self { squares, flipped: role == Some(Role::Black) }
    }

    pub fn squares(&self) -> &[RenderedSquare] {
        &self.squares
    }

    pub fn square(&self, cell: Cell) -> &RenderedSquare {
        &self.squares[cell.row() * 8 + cell.col()]
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Cell, &RenderedPiece)> {
        self.squares.iter().filter_map(|sq| sq.piece.as_ref().map(|p| (sq.cell, p)))
    }

    pub fn draggable_count(&self) -> usize {
        self.pieces().filter(|(_, p)| p.draggable).count()
    }

    /// Markup for the browser. Squares carry `data-row`/`data-col` so drop
    /// targets can report where they sit in the grid.
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(64 * 96);
        html.push_str(if self.flipped {
            "<div class=\"chessboard flipped\">"
        } else {
            "<div class=\"chessboard\">"
        });
        for square in &self.squares {
            let _ = write!(
                html,
                "<div class=\"square {}\" data-row=\"{}\" data-col=\"{}\">",
                square.shade.class_name(),
                square.cell.row(),
                square.cell.col()
            );
            if let Some(piece) = &square.piece {
                let _ = write!(
                    html,
                    "<div class=\"piece {}\" draggable=\"{}\">{}</div>",
                    piece.piece.color.class_name(),
                    piece.draggable,
                    piece.glyph
                );
            }
            html.push_str("</div>");
        }
        html.push_str("</div>");
        html
    }
}
