pub mod board_view;
pub mod render;

pub use board_view::BoardView;
pub use render::{RenderedBoard, RenderedPiece, RenderedSquare, Shade};
