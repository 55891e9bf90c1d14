pub mod app_state;
pub mod board_state;
pub mod game_room;
pub mod messages;
pub mod piece;
pub mod role;

// Re-export important types
pub use app_state::*;
pub use board_state::*;
pub use game_room::*;
pub use messages::*;
pub use piece::*;
pub use role::*;
