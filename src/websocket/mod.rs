pub mod handler;
pub mod transport;

pub use handler::{ws_index, ChessWebSocket};
pub use transport::{RoomTransport, Transport};
