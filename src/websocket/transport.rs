//! Outbound half of the real-time channel.
//!
//! The inbound half is the session actor's `Handler<InboundMessage>`, which
//! feeds `BoardView::on_inbound`.

use actix_web::web;
use log::info;

use crate::error::TransportError;
use crate::models::{AppState, OutboundMessage};

pub trait Transport {
    /// Publish a message to the game room.
    fn emit(&mut self, message: OutboundMessage) -> Result<(), TransportError>;
}

/// Publishes a session's messages straight into the shared game room.
pub struct RoomTransport {
    id: String,
    app_state: web::Data<AppState>,
}

impl RoomTransport {
    pub fn new(id: String, app_state: web::Data<AppState>) -> Self {
        Self { id, app_state }
    }
}

impl Transport for RoomTransport {
    fn emit(&mut self, message: OutboundMessage) -> Result<(), TransportError> {
        if !self.app_state.is_connected(&self.id) {
            return Err(TransportError::Detached(self.id.clone()));
        }
        match message {
            OutboundMessage::Move(mv) => {
                // A refused move is the room's answer, not a delivery failure.
                if let Err(e) = self.app_state.relay_move(&self.id, mv) {
                    info!("Move from {} rejected: {}", self.id, e);
                }
            }
        }
        Ok(())
    }
}
