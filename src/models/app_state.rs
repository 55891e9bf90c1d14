use actix::Recipient;
use log::info;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::MoveRejected;
use crate::models::{GameRoom, InboundMessage, MoveMessage, Role};

/// Application state shared between connections
#[derive(Default)]
pub struct AppState {
    pub room: Mutex<GameRoom>,
    pub sessions: Mutex<HashMap<String, Recipient<InboundMessage>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    // Lock order is always room, then sessions.
    fn room(&self) -> MutexGuard<'_, GameRoom> {
        self.room.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn sessions(&self) -> MutexGuard<'_, HashMap<String, Recipient<InboundMessage>>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a session, seat it, and send it its role and the current position.
    ///
    /// The room stays locked until the session is registered, so no relayed
    /// move can slip between the position it was sent and its first broadcast.
    pub fn connect(&self, id: &str, recipient: Recipient<InboundMessage>) -> Role {
        let mut room = self.room();
        let role = room.join(id);

        let greeting = match role.color() {
            Some(color) => InboundMessage::PlayerRole(color),
            None => InboundMessage::SpectatorRole,
        };
        recipient.do_send(greeting);
        recipient.do_send(InboundMessage::BoardState(room.rules.fen()));

        let mut sessions = self.sessions();
        sessions.insert(id.to_string(), recipient);
        info!("Session {} connected as {:?}, total active sessions: {}", id, role, sessions.len());
        role
    }

    pub fn disconnect(&self, id: &str) {
        let mut room = self.room();
        room.leave(id);
        let mut sessions = self.sessions();
        sessions.remove(id);
        info!("Session {} disconnected, total active sessions: {}", id, sessions.len());
    }

    pub fn is_connected(&self, id: &str) -> bool {
        self.sessions().contains_key(id)
    }

    /// Play a move for `id` and, if accepted, broadcast the move followed by
    /// the new position.
    ///
    /// The room lock is held through the broadcast so every session sees
    /// positions in the order they were played.
    pub fn relay_move(&self, id: &str, mv: MoveMessage) -> Result<(), MoveRejected> {
        let mut room = self.room();
        let fen = room.play(id, &mv)?;
        self.broadcast(InboundMessage::Move(mv));
        self.broadcast(InboundMessage::BoardState(fen));
        drop(room);
        Ok(())
    }

    /// Send `message` to every registered session. Never takes the room lock.
    pub fn broadcast(&self, message: InboundMessage) {
        let sessions = self.sessions();
        info!("Broadcasting {:?} to {} sessions", message, sessions.len());
        for recipient in sessions.values() {
            recipient.do_send(message.clone());
        }
    }
}
