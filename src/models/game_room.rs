use log::info;

use crate::error::MoveRejected;
use crate::game::rules::{ChessRules, RulesEngine};
use crate::game::utils::position_status;
use crate::models::{MoveMessage, PieceColor, Role};

/// Seats and position for the single shared game
#[derive(Debug, Clone, Default)]
pub struct GameRoom {
    pub rules: ChessRules,
    pub white_player: Option<String>,
    pub black_player: Option<String>,
}

impl GameRoom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat a session: white first, then black, then spectator.
    pub fn join(&mut self, id: &str) -> Role {
        if let Some(role) = self.role_of(id) {
            return role;
        }
        if self.white_player.is_none() {
            info!("Assigning {} as white", id);
            self.white_player = Some(id.to_string());
            Role::White
        } else if self.black_player.is_none() {
            info!("Assigning {} as black", id);
            self.black_player = Some(id.to_string());
            Role::Black
        } else {
            info!("Game is full, {} joins as spectator", id);
            Role::Spectator
        }
    }

    /// Free whatever seat `id` held.
    pub fn leave(&mut self, id: &str) {
        if self.white_player.as_deref() == Some(id) {
            info!("Removing {} as white", id);
            self.white_player = None;
        }
        if self.black_player.as_deref() == Some(id) {
            info!("Removing {} as black", id);
            self.black_player = None;
        }
    }

    pub fn role_of(&self, id: &str) -> Option<Role> {
        if self.white_player.as_deref() == Some(id) {
            Some(Role::White)
        } else if self.black_player.as_deref() == Some(id) {
            Some(Role::Black)
        } else {
            None
        }
    }

    /// Apply a move for `id` and return the resulting FEN.
    pub fn play(&mut self, id: &str, mv: &MoveMessage) -> Result<String, MoveRejected> {
        let color = match self.role_of(id) {
            Some(Role::White) => PieceColor::White,
            Some(Role::Black) => PieceColor::Black,
            Some(Role::Spectator) | None => return Err(MoveRejected::Spectator(id.to_string())),
        };
        if self.rules.side_to_move() != color {
            return Err(MoveRejected::NotYourTurn);
        }

        self.rules.apply_move(mv)?;
        info!(
            "Move {} -> {} played, status {}",
            mv.from,
            mv.to,
            position_status(self.rules.position())
        );
        Ok(self.rules.fen())
    }
}
