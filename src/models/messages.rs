use actix::Message;
use serde::{Deserialize, Serialize};

use super::piece::{PieceColor, PieceKind};
use super::role::Role;

/// A move as it travels over the transport
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MoveMessage {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PieceKind>,
}

impl MoveMessage {
    /// Move built from a drop; promotion is always to a queen.
    pub fn queening(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self { from: from.into(), to: to.into(), promotion: Some(PieceKind::Queen) }
    }
}

/// Message delivered from the game room to a session
#[derive(Message, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[rtype(result = "()")]
#[serde(tag = "message_type", content = "data")]
pub enum InboundMessage {
    #[serde(rename = "playerRole")]
    PlayerRole(PieceColor),
    #[serde(rename = "spectatorRole")]
    SpectatorRole,
    #[serde(rename = "boardState")]
    BoardState(String),
    #[serde(rename = "move")]
    Move(MoveMessage),
}

/// Message published by a session towards the game room
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "message_type", content = "data")]
pub enum OutboundMessage {
    #[serde(rename = "move")]
    Move(MoveMessage),
}

/// Drag and drop events forwarded by the browser
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "message_type", rename_all = "snake_case")]
pub enum ClientEvent {
    DragStart { row: usize, col: usize },
    DragEnd,
    Drop { row: usize, col: usize },
}

/// Frames pushed to the browser
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "message_type", rename_all = "snake_case")]
pub enum ServerEvent {
    Render { html: String, role: Option<Role> },
}
