use actix::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use log::{debug, info, warn};
use uuid::Uuid;

use crate::game::coords::Cell;
use crate::game::rules::ChessRules;
use crate::models::{AppState, ClientEvent, InboundMessage, ServerEvent};
use crate::view::BoardView;
use crate::websocket::transport::RoomTransport;

/// WebSocket session for one browser tab, owning that tab's board view
pub struct ChessWebSocket {
    pub id: String,
    pub app_state: web::Data<AppState>,
    pub view: BoardView<ChessRules, RoomTransport>,
}

impl ChessWebSocket {
    pub fn new(id: String, app_state: web::Data<AppState>) -> Self {
        let transport = RoomTransport::new(id.clone(), app_state.clone());
        let view = BoardView::new(ChessRules::new(), transport);
        Self { id, app_state, view }
    }

    /// Push the current grid to the browser.
    fn push_render(&self, ctx: &mut ws::WebsocketContext<Self>) {
        let event = ServerEvent::Render {
            html: self.view.grid().to_html(),
            role: self.view.role(),
        };
        match serde_json::to_string(&event) {
            Ok(text) => {
                debug!("Pushing render to {}", self.id);
                ctx.text(text);
            }
            Err(e) => warn!("Failed to serialize render for {}: {}", self.id, e),
        }
    }

    /// Parse a browser frame and apply it; malformed frames are logged and dropped.
    fn handle_text(&mut self, text: &str) {
        match serde_json::from_str::<ClientEvent>(text) {
            Ok(event) => {
                debug!("Client event from {}: {:?}", self.id, event);
                self.handle_client_event(event);
            }
            Err(e) => warn!("Error parsing client event from {}: {}", self.id, e),
        }
    }

    fn handle_client_event(&mut self, event: ClientEvent) {
        match event {
            ClientEvent::DragStart { row, col } => match Cell::new(row, col) {
                Ok(cell) => {
                    self.view.on_drag_start(cell);
                }
                Err(e) => warn!("Drag start from {} ignored: {}", self.id, e),
            },
            ClientEvent::DragEnd => self.view.on_drag_end(),
            ClientEvent::Drop { row, col } => {
                let cell = match Cell::new(row, col) {
                    Ok(cell) => cell,
                    Err(e) => {
                        warn!("Drop from {} ignored: {}", self.id, e);
                        return;
                    }
                };
                if let Err(e) = self.view.on_drop(cell) {
                    warn!("Could not publish move from {}: {}", self.id, e);
                }
            }
        }
    }
}

impl Actor for ChessWebSocket {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!("WebSocket connection started: {}", self.id);
        self.push_render(ctx);
        // Role and position arrive through our own mailbox right after this.
        self.app_state.connect(&self.id, ctx.address().recipient());
    }

    fn stopping(&mut self, _: &mut Self::Context) -> Running {
        self.app_state.disconnect(&self.id);
        info!("WebSocket connection closed: {}", self.id);
        Running::Stop
    }
}

impl Handler<InboundMessage> for ChessWebSocket {
    type Result = ();

    fn handle(&mut self, msg: InboundMessage, ctx: &mut Self::Context) {
        debug!("Session {} received {:?}", self.id, msg);
        match self.view.on_inbound(msg) {
            Ok(()) => self.push_render(ctx),
            Err(e) => warn!("Rules engine rejected update for {}: {}", self.id, e),
        }
    }
}

// WebSocket message handler
impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for ChessWebSocket {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(msg)) => {
                ctx.pong(&msg);
            }
            Ok(ws::Message::Pong(_)) => {}
            Ok(ws::Message::Text(text)) => self.handle_text(&text),
            Ok(ws::Message::Binary(_)) => {
                warn!("Binary messages are not supported");
            }
            Ok(ws::Message::Close(reason)) => {
                info!("Connection closed: {:?}", reason);
                ctx.close(reason);
                ctx.stop();
            }
            _ => {
                ctx.stop();
            }
        }
    }
}

/// WebSocket connection handler
pub async fn ws_index(
    req: HttpRequest,
    stream: web::Payload,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let id = Uuid::new_v4().to_string();
    info!("New WebSocket connection: {}", id);
    ws::start(ChessWebSocket::new(id, app_state), &req, stream)
}
