use log::{debug, info};

use crate::error::{RulesError, TransportError};
use crate::game::coords::Cell;
use crate::game::rules::RulesEngine;
use crate::models::{InboundMessage, MoveMessage, OutboundMessage, Role};
use crate::view::render::RenderedBoard;
use crate::websocket::transport::Transport;

/// Board controller for one client.
///
/// Owns the role, the in-flight drag and the last rendered grid. Board
/// contents always come from the rules engine; moves always leave through
/// the transport, unchecked.
pub struct BoardView<R, T> {
    rules: R,
    transport: T,
    role: Option<Role>,
    pending_drag: Option<Cell>,
    grid: RenderedBoard,
}

impl<R: RulesEngine, T: Transport> BoardView<R, T> {
    pub fn new(rules: R, transport: T) -> Self {
        let grid = RenderedBoard::build(&rules.board(), None);
        Self { rules, transport, role: None, pending_drag: None, grid }
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn pending_drag(&self) -> Option<Cell> {
        self.pending_drag
    }

    pub fn grid(&self) -> &RenderedBoard {
        &self.grid
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Rebuild the grid from the engine's board and the current role.
    pub fn render(&mut self) {
        self.grid = RenderedBoard::build(&self.rules.board(), self.role);
        debug!("Rendered board with {} draggable pieces", self.grid.draggable_count());
    }

    /// Start a drag from `cell`. Only draggable pieces can be picked up.
    pub fn on_drag_start(&mut self, cell: Cell) -> bool {
        let draggable = self.grid.square(cell).piece.as_ref().map_or(false, |p| p.draggable);
        if draggable {
            self.pending_drag = Some(cell);
        } else {
            debug!("Ignoring drag from {}: nothing draggable there", cell);
        }
        draggable
    }

    pub fn on_drag_end(&mut self) {
        self.pending_drag = None;
    }

    /// Publish a move from the pending drag to `target`.
    ///
    /// Returns the published move, or `None` when no drag is in progress.
    pub fn on_drop(&mut self, target: Cell) -> Result<Option<MoveMessage>, TransportError> {
        let Some(source) = self.pending_drag else {
            debug!("Drop on {} without a drag in progress", target);
            return Ok(None);
        };

        let mv = MoveMessage::queening(source.to_algebraic(), target.to_algebraic());
        info!("Publishing move {} -> {}", mv.from, mv.to);
        self.transport.emit(OutboundMessage::Move(mv.clone()))?;
        Ok(Some(mv))
    }

    /// Apply a message from the game room and re-render.
    ///
    /// Rules engine failures are returned untouched and skip the re-render.
    pub fn on_inbound(&mut self, message: InboundMessage) -> Result<(), RulesError> {
        match message {
            InboundMessage::PlayerRole(color) => {
                self.role = Some(Role::from_color(color));
            }
            InboundMessage::SpectatorRole => {
                self.role = Some(Role::Spectator);
            }
            InboundMessage::BoardState(fen) => {
                self.rules.load(&fen)?;
            }
            InboundMessage::Move(mv) => {
                self.rules.apply_move(&mv)?;
            }
        }
        self.render();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::game::rules::ChessRules;
    use crate::models::{BoardState, Piece, PieceColor, PieceKind};

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[derive(Default)]
    struct RecordingTransport {
        sent: Vec<OutboundMessage>,
        detached: bool,
    }

    impl Transport for RecordingTransport {
        fn emit(&mut self, message: OutboundMessage) -> Result<(), TransportError> {
            if self.detached {
                return Err(TransportError::Detached("test".into()));
            }
            self.sent.push(message);
            Ok(())
        }
    }

    /// Engine that records what it was asked to do and fails on request.
    #[derive(Default)]
    struct FakeRules {
        board: BoardState,
        loaded: Vec<String>,
        applied: Vec<MoveMessage>,
        fail: bool,
    }

    impl RulesEngine for FakeRules {
        fn board(&self) -> BoardState {
            self.board
        }

        fn apply_move(&mut self, mv: &MoveMessage) -> Result<(), RulesError> {
            if self.fail {
                return Err(RulesError::IllegalMove { from: mv.from.clone(), to: mv.to.clone() });
            }
            self.applied.push(mv.clone());
            Ok(())
        }

        fn load(&mut self, fen: &str) -> Result<(), RulesError> {
            if self.fail {
                return Err(RulesError::InvalidPosition(fen.to_string()));
            }
            self.loaded.push(fen.to_string());
            Ok(())
        }
    }

    fn cell(row: usize, col: usize) -> Cell {
        Cell::new(row, col).unwrap()
    }

    fn chess_view() -> BoardView<ChessRules, RecordingTransport> {
        BoardView::new(ChessRules::new(), RecordingTransport::default())
    }

    fn draggable_colors(view: &BoardView<ChessRules, RecordingTransport>) -> Vec<PieceColor> {
        view.grid().pieces().filter(|(_, p)| p.draggable).map(|(_, p)| p.piece.color).collect()
    }

    #[test]
    fn new_view_renders_start_position_without_role() {
        let view = chess_view();
        assert_eq!(view.role(), None);
        assert_eq!(view.grid().pieces().count(), 32);
        assert_eq!(view.grid().draggable_count(), 0);
    }

    #[test]
    fn players_drag_only_their_own_pieces() {
        for color in [PieceColor::White, PieceColor::Black] {
            let mut view = chess_view();
            view.on_inbound(InboundMessage::PlayerRole(color)).unwrap();
            let draggable = draggable_colors(&view);
            assert_eq!(draggable.len(), 16);
            assert!(draggable.iter().all(|&c| c == color));
        }
    }

    #[test]
    fn spectator_drags_nothing() {
        let mut view = chess_view();
        view.on_inbound(InboundMessage::SpectatorRole).unwrap();
        assert_eq!(view.role(), Some(Role::Spectator));
        assert_eq!(view.grid().draggable_count(), 0);
    }

    #[test]
    fn render_is_idempotent() {
        let mut view = chess_view();
        view.on_inbound(InboundMessage::PlayerRole(PieceColor::White)).unwrap();
        view.render();
        let first = view.grid().clone();
        view.render();
        assert_eq!(view.grid(), &first);
        assert_eq!(view.grid().to_html(), first.to_html());
    }

    #[test]
    fn drag_and_drop_publishes_queening_move() {
        let mut view = chess_view();
        view.on_inbound(InboundMessage::PlayerRole(PieceColor::White)).unwrap();

        assert!(view.on_drag_start(cell(6, 4)));
        let mv = view.on_drop(cell(4, 4)).unwrap();

        let expected = MoveMessage::queening("e2", "e4");
        assert_eq!(mv, Some(expected.clone()));
        assert_eq!(view.transport().sent, vec![OutboundMessage::Move(expected)]);
    }

    #[test]
    fn drop_without_drag_is_a_no_op() {
        let mut view = chess_view();
        view.on_inbound(InboundMessage::PlayerRole(PieceColor::White)).unwrap();
        assert_eq!(view.on_drop(cell(4, 4)).unwrap(), None);
        assert!(view.transport().sent.is_empty());
    }

    #[test]
    fn drag_end_clears_pending_drag() {
        let mut view = chess_view();
        view.on_inbound(InboundMessage::PlayerRole(PieceColor::White)).unwrap();
        view.on_drag_start(cell(6, 4));
        assert_eq!(view.pending_drag(), Some(cell(6, 4)));

        view.on_drag_end();
        assert_eq!(view.pending_drag(), None);
        assert_eq!(view.on_drop(cell(4, 4)).unwrap(), None);
        assert!(view.transport().sent.is_empty());
    }

    #[test]
    fn cannot_pick_up_opponent_or_empty_square() {
        let mut view = chess_view();
        view.on_inbound(InboundMessage::PlayerRole(PieceColor::White)).unwrap();
        assert!(!view.on_drag_start(cell(1, 4)));
        assert!(!view.on_drag_start(cell(4, 4)));
        assert_eq!(view.pending_drag(), None);
    }

    #[test]
    fn drop_is_never_validated_locally() {
        let mut view = chess_view();
        view.on_inbound(InboundMessage::PlayerRole(PieceColor::White)).unwrap();
        view.on_drag_start(cell(7, 0));
        let mv = view.on_drop(cell(0, 7)).unwrap();
        assert_eq!(mv, Some(MoveMessage::queening("a1", "h8")));
        // Nothing was applied locally; the board only changes on inbound messages.
        assert_eq!(view.grid().pieces().count(), 32);
    }

    #[test]
    fn detached_transport_surfaces_error() {
        let transport = RecordingTransport { detached: true, ..Default::default() };
        let mut view = BoardView::new(ChessRules::new(), transport);
        view.on_inbound(InboundMessage::PlayerRole(PieceColor::White)).unwrap();
        view.on_drag_start(cell(6, 4));
        assert!(view.on_drop(cell(4, 4)).is_err());
    }

    #[test]
    fn board_state_renders_standard_start() {
        let mut view = BoardView::new(
            ChessRules::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap(),
            RecordingTransport::default(),
        );
        assert_eq!(view.grid().pieces().count(), 2);

        view.on_inbound(InboundMessage::BoardState(START_FEN.to_string())).unwrap();

        let grid = view.grid();
        assert_eq!(grid.pieces().count(), 32);
        assert_eq!(grid.pieces().filter(|(_, p)| p.piece.color == PieceColor::White).count(), 16);
        assert_eq!(grid.pieces().filter(|(_, p)| p.piece.color == PieceColor::Black).count(), 16);
        let home_rows = [
            (0, PieceColor::Black),
            (1, PieceColor::Black),
            (6, PieceColor::White),
            (7, PieceColor::White),
        ];
        for (row, color) in home_rows {
            for col in 0..8 {
                let piece = grid.square(cell(row, col)).piece.as_ref().map(|p| p.piece.color);
                assert_eq!(piece, Some(color), "cell ({}, {})", row, col);
            }
        }
        let kind_at = |row, col| grid.square(cell(row, col)).piece.as_ref().map(|p| p.piece.kind);
        assert_eq!(kind_at(7, 3), Some(PieceKind::Queen));
        assert_eq!(kind_at(0, 4), Some(PieceKind::King));
    }

    #[test]
    fn inbound_move_is_applied_and_rendered() {
        let mut view = chess_view();
        view.on_inbound(InboundMessage::Move(MoveMessage::queening("e2", "e4"))).unwrap();
        assert!(view.grid().square(cell(6, 4)).piece.is_none());
        assert_eq!(
            view.grid().square(cell(4, 4)).piece.as_ref().map(|p| p.piece),
            Some(Piece::new(PieceKind::Pawn, PieceColor::White))
        );
    }

    #[test]
    fn orientation_follows_role() {
        let mut view = chess_view();
        view.on_inbound(InboundMessage::PlayerRole(PieceColor::Black)).unwrap();
        assert!(view.grid().is_flipped());
        view.on_inbound(InboundMessage::PlayerRole(PieceColor::White)).unwrap();
        assert!(!view.grid().is_flipped());
        view.on_inbound(InboundMessage::PlayerRole(PieceColor::Black)).unwrap();
        view.on_inbound(InboundMessage::SpectatorRole).unwrap();
        assert!(!view.grid().is_flipped());
    }

    #[test]
    fn inbound_messages_pass_straight_to_the_engine() {
        let mut view = BoardView::new(FakeRules::default(), RecordingTransport::default());
        let mv = MoveMessage { from: "zz".into(), to: "e4".into(), promotion: None };
        view.on_inbound(InboundMessage::Move(mv.clone())).unwrap();
        view.on_inbound(InboundMessage::BoardState("anything".into())).unwrap();
        assert_eq!(view.rules().applied, vec![mv]);
        assert_eq!(view.rules().loaded, vec!["anything".to_string()]);
    }

    #[test]
    fn engine_failure_is_returned_unchanged() {
        let rules = FakeRules { fail: true, ..Default::default() };
        let mut view = BoardView::new(rules, RecordingTransport::default());
        let err = view
            .on_inbound(InboundMessage::Move(MoveMessage::queening("e2", "e5")))
            .unwrap_err();
        assert_eq!(err, RulesError::IllegalMove { from: "e2".into(), to: "e5".into() });
        let err = view.on_inbound(InboundMessage::BoardState("bad".into())).unwrap_err();
        assert_eq!(err, RulesError::InvalidPosition("bad".into()));
    }
}
