//! Game orchestration: turn order, legality, move commitment, and promotion.

use tracing::debug;

use crate::attacks;
use crate::board::Board;
use crate::color::Color;
use crate::coord::Coord;
use crate::error::{BoardError, EngineError};
use crate::history::History;
use crate::movegen::{self, Candidate, CandidateList};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::space::BoardSpace;

/// Settings that shape how an [`Engine`] plays out a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Side to move after construction and after every [`Engine::reset`].
    pub starting_color: Color,
    /// Promotion choice applied automatically when a pawn reaches its last
    /// rank. With `None` the caller must answer with [`Engine::promote`].
    pub auto_promotion: Option<PieceKind>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_color: Color::White,
            auto_promotion: None,
        }
    }
}

/// A chess game in progress.
///
/// Holds every board reached so far and whose turn it is. Moves are proposed
/// with [`Engine::legal_moves`] and committed with [`Engine::take_move`].
#[derive(Debug, Clone)]
pub struct Engine {
    history: History,
    turn: Color,
    /// Square of a pawn that reached its last rank and awaits its new kind.
    pending_promotion: Option<Coord>,
    config: EngineConfig,
}

impl Engine {
    /// Start a game from the standard starting position.
    pub fn new(config: EngineConfig) -> Engine {
        Engine {
            history: History::new(Board::starting_position()),
            turn: config.starting_color,
            pending_promotion: None,
            config,
        }
    }

    /// Start a game from an arbitrary position with `turn` to move.
    ///
    /// The board must pass [`Board::validate`].
    pub fn from_board(board: Board, turn: Color, config: EngineConfig) -> Result<Engine, BoardError> {
        board.validate()?;
        Ok(Engine {
            history: History::new(board),
            turn,
            pending_promotion: None,
            config,
        })
    }

    /// Discard the game and return to the starting position.
    pub fn reset(&mut self) {
        self.history.reset(Board::starting_position());
        self.turn = self.config.starting_color;
        self.pending_promotion = None;
        debug!(turn = %self.turn, "engine reset");
    }

    /// Legal candidates for the piece on `coord`.
    ///
    /// Empty when the square is empty, holds a piece of the side not to
    /// move, or a promotion is pending.
    pub fn legal_moves(&self, coord: Coord) -> CandidateList {
        if self.pending_promotion.is_some() {
            return CandidateList::new();
        }
        movegen::legal_moves(&self.history, self.turn, coord)
    }

    /// Legal candidates for every piece of the side to move.
    pub fn all_legal_moves(&self) -> CandidateList {
        if self.pending_promotion.is_some() {
            return CandidateList::new();
        }
        movegen::all_legal_moves(&self.history, self.turn)
    }

    /// Commit `candidate`: append its board to the history and pass the turn.
    ///
    /// Returns `Ok(true)` when the move put a pawn on its last rank and the
    /// caller must now pick a piece with [`Engine::promote`]. With an
    /// automatic promotion configured the choice is applied here and the
    /// result is `Ok(false)`.
    ///
    /// On error nothing changes. The candidate must be one that
    /// [`Engine::legal_moves`] offers for the current position.
    pub fn take_move(&mut self, candidate: Candidate) -> Result<bool, EngineError> {
        if let Some(coord) = self.pending_promotion {
            return Err(EngineError::PromotionPending { coord });
        }
        if candidate.ply() != self.history.ply() {
            return Err(EngineError::StaleCandidate {
                generated: candidate.ply(),
                current: self.history.ply(),
            });
        }
        if candidate.piece().color() != self.turn {
            return Err(EngineError::WrongTurn {
                color: candidate.piece().color(),
            });
        }
        // Must be a candidate the current position offers.
        let offered = self
            .legal_moves(candidate.source())
            .iter()
            .any(|legal| *legal == candidate);
        if !offered {
            return Err(EngineError::IllegalCandidate {
                from: candidate.source(),
                to: candidate.dest(),
            });
        }

        let promotes = candidate.is_promotion();
        if promotes
            && let Some(kind) = self.config.auto_promotion
            && !kind.is_promotion_target()
        {
            return Err(EngineError::InvalidPromotion { kind });
        }
        let dest = candidate.dest();
        debug!(mv = %candidate.to_uci(), kind = ?candidate.kind(), turn = %self.turn, "commit");
        self.history.push(candidate.into_board());
        self.turn = !self.turn;

        if !promotes {
            return Ok(false);
        }
        self.pending_promotion = Some(dest);
        match self.config.auto_promotion {
            Some(kind) => {
                self.promote(kind)?;
                Ok(false)
            }
            None => Ok(true),
        }
    }

    /// Replace the pawn awaiting promotion with a piece of `kind`.
    pub fn promote(&mut self, kind: PieceKind) -> Result<(), EngineError> {
        let coord = self.pending_promotion.ok_or(EngineError::NoPendingPromotion)?;
        if !kind.is_promotion_target() {
            return Err(EngineError::InvalidPromotion { kind });
        }

        // The turn already passed to the other side.
        let color = !self.turn;
        self.history
            .current_mut()
            .replace_piece(coord, Piece::new(color, kind));
        self.pending_promotion = None;
        debug!(%coord, ?kind, %color, "promote");
        Ok(())
    }

    /// The board after the most recent move.
    #[inline]
    pub fn current_board(&self) -> &Board {
        self.history.current()
    }

    /// Every board reached so far, oldest first.
    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Settings this engine was created with.
    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Change the automatic promotion choice for the rest of the game.
    pub fn set_auto_promotion(&mut self, kind: Option<PieceKind>) {
        self.config.auto_promotion = kind;
    }

    /// Square of the pawn awaiting promotion, if any.
    #[inline]
    pub fn pending_promotion(&self) -> Option<Coord> {
        self.pending_promotion
    }

    /// Square of `color`'s king on the current board.
    pub fn king_position(&self, color: Color) -> Coord {
        self.current_board().king_position(color)
    }

    /// Occupant of `coord` on the current board.
    #[inline]
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        self.current_board().piece_at(coord)
    }

    /// View of `coord` on the current board, `None` if off the board.
    #[inline]
    pub fn space_at(&self, coord: Coord) -> Option<BoardSpace> {
        self.current_board().space_at(coord)
    }

    /// Return `true` if `color`'s king is attacked on the current board.
    pub fn is_in_check(&self, color: Color) -> bool {
        attacks::is_in_check(self.current_board(), color)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Coord {
        Coord::from_algebraic(s).unwrap()
    }

    fn play(engine: &mut Engine, from: &str, to: &str) -> bool {
        let candidate = engine
            .legal_moves(sq(from))
            .find(sq(to))
            .cloned()
            .unwrap_or_else(|| panic!("{from}{to} is not legal"));
        engine.take_move(candidate).unwrap()
    }

    fn promotion_engine(config: EngineConfig) -> Engine {
        let board: Board = "4k3/1P6/8/8/8/8/8/4K3".parse().unwrap();
        Engine::from_board(board, Color::White, config).unwrap()
    }

    #[test]
    fn new_engine_starts_at_initial_position() {
        let engine = Engine::default();
        assert_eq!(engine.turn(), Color::White);
        assert_eq!(engine.history().len(), 1);
        assert_eq!(*engine.current_board(), Board::starting_position());
        assert_eq!(engine.king_position(Color::Black), sq("e8"));
    }

    #[test]
    fn take_move_appends_and_flips_turn() {
        let mut engine = Engine::default();
        assert!(!play(&mut engine, "e2", "e4"));
        assert_eq!(engine.turn(), Color::Black);
        assert_eq!(engine.history().len(), 2);
        assert_eq!(engine.piece_at(sq("e4")), Some(Piece::WHITE_PAWN));
        assert_eq!(engine.history().get(0), Some(&Board::starting_position()));

        play(&mut engine, "e7", "e5");
        assert_eq!(engine.turn(), Color::White);
    }

    #[test]
    fn only_side_to_move_has_moves() {
        let engine = Engine::default();
        assert!(engine.legal_moves(sq("e7")).is_empty());
        assert_eq!(engine.all_legal_moves().len(), 20);
    }

    #[test]
    fn stale_candidate_is_rejected() {
        let mut engine = Engine::default();
        let stale = engine.legal_moves(sq("d2")).find(sq("d4")).cloned().unwrap();
        play(&mut engine, "e2", "e4");
        let err = engine.take_move(stale).unwrap_err();
        assert_eq!(
            err,
            EngineError::StaleCandidate {
                generated: 0,
                current: 1
            }
        );
        assert_eq!(engine.history().len(), 2);
    }

    #[test]
    fn wrong_turn_candidate_is_rejected() {
        let mut engine = Engine::default();
        let black = movegen::pseudo_legal_moves(engine.history(), sq("g8"));
        let err = engine.take_move(black[0].clone()).unwrap_err();
        assert_eq!(err, EngineError::WrongTurn { color: Color::Black });
    }

    #[test]
    fn reset_restores_starting_state() {
        let config = EngineConfig {
            starting_color: Color::Black,
            ..EngineConfig::default()
        };
        let mut engine = Engine::new(config);
        assert_eq!(engine.turn(), Color::Black);
        play(&mut engine, "e7", "e5");
        engine.reset();
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.turn(), Color::Black);
        assert_eq!(*engine.current_board(), Board::starting_position());
    }

    #[test]
    fn from_board_rejects_invalid_position() {
        let mut board = Board::empty();
        board.set_piece(sq("e1"), Some(Piece::WHITE_KING));
        let err = Engine::from_board(board, Color::White, EngineConfig::default()).unwrap_err();
        assert_eq!(
            err,
            BoardError::InvalidKingCount {
                color: Color::Black,
                count: 0
            }
        );
    }

    #[test]
    fn promotion_waits_for_selection() {
        let mut engine = promotion_engine(EngineConfig::default());
        assert!(play(&mut engine, "b7", "b8"));
        assert_eq!(engine.pending_promotion(), Some(sq("b8")));
        assert!(engine.all_legal_moves().is_empty());
        assert!(engine.legal_moves(sq("e8")).is_empty());

        engine.promote(PieceKind::Queen).unwrap();
        assert_eq!(engine.piece_at(sq("b8")), Some(Piece::WHITE_QUEEN));
        assert_eq!(engine.pending_promotion(), None);
        assert_eq!(engine.turn(), Color::Black);
        // The new queen gives check along the back rank
        assert!(engine.is_in_check(Color::Black));
    }

    #[test]
    fn promotion_rejects_bad_kinds() {
        let mut engine = promotion_engine(EngineConfig::default());
        assert_eq!(
            engine.promote(PieceKind::Queen),
            Err(EngineError::NoPendingPromotion)
        );
        play(&mut engine, "b7", "b8");
        assert_eq!(
            engine.promote(PieceKind::King),
            Err(EngineError::InvalidPromotion {
                kind: PieceKind::King
            })
        );
        assert_eq!(
            engine.promote(PieceKind::Pawn),
            Err(EngineError::InvalidPromotion {
                kind: PieceKind::Pawn
            })
        );
        engine.promote(PieceKind::Knight).unwrap();
        assert_eq!(engine.piece_at(sq("b8")), Some(Piece::WHITE_KNIGHT));
    }

    #[test]
    fn no_move_while_promotion_pending() {
        let mut engine = promotion_engine(EngineConfig::default());
        let king_step = engine.legal_moves(sq("e1")).find(sq("d1")).cloned().unwrap();
        play(&mut engine, "b7", "b8");
        assert_eq!(
            engine.take_move(king_step),
            Err(EngineError::PromotionPending { coord: sq("b8") })
        );
    }

    #[test]
    fn auto_promotion_applies_immediately() {
        let config = EngineConfig {
            auto_promotion: Some(PieceKind::Rook),
            ..EngineConfig::default()
        };
        let mut engine = promotion_engine(config);
        assert!(!play(&mut engine, "b7", "b8"));
        assert_eq!(engine.piece_at(sq("b8")), Some(Piece::WHITE_ROOK));
        assert_eq!(engine.pending_promotion(), None);
        assert!(!engine.all_legal_moves().is_empty());
    }

    #[test]
    fn invalid_auto_promotion_leaves_game_untouched() {
        let config = EngineConfig {
            auto_promotion: Some(PieceKind::King),
            ..EngineConfig::default()
        };
        let mut engine = promotion_engine(config);
        let push = engine.legal_moves(sq("b7")).find(sq("b8")).cloned().unwrap();
        assert_eq!(
            engine.take_move(push),
            Err(EngineError::InvalidPromotion {
                kind: PieceKind::King
            })
        );
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.turn(), Color::White);
        assert_eq!(engine.pending_promotion(), None);
        assert_eq!(engine.piece_at(sq("b7")), Some(Piece::WHITE_PAWN));

        // Non-promoting moves are unaffected by the bad setting
        play(&mut engine, "e1", "d1");
        assert_eq!(engine.turn(), Color::Black);
    }

    #[test]
    fn pseudo_legal_move_exposing_king_is_rejected() {
        let board: Board = "4r2k/8/8/8/8/8/4N3/4K3".parse().unwrap();
        let mut engine = Engine::from_board(board, Color::White, EngineConfig::default()).unwrap();
        let pinned = movegen::pseudo_legal_moves(engine.history(), sq("e2"));
        let jump = pinned.find(sq("c3")).cloned().unwrap();
        assert_eq!(
            engine.take_move(jump),
            Err(EngineError::IllegalCandidate {
                from: sq("e2"),
                to: sq("c3")
            })
        );
        assert_eq!(engine.history().len(), 1);
        assert!(!engine.is_in_check(Color::White));
    }

    #[test]
    fn candidate_from_another_position_is_rejected() {
        let board: Board = "4k3/8/8/8/8/8/8/QQQQK3".parse().unwrap();
        let other = Engine::from_board(board, Color::White, EngineConfig::default()).unwrap();
        let queen_step = other.legal_moves(sq("a1")).find(sq("a2")).cloned().unwrap();

        let mut engine = Engine::default();
        assert_eq!(
            engine.take_move(queen_step),
            Err(EngineError::IllegalCandidate {
                from: sq("a1"),
                to: sq("a2")
            })
        );

        // Same piece and squares, but generated on a different board
        let board: Board = "rnbqkbnr/pppppppp/8/8/8/8/PPPP1PPP/RNBQKBNR".parse().unwrap();
        let other = Engine::from_board(board, Color::White, EngineConfig::default()).unwrap();
        let knight = other.legal_moves(sq("g1")).find(sq("f3")).cloned().unwrap();
        assert!(matches!(
            engine.take_move(knight),
            Err(EngineError::IllegalCandidate { .. })
        ));
        assert_eq!(*engine.current_board(), Board::starting_position());
    }

    #[test]
    fn space_at_reports_square_color() {
        let engine = Engine::default();
        let space = engine.space_at(sq("a1")).unwrap();
        assert_eq!(space.piece(), Some(Piece::WHITE_ROOK));
        assert!(engine.space_at(Coord::new(8, 0)).is_none());
    }
}
