//! Candidate move generation and the check-safety filter.
//!
//! Every candidate carries the board that results from playing it, so
//! legality is decided by looking at that board rather than by replaying
//! the move.

mod castling;
mod king;
mod knights;
mod pawns;
mod sliders;

use tracing::trace;

use crate::attacks::is_in_check;
use crate::board::Board;
use crate::color::Color;
use crate::coord::Coord;
use crate::direction::Direction;
use crate::history::History;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

pub use self::castling::CastleSide;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::gen_slider;

/// The category of a candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// A single piece relocates, capturing whatever stood on the destination.
    Normal,
    /// A pawn captures the enemy pawn that just double-stepped past it.
    EnPassant,
    /// King and rook move together.
    Castling(CastleSide),
}

/// A pseudo-legal move together with the board it produces.
#[derive(Clone, PartialEq, Eq)]
pub struct Candidate {
    source: Coord,
    dest: Coord,
    piece: Piece,
    captured: Option<Piece>,
    kind: MoveKind,
    board: Board,
    /// History ply this candidate was generated at.
    ply: usize,
}

impl Candidate {
    /// Square the moving piece starts on.
    #[inline]
    pub fn source(&self) -> Coord {
        self.source
    }

    /// Destination of the moving piece (the king's square for castling).
    #[inline]
    pub fn dest(&self) -> Coord {
        self.dest
    }

    /// The piece that moves.
    #[inline]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// The piece removed from the board by this move, if any.
    #[inline]
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }

    /// Whether this is a plain move, en passant, or castling.
    #[inline]
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    /// The board after this move.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// History ply this candidate was generated for.
    #[inline]
    pub fn ply(&self) -> usize {
        self.ply
    }

    /// Return `true` if an enemy piece leaves the board.
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Return `true` for either castling move.
    #[inline]
    pub fn is_castle(&self) -> bool {
        matches!(self.kind, MoveKind::Castling(_))
    }

    /// Return `true` for an en passant capture.
    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.kind == MoveKind::EnPassant
    }

    /// Return `true` if a pawn reaches its last rank and must be promoted.
    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.piece.kind() == PieceKind::Pawn && self.dest.rank() == self.piece.color().promotion_rank()
    }

    /// Coordinate notation such as `e2e4`.
    pub fn to_uci(&self) -> String {
        format!("{}{}", self.source, self.dest)
    }

    pub(crate) fn into_board(self) -> Board {
        self.board
    }
}

impl std::fmt::Debug for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Candidate({:?} {}", self.piece, self.to_uci())?;
        match self.kind {
            MoveKind::Normal => {}
            MoveKind::EnPassant => write!(f, " e.p.")?,
            MoveKind::Castling(side) => write!(f, " {side:?}")?,
        }
        write!(f, ")")
    }
}

/// Growable buffer of generated candidates.
#[derive(Debug, Clone, Default)]
pub struct CandidateList {
    candidates: Vec<Candidate>,
}

impl CandidateList {
    /// Create an empty list.
    pub fn new() -> CandidateList {
        CandidateList {
            candidates: Vec::new(),
        }
    }

    /// Append a candidate.
    #[inline]
    pub fn push(&mut self, candidate: Candidate) {
        self.candidates.push(candidate);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The candidates in generation order.
    #[inline]
    pub fn as_slice(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Iterate over the candidates in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    /// Return the candidate moving to `dest`, if any.
    ///
    /// Castling is found by the king's destination.
    pub fn find(&self, dest: Coord) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.dest == dest)
    }

    /// Keep only the candidates for which `keep` holds.
    pub fn retain(&mut self, keep: impl FnMut(&Candidate) -> bool) {
        self.candidates.retain(keep);
    }

    pub(crate) fn extend(&mut self, other: CandidateList) {
        self.candidates.extend(other.candidates);
    }
}

impl std::ops::Index<usize> for CandidateList {
    type Output = Candidate;
    #[inline]
    fn index(&self, index: usize) -> &Candidate {
        &self.candidates[index]
    }
}

impl<'a> IntoIterator for &'a CandidateList {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;
    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

impl IntoIterator for CandidateList {
    type Item = Candidate;
    type IntoIter = std::vec::IntoIter<Candidate>;
    fn into_iter(self) -> Self::IntoIter {
        self.candidates.into_iter()
    }
}

/// Shared state for the per-piece generators: the position, the moving piece,
/// and where to put results.
pub(super) struct Generator<'a> {
    history: &'a History,
    source: Coord,
    piece: Piece,
    list: &'a mut CandidateList,
}

impl Generator<'_> {
    #[inline]
    fn board(&self) -> &Board {
        self.history.current()
    }

    #[inline]
    fn us(&self) -> Color {
        self.piece.color()
    }

    /// Return `true` if `coord` holds a piece of the moving side.
    #[inline]
    fn is_friendly(&self, coord: Coord) -> bool {
        self.board()
            .piece_at(coord)
            .is_some_and(|p| p.color() == self.us())
    }

    /// Push a single-piece move from the source to `dest`.
    fn push_simple(&mut self, dest: Coord) {
        let mut next = *self.board();
        let captured = next.piece_at(dest);
        next.move_piece(self.source, dest);
        self.push(dest, captured, MoveKind::Normal, next);
    }

    fn push(&mut self, dest: Coord, captured: Option<Piece>, kind: MoveKind, board: Board) {
        self.list.push(Candidate {
            source: self.source,
            dest,
            piece: self.piece,
            captured,
            kind,
            board,
            ply: self.history.ply(),
        });
    }
}

/// Generate every pseudo-legal candidate for the piece on `source`.
///
/// Pseudo-legal means the move follows the piece's movement pattern (king
/// moves and castling are additionally kept off attacked squares) but may
/// still leave the mover's king in check. An empty square yields nothing.
pub fn pseudo_legal_moves(history: &History, source: Coord) -> CandidateList {
    let mut list = CandidateList::new();
    let Some(piece) = history.current().piece_at(source) else {
        return list;
    };

    let mut generator = Generator {
        history,
        source,
        piece,
        list: &mut list,
    };
    match piece.kind() {
        PieceKind::Pawn => gen_pawn(&mut generator),
        PieceKind::Knight => gen_knight(&mut generator),
        PieceKind::Bishop => gen_slider(&mut generator, &Direction::DIAGONAL),
        PieceKind::Rook => gen_slider(&mut generator, &Direction::STRAIGHT),
        PieceKind::Queen => gen_slider(&mut generator, &Direction::ALL),
        PieceKind::King => gen_king(&mut generator),
    }
    list
}

/// Generate the legal candidates for the piece on `source` when `turn` is to move.
///
/// Squares that are empty or hold a piece of the other side yield nothing.
/// A candidate is legal iff the board it produces leaves `turn`'s king
/// unattacked.
pub fn legal_moves(history: &History, turn: Color, source: Coord) -> CandidateList {
    let is_movers_piece = history
        .current()
        .piece_at(source)
        .is_some_and(|piece| piece.color() == turn);
    if !is_movers_piece {
        return CandidateList::new();
    }

    let mut list = pseudo_legal_moves(history, source);
    let generated = list.len();
    list.retain(|candidate| !is_in_check(candidate.board(), turn));
    trace!(%source, generated, legal = list.len(), "filtered candidates");
    list
}

/// Generate the legal candidates of every piece belonging to `turn`.
pub fn all_legal_moves(history: &History, turn: Color) -> CandidateList {
    let mut all = CandidateList::new();
    for (source, _) in history.current().pieces().filter(|(_, p)| p.color() == turn) {
        all.extend(legal_moves(history, turn, source));
    }
    all
}
