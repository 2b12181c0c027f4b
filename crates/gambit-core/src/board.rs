//! The board: an 8x8 grid of optional pieces plus per-square movement tracking.

use std::fmt;

use crate::color::Color;
use crate::coord::{BOARD_SIZE, Coord};
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::space::BoardSpace;

/// Back-rank piece order from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A complete snapshot of piece placement.
///
/// Boards are plain values: copying one yields an independent board, so a
/// hypothetical move applied to a copy never leaks into the original.
///
/// Equality and hashing include which pieces have moved, so two boards with
/// identical placement differ if one was reached by moving pieces there.
/// Use [`Board::same_placement`] to compare placement alone.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Occupant of each square, indexed rank-major (a1 = 0, h8 = 63).
    squares: [Option<Piece>; 64],
    /// Bit `i` is set once square `i` has been the source or target of a move.
    disturbed: u64,
}

impl Board {
    /// Return a board with no pieces on it.
    pub const fn empty() -> Board {
        Board {
            squares: [None; 64],
            disturbed: 0,
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (file, kind) in BACK_RANK.into_iter().enumerate() {
                let file = file as i8;
                board.set_piece(Coord::new(color.home_rank(), file), Some(Piece::new(color, kind)));
                board.set_piece(
                    Coord::new(color.pawn_rank(), file),
                    Some(Piece::new(color, PieceKind::Pawn)),
                );
            }
        }
        board
    }

    /// Return the piece on `coord`, or `None` for empty or off-board coordinates.
    #[inline]
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        if coord.is_on_board() {
            self.squares[coord.index()]
        } else {
            None
        }
    }

    /// Return a view of the square at `coord`, or `None` if it is off the board.
    #[inline]
    pub fn space_at(&self, coord: Coord) -> Option<BoardSpace> {
        coord
            .is_on_board()
            .then(|| BoardSpace::new(coord, self.squares[coord.index()]))
    }

    /// Iterate over all 64 squares, rank by rank from a1.
    pub fn spaces(&self) -> impl Iterator<Item = BoardSpace> + '_ {
        Coord::all().map(|coord| BoardSpace::new(coord, self.squares[coord.index()]))
    }

    /// Iterate over occupied squares and their pieces.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(|coord| self.squares[coord.index()].map(|piece| (coord, piece)))
    }

    /// Return `true` if `coord` is on the board and empty.
    #[inline]
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        coord.is_on_board() && self.squares[coord.index()].is_none()
    }

    /// Return `true` if both boards hold the same pieces on the same squares,
    /// regardless of how they got there.
    pub fn same_placement(&self, other: &Board) -> bool {
        self.squares == other.squares
    }

    /// Locate the king of `color`, if there is one.
    pub fn find_king(&self, color: Color) -> Option<Coord> {
        self.pieces()
            .find(|&(_, piece)| piece.is(color, PieceKind::King))
            .map(|(coord, _)| coord)
    }

    /// Return the square of the king for the given side.
    ///
    /// # Panics
    ///
    /// Panics if the board has no king for the given color (invalid board state).
    pub fn king_position(&self, color: Color) -> Coord {
        self.find_king(color)
            .expect("board must have a king for each side")
    }

    /// Return `true` if the occupant of `coord` has ever changed since the
    /// board was set up.
    ///
    /// For the piece standing on `coord` this answers "has it moved": a piece
    /// that never left its square sits on an undisturbed square.
    #[inline]
    pub fn has_moved(&self, coord: Coord) -> bool {
        coord.is_on_board() && self.disturbed & (1u64 << coord.index()) != 0
    }

    /// Place or clear a piece while setting up a position.
    ///
    /// Setup does not count as movement: [`Board::has_moved`] is unaffected.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is off the board.
    pub fn set_piece(&mut self, coord: Coord, piece: Option<Piece>) {
        assert!(coord.is_on_board(), "cannot place a piece on {coord}");
        self.squares[coord.index()] = piece;
    }

    /// Relocate whatever stands on `source` to `target`, emptying `source`.
    ///
    /// Performs no legality checks: whatever was on `target` is overwritten.
    #[inline]
    pub(crate) fn move_piece(&mut self, source: Coord, target: Coord) {
        debug_assert!(source.is_on_board() && target.is_on_board());
        let piece = self.squares[source.index()].take();
        self.squares[target.index()] = piece;
        self.disturbed |= (1u64 << source.index()) | (1u64 << target.index());
    }

    /// Remove the occupant of `coord` as part of a move (en passant capture).
    #[inline]
    pub(crate) fn remove_piece(&mut self, coord: Coord) {
        debug_assert!(coord.is_on_board());
        self.squares[coord.index()] = None;
        self.disturbed |= 1u64 << coord.index();
    }

    /// Swap the occupant of `coord` for `piece` as part of a move (promotion).
    #[inline]
    pub(crate) fn replace_piece(&mut self, coord: Coord, piece: Piece) {
        debug_assert!(coord.is_on_board());
        self.squares[coord.index()] = Some(piece);
        self.disturbed |= 1u64 << coord.index();
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let king_count = self
                .pieces()
                .filter(|&(_, piece)| piece.is(color, PieceKind::King))
                .count();
            if king_count != 1 {
                return Err(BoardError::InvalidKingCount {
                    color,
                    count: king_count,
                });
            }
        }

        let pawn_on_back_rank = self.pieces().find(|&(coord, piece)| {
            piece.kind() == PieceKind::Pawn && (coord.rank() == 0 || coord.rank() == BOARD_SIZE - 1)
        });
        if let Some((coord, _)) = pawn_on_back_rank {
            return Err(BoardError::PawnOnBackRank { coord });
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, rank 8 on top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for rank in (0..BOARD_SIZE).rev() {
            write!(f, "{}  ", rank + 1)?;
            for file in 0..BOARD_SIZE {
                let c = board
                    .piece_at(Coord::new(rank, file))
                    .map_or('.', Piece::symbol);
                if file < BOARD_SIZE - 1 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
