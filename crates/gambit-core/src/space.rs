//! Read-only view of a single square.

use crate::color::Color;
use crate::coord::Coord;
use crate::piece::Piece;

/// One square of a [`Board`](crate::board::Board): where it is, its shade, and what stands on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSpace {
    coord: Coord,
    piece: Option<Piece>,
}

impl BoardSpace {
    #[inline]
    pub(crate) const fn new(coord: Coord, piece: Option<Piece>) -> BoardSpace {
        BoardSpace { coord, piece }
    }

    /// Where this square is.
    #[inline]
    pub const fn coord(&self) -> Coord {
        self.coord
    }

    /// Row of this square.
    #[inline]
    pub const fn rank(&self) -> i8 {
        self.coord.rank()
    }

    /// Column of this square.
    #[inline]
    pub const fn file(&self) -> i8 {
        self.coord.file()
    }

    /// Shade of the square itself.
    #[inline]
    pub const fn square_color(&self) -> Color {
        self.coord.square_color()
    }

    /// Occupant, if any.
    #[inline]
    pub const fn piece(&self) -> Option<Piece> {
        self.piece
    }

    /// Return `true` if no piece stands here.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.piece.is_none()
    }
}
