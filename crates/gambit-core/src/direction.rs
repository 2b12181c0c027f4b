//! Ray walks in the eight compass directions, plus leaper offsets.

use crate::board::Board;
use crate::coord::{BOARD_SIZE, Coord};
use crate::piece::Piece;

/// One of the eight directions a sliding piece can travel, from White's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// Rank and file directions (rook moves).
    pub const STRAIGHT: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Diagonal directions (bishop moves).
    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// All eight directions (queen moves).
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// Return the `(d_rank, d_file)` of one step.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (1, 0),
            Direction::South => (-1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::NorthEast => (1, 1),
            Direction::NorthWest => (1, -1),
            Direction::SouthEast => (-1, 1),
            Direction::SouthWest => (-1, -1),
        }
    }

    /// Return `true` for the four bishop directions.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        let (d_rank, d_file) = self.delta();
        d_rank != 0 && d_file != 0
    }

    /// Walk from `origin` to the board edge, excluding `origin` itself.
    #[inline]
    pub fn ray(self, origin: Coord) -> Ray {
        self.ray_limited(origin, BOARD_SIZE as u8)
    }

    /// Walk at most `max_distance` steps from `origin`, stopping early at the board edge.
    #[inline]
    pub fn ray_limited(self, origin: Coord, max_distance: u8) -> Ray {
        Ray {
            current: origin,
            direction: self,
            remaining: max_distance,
        }
    }
}

/// Squares visited by stepping outward in one direction.
///
/// The walk knows nothing about pieces. It is `Clone`, so a walk can be
/// restarted from any point.
#[derive(Debug, Clone)]
pub struct Ray {
    current: Coord,
    direction: Direction,
    remaining: u8,
}

impl Iterator for Ray {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.remaining == 0 {
            return None;
        }
        let (d_rank, d_file) = self.direction.delta();
        let next = self.current.checked_offset(d_rank, d_file)?;
        self.current = next;
        self.remaining -= 1;
        Some(next)
    }
}

/// The eight `(d_rank, d_file)` jumps of a knight.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// The eight single steps of a king.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// On-board squares reached from `origin` by each of `offsets`.
pub fn leaps(origin: Coord, offsets: &[(i8, i8)]) -> impl Iterator<Item = Coord> + '_ {
    offsets
        .iter()
        .filter_map(move |&(d_rank, d_file)| origin.checked_offset(d_rank, d_file))
}

/// Walk from `origin` in `direction` and report the first occupied square.
///
/// Slider move generation and slider threat detection both stop at this
/// square: it is the last square a slider reaches, and the only piece a
/// slider on the far side could be blocked by.
pub fn first_occupant(board: &Board, origin: Coord, direction: Direction) -> Option<(Coord, Piece)> {
    direction
        .ray(origin)
        .find_map(|coord| board.piece_at(coord).map(|piece| (coord, piece)))
}
