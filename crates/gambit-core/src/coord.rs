//! Board coordinates as (rank, file) pairs.

use std::fmt;

use crate::color::Color;

/// Number of ranks (and files) on the board.
pub const BOARD_SIZE: i8 = 8;

/// A (rank, file) coordinate. Rank 0 is White's back rank, file 0 is the a-file.
///
/// Components are signed so that offsets may step off the board; only
/// coordinates for which [`Coord::is_on_board`] holds name a real square.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    rank: i8,
    file: i8,
}

impl Coord {
    /// Create a coordinate. No bounds check.
    #[inline]
    pub const fn new(rank: i8, file: i8) -> Coord {
        Coord { rank, file }
    }

    /// Row, 0 being White's back rank.
    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    /// Column, 0 being the a-file.
    #[inline]
    pub const fn file(self) -> i8 {
        self.file
    }

    /// Return `true` iff both components lie in `[0, 8)`.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.rank >= 0 && self.rank < BOARD_SIZE && self.file >= 0 && self.file < BOARD_SIZE
    }

    /// Return the coordinate shifted by `(d_rank, d_file)`, on the board or not.
    ///
    /// Components saturate at the `i8` range, which is off the board.
    #[inline]
    pub const fn offset(self, d_rank: i8, d_file: i8) -> Coord {
        Coord::new(self.rank.saturating_add(d_rank), self.file.saturating_add(d_file))
    }

    /// Return the shifted coordinate if it is still on the board.
    #[inline]
    pub const fn checked_offset(self, d_rank: i8, d_file: i8) -> Option<Coord> {
        let next = self.offset(d_rank, d_file);
        if next.is_on_board() { Some(next) } else { None }
    }

    /// King-step (Chebyshev) distance between two coordinates.
    #[inline]
    pub const fn distance(self, other: Coord) -> u8 {
        let d_rank = (self.rank as i16 - other.rank as i16).unsigned_abs();
        let d_file = (self.file as i16 - other.file as i16).unsigned_abs();
        let d = if d_rank > d_file { d_rank } else { d_file };
        if d > u8::MAX as u16 { u8::MAX } else { d as u8 }
    }

    /// Shade of the square: (0, 0) is Black and colors alternate from there.
    #[inline]
    pub const fn square_color(self) -> Color {
        if (self.rank as i16 + self.file as i16) & 1 == 0 {
            Color::Black
        } else {
            Color::White
        }
    }

    /// Row-major index 0..63 (a1 = 0, h8 = 63).
    ///
    /// # Panics
    ///
    /// Debug-asserts that the coordinate is on the board.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        debug_assert!(self.is_on_board());
        (self.rank as usize) * 8 + self.file as usize
    }

    /// Parse an algebraic square such as `"e4"`.
    pub fn from_algebraic(s: &str) -> Option<Coord> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let (file_byte, rank_byte) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        Some(Coord::new((rank_byte - b'1') as i8, (file_byte - b'a') as i8))
    }

    /// Iterate over all 64 on-board coordinates, rank by rank from a1.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|rank| (0..BOARD_SIZE).map(move |file| Coord::new(rank, file)))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let file = (b'a' + self.file as u8) as char;
            write!(f, "{}{}", file, self.rank + 1)
        } else {
            write!(f, "({}, {})", self.rank, self.file)
        }
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({})", self)
    }
}
