//! Colored chess pieces.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A colored chess piece. Two pieces are equal when color and kind match.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    kind: PieceKind,
}

impl Piece {
    pub const WHITE_PAWN: Piece = Piece::new(Color::White, PieceKind::Pawn);
    pub const WHITE_KNIGHT: Piece = Piece::new(Color::White, PieceKind::Knight);
    pub const WHITE_BISHOP: Piece = Piece::new(Color::White, PieceKind::Bishop);
    pub const WHITE_ROOK: Piece = Piece::new(Color::White, PieceKind::Rook);
    pub const WHITE_QUEEN: Piece = Piece::new(Color::White, PieceKind::Queen);
    pub const WHITE_KING: Piece = Piece::new(Color::White, PieceKind::King);

    pub const BLACK_PAWN: Piece = Piece::new(Color::Black, PieceKind::Pawn);
    pub const BLACK_KNIGHT: Piece = Piece::new(Color::Black, PieceKind::Knight);
    pub const BLACK_BISHOP: Piece = Piece::new(Color::Black, PieceKind::Bishop);
    pub const BLACK_ROOK: Piece = Piece::new(Color::Black, PieceKind::Rook);
    pub const BLACK_QUEEN: Piece = Piece::new(Color::Black, PieceKind::Queen);
    pub const BLACK_KING: Piece = Piece::new(Color::Black, PieceKind::King);

    /// Create a piece from a color and a kind.
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Piece {
        Piece { color, kind }
    }

    /// Parse a placement letter: uppercase is White, lowercase is Black.
    pub fn from_symbol(c: char) -> Option<Piece> {
        let kind = PieceKind::from_symbol(c)?;
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        Some(Piece::new(color, kind))
    }

    /// Side that owns this piece.
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// What the piece is, ignoring color.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return `true` if this piece is of `color` and `kind`.
    #[inline]
    pub fn is(self, color: Color, kind: PieceKind) -> bool {
        self.color == color && self.kind == kind
    }

    /// Placement letter, the inverse of [`Piece::from_symbol`].
    #[inline]
    pub fn symbol(self) -> char {
        match self.color {
            Color::White => self.kind.symbol().to_ascii_uppercase(),
            Color::Black => self.kind.symbol(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = if self.color == Color::White { 'W' } else { 'B' };
        write!(f, "{side}{}", self.kind.symbol().to_ascii_uppercase())
    }
}
