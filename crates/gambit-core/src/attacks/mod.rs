//! Threat detection: does a side attack a given square?

use crate::board::Board;
use crate::color::Color;
use crate::coord::Coord;
use crate::direction::{Direction, KING_OFFSETS, KNIGHT_OFFSETS, first_occupant, leaps};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

/// Return `true` if some piece of `by_color` could capture onto `target`.
///
/// Attack patterns are cast outward from `target` and matched against the
/// attacker's pieces, so whose turn it is does not matter and `target` may be
/// empty or hold a piece of either color.
pub fn is_threatened(board: &Board, target: Coord, by_color: Color) -> bool {
    knight_threat(board, target, by_color)
        || king_threat(board, target, by_color)
        || pawn_threat(board, target, by_color)
        || slider_threat(board, target, by_color)
}

/// Return `true` if `color`'s king is attacked.
///
/// # Panics
///
/// Panics if `color` has no king on the board.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    is_threatened(board, board.king_position(color), color.flip())
}

fn knight_threat(board: &Board, target: Coord, by_color: Color) -> bool {
    let knight = Piece::new(by_color, PieceKind::Knight);
    leaps(target, &KNIGHT_OFFSETS).any(|coord| board.piece_at(coord) == Some(knight))
}

fn king_threat(board: &Board, target: Coord, by_color: Color) -> bool {
    let king = Piece::new(by_color, PieceKind::King);
    leaps(target, &KING_OFFSETS).any(|coord| board.piece_at(coord) == Some(king))
}

fn pawn_threat(board: &Board, target: Coord, by_color: Color) -> bool {
    // Mirror of a capture: the attacking pawn stands one step behind the
    // target from its own side's point of view.
    let pawn = Piece::new(by_color, PieceKind::Pawn);
    let behind = -by_color.forward();
    [-1, 1].into_iter().any(|d_file| {
        target
            .checked_offset(behind, d_file)
            .is_some_and(|coord| board.piece_at(coord) == Some(pawn))
    })
}

fn slider_threat(board: &Board, target: Coord, by_color: Color) -> bool {
    Direction::ALL.into_iter().any(|direction| {
        let Some((_, piece)) = first_occupant(board, target, direction) else {
            return false;
        };
        if piece.color() != by_color {
            return false;
        }
        match piece.kind() {
            PieceKind::Queen => true,
            PieceKind::Bishop => direction.is_diagonal(),
            PieceKind::Rook => !direction.is_diagonal(),
            _ => false,
        }
    })
}
