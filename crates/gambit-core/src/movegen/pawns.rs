//! Pawn move generation.

use crate::color::Color;
use crate::coord::Coord;
use crate::direction::Direction;
use crate::history::History;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

use super::{Generator, MoveKind};

/// Generate pawn advances, diagonal captures and en passant.
pub(super) fn gen_pawn(g: &mut Generator<'_>) {
    let us = g.us();
    let forward = match us {
        Color::White => Direction::North,
        Color::Black => Direction::South,
    };

    // Advances: one square, two from the starting rank, only onto empty
    // squares. The first occupied square ends the walk.
    let reach = if g.source.rank() == us.pawn_rank() { 2 } else { 1 };
    for dest in forward.ray_limited(g.source, reach) {
        if !g.board().is_empty_at(dest) {
            break;
        }
        g.push_simple(dest);
    }

    // Captures
    for d_file in [-1, 1] {
        let Some(dest) = g.source.checked_offset(us.forward(), d_file) else {
            continue;
        };
        match g.board().piece_at(dest) {
            Some(target) if target.color() != us => g.push_simple(dest),
            Some(_) => {}
            None => {
                if let Some(victim) = en_passant_victim(g.history, g.source, dest) {
                    let mut next = *g.board();
                    let captured = next.piece_at(victim);
                    next.move_piece(g.source, dest);
                    next.remove_piece(victim);
                    g.push(dest, captured, MoveKind::EnPassant, next);
                }
            }
        }
    }
}

/// Return the square of the pawn that a capture from `source` to the empty
/// square `dest` would take en passant, if that capture is allowed.
///
/// The enemy pawn must stand beside `source` on `dest`'s file, having arrived
/// there by a double step on the immediately preceding move: the previous
/// board shows it on its starting square with the landing square empty, and
/// the current board shows the starting square empty.
fn en_passant_victim(history: &History, source: Coord, dest: Coord) -> Option<Coord> {
    let board = history.current();
    let us = board.piece_at(source)?.color();
    let them = us.flip();
    if source.rank() != us.en_passant_rank() || !board.is_empty_at(dest) {
        return None;
    }

    let enemy_pawn = Piece::new(them, PieceKind::Pawn);
    let beside = Coord::new(source.rank(), dest.file());
    let origin = Coord::new(them.pawn_rank(), dest.file());
    if board.piece_at(beside) != Some(enemy_pawn) || !board.is_empty_at(origin) {
        return None;
    }

    let previous = history.previous()?;
    let double_stepped =
        previous.piece_at(origin) == Some(enemy_pawn) && previous.is_empty_at(beside);
    double_stepped.then_some(beside)
}
