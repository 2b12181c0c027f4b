//! Castling generation.

use crate::attacks::is_threatened;
use crate::coord::Coord;
use crate::direction::Direction;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

use super::{Generator, MoveKind};

/// File the king starts on.
const KING_FILE: i8 = 4;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// File of the rook that castles on this side.
    #[inline]
    pub const fn rook_file(self) -> i8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// Direction from the king toward this side's rook.
    #[inline]
    const fn direction(self) -> Direction {
        match self {
            CastleSide::KingSide => Direction::East,
            CastleSide::QueenSide => Direction::West,
        }
    }
}

/// Generate castling moves for a king standing on `g.source`.
///
/// Requires an unmoved king on its home square that is not in check, an
/// unmoved rook of the same color in the corner, and every square strictly
/// between them empty and unattacked. The king's destination always lies
/// between the two, so it is covered by the same test.
pub(super) fn gen_castling(g: &mut Generator<'_>) {
    let us = g.us();
    let them = us.flip();
    let home = Coord::new(us.home_rank(), KING_FILE);
    if g.source != home || g.board().has_moved(home) {
        return;
    }
    if is_threatened(g.board(), home, them) {
        return;
    }

    for side in CastleSide::ALL {
        let rook_sq = Coord::new(us.home_rank(), side.rook_file());
        let rook = Piece::new(us, PieceKind::Rook);
        if g.board().piece_at(rook_sq) != Some(rook) || g.board().has_moved(rook_sq) {
            continue;
        }

        let direction = side.direction();
        let path_is_safe = direction
            .ray(home)
            .take_while(|&coord| coord != rook_sq)
            .all(|coord| g.board().is_empty_at(coord) && !is_threatened(g.board(), coord, them));
        if !path_is_safe {
            continue;
        }

        let (_, step) = direction.delta();
        let king_dest = home.offset(0, 2 * step);
        let rook_dest = king_dest.offset(0, -step);

        let mut next = *g.board();
        next.move_piece(rook_sq, rook_dest);
        next.move_piece(home, king_dest);
        g.push(king_dest, None, MoveKind::Castling(side), next);
    }
}

#[cfg(test)]
mod tests {
    use super::CastleSide;
    use crate::board::Board;
    use crate::color::Color;
    use crate::coord::Coord;
    use crate::history::History;
    use crate::movegen::{MoveKind, legal_moves, pseudo_legal_moves};
    use crate::piece::Piece;

    fn sq(s: &str) -> Coord {
        Coord::from_algebraic(s).unwrap()
    }

    fn castles(placement: &str, king: &str) -> Vec<CastleSide> {
        let h = History::new(placement.parse().unwrap());
        pseudo_legal_moves(&h, sq(king))
            .iter()
            .filter_map(|c| match c.kind() {
                MoveKind::Castling(side) => Some(side),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn both_sides_available_when_clear() {
        let sides = castles("r3k2r/8/8/8/8/8/8/R3K2R", "e1");
        assert_eq!(sides, vec![CastleSide::KingSide, CastleSide::QueenSide]);
        let sides = castles("r3k2r/8/8/8/8/8/8/R3K2R", "e8");
        assert_eq!(sides, vec![CastleSide::KingSide, CastleSide::QueenSide]);
    }

    #[test]
    fn kingside_result_places_king_and_rook() {
        let h = History::new("4k3/8/8/8/8/8/8/4K2R".parse().unwrap());
        let list = legal_moves(&h, Color::White, sq("e1"));
        let castle = list.find(sq("g1")).expect("kingside castle");
        assert_eq!(castle.kind(), MoveKind::Castling(CastleSide::KingSide));
        let board = castle.board();
        assert_eq!(board.piece_at(sq("g1")), Some(Piece::WHITE_KING));
        assert_eq!(board.piece_at(sq("f1")), Some(Piece::WHITE_ROOK));
        assert_eq!(board.piece_at(sq("e1")), None);
        assert_eq!(board.piece_at(sq("h1")), None);
        assert!(board.has_moved(sq("g1")));
    }

    #[test]
    fn queenside_result_places_king_and_rook() {
        let h = History::new("r3k3/8/8/8/8/8/8/4K3".parse().unwrap());
        let list = legal_moves(&h, Color::Black, sq("e8"));
        let castle = list.find(sq("c8")).expect("queenside castle");
        assert_eq!(castle.board().piece_at(sq("c8")), Some(Piece::BLACK_KING));
        assert_eq!(castle.board().piece_at(sq("d8")), Some(Piece::BLACK_ROOK));
    }

    #[test]
    fn occupied_path_blocks_castling() {
        assert_eq!(
            castles("4k3/8/8/8/8/8/8/R2QK1NR", "e1"),
            Vec::<CastleSide>::new()
        );
        assert_eq!(castles("4k3/8/8/8/8/8/8/RN2K2R", "e1"), vec![CastleSide::KingSide]);
    }

    #[test]
    fn attacked_path_blocks_castling() {
        // Bishop on a6 attacks f1
        assert_eq!(castles("4k3/8/b7/8/8/8/8/R3K2R", "e1"), vec![CastleSide::QueenSide]);
        // Rook on b8 attacks b1, which lies between king and rook
        assert_eq!(castles("1r2k3/8/8/8/8/8/8/R3K2R", "e1"), vec![CastleSide::KingSide]);
    }

    #[test]
    fn no_castling_out_of_check() {
        assert!(castles("4r2k/8/8/8/8/8/8/R3K2R", "e1").is_empty());
    }

    #[test]
    fn no_castling_into_check() {
        // Rook on g8 attacks the kingside destination
        assert_eq!(castles("4k1r1/8/8/8/8/8/8/R3K2R", "e1"), vec![CastleSide::QueenSide]);
    }

    #[test]
    fn moved_rook_or_king_forbids_castling() {
        let mut board: Board = "4k3/8/8/8/8/8/8/R3K2R".parse().unwrap();
        board.move_piece(sq("h1"), sq("h2"));
        board.move_piece(sq("h2"), sq("h1"));
        let h = History::new(board);
        let sides: Vec<_> = pseudo_legal_moves(&h, sq("e1"))
            .iter()
            .filter(|c| c.is_castle())
            .map(|c| c.dest())
            .collect();
        assert_eq!(sides, vec![sq("c1")]);

        let mut board: Board = "4k3/8/8/8/8/8/8/R3K2R".parse().unwrap();
        board.move_piece(sq("e1"), sq("e2"));
        board.move_piece(sq("e2"), sq("e1"));
        let h = History::new(board);
        assert!(pseudo_legal_moves(&h, sq("e1")).iter().all(|c| !c.is_castle()));
    }

    #[test]
    fn enemy_rook_in_corner_does_not_castle() {
        assert!(castles("4k3/8/8/8/8/8/8/r3K2r", "e1").is_empty());
    }
}
