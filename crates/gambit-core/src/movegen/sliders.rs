//! Sliding piece (bishop, rook, queen) move generation.

use crate::coord::BOARD_SIZE;
use crate::direction::{Direction, first_occupant};

use super::Generator;

/// Generate slider moves along each of `directions`.
///
/// Each ray yields the empty squares up to the first occupied one, then that
/// square too if it holds an enemy piece.
pub(super) fn gen_slider(g: &mut Generator<'_>, directions: &[Direction]) {
    for &direction in directions {
        let blocker = first_occupant(g.board(), g.source, direction);
        let open = match blocker {
            Some((coord, _)) => g.source.distance(coord) - 1,
            None => BOARD_SIZE as u8,
        };

        for dest in direction.ray_limited(g.source, open) {
            g.push_simple(dest);
        }

        if let Some((coord, piece)) = blocker
            && piece.color() != g.us()
        {
            g.push_simple(coord);
        }
    }
}
