//! King move generation.

use crate::attacks::is_threatened;
use crate::direction::{KING_OFFSETS, leaps};

use super::Generator;
use super::castling::gen_castling;

/// Generate single king steps plus castling.
///
/// Steps onto squares the enemy currently attacks are dropped here already;
/// the general check filter still runs on whatever survives.
pub(super) fn gen_king(g: &mut Generator<'_>) {
    let them = g.us().flip();

    for dest in leaps(g.source, &KING_OFFSETS) {
        if g.is_friendly(dest) || is_threatened(g.board(), dest, them) {
            continue;
        }
        g.push_simple(dest);
    }

    gen_castling(g);
}
