//! Knight move generation.

use crate::direction::{KNIGHT_OFFSETS, leaps};

use super::Generator;

/// Generate knight jumps onto empty or enemy-occupied squares.
pub(super) fn gen_knight(g: &mut Generator<'_>) {
    for dest in leaps(g.source, &KNIGHT_OFFSETS) {
        if !g.is_friendly(dest) {
            g.push_simple(dest);
        }
    }
}
