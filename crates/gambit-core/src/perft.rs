//! Perft (performance test) node counting for move generation verification.

use crate::engine::Engine;
use crate::piece_kind::PieceKind;

/// Count the leaf nodes of the legal move tree `depth` plies below `engine`.
///
/// Depth 0 returns 1 (the current position). Promotions without a configured
/// automatic choice are resolved to a queen.
pub fn perft(engine: &Engine, depth: usize) -> u64 {
    count(&with_auto_promotion(engine), depth)
}

/// Run perft with a per-move breakdown, useful when hunting a generation bug.
///
/// Returns `(uci_move, node_count)` pairs sorted alphabetically.
pub fn divide(engine: &Engine, depth: usize) -> Vec<(String, u64)> {
    let root = with_auto_promotion(engine);
    let mut results: Vec<(String, u64)> = root
        .all_legal_moves()
        .into_iter()
        .map(|candidate| {
            let label = candidate.to_uci();
            let mut child = root.clone();
            let nodes = match child.take_move(candidate) {
                Ok(_) => count(&child, depth.saturating_sub(1)),
                Err(_) => 0,
            };
            (label, nodes)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

fn with_auto_promotion(engine: &Engine) -> Engine {
    let mut root = engine.clone();
    if root.config().auto_promotion.is_none() {
        root.set_auto_promotion(Some(PieceKind::Queen));
    }
    root
}

fn count(engine: &Engine, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = engine.all_legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for candidate in moves {
        let mut child = engine.clone();
        if child.take_move(candidate).is_ok() {
            nodes += count(&child, depth - 1);
        }
    }
    nodes
}
