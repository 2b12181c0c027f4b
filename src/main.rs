use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};

use gambit_core::{Engine, divide};

const DEFAULT_DEPTH: usize = 3;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let depth = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<usize>()
            .with_context(|| format!("invalid perft depth '{arg}'"))?,
        None => DEFAULT_DEPTH,
    };

    let engine = Engine::default();
    info!(depth, "gambit perft from the starting position");
    debug!("\n{}", engine.current_board().pretty());

    let start = Instant::now();
    let results = divide(&engine, depth);
    for (mv, nodes) in &results {
        println!("{mv}: {nodes}");
    }
    let total: u64 = results.iter().map(|(_, nodes)| nodes).sum();
    let elapsed = start.elapsed();

    println!();
    println!("Nodes searched: {total}");
    info!(total, moves = results.len(), elapsed_ms = elapsed.as_millis() as u64, "perft done");
    Ok(())
}
