//! Headless 2048 runner (default binary).
//!
//! Reads its configuration from `TWENTY48_*` environment variables and the
//! move list from the command line, e.g. `twenty48 nnesw left up`.
//! Prints the final board to stdout; lifecycle messages go to stderr.

use std::fs::OpenOptions;
use std::io::{self, BufWriter};

use anyhow::{Context, Result};

use twenty48::replay::{parse_moves, Replay, ReplayConfig};

fn main() -> Result<()> {
    let config = ReplayConfig::from_env();
    let input = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let moves = parse_moves(&input)?;

    eprintln!(
        "[Replay] {}x{} board, seed {}, target {}, {} moves",
        config.size,
        config.size,
        config.seed,
        config.max_piece,
        moves.len()
    );

    let mut replay = Replay::new(config.clone())?;

    let summary = match &config.log_path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path))?;
            let mut log = BufWriter::new(file);
            replay.run(&moves, &mut log)?
        }
        None => replay.run(&moves, &mut io::sink())?,
    };

    println!("{}", replay.game());
    eprintln!(
        "[Replay] applied {}/{} moves, score {}, highest tile {}{}",
        summary.moves_applied,
        summary.moves_requested,
        summary.score,
        summary.highest_tile,
        if summary.game_over { ", game over" } else { "" }
    );
    Ok(())
}
