use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use sapper_core::{Board, BoardConfig};

use config::Args;

mod config;
mod driver;
mod logging;
mod render;

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(args.verbose.log_level_filter());

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Seed: {}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let config = BoardConfig::new(args.width, args.height, args.mines).with_context(|| {
        format!(
            "cannot build a {}x{} board with {} mines",
            args.width, args.height, args.mines
        )
    })?;
    let mut board = Board::new(config, &mut rng)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary =
        driver::play_random(&mut board, &mut rng, args.printer, args.max_turns, &mut out)?;
    driver::report(&board, summary, &mut out)?;
    out.flush()?;

    Ok(())
}
