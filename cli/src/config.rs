use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use sapper_core::{CellCount, Coord};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PrinterChoice {
    Simple,
    Pretty,
    Json,
    /// Coin flip between simple and pretty on every frame
    Random,
}

/// Plays a game of minesweeper with random moves, printing the board after every accepted move.
#[derive(Parser, Debug)]
#[command(name = "sapper", version)]
pub struct Args {
    /// Board width (columns)
    #[arg(long, default_value_t = 10)]
    pub width: Coord,

    /// Board height (rows)
    #[arg(long, default_value_t = 20)]
    pub height: Coord,

    /// Number of mines, must be lower than width * height
    #[arg(long, default_value_t = 10)]
    pub mines: CellCount,

    /// Seed for mine placement and moves, drawn at random when absent
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = PrinterChoice::Random)]
    pub printer: PrinterChoice,

    /// Give up after this many turns
    #[arg(long, default_value_t = 100_000)]
    pub max_turns: u64,

    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}
