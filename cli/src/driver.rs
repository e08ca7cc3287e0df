use std::io::Write;

use anyhow::Result;
use rand::Rng;
use sapper_core::{Board, GameState};

use crate::config::PrinterChoice;
use crate::render::{JsonPrinter, Printer, PrettyPrinter, SimplePrinter};

/// How a driven game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub turns: u64,
    pub state: GameState,
}

fn pick_printer<R: Rng + ?Sized>(choice: PrinterChoice, rng: &mut R) -> &'static dyn Printer {
    match choice {
        PrinterChoice::Simple => &SimplePrinter,
        PrinterChoice::Pretty => &PrettyPrinter,
        PrinterChoice::Json => &JsonPrinter,
        PrinterChoice::Random if rng.random_bool(0.5) => &SimplePrinter,
        PrinterChoice::Random => &PrettyPrinter,
    }
}

/// Plays random reveals and flag toggles until the game ends or `max_turns` runs out.
///
/// The board is printed after every turn in which at least one of the two moves was accepted.
pub fn play_random<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
    choice: PrinterChoice,
    max_turns: u64,
    out: &mut dyn Write,
) -> Result<Summary> {
    let (width, height) = board.size();
    let mut turns = 0;

    while board.still_playing() {
        if turns >= max_turns {
            log::warn!("Giving up after {} turns", turns);
            break;
        }
        turns += 1;

        let reveal_at = (rng.random_range(0..width), rng.random_range(0..height));
        let flag_at = (rng.random_range(0..width), rng.random_range(0..height));

        let revealed = board.reveal(reveal_at)?;
        let marked = board.toggle_flag(flag_at)?;
        log::trace!(
            "Turn {}: reveal {:?} -> {:?}, flag {:?} -> {:?}",
            turns,
            reveal_at,
            revealed,
            flag_at,
            marked
        );

        if revealed.has_update() || marked.has_update() {
            pick_printer(choice, rng).print(&board.snapshot(false), out)?;
        }
    }

    let state = board.state();
    log::info!("Finished in {} turns: {:?}", turns, state);
    Ok(Summary { turns, state })
}

/// Prints the final verdict, followed by every mine when the game was lost.
pub fn report(board: &Board, summary: Summary, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Game over!")?;
    match summary.state {
        GameState::Won => writeln!(out, "You won!")?,
        GameState::Lost => {
            writeln!(out, "You lost! The mines were:")?;
            PrettyPrinter.print(&board.snapshot(true), out)?;
        }
        GameState::Playing => writeln!(out, "Out of turns after {}, nobody won.", summary.turns)?,
    }
    Ok(())
}
