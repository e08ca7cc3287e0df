use serde::{Deserialize, Serialize};

/// One grid position as tracked by the engine.
///
/// `adjacent_mines` is fixed once the board is built and carries no meaning for mine cells.
/// A revealed cell is never flagged: flags are only placed on covered cells and revealing is
/// refused while a flag is set.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    pub adjacent_mines: u8,
    pub revealed: bool,
    pub flagged: bool,
}

impl Cell {
    /// Whether the flood fill may open this cell on its own.
    pub const fn is_auto_revealable(self) -> bool {
        !self.revealed && !self.flagged && !self.is_mine
    }
}
