use ndarray::{Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};

use crate::*;

/// What a renderer may show for one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayValue {
    Hidden,
    Count(u8),
    Mine,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub revealed: bool,
    pub flagged: bool,
    pub value: DisplayValue,
    /// Set on every mine once the game has ended, when the snapshot was taken in x-ray mode.
    pub xray_mine: bool,
}

/// Point-in-time, read-only copy of a board for external consumers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    size: Coord2,
    state: GameState,
    xray: bool,
    mines_left: i64,
    cells: Array2<CellView>,
}

impl Snapshot {
    /// X-ray only takes effect on a finished game, a running game never leaks its mines.
    pub fn from_board(board: &Board, xray: bool) -> Self {
        let state = board.state();
        let xray = xray && state.is_finished();

        let cells = board.cells().map(|cell| {
            let value = match (cell.revealed, cell.is_mine) {
                (false, _) => DisplayValue::Hidden,
                (true, true) => DisplayValue::Mine,
                (true, false) => DisplayValue::Count(cell.adjacent_mines),
            };
            CellView {
                revealed: cell.revealed,
                flagged: cell.flagged,
                value,
                xray_mine: xray && cell.is_mine,
            }
        });

        Self {
            size: board.size(),
            state,
            xray,
            mines_left: board.mines_left(),
            cells,
        }
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Whether mine locations are exposed through [`CellView::xray_mine`].
    pub fn is_xray(&self) -> bool {
        self.xray
    }

    pub fn mines_left(&self) -> i64 {
        self.mines_left
    }

    pub fn get(&self, coords: Coord2) -> Option<&CellView> {
        validate_position(coords.0, coords.1, self.size.0, self.size.1).ok()?;
        Some(&self.cells[coords.to_nd_index()])
    }

    /// Rows from top (`y = 0`) to bottom, each ordered by increasing `x`.
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, CellView>> {
        self.cells.axis_iter(Axis(0))
    }
}
