#![no_std]

extern crate alloc;

use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use snapshot::*;
pub use tile::*;
pub use types::*;
pub use validate::*;

mod engine;
mod error;
mod generator;
mod snapshot;
mod tile;
mod types;
mod validate;

/// Validated construction parameters of a board.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl BoardConfig {
    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        validate_dimensions(width, height)?;
        validate_mine_count(width, height, mines)?;
        Ok(Self {
            size: (width, height),
            mines,
        })
    }

    pub const fn width(&self) -> Coord {
        self.size.0
    }

    pub const fn height(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

/// Where the mines are, independently of what the player has uncovered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    size: Coord2,
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub(crate) fn from_mine_mask(size: Coord2, mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self {
            size,
            mine_mask,
            mine_count,
        }
    }

    /// Builds a layout with mines at exactly `mine_coords`, duplicates are counted once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        validate_dimensions(size.0, size.1)?;
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &(x, y) in mine_coords {
            validate_position(x, y, size.0, size.1)?;
            mine_mask[(x, y).to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(size, mine_mask))
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Number of mines in the Moore neighbourhood of `coords`, clamped at the board edges.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbours, the cast cannot truncate
        self.iter_neighbors(coords).filter(|&pos| self[pos]).count() as u8
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for MineLayout {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.mine_mask[coords.to_nd_index()]
    }
}

/// Result of a flag toggle, `NoChange` means the move was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl MarkOutcome {
    /// Whether the move was accepted.
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Flagged | Self::Unflagged => true,
        }
    }
}

/// Result of a reveal, `NoChange` means the move was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether the move was accepted.
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}
