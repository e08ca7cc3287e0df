use thiserror::Error;

use crate::{CellCount, Coord, Coord2};

/// Malformed construction or move arguments.
///
/// Every variant is an invalid-argument failure: it is raised before any state is touched, so a
/// rejected call never leaves a partially built board or a half-applied move behind.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: Coord, height: Coord },
    #[error("Too many mines, requested {mines} but the board has only {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("Invalid coordinates {coords:?} for a board of size {size:?}")]
    InvalidCoords { coords: Coord2, size: Coord2 },
}

impl GameError {
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidDimensions { .. } | Self::TooManyMines { .. } | Self::InvalidCoords { .. }
        )
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
