//! Argument checks shared by board construction and moves.
//!
//! Negative or fractional values cannot reach these functions since every parameter is an
//! unsigned integer, what is left to check are zero sizes and range violations.

use crate::*;

/// Rejects a degenerate board with no columns or no rows.
pub fn validate_dimensions(width: Coord, height: Coord) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(GameError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Rejects mine counts that would leave no safe cell on a `width` by `height` board.
pub fn validate_mine_count(width: Coord, height: Coord, mines: CellCount) -> Result<()> {
    let cells = mult(width, height);
    if mines >= cells {
        return Err(GameError::TooManyMines { mines, cells });
    }
    Ok(())
}

/// Rejects positions outside of `[0, width) x [0, height)`.
pub fn validate_position(x: Coord, y: Coord, width: Coord, height: Coord) -> Result<()> {
    if x < width && y < height {
        Ok(())
    } else {
        Err(GameError::InvalidCoords {
            coords: (x, y),
            size: (width, height),
        })
    }
}
