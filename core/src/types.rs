/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(x, y)`, `x` being the column and `y` the row.
pub type Coord2 = (Coord, Coord);

/// Maps `(x, y)` coordinates onto the row-major `[row, column]` index used by the grids.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

const DISPLACEMENTS: [(i16, i16); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i16, i16), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

/// Iterates the Moore neighbourhood of a cell, skipping positions outside the board.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), (5, 5)).collect();

        assert_eq!(neighbors, [(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn edge_has_five_neighbors() {
        assert_eq!(NeighborIter::new((2, 0), (5, 5)).count(), 5);
        assert_eq!(NeighborIter::new((4, 2), (5, 5)).count(), 5);
    }

    #[test]
    fn interior_has_eight_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((1, 1), (3, 3)).collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&(1, 1)));
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn nd_index_is_row_major() {
        let coords: Coord2 = (3, 1);
        assert_eq!(coords.to_nd_index(), [1, 3]);
    }

    #[test]
    fn mult_does_not_overflow() {
        assert_eq!(mult(Coord::MAX, Coord::MAX), 65535 * 65535);
    }
}
