use alloc::collections::VecDeque;
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Where a game stands, derived from the board on every query.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// The game engine, sole owner and mutator of the grid.
///
/// Coordinates are `(x, y)` with `x` the column in `[0, width)` and `y` the row in
/// `[0, height)`, for both moves and queries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    size: Coord2,
    cells: Array2<Cell>,
    mine_count: CellCount,
    revealed_count: CellCount,
    flagged_count: CellCount,
    triggered_mine: Option<Coord2>,
}

impl Board {
    /// Lays `config.mines` mines uniformly at random using `rng`.
    pub fn new<R: Rng + ?Sized>(config: BoardConfig, rng: &mut R) -> Result<Self> {
        Self::from_layout(RandomMinefieldGenerator::new(rng).generate(config))
    }

    pub fn with_params<R: Rng + ?Sized>(
        width: Coord,
        height: Coord,
        mines: CellCount,
        rng: &mut R,
    ) -> Result<Self> {
        Self::new(BoardConfig::new(width, height, mines)?, rng)
    }

    /// Builds a board over a fixed layout, which must leave at least one safe cell.
    pub fn from_layout(mine_layout: MineLayout) -> Result<Self> {
        let (width, height) = mine_layout.size();
        validate_dimensions(width, height)?;
        validate_mine_count(width, height, mine_layout.mine_count())?;

        let cells = Array2::from_shape_fn(mine_layout.size().to_nd_index(), |(y, x)| {
            let coords = (x as Coord, y as Coord);
            let is_mine = mine_layout.contains_mine(coords);
            Cell {
                is_mine,
                adjacent_mines: if is_mine {
                    0
                } else {
                    mine_layout.adjacent_mine_count(coords)
                },
                revealed: false,
                flagged: false,
            }
        });

        log::debug!(
            "New {}x{} board with {} mines",
            width,
            height,
            mine_layout.mine_count()
        );

        Ok(Self {
            size: mine_layout.size(),
            cells,
            mine_count: mine_layout.mine_count(),
            revealed_count: 0,
            flagged_count: 0,
            triggered_mine: None,
        })
    }

    pub fn state(&self) -> GameState {
        if self.triggered_mine.is_some() {
            GameState::Lost
        } else if self.revealed_count == self.safe_cell_count() {
            GameState::Won
        } else {
            GameState::Playing
        }
    }

    /// No mine has been revealed and at least one safe cell is still covered.
    pub fn still_playing(&self) -> bool {
        matches!(self.state(), GameState::Playing)
    }

    /// No mine has been revealed and every safe cell is uncovered.
    pub fn victory(&self) -> bool {
        matches!(self.state(), GameState::Won)
    }

    pub fn is_finished(&self) -> bool {
        self.state().is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn width(&self) -> Coord {
        self.size.0
    }

    pub fn height(&self) -> Coord {
        self.size.1
    }

    pub fn total_mines(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        mult(self.size.0, self.size.1) - self.mine_count
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// Mines not yet accounted for by flags, negative when the player over-flags.
    pub fn mines_left(&self) -> i64 {
        i64::from(self.mine_count) - i64::from(self.flagged_count)
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()])
    }

    pub(crate) fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use MarkOutcome::*;

        let coords = self.validate_coords(coords)?;
        if self.is_finished() {
            return Ok(NoChange);
        }

        let cell = &mut self.cells[coords.to_nd_index()];
        let outcome = if cell.revealed {
            NoChange
        } else if cell.flagged {
            cell.flagged = false;
            self.flagged_count -= 1;
            Unflagged
        } else {
            cell.flagged = true;
            self.flagged_count += 1;
            Flagged
        };

        if outcome.has_update() {
            log::debug!("{:?} at {:?}", outcome, coords);
        }
        Ok(outcome)
    }

    /// Uncovers the cell at `coords`, flooding outwards from cells with no adjacent mines.
    ///
    /// Flagged and already revealed cells are left alone, as is every cell once the game is over.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let coords = self.validate_coords(coords)?;
        if self.is_finished() {
            return Ok(NoChange);
        }

        let cell = self.cells[coords.to_nd_index()];
        if cell.revealed || cell.flagged {
            return Ok(NoChange);
        }

        if cell.is_mine {
            self.cells[coords.to_nd_index()].revealed = true;
            self.triggered_mine = Some(coords);
            log::debug!("Hit mine at {:?}", coords);
            return Ok(HitMine);
        }

        let opened = self.flood_reveal(coords);
        log::debug!("Revealed {} cells from {:?}", opened, coords);

        Ok(if self.victory() { Won } else { Revealed })
    }

    /// Reveals `start` and, transitively, the neighbours of every zero-count cell reached.
    ///
    /// `start` must be a covered, unflagged safe cell. Returns the number of cells opened.
    fn flood_reveal(&mut self, start: Coord2) -> CellCount {
        let mut opened = 0;
        let mut to_visit = VecDeque::from([start]);

        while let Some(visit_coords) = to_visit.pop_front() {
            let cell = &mut self.cells[visit_coords.to_nd_index()];
            if !cell.is_auto_revealable() {
                continue;
            }

            cell.revealed = true;
            opened += 1;

            if cell.adjacent_mines == 0 {
                to_visit.extend(
                    NeighborIter::new(visit_coords, self.size)
                        .filter(|&pos| self.cells[pos.to_nd_index()].is_auto_revealable()),
                );
            }
        }

        log::trace!("Flood fill from {:?} opened {} cells", start, opened);
        self.revealed_count += opened;
        opened
    }

    /// Read-only copy of the grid for renderers, see [`Snapshot`].
    pub fn snapshot(&self, xray: bool) -> Snapshot {
        Snapshot::from_board(self, xray)
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        validate_position(coords.0, coords.1, self.size.0, self.size.1)?;
        Ok(coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn board(size: Coord2, mines: &[Coord2]) -> Board {
        Board::from_layout(MineLayout::from_mine_coords(size, mines).unwrap()).unwrap()
    }

    fn revealed_cells(board: &Board) -> Vec<Coord2> {
        let (width, height) = board.size();
        let mut revealed = Vec::new();
        for y in 0..height {
            for x in 0..width {
                if board.cell_at((x, y)).unwrap().revealed {
                    revealed.push((x, y));
                }
            }
        }
        revealed
    }

    #[test]
    fn construction_rejects_invalid_arguments() {
        let mut rng = SmallRng::seed_from_u64(0);

        assert!(Board::with_params(10, 10, 101, &mut rng).is_err());
        assert!(Board::with_params(10, 10, 100, &mut rng).is_err());
        assert!(Board::with_params(10, 0, 10, &mut rng).is_err());
        assert!(Board::with_params(0, 10, 10, &mut rng).is_err());
    }

    #[test]
    fn from_layout_rejects_full_board() {
        let layout = MineLayout::from_mine_coords((2, 1), &[(0, 0), (1, 0)]).unwrap();

        assert_eq!(
            Board::from_layout(layout),
            Err(GameError::TooManyMines { mines: 2, cells: 2 })
        );
    }

    #[test]
    fn random_board_places_exact_mine_count() {
        let mut rng = SmallRng::seed_from_u64(3);
        let board = Board::with_params(2, 4, 3, &mut rng).unwrap();

        let mines = board.cells().iter().filter(|cell| cell.is_mine).count();
        assert_eq!(mines, 3);
        assert!(board.still_playing());
        assert!(!board.victory());
    }

    #[test]
    fn two_by_two_with_one_mine_counts_one_everywhere() {
        let mut engine = board((2, 2), &[(0, 0)]);

        for coords in [(1, 0), (0, 1), (1, 1)] {
            assert_eq!(engine.cell_at(coords).unwrap().adjacent_mines, 1);
        }

        assert_eq!(engine.reveal((1, 1)), Ok(RevealOutcome::Revealed));
        assert_eq!(revealed_cells(&engine), [(1, 1)]);
    }

    #[test]
    fn reveal_next_to_mine_opens_single_cell() {
        let mut engine = board((5, 5), &[(1, 1)]);

        assert_eq!(engine.reveal((0, 1)), Ok(RevealOutcome::Revealed));
        assert_eq!(
            engine.cell_at((0, 1)).unwrap(),
            Cell {
                is_mine: false,
                adjacent_mines: 1,
                revealed: true,
                flagged: false
            }
        );
        assert_eq!(engine.revealed_count(), 1);
    }

    #[test]
    fn reveal_flood_fill_stops_at_numbered_ring() {
        let mut engine = board((5, 5), &[(0, 0)]);

        assert_eq!(engine.reveal((4, 4)), Ok(RevealOutcome::Won));
        assert!(engine.victory());
        assert!(!engine.cell_at((0, 0)).unwrap().revealed);
        assert_eq!(engine.revealed_count(), 24);
    }

    #[test]
    fn flood_fill_leaves_cells_behind_a_wall_covered() {
        // mines along column 2 split the board in two
        let mut engine = board((5, 3), &[(2, 0), (2, 1), (2, 2)]);

        assert_eq!(engine.reveal((0, 0)), Ok(RevealOutcome::Revealed));

        let revealed = revealed_cells(&engine);
        assert_eq!(revealed.len(), 6);
        assert!(revealed.iter().all(|&(x, _)| x < 2));
        assert!(engine.still_playing());
    }

    #[test]
    fn flood_fill_is_idempotent() {
        let mut engine = board((6, 6), &[(5, 5), (4, 5)]);

        engine.reveal((0, 0)).unwrap();
        let first = revealed_cells(&engine);

        assert_eq!(engine.reveal((0, 0)), Ok(RevealOutcome::NoChange));
        assert_eq!(revealed_cells(&engine), first);
    }

    #[test]
    fn flood_fill_skips_flagged_cells() {
        let mut engine = board((4, 4), &[(3, 3)]);

        engine.toggle_flag((0, 3)).unwrap();
        engine.reveal((0, 0)).unwrap();

        let flagged = engine.cell_at((0, 3)).unwrap();
        assert!(flagged.flagged);
        assert!(!flagged.revealed);
        assert!(engine.still_playing());
    }

    #[test]
    fn empty_board_is_won_by_first_reveal() {
        let mut engine = board((5, 5), &[]);

        assert!(engine.still_playing());
        assert_eq!(engine.reveal((2, 3)), Ok(RevealOutcome::Won));
        assert_eq!(engine.revealed_count(), 25);
        assert!(engine.victory());
        assert!(!engine.still_playing());
    }

    #[test]
    fn hitting_a_mine_loses_for_good() {
        let mut engine = board((5, 5), &[(1, 1)]);

        assert_eq!(engine.reveal((1, 1)), Ok(RevealOutcome::HitMine));
        assert_eq!(engine.state(), GameState::Lost);
        assert_eq!(engine.triggered_mine(), Some((1, 1)));
        assert!(engine.cell_at((1, 1)).unwrap().revealed);
        assert!(!engine.victory());
        assert!(!engine.still_playing());

        assert_eq!(engine.reveal((4, 4)), Ok(RevealOutcome::NoChange));
        assert_eq!(engine.toggle_flag((4, 4)), Ok(MarkOutcome::NoChange));
        assert_eq!(engine.revealed_count(), 0);
        assert!(!engine.victory());
    }

    #[test]
    fn moves_after_victory_are_rejected() {
        let mut engine = board((2, 1), &[(0, 0)]);

        assert_eq!(engine.reveal((1, 0)), Ok(RevealOutcome::Won));
        assert_eq!(engine.reveal((0, 0)), Ok(RevealOutcome::NoChange));
        assert_eq!(engine.state(), GameState::Won);
    }

    #[test]
    fn flag_toggles_both_ways() {
        let mut engine = board((2, 4), &[(0, 0), (1, 3)]);

        assert_eq!(engine.toggle_flag((0, 0)), Ok(MarkOutcome::Flagged));
        assert!(engine.cell_at((0, 0)).unwrap().flagged);
        assert_eq!(engine.mines_left(), 1);

        assert_eq!(engine.toggle_flag((0, 0)), Ok(MarkOutcome::Unflagged));
        assert!(!engine.cell_at((0, 0)).unwrap().flagged);
        assert_eq!(engine.flagged_count(), 0);
    }

    #[test]
    fn over_flagging_makes_mines_left_negative() {
        let mut engine = board((3, 1), &[(0, 0)]);

        engine.toggle_flag((1, 0)).unwrap();
        engine.toggle_flag((2, 0)).unwrap();

        assert_eq!(engine.mines_left(), -1);
    }

    #[test]
    fn revealed_cells_cannot_be_flagged() {
        let mut engine = board((3, 3), &[(2, 2)]);

        engine.reveal((1, 1)).unwrap();

        assert_eq!(engine.toggle_flag((1, 1)), Ok(MarkOutcome::NoChange));
        assert!(!engine.cell_at((1, 1)).unwrap().flagged);
    }

    #[test]
    fn flagged_cells_cannot_be_revealed() {
        let mut engine = board((3, 3), &[(2, 2)]);

        engine.toggle_flag((2, 2)).unwrap();
        assert_eq!(engine.reveal((2, 2)), Ok(RevealOutcome::NoChange));
        assert!(engine.still_playing());

        engine.toggle_flag((0, 0)).unwrap();
        assert_eq!(engine.reveal((0, 0)), Ok(RevealOutcome::NoChange));
        assert_eq!(engine.revealed_count(), 0);
    }

    #[test]
    fn invalid_coordinates_are_errors_without_side_effects() {
        let mut engine = board((2, 4), &[(0, 0)]);
        let before = engine.clone();

        let expected = Err(GameError::InvalidCoords {
            coords: (2, 0),
            size: (2, 4),
        });
        assert_eq!(engine.reveal((2, 0)), expected);
        assert_eq!(engine.toggle_flag((2, 0)), Err(expected.unwrap_err()));
        assert!(engine.reveal((0, 4)).is_err());
        assert!(engine.cell_at((9, 9)).is_err());
        assert_eq!(engine, before);
    }

    #[test]
    fn large_empty_board_floods_without_recursion() {
        let mut engine = board((1000, 1000), &[(999, 999)]);

        assert_eq!(engine.reveal((0, 0)), Ok(RevealOutcome::Won));
        assert_eq!(engine.revealed_count(), 1000 * 1000 - 1);
    }
}
