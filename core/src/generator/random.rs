use ndarray::Array2;
use rand::Rng;
use rand::seq::index;

use super::*;

/// Purely random generation: every set of `mines` distinct cells is equally likely.
///
/// The random source is borrowed from the caller, seeding it makes the layout reproducible.
#[derive(Debug)]
pub struct RandomMinefieldGenerator<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> RandomMinefieldGenerator<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + ?Sized> MinefieldGenerator for RandomMinefieldGenerator<'_, R> {
    fn generate(self, config: BoardConfig) -> MineLayout {
        let total_cells = config.total_cells() as usize;
        let mines = (config.mines as usize).min(total_cells);
        let width = usize::from(config.width());

        // uniform sample of distinct cells, memory grows with `mines` rather than the board
        let chosen = index::sample(self.rng, total_cells, mines);

        let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());
        for cell in chosen.iter() {
            mine_mask[[cell / width, cell % width]] = true;
        }

        let layout = MineLayout::from_mine_mask(config.size, mine_mask);
        if layout.mine_count() != config.mines {
            log::warn!(
                "Generated minefield count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                config.mines
            );
        }
        layout
    }
}
