use ndarray::Array2;
use rand::prelude::*;

use crate::{AsIndex, CellCount, GameConfig, Minefield};

/// Produces the minefield for a new game.
pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> Minefield;
}

/// Uniform random placement with rejection resampling on collision.
///
/// At the default 10-of-64 density collisions are rare, so resampling
/// terminates quickly; `GameConfig::new` caps the mine count at the
/// board area so the loop cannot run out of free cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Minefield {
        let total = config.total_cells();

        // a saturated board needs no sampling
        if config.mines >= total {
            if config.mines > total {
                log::warn!(
                    "requested {} mines but the board only fits {}",
                    config.mines,
                    total
                );
            }
            return Minefield::from_mask(Array2::from_elem(config.size().as_index(), true));
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mask: Array2<bool> = Array2::default(config.size().as_index());
        let mut placed: CellCount = 0;

        while placed < config.mines {
            let coords = (
                rng.random_range(0..config.rows),
                rng.random_range(0..config.cols),
            );
            let cell = &mut mask[coords.as_index()];
            if !*cell {
                *cell = true;
                placed += 1;
            }
        }

        log::debug!(
            "placed {} mines on a {}x{} board (seed {})",
            placed,
            config.rows,
            config.cols,
            self.seed
        );
        Minefield::from_mask(mask)
    }
}
