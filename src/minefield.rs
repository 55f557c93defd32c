use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::{AsIndex, CellCount, Coord2, GameError, NeighborsExt, Result};

/// Hidden ground truth of mine placement.
///
/// Created once per game and never mutated afterwards; there is
/// deliberately no mutable access to the mask.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Minefield {
    mask: Array2<bool>,
    mine_count: CellCount,
}

impl Minefield {
    pub fn from_mask(mask: Array2<bool>) -> Self {
        let mine_count = mask.iter().filter(|&&mined| mined).count() as CellCount;
        Self { mask, mine_count }
    }

    /// Deterministic construction from explicit mine positions, used by
    /// tests and scripted layouts. Duplicate positions collapse into one
    /// mine.
    pub fn from_mine_coords(size: Coord2, mines: &[Coord2]) -> Result<Self> {
        let mut mask: Array2<bool> = Array2::default(size.as_index());

        for &coords in mines {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfBounds);
            }
            mask[coords.as_index()] = true;
        }

        Ok(Self::from_mask(mask))
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.mask.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.mask.len().try_into().unwrap()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    /// Number of mines among the up-to-8 in-bounds neighbors of `coords`.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.mask
            .neighbors_of(coords)
            .filter(|&pos| self[pos])
            .count() as u8
    }
}

impl Index<Coord2> for Minefield {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mask[coords.as_index()]
    }
}
