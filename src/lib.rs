use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use minefield::*;
pub use session::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod minefield;
mod session;
mod types;
pub mod view;

/// Game parameters: board dimensions and mine count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    /// The classic single-screen board: 8x8 with 10 mines.
    pub const DEFAULT: GameConfig = GameConfig::new_unchecked(8, 8, 10);

    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    /// Clamps dimensions to at least 1x1 and the mine count to what the
    /// board can hold.
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        let mines = mines.clamp(1, area(rows, cols));
        Self::new_unchecked(rows, cols, mines)
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.rows, self.cols)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
