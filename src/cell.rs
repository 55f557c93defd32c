use serde::{Deserialize, Serialize};

/// Player-visible state of a single board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    Flagged,
    /// Uncovered safe cell carrying its adjacent-mine count (0 to 8).
    Revealed(u8),
    /// The mine the player stepped on.
    Exploded,
}

impl CellState {
    /// Whether the cell still hides its content.
    pub const fn is_covered(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}
