use ndarray::Array2;

/// Single axis value used for row/column positions and board dimensions.
pub type Coord = u8;

/// Count type used for mine totals and cell totals.
pub type CellCount = u16;

/// Board position as `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Conversion from a board position to an `ndarray` index.
pub trait AsIndex {
    type Output;
    fn as_index(self) -> Self::Output;
}

impl AsIndex for Coord2 {
    type Output = [usize; 2];

    fn as_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn area(rows: Coord, cols: Coord) -> CellCount {
    let rows = rows as CellCount;
    let cols = cols as CellCount;
    rows.saturating_mul(cols)
}

/// The 8 compass displacements around a cell.
const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `center`, keeping only results inside `bounds`.
fn offset_within(center: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let row = center.0.checked_add_signed(delta.0)?;
    let col = center.1.checked_add_signed(delta.1)?;
    (row < bounds.0 && col < bounds.1).then_some((row, col))
}

/// Iterates the in-bounds 8-neighborhood of `center`.
pub fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    OFFSETS
        .iter()
        .filter_map(move |&delta| offset_within(center, delta, bounds))
}

pub trait NeighborsExt {
    fn neighbors_of(&self, center: Coord2) -> impl Iterator<Item = Coord2>;
}

impl<T> NeighborsExt for Array2<T> {
    fn neighbors_of(&self, center: Coord2) -> impl Iterator<Item = Coord2> {
        let dim = self.dim();
        let bounds = (
            dim.0.try_into().unwrap_or(Coord::MAX),
            dim.1.try_into().unwrap_or(Coord::MAX),
        );
        neighbors(center, bounds)
    }
}
