use std::fmt;

/// A cell of the grid, addressed by 0-indexed `(row, col)`.
///
/// Row 0 is the top of the grid, so moving "up" decreases `row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State {
    pub row: usize,
    pub col: usize,
}

impl State {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Number of unit moves separating two cells on an obstacle-free grid.
    pub fn manhattan_distance(self, other: State) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Index usable with the `ndarray` grids, which are stored row-major as
    /// `(height, width)`.
    pub(crate) fn index(self) -> (usize, usize) {
        (self.row, self.col)
    }
}

impl From<(usize, usize)> for State {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
