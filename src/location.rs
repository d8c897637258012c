use std::fmt::{Display, Formatter};
use std::num::NonZero;

use ndarray::Ix;

/// A single row or column index.
pub type Coord = usize;
/// A grid extent; grids always have at least one row and one column.
pub type Dimension = NonZero<Coord>;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A location `(row, col)` on a grid. The top left corner is `Location(0, 0)`.
///
/// The derived ordering is row-major, which is the order cells are scanned in.
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// The row of this location.
    #[inline]
    pub fn row(&self) -> Coord {
        self.0
    }

    /// The column of this location.
    #[inline]
    pub fn col(&self) -> Coord {
        self.1
    }

    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.0, self.1)
    }

    /// Row-major flattened index `row * cols + col`.
    pub fn flatten(&self, cols: Coord) -> usize {
        self.0 * cols + self.1
    }

    // stepping off the top or left edge wraps to usize::MAX, which no grid lookup accepts
    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.0, value.1)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
