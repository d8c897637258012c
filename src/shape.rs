use itertools::Itertools;
use strum::VariantArray;

use crate::location::Location;

/// Which kind of metal bar a tally belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Axis {
    /// A full metal row, crossed by vertical moves.
    Row,
    /// A full metal column, crossed by horizontal moves.
    Column,
}

/// The four steps between edge-adjacent cells of a rectangular grid.
///
/// Declaration order is the order neighbours are visited in: up, right, down, left.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum SquareStep {
    Up,
    Right,
    Down,
    Left,
}

impl SquareStep {
    /// Steps which move to a higher row-major index.
    pub const FORWARD_VARIANTS: &'static [Self] = &[Self::Right, Self::Down];

    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// The result may lie outside the grid; lookups on it then come back empty.
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((-1, 0)),
            Self::Right => location.offset_by((0, 1)),
            Self::Down => location.offset_by((1, 0)),
            Self::Left => location.offset_by((0, -1)),
        }
    }

    /// Invert the direction specified by `self`.
    pub fn invert(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// The kind of bar this step crosses when it lands on a junction.
    ///
    /// A move along a row passes through a metal column and vice versa.
    pub fn crossed_bar(&self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::Column,
            Self::Up | Self::Down => Axis::Row,
        }
    }

    /// `+1` for forward steps, `-1` otherwise.
    pub fn sign(&self) -> i64 {
        if Self::FORWARD_VARIANTS.contains(self) { 1 } else { -1 }
    }

    /// Determine the direction from `a` to `b`, or [`None`] when they are not edge-adjacent.
    pub fn direction_to(a: Location, b: Location) -> Option<Self> {
        Self::VARIANTS.iter().find(|dir| dir.attempt_from(a) == b).copied()
    }

    /// Every location one step away from `location`, in visiting order.
    pub fn neighbors_of(location: Location) -> Vec<(Self, Location)> {
        Self::VARIANTS.iter()
            .map(|dir| (*dir, dir.attempt_from(location)))
            .collect_vec()
    }
}
