use std::ops::IndexMut;

use ndarray::{Array2, AssignElem};
use thiserror::Error;

use crate::cell::Cell;
use crate::grid::Grid;
use crate::location::{Coord, Dimension, Location};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum BuilderInvalidReason {
    /// No rows, or rows with no characters, were given.
    #[error("a grid needs at least one row and one column")]
    EmptyGrid,
    /// A cell was placed outside the bounds specified by `dims` on a builder.
    #[error("cell {location} lies outside the grid")]
    CellOutOfBounds { location: Location },
    /// [`GridBuilder::push`] was called after every cell was already filled.
    #[error("more cells were supplied than the grid holds")]
    TooManyCells,
    /// Some cells were never filled by the time [`GridBuilder::build`] was called.
    #[error("{missing} cell(s) were never filled")]
    IncompleteGrid { missing: usize },
    /// A row handed to [`Grid::from_rows`] does not match the width of the first row.
    #[error("row {row} has {length} cells, expected {expected}")]
    RaggedRow { row: Coord, length: usize, expected: usize },
    /// A character which cannot stand for a cell, such as whitespace.
    #[error("{character:?} at {location} is not a valid cell")]
    InvalidCharacter { location: Location, character: char },
}

/// A builder for rectangular grids.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// Once a call has made the builder invalid, further calls do nothing and [`Self::build`] reports why.
#[derive(Clone, Debug)]
pub struct GridBuilder {
    // rows, cols
    dims: (Dimension, Dimension),
    cells: Array2<Option<Cell>>,
    // row-major position of the next pushed cell
    cursor: usize,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl GridBuilder {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(rows, cols)` order.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            cells: Array2::from_elem((dims.0.get(), dims.1.get()), None),
            cursor: 0,
            invalid_reasons: Default::default(),
        }
    }

    /// Place `cell` at `location`, overwriting anything there.
    ///
    /// May cause the builder to enter a [`CellOutOfBounds`](BuilderInvalidReason::CellOutOfBounds) invalid state.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn set(&mut self, location: Location, cell: Cell) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if location.row() >= self.dims.0.get() || location.col() >= self.dims.1.get() {
            self.invalid_reasons.push(BuilderInvalidReason::CellOutOfBounds { location });
            return self;
        }

        self.cells.index_mut(location.as_index()).assign_elem(Some(cell));
        self
    }

    /// Place `cell` at the next position in row-major order.
    ///
    /// May cause the builder to enter a [`TooManyCells`](BuilderInvalidReason::TooManyCells) invalid state.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn push(&mut self, cell: Cell) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if self.cursor >= self.cells.len() {
            self.invalid_reasons.push(BuilderInvalidReason::TooManyCells);
            return self;
        }

        let location = Location(self.cursor / self.dims.1.get(), self.cursor % self.dims.1.get());
        self.cursor += 1;
        self.set(location, cell)
    }

    /// Record a failure found by a caller feeding this builder, e.g. a bad character in its input.
    pub(crate) fn invalidate(&mut self, reason: BuilderInvalidReason) -> &mut Self {
        self.invalid_reasons.push(reason);
        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    /// Unfilled cells are only detected by [`Self::build`].
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Grid`].
    /// If the builder is invalid for any reason, a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Grid, Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(self.invalid_reasons.clone());
        }

        let missing = self.cells.iter().filter(|cell| cell.is_none()).count();
        if missing > 0 {
            return Err(vec![BuilderInvalidReason::IncompleteGrid { missing }]);
        }

        Ok(Grid {
            cells: self.cells.map(|cell| cell.unwrap_or_default()),
            dims: self.dims,
        })
    }
}
