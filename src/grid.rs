use std::fmt::{Display, Formatter};
use std::num::NonZero;

use itertools::Itertools;
use log::debug;
use ndarray::{Array2, ArrayView1};

use crate::builder::{BuilderInvalidReason, GridBuilder};
use crate::cell::Cell;
use crate::location::{Coord, Dimension, Location};
use crate::shape::SquareStep;

/// An immutable `rows × cols` character grid.
///
/// [`Grid`]s are built using a [`GridBuilder`], through [`Grid::from_rows`], or by [`parse_grid`](crate::parse::parse_grid).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub(crate) cells: Array2<Cell>,
    pub(crate) dims: (Dimension, Dimension),
}

/// Everything derived from a [`Grid`] before any traversal happens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    /// Indices of rows with no empty cell, ascending.
    pub metal_rows: Vec<Coord>,
    /// Indices of columns with no empty cell, ascending.
    pub metal_columns: Vec<Coord>,
    /// `true` where a wire crosses a metal bar.
    pub junctions: Array2<bool>,
    /// `true` for conductive cells and junctions.
    pub wire_network: Array2<bool>,
}

impl Classification {
    /// Junction locations in row-major order.
    pub fn junction_locations(&self) -> Vec<Location> {
        self.junctions.indexed_iter()
            .filter(|(_, is_junction)| **is_junction)
            .map(|(index, _)| Location::from(index))
            .collect_vec()
    }

    pub(crate) fn is_junction(&self, location: Location) -> bool {
        self.junctions.get(location.as_index()).copied().unwrap_or(false)
    }
}

impl Grid {
    /// Build a grid from pre-split rows, one character per cell.
    ///
    /// Every row must be as long as the first one and there must be at least one non-empty row.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, Vec<BuilderInvalidReason>> {
        let expected = rows.first().map(|row| row.as_ref().chars().count()).unwrap_or(0);
        let (Some(height), Some(width)) = (NonZero::new(rows.len()), NonZero::new(expected)) else {
            return Err(vec![BuilderInvalidReason::EmptyGrid]);
        };

        let mut builder = GridBuilder::with_dims((height, width));
        for (row, text) in rows.iter().enumerate() {
            let length = text.as_ref().chars().count();
            if length != expected {
                builder.invalidate(BuilderInvalidReason::RaggedRow { row, length, expected });
                break;
            }

            for (col, display) in text.as_ref().chars().enumerate() {
                match Cell::from_char(display) {
                    Some(cell) => builder.set(Location(row, col), cell),
                    None => builder.invalidate(BuilderInvalidReason::InvalidCharacter {
                        location: Location(row, col),
                        character: display,
                    }),
                };
            }
        }

        builder.build()
    }

    /// `(rows, cols)`.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    #[inline]
    pub fn rows(&self) -> Coord {
        self.dims.0.get()
    }

    #[inline]
    pub fn cols(&self) -> Coord {
        self.dims.1.get()
    }

    /// The cell at `location`, or [`None`] outside the grid.
    pub fn cell(&self, location: Location) -> Option<Cell> {
        self.cells.get(location.as_index()).copied()
    }

    fn is_metal_line(line: ArrayView1<'_, Cell>) -> bool {
        line.iter().all(|cell| !cell.is_empty())
    }

    /// Rows containing no empty cell.
    pub fn metal_rows(&self) -> Vec<Coord> {
        self.cells.rows().into_iter().positions(Self::is_metal_line).collect_vec()
    }

    /// Columns containing no empty cell.
    pub fn metal_columns(&self) -> Vec<Coord> {
        self.cells.columns().into_iter().positions(Self::is_metal_line).collect_vec()
    }

    // both cells one step away in `directions` exist and conduct
    fn flanked_by_conductors(&self, location: Location, directions: [SquareStep; 2]) -> bool {
        directions.iter()
            .all(|dir| self.cell(dir.attempt_from(location)).is_some_and(|cell| cell.is_conductor()))
    }

    /// Mark every cell where a wire crosses a metal bar.
    ///
    /// On a metal column the cells to the left and right must both be conductive;
    /// on a metal row, the cells above and below. Cells on the outer edge of the grid lack one of
    /// those neighbours and can never qualify through their own bar.
    pub fn junctions(&self, metal_rows: &[Coord], metal_columns: &[Coord]) -> Array2<bool> {
        let mut junctions = Array2::from_elem(self.cells.raw_dim(), false);

        for &col in metal_columns {
            for row in 0..self.rows() {
                if self.flanked_by_conductors(Location(row, col), [SquareStep::Left, SquareStep::Right]) {
                    junctions[(row, col)] = true;
                }
            }
        }

        for &row in metal_rows {
            for col in 0..self.cols() {
                if self.flanked_by_conductors(Location(row, col), [SquareStep::Up, SquareStep::Down]) {
                    junctions[(row, col)] = true;
                }
            }
        }

        junctions
    }

    /// Cells taking part in the wire graph: conductors and junctions.
    pub fn wire_network(&self, junctions: &Array2<bool>) -> Array2<bool> {
        Array2::from_shape_fn(self.cells.raw_dim(), |index| {
            self.cells[index].is_conductor() || junctions[index]
        })
    }

    /// Run every classification step over this grid.
    pub fn classify(&self) -> Classification {
        let metal_rows = self.metal_rows();
        let metal_columns = self.metal_columns();
        let junctions = self.junctions(&metal_rows, &metal_columns);
        let wire_network = self.wire_network(&junctions);

        debug!(
            "{}x{} grid: {} metal row(s), {} metal column(s), {} junction(s), {} wire cell(s)",
            self.rows(),
            self.cols(),
            metal_rows.len(),
            metal_columns.len(),
            junctions.iter().filter(|j| **j).count(),
            wire_network.iter().filter(|w| **w).count(),
        );

        Classification { metal_rows, metal_columns, junctions, wire_network }
    }

    /// Render the wire network: `+` for junctions, `C` for other wire cells, `.` elsewhere.
    pub fn render_network(&self, classification: &Classification) -> String {
        print(Array2::from_shape_fn(self.cells.raw_dim(), |index| {
            if classification.junctions[index] {
                '+'
            } else if classification.wire_network[index] {
                'C'
            } else {
                '.'
            }
        }))
    }
}

fn print(board: Array2<char>) -> String {
    let mut out = String::with_capacity(board.nrows() * (board.ncols() + 1));

    for row in board.rows() {
        for col in row {
            out.push(*col);
        }
        out.push('\n');
    }

    out
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", print(self.cells.map(Cell::display)))
    }
}
