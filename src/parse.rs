use std::num::NonZero;

use itertools::Itertools;
use log::debug;
use thiserror::Error;

use crate::builder::{BuilderInvalidReason, GridBuilder};
use crate::cell::Cell;
use crate::grid::Grid;
use crate::location::{Dimension, Location};

/// Reasons a textual grid description cannot be read.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum InputError {
    /// The input ended before both dimensions were read.
    #[error("missing {name} count")]
    MissingDimension { name: &'static str },
    /// A dimension is not a positive integer.
    #[error("{name} must be a positive integer, found {token:?}")]
    BadDimension { name: &'static str, token: String },
    /// `rows * cols` does not fit in memory addressing.
    #[error("a {rows}x{cols} grid is too large")]
    TooLarge { rows: usize, cols: usize },
    /// Fewer cell characters than `rows * cols` followed the dimensions.
    #[error("expected {expected} cells, found only {found}")]
    Truncated { expected: usize, found: usize },
    /// The cells could not be assembled into a grid.
    #[error("invalid grid: {}", .0.iter().join("; "))]
    InvalidGrid(Vec<BuilderInvalidReason>),
}

impl From<Vec<BuilderInvalidReason>> for InputError {
    fn from(reasons: Vec<BuilderInvalidReason>) -> Self {
        Self::InvalidGrid(reasons)
    }
}

fn dimension(token: Option<&str>, name: &'static str) -> Result<Dimension, InputError> {
    let token = token.ok_or(InputError::MissingDimension { name })?;
    token.parse::<usize>()
        .ok()
        .and_then(NonZero::new)
        .ok_or_else(|| InputError::BadDimension { name, token: token.to_string() })
}

/// Read a grid given as `rows cols` followed by `rows * cols` cell characters.
///
/// Whitespace between cell characters is skipped, so rows may be split or joined across lines freely.
/// Anything after the last cell is ignored.
pub fn parse_grid(input: &str) -> Result<Grid, InputError> {
    let mut tokens = input.split_whitespace();
    let rows = dimension(tokens.next(), "rows")?;
    let cols = dimension(tokens.next(), "cols")?;
    let expected = rows.get()
        .checked_mul(cols.get())
        .ok_or(InputError::TooLarge { rows: rows.get(), cols: cols.get() })?;

    // collected before allocating the grid, so absurd dimensions fail on the input length instead
    let characters = tokens.flat_map(str::chars).take(expected).collect_vec();
    if characters.len() < expected {
        return Err(InputError::Truncated { expected, found: characters.len() });
    }

    let mut builder = GridBuilder::with_dims((rows, cols));
    for (index, display) in characters.into_iter().enumerate() {
        match Cell::from_char(display) {
            Some(cell) => builder.push(cell),
            None => builder.invalidate(BuilderInvalidReason::InvalidCharacter {
                location: Location(index / cols.get(), index % cols.get()),
                character: display,
            }),
        };
    }

    let grid = builder.build()?;
    debug!("read {}x{} grid", grid.rows(), grid.cols());
    Ok(grid)
}
