#![warn(missing_docs)]

//! # `cablewrap`
//!
//! Counts how many times a single wire wraps around the metal bars of a character grid.
//!
//! A grid holds conductive cells (`C`), empty cells (`.`) and any other character for insulated metal.
//! A row or column with no empty cell is a metal bar. Where a wire runs up to a bar from both sides, the bar cell
//! between them is a junction: the wire crosses the bar there, over it if the junction cell is itself `C` and
//! under it otherwise.
//!
//! Begin by reading a [`Grid`] with [`parse_grid`] or building one with a [`GridBuilder`].
//! Hand it to a [`GridAnalyzer`], then call [`analyze()`](GridAnalyzer::analyze) to walk the wire.
//! [`analyze`] does both in one go.
//!
//! # Internals
//! The wire cells and junctions form a graph with edges between edge-adjacent cells.
//! The wire is assumed to be a simple path, so the walk starts at its first dead end in row-major order and
//! follows it without backtracking. Every junction crossing adds `±1` to the tally of the bar it crosses, the sign
//! depending on the direction of travel and on whether the wire passes over or under.
//! Wrapping fully around a bar crosses it twice with the same sign, so each bar contributes half its absolute tally.

use thiserror::Error;

pub use analyzer::{Analysis, AnalysisFailure, GridAnalyzer};
pub use builder::{BuilderInvalidReason, GridBuilder};
pub use cell::Cell;
pub use grid::{Classification, Grid};
pub use location::{Coord, Dimension, Location};
pub use network::WireNetwork;
pub use parse::{parse_grid, InputError};
pub use shape::{Axis, SquareStep};

pub mod analyzer;
pub mod builder;
pub(crate) mod cell;
pub mod grid;
pub(crate) mod location;
pub mod network;
pub mod parse;
pub mod shape;
mod tests;

/// Anything that can go wrong between reading text and producing an [`Analysis`].
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// The input text does not describe a grid.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    /// The grid was read but its wire cannot be walked.
    #[error(transparent)]
    Analysis(#[from] AnalysisFailure),
}

/// Parse `input` and analyze the resulting grid.
pub fn analyze(input: &str) -> Result<Analysis, Error> {
    let grid = parse_grid(input)?;
    Ok(GridAnalyzer::from(&grid).analyze()?)
}
