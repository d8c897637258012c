use itertools::Itertools;
use log::{debug, info, trace};
use thiserror::Error;

use crate::grid::{Classification, Grid};
use crate::location::{Coord, Location};
use crate::network::WireNetwork;
use crate::shape::Axis;

/// Reasons a [`GridAnalyzer`] may fail.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum AnalysisFailure {
    /// No wire cell has exactly one neighbour, so there is no end of the wire to walk from.
    /// This covers grids without any wire as well as wires closed into a loop.
    #[error("the wire network has no dead end to start walking from")]
    NoStartFound,
}

/// The outcome of walking a grid's wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Analysis {
    /// Total number of wraps over every metal bar.
    pub answer: u64,
    /// The dead end the walk began at.
    pub start: Location,
    /// Every visited cell, in walk order.
    pub path: Vec<Location>,
    /// Indices of metal rows.
    pub metal_rows: Vec<Coord>,
    /// Indices of metal columns.
    pub metal_columns: Vec<Coord>,
    /// Junction locations, row-major.
    pub junctions: Vec<Location>,
    /// `(row, signed tally)` for every metal row.
    pub row_tallies: Vec<(Coord, i64)>,
    /// `(column, signed tally)` for every metal column.
    pub column_tallies: Vec<(Coord, i64)>,
}

impl Analysis {
    /// Wraps counted around a single bar; [`None`] if `index` is not a metal bar of that kind.
    pub fn wraps(&self, axis: Axis, index: Coord) -> Option<u64> {
        let tallies = match axis {
            Axis::Row => &self.row_tallies,
            Axis::Column => &self.column_tallies,
        };

        tallies.iter()
            .find(|(bar, _)| *bar == index)
            .map(|(_, sum)| sum.unsigned_abs() / 2)
    }
}

/// Walks the single wire of a [`Grid`] and counts how often it wraps each metal bar.
///
/// Construct from a grid reference, then call [`Self::analyze`].
pub struct GridAnalyzer<'a> {
    grid: &'a Grid,
    classification: Classification,
    network: WireNetwork,
}

impl<'a> From<&'a Grid> for GridAnalyzer<'a> {
    fn from(grid: &'a Grid) -> Self {
        let classification = grid.classify();
        let network = WireNetwork::from_mask(&classification.wire_network);

        Self {
            grid,
            classification,
            network,
        }
    }
}

impl GridAnalyzer<'_> {
    /// The classification this analyzer walks over.
    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    /// The wire graph this analyzer walks over.
    pub fn network(&self) -> &WireNetwork {
        &self.network
    }

    /// Walk the wire once from its first dead end and total up the wraps.
    ///
    /// # Walk
    /// At every cell the next cell is the first neighbour, in up/right/down/left order, that is neither the
    /// predecessor nor already visited. The walk stops when no such neighbour exists.
    ///
    /// # Tallies
    /// Entering a junction from a predecessor adjusts one tally. The move's sign is `+1` for a step right or down
    /// and `-1` for a step left or up; it is negated when the junction cell is not a conductor.
    /// A move along a row adds to the tally of the junction's column, a move along a column adds to its row's.
    ///
    /// The answer is the sum over metal bars of `|tally| / 2`.
    pub fn analyze(&self) -> Result<Analysis, AnalysisFailure> {
        let start = self.network.start().ok_or(AnalysisFailure::NoStartFound)?;
        debug!("walking wire from {} across {} wire cell(s)", start, self.network.node_count());

        let mut explored = vec![false; self.grid.rows() * self.grid.cols()];
        let mut horizontal_sum = vec![0i64; self.grid.rows()];
        let mut vertical_sum = vec![0i64; self.grid.cols()];
        let mut path = vec![start];

        let mut current = start;
        let mut previous: Option<Location> = None;
        explored[self.network.node_id(current)] = true;

        loop {
            let next = self.network.neighbors(current)
                .find(|neighbor| Some(*neighbor) != previous && !explored[self.network.node_id(*neighbor)]);

            if let Some(step) = previous
                .filter(|_| self.classification.is_junction(current))
                .and_then(|prev| self.network.step_between(prev, current))
            {
                let multiplier = match self.grid.cell(current) {
                    Some(cell) if cell.is_conductor() => 1,
                    _ => -1,
                };
                let delta = step.sign() * multiplier;

                match step.crossed_bar() {
                    Axis::Column => vertical_sum[current.col()] += delta,
                    Axis::Row => horizontal_sum[current.row()] += delta,
                }
                trace!("{:?} onto junction {}: {:?} tally {:+}", step, current, step.crossed_bar(), delta);
            }

            let Some(next) = next else {
                break;
            };
            previous = Some(current);
            current = next;
            explored[self.network.node_id(current)] = true;
            path.push(current);
        }
        debug!("walk ended at {} after {} cell(s)", current, path.len());

        let row_tallies = self.classification.metal_rows.iter()
            .map(|row| (*row, horizontal_sum[*row]))
            .collect_vec();
        let column_tallies = self.classification.metal_columns.iter()
            .map(|col| (*col, vertical_sum[*col]))
            .collect_vec();

        let answer = row_tallies.iter()
            .chain(column_tallies.iter())
            .map(|(_, sum)| sum.unsigned_abs() / 2)
            .sum();
        info!("wire wraps {} time(s)", answer);

        Ok(Analysis {
            answer,
            start,
            path,
            metal_rows: self.classification.metal_rows.clone(),
            metal_columns: self.classification.metal_columns.clone(),
            junctions: self.classification.junction_locations(),
            row_tallies,
            column_tallies,
        })
    }
}
