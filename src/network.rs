use itertools::Itertools;
use ndarray::Array2;
use petgraph::graphmap::DiGraphMap;
use strum::VariantArray;

use crate::location::{Coord, Location};
use crate::shape::SquareStep;

/// The adjacency graph over wire-network cells.
///
/// Every adjacency is stored once per direction, weighted by the [`SquareStep`] leading from source to target.
/// A node's outgoing edges are inserted in [`SquareStep::VARIANTS`] order, so [`Self::neighbors`] always yields
/// up, right, down, left.
pub struct WireNetwork {
    pub(crate) graph: DiGraphMap<Location, SquareStep>,
    cols: Coord,
}

impl WireNetwork {
    /// Build the graph from a wire-network mask; `false` cells get no node and no edges.
    pub fn from_mask(wire_network: &Array2<bool>) -> Self {
        let members = wire_network.indexed_iter()
            .filter(|(_, in_network)| **in_network)
            .map(|(index, _)| Location::from(index))
            .collect_vec();

        // each interior cell has at most four neighbours
        let mut graph = DiGraphMap::with_capacity(members.len(), members.len() * SquareStep::VARIANTS.len());
        for location in &members {
            graph.add_node(*location);
        }

        for location in &members {
            for (direction, neighbor) in SquareStep::neighbors_of(*location) {
                if wire_network.get(neighbor.as_index()).copied().unwrap_or(false) {
                    graph.add_edge(*location, neighbor, direction);
                }
            }
        }

        Self {
            graph,
            cols: wire_network.ncols(),
        }
    }

    /// Number of cells in the network.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[inline]
    pub fn contains(&self, location: Location) -> bool {
        self.graph.contains_node(location)
    }

    /// Wire cells adjacent to `location`, in visiting order.
    pub fn neighbors(&self, location: Location) -> impl Iterator<Item = Location> + '_ {
        self.graph.neighbors(location)
    }

    /// How many wire cells are adjacent to `location`; zero for cells outside the network.
    pub fn degree(&self, location: Location) -> usize {
        if !self.contains(location) {
            return 0;
        }
        self.neighbors(location).count()
    }

    /// The direction of the step from `from` to `to`, if they are adjacent wire cells.
    pub fn step_between(&self, from: Location, to: Location) -> Option<SquareStep> {
        self.graph.edge_weight(from, to).copied()
    }

    /// The first dead end (a cell of degree 1) in row-major order.
    pub fn start(&self) -> Option<Location> {
        // #[derive(Ord)] on Location sorts row-major
        self.graph.nodes()
            .sorted()
            .find(|location| self.degree(*location) == 1)
    }

    /// Row-major flattened index of `location`, used to key the visited set.
    pub fn node_id(&self, location: Location) -> usize {
        location.flatten(self.cols)
    }
}
