use log::debug;
use petgraph::visit::EdgeRef;

use crate::coord::LatLng;
use crate::route::graph::{RouteGraph, Weight};
use crate::route::label::{rendered, LabelMap};

/// Minimum-weight route between two nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    /// Labels joined with `" -> "`.
    pub rendered: String,
    /// Sum of edge weights along the path.
    pub weight: Weight,
    /// The node path itself, endpoints included.
    pub nodes: Vec<LatLng>,
}

impl RouteGraph {
    /// Finds the minimum-weight path from `source` to `target`.
    /// Returns `None` when either endpoint is absent from the graph or
    /// no path connects them. `source == target` yields the singleton
    /// path with weight 0.
    pub fn shortest_path(
        &self,
        source: LatLng,
        target: LatLng,
        labels: &LabelMap,
    ) -> Option<ShortestPath> {
        if !self.contains_node(source) || !self.contains_node(target) {
            debug!(
                "Routing {:?} -> {:?}: endpoint not in graph",
                source, target
            );
            return None;
        }

        debug!("Routing {:?} -> {:?}", source, target);

        let (weight, nodes) = petgraph::algo::astar(
            &self.graph,
            source,
            |finish| finish == target,
            |e| *e.weight(),
            |_| 0 as Weight,
        )?;

        Some(ShortestPath {
            rendered: rendered(&nodes, labels),
            weight,
            nodes,
        })
    }
}
