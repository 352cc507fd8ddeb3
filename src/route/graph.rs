use std::fmt::{Debug, Formatter};
use std::hash::BuildHasherDefault;
use std::time::Instant;

use itertools::Itertools;
use log::{debug, info};
use petgraph::prelude::UnGraphMap;
use rustc_hash::{FxHashMap, FxHasher};

use crate::coord::LatLng;
use crate::directions::{Alternative, Step};
use crate::route::label::{self, LabelMap};

/// Edge weight: the step distance in metres.
pub type Weight = u32;

pub type GraphStructure = UnGraphMap<LatLng, Weight, BuildHasherDefault<FxHasher>>;

/// Summed step data along a node path, for renderer popups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathTotals {
    /// Metres.
    pub distance: u32,
    /// Seconds.
    pub duration: u32,
}

/// Routing graph merged from a set of route alternatives,
/// and actioned upon using `all_paths(..)` and `shortest_path(..)`.
///
/// Built once per directions response and discarded with its results;
/// nothing is cached between queries. Nodes deduplicate on exact
/// coordinate identity and keep insertion order, which is the order
/// label assignment runs over.
pub struct RouteGraph {
    pub(crate) graph: GraphStructure,
    start_nodes: Vec<LatLng>,
    end_nodes: Vec<LatLng>,
    steps: Vec<Step>,
    // First step index per directed endpoint pair. Later steps with the
    // same endpoints keep the earlier entry, matching a linear scan of
    // the flattened step list.
    step_index: FxHashMap<(LatLng, LatLng), usize>,
}

impl Debug for RouteGraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RouteGraph with Nodes: {}, Edges: {}",
            self.graph.node_count(),
            self.graph.edge_count()
        )
    }
}

impl RouteGraph {
    /// Merges the decoded alternatives into one undirected graph.
    ///
    /// Steps are processed in order, alternative by alternative: both
    /// endpoints become nodes (first insertion pins a node's label
    /// position) and the edge between them takes the step's distance.
    /// Re-adding an existing edge overwrites its weight, so the most
    /// recently processed step wins. A zero-length step (`start == end`)
    /// contributes its node but no self-loop edge.
    ///
    /// The first step of an alternative records its start in
    /// `start_nodes`, the last step its end in `end_nodes`; alternatives
    /// without steps record neither. Every step also lands in the
    /// flattened step list, duplicates preserved.
    pub fn build(alternatives: &[Alternative]) -> RouteGraph {
        let start_time = Instant::now();

        let mut graph = GraphStructure::new();
        let mut start_nodes = Vec::with_capacity(alternatives.len());
        let mut end_nodes = Vec::with_capacity(alternatives.len());
        let mut steps = Vec::new();
        let mut step_index = FxHashMap::default();

        for (index, alternative) in alternatives.iter().enumerate() {
            let alt_steps = alternative.steps();
            if alt_steps.is_empty() {
                debug!("Alternative {} has no steps, skipping", index);
                continue;
            }

            for step in alt_steps {
                graph.add_node(step.start);
                graph.add_node(step.end);

                if step.start == step.end {
                    debug!(
                        "Alternative {}: zero-length step at {:?}, no edge added",
                        index, step.start
                    );
                } else if let Some(previous) = graph.add_edge(step.start, step.end, step.distance)
                {
                    if previous != step.distance {
                        debug!(
                            "Edge {:?} -> {:?} re-weighted {}m -> {}m",
                            step.start, step.end, previous, step.distance
                        );
                    }
                }

                step_index
                    .entry((step.start, step.end))
                    .or_insert(steps.len());
                steps.push(step.clone());
            }

            // Emptiness was checked above, first/last always exist.
            if let (Some(first), Some(last)) = (alt_steps.first(), alt_steps.last()) {
                start_nodes.push(first.start);
                end_nodes.push(last.end);
            }
        }

        info!(
            "Merged {} alternative(s) into {} node(s) and {} edge(s) in {:?}",
            alternatives.len(),
            graph.node_count(),
            graph.edge_count(),
            start_time.elapsed()
        );

        RouteGraph {
            graph,
            start_nodes,
            end_nodes,
            steps,
            step_index,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// True when no alternative contributed a step.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains_node(&self, node: LatLng) -> bool {
        self.graph.contains_node(node)
    }

    /// Nodes in insertion order, the order labels are assigned in.
    pub fn nodes(&self) -> impl Iterator<Item = LatLng> + '_ {
        self.graph.nodes()
    }

    /// Labels every node in insertion order. Rebuilding the graph from
    /// the same alternatives yields the same map.
    pub fn labels(&self) -> LabelMap {
        label::labels(self.nodes())
    }

    /// Edges with their current weights.
    pub fn edges(&self) -> impl Iterator<Item = (LatLng, LatLng, Weight)> + '_ {
        self.graph.all_edges().map(|(a, b, weight)| (a, b, *weight))
    }

    pub fn edge_weight(&self, a: LatLng, b: LatLng) -> Option<Weight> {
        self.graph.edge_weight(a, b).copied()
    }

    /// Start node of each alternative, in processing order.
    pub fn start_nodes(&self) -> &[LatLng] {
        &self.start_nodes
    }

    /// End node of each alternative, in processing order.
    pub fn end_nodes(&self) -> &[LatLng] {
        &self.end_nodes
    }

    /// Every step across all alternatives, in processing order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The conventional query pair: the first alternative's start node
    /// and the last-processed alternative's end node. `None` when no
    /// alternative contributed steps.
    pub fn query_endpoints(&self) -> Option<(LatLng, LatLng)> {
        Some((
            self.start_nodes.first().copied()?,
            self.end_nodes.last().copied()?,
        ))
    }

    /// First step running `from -> to` in that direction, the lookup
    /// renderers use to attach instruction text to an edge.
    pub fn step_between(&self, from: LatLng, to: LatLng) -> Option<&Step> {
        self.step_index
            .get(&(from, to))
            .map(|&index| &self.steps[index])
    }

    /// Sums step distance and duration over consecutive pairs of `path`.
    /// Each pair is matched in the step's own direction first, then
    /// reversed, since a path may traverse an undirected edge against
    /// the step that created it. Pairs with no matching step contribute
    /// nothing.
    pub fn path_totals(&self, path: &[LatLng]) -> PathTotals {
        path.iter()
            .tuple_windows()
            .filter_map(|(a, b)| {
                self.step_between(*a, *b)
                    .or_else(|| self.step_between(*b, *a))
            })
            .fold(PathTotals::default(), |totals, step| PathTotals {
                distance: totals.distance + step.distance,
                duration: totals.duration + step.duration,
            })
    }
}
