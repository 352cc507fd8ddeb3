use std::time::Instant;

use itertools::Itertools;
use log::{debug, info, warn};

use crate::coord::LatLng;
use crate::route::error::RouteError;
use crate::route::graph::{RouteGraph, Weight};
use crate::route::label::{rendered, LabelMap};

/// One enumerated simple path: its label rendering and total weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSummary {
    /// Labels joined with `" -> "`, e.g. `"A -> B -> D"`.
    pub rendered: String,
    /// Sum of edge weights along the path.
    pub weight: Weight,
}

impl RouteGraph {
    /// Enumerates every simple path from `source` to `target`, rendered
    /// through `labels`, in the enumerator's emission order.
    ///
    /// Either endpoint missing from the graph yields no paths, as does
    /// a disconnected pair. `source == target` yields the single
    /// zero-weight path containing that node alone.
    ///
    /// Path count can grow factorially with graph density. Callers with
    /// untrusted input should prefer `all_paths_bounded(..)`.
    pub fn all_paths(
        &self,
        source: LatLng,
        target: LatLng,
        labels: &LabelMap,
    ) -> Vec<PathSummary> {
        let start_time = Instant::now();

        let paths = self
            .simple_paths(source, target)
            .map(|path| self.summarise(&path, labels))
            .collect::<Vec<_>>();

        info!(
            "Enumerated {} path(s) {:?} -> {:?} in {:?}",
            paths.len(),
            source,
            target,
            start_time.elapsed()
        );

        paths
    }

    /// `all_paths(..)` with an upper bound on how many paths are
    /// collected. If the enumerator can emit more than `limit` paths the
    /// search stops with `RouteError::SearchTruncated` rather than
    /// returning a partial listing.
    pub fn all_paths_bounded(
        &self,
        source: LatLng,
        target: LatLng,
        labels: &LabelMap,
        limit: usize,
    ) -> Result<Vec<PathSummary>, RouteError> {
        let mut paths = self.simple_paths(source, target);

        let collected = paths
            .by_ref()
            .take(limit)
            .map(|path| self.summarise(&path, labels))
            .collect::<Vec<_>>();

        if paths.next().is_some() {
            warn!(
                "Path enumeration exceeded {} path(s), abandoning search",
                limit
            );
            return Err(RouteError::SearchTruncated { limit });
        }

        Ok(collected)
    }

    fn simple_paths(
        &self,
        source: LatLng,
        target: LatLng,
    ) -> Box<dyn Iterator<Item = Vec<LatLng>> + '_> {
        if !self.contains_node(source) || !self.contains_node(target) {
            debug!("Paths {:?} -> {:?}: endpoint not in graph", source, target);
            return Box::new(std::iter::empty());
        }

        if source == target {
            return Box::new(std::iter::once(vec![source]));
        }

        Box::new(petgraph::algo::all_simple_paths::<Vec<LatLng>, _, std::hash::RandomState>(
            &self.graph,
            source,
            target,
            0,
            None,
        ))
    }

    fn summarise(&self, path: &[LatLng], labels: &LabelMap) -> PathSummary {
        let weight = path
            .iter()
            .tuple_windows()
            .filter_map(|(a, b)| self.edge_weight(*a, *b))
            .sum();

        PathSummary {
            rendered: rendered(path, labels),
            weight,
        }
    }
}

/// Lightest of the enumerated paths. Ties keep the earliest path in
/// enumeration order. `None` only when `paths` is empty.
pub fn pick_minimum(paths: &[PathSummary]) -> Option<&PathSummary> {
    paths
        .iter()
        .reduce(|best, path| if path.weight < best.weight { path } else { best })
}
