//! Shortest-path search over a [`LabeledGraph`].
//!
//! The search is Dijkstra's algorithm over whole [`Path`] values: the fringe
//! holds candidate paths ordered by cost, and a node is settled the first time
//! a path ending on it is popped. Because paths share their prefixes, pushing a
//! candidate costs one allocation regardless of its length.
//!
//! Edge labels must have non-negative costs. Negative costs are not detected
//! and can produce a non-minimal result.

use std::cmp::Ordering;
use std::collections::{BTreeSet, BinaryHeap};
use std::fmt;

use tracing::{debug, warn};

use crate::graph::{EdgeLabel, LabeledGraph};
use crate::path::Path;

/// Strategy seam for shortest-path algorithms.
pub trait PathSolver<N, L>: Send + Sync {
    /// Find a minimum-cost path from `start` to `end`, or `None` when `end` is
    /// unreachable.
    fn solve(&self, graph: &LabeledGraph<N, L>, start: &N, end: &N) -> Option<Path<N>>;
}

/// Stateless Dijkstra solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestPathFinder;

impl<N, L> PathSolver<N, L> for ShortestPathFinder
where
    N: Ord + Clone + fmt::Debug,
    L: EdgeLabel,
{
    fn solve(&self, graph: &LabeledGraph<N, L>, start: &N, end: &N) -> Option<Path<N>> {
        shortest_path(graph, start, end)
    }
}

/// Find a minimum-cost path from `start` to `end` using Dijkstra's algorithm.
///
/// Both nodes are expected to be in the graph. A start node that is missing
/// simply has no outgoing edges, so the result is `None` unless `start == end`.
pub fn shortest_path<N, L>(graph: &LabeledGraph<N, L>, start: &N, end: &N) -> Option<Path<N>>
where
    N: Ord + Clone + fmt::Debug,
    L: EdgeLabel,
{
    let mut finished: BTreeSet<N> = BTreeSet::new();
    let mut fringe = BinaryHeap::new();
    let mut sequence: u64 = 0;

    fringe.push(FringeEntry::new(Path::new(start.clone()), sequence));

    while let Some(FringeEntry { path, .. }) = fringe.pop() {
        let node = path.end();
        if node == end {
            debug!(
                settled = finished.len(),
                hops = path.len(),
                cost = path.cost(),
                "shortest path found"
            );
            return Some(path);
        }
        if finished.contains(node) {
            continue;
        }

        let Ok(edges) = graph.edges_from(node) else {
            continue;
        };
        for edge in edges {
            let child = edge.to();
            if finished.contains(child) {
                continue;
            }
            match path.extend(child.clone(), edge.label().cost()) {
                Ok(next) => {
                    sequence += 1;
                    fringe.push(FringeEntry::new(next, sequence));
                }
                Err(err) => warn!(edge = ?edge, error = %err, "skipping edge with invalid cost"),
            }
        }
        finished.insert(node.clone());
    }

    debug!(settled = finished.len(), "no path between nodes");
    None
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Debug)]
struct FringeEntry<N> {
    cost: FloatOrd,
    sequence: u64,
    path: Path<N>,
}

impl<N> FringeEntry<N> {
    fn new(path: Path<N>, sequence: u64) -> Self {
        Self {
            cost: FloatOrd(path.cost()),
            sequence,
            path,
        }
    }
}

impl<N> PartialEq for FringeEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for FringeEntry<N> {}

impl<N> Ord for FringeEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, then FIFO.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<N> PartialOrd for FringeEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
