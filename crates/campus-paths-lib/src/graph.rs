use std::cmp::Ordering;
use std::collections::{btree_set, BTreeMap, BTreeSet};
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Weight attached to a directed edge.
///
/// Labels must be totally ordered so that edge sets enumerate deterministically,
/// and must project to a numeric cost so the solver can sum them along a path.
/// Costs are expected to be non-negative; the shortest-path solver gives no
/// guarantees otherwise.
pub trait EdgeLabel: Ord + Clone + fmt::Debug {
    /// Numeric cost used when summing labels along a path.
    fn cost(&self) -> f64;
}

impl EdgeLabel for u32 {
    fn cost(&self) -> f64 {
        f64::from(*self)
    }
}

impl EdgeLabel for u64 {
    fn cost(&self) -> f64 {
        *self as f64
    }
}

/// Non-negative, finite walking distance between two points.
///
/// Deserialization goes through [`Distance::new`], so serialized weights obey
/// the same bounds as constructed ones.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(try_from = "f64")]
pub struct Distance(f64);

impl Distance {
    /// Create a distance, rejecting negative and non-finite values.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidEdgeCost { cost: value });
        }
        Ok(Self(value))
    }

    /// Raw distance value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Distance {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Distance {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl EdgeLabel for Distance {
    fn cost(&self) -> f64 {
        self.0
    }
}

/// Immutable directed edge carrying a label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabeledEdge<N, L> {
    from: N,
    to: N,
    label: L,
}

impl<N, L> LabeledEdge<N, L> {
    pub fn new(from: N, to: N, label: L) -> Self {
        Self { from, to, label }
    }

    /// Node the edge leaves.
    pub fn from(&self) -> &N {
        &self.from
    }

    /// Node the edge points at.
    pub fn to(&self) -> &N {
        &self.to
    }

    pub fn label(&self) -> &L {
        &self.label
    }
}

impl<N: Ord, L: Ord> PartialOrd for LabeledEdge<N, L> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord, L: Ord> Ord for LabeledEdge<N, L> {
    // Destination first, then label. The source only matters for edges that
    // live in different adjacency sets.
    fn cmp(&self, other: &Self) -> Ordering {
        self.to
            .cmp(&other.to)
            .then_with(|| self.label.cmp(&other.label))
            .then_with(|| self.from.cmp(&other.from))
    }
}

impl<N: fmt::Display, L: fmt::Display> fmt::Display for LabeledEdge<N, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.label)
    }
}

/// Mutable directed graph whose edges carry labels.
///
/// Every node owns a (possibly empty) set of outgoing edges, so the node set is
/// exactly the key set of the adjacency map. Edges may only be added between
/// nodes that already exist, and the same `(from, to, label)` triple is never
/// stored twice. Parallel edges between a pair are allowed when their labels
/// differ. Cycles and self-loops are permitted.
///
/// Nodes and edges enumerate in ascending [`Ord`] order, which keeps listings
/// reproducible regardless of hashing.
#[derive(Debug, Clone)]
pub struct LabeledGraph<N, L> {
    adjacency: BTreeMap<N, BTreeSet<LabeledEdge<N, L>>>,
}

impl<N, L> Default for LabeledGraph<N, L> {
    fn default() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }
}

impl<N, L> LabeledGraph<N, L>
where
    N: Ord + Clone + fmt::Debug,
    L: EdgeLabel,
{
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `node` if absent. Returns `true` when the node was newly added.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, BTreeSet::new());
        self.check_rep();
        true
    }

    /// Insert a directed edge between two existing nodes.
    ///
    /// Returns `Ok(false)` when an identical edge is already present. The
    /// reverse edge is never created implicitly.
    pub fn add_edge(&mut self, from: N, to: N, label: L) -> Result<bool> {
        self.ensure_node(&to)?;
        let edges = self
            .adjacency
            .get_mut(&from)
            .ok_or_else(|| unknown_node(&from))?;
        let inserted = edges.insert(LabeledEdge::new(from, to, label));
        self.check_rep();
        Ok(inserted)
    }

    /// Remove the edge `(from, to, label)`, returning it if it existed.
    pub fn remove_edge(
        &mut self,
        from: &N,
        to: &N,
        label: &L,
    ) -> Result<Option<LabeledEdge<N, L>>> {
        self.ensure_node(to)?;
        let edges = self
            .adjacency
            .get_mut(from)
            .ok_or_else(|| unknown_node(from))?;
        let probe = LabeledEdge::new(from.clone(), to.clone(), label.clone());
        let removed = edges.take(&probe);
        self.check_rep();
        Ok(removed)
    }

    /// Read-only view over the edges leaving `node`.
    pub fn edges_from(&self, node: &N) -> Result<btree_set::Iter<'_, LabeledEdge<N, L>>> {
        self.adjacency
            .get(node)
            .map(BTreeSet::iter)
            .ok_or_else(|| unknown_node(node))
    }

    /// Destinations and labels of the edges leaving `node`, sorted.
    pub fn children(&self, node: &N) -> Result<Vec<(N, L)>> {
        Ok(self
            .edges_from(node)?
            .map(|edge| (edge.to.clone(), edge.label.clone()))
            .collect())
    }

    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of edges across all nodes.
    pub fn edge_total(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum()
    }

    /// Nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.adjacency.keys()
    }

    /// Number of edges that go exactly from `from` to `to`.
    pub fn edge_count(&self, from: &N, to: &N) -> Result<usize> {
        self.ensure_node(to)?;
        Ok(self.edges_from(from)?.filter(|edge| &edge.to == to).count())
    }

    fn ensure_node(&self, node: &N) -> Result<()> {
        if self.adjacency.contains_key(node) {
            Ok(())
        } else {
            Err(unknown_node(node))
        }
    }

    #[cfg(debug_assertions)]
    fn check_rep(&self) {
        for (node, edges) in &self.adjacency {
            for edge in edges {
                debug_assert!(&edge.from == node, "edge stored under the wrong source");
                debug_assert!(
                    self.adjacency.contains_key(&edge.to),
                    "edge points at a node outside the graph"
                );
            }
        }
    }

    #[cfg(not(debug_assertions))]
    fn check_rep(&self) {}
}

fn unknown_node<N: fmt::Debug>(node: &N) -> Error {
    Error::UnknownNode {
        node: format!("{node:?}"),
    }
}
