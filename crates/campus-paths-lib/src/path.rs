use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};

/// One hop of a [`Path`].
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<N> {
    start: N,
    end: N,
    cost: f64,
}

impl<N> Segment<N> {
    pub fn start(&self) -> &N {
        &self.start
    }

    pub fn end(&self) -> &N {
        &self.end
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }
}

#[derive(Debug)]
struct Link<N> {
    segment: Segment<N>,
    prev: Option<Arc<Link<N>>>,
}

/// Immutable weighted walk through a graph.
///
/// A path always has a start node and zero or more segments. Extending a path
/// returns a new value that shares every existing segment with its parent, so
/// the solver can hold many diverging candidates without copying segment lists.
/// No operation mutates an existing path.
#[derive(Debug, Clone)]
pub struct Path<N> {
    start: N,
    last: Option<Arc<Link<N>>>,
    cost: f64,
    len: usize,
}

impl<N: Clone> Path<N> {
    /// Zero-length path sitting on `start`.
    pub fn new(start: N) -> Self {
        Self {
            start,
            last: None,
            cost: 0.0,
            len: 0,
        }
    }

    /// Return a new path with one more segment from the current end to `next`.
    ///
    /// `edge_cost` must be finite and non-negative.
    pub fn extend(&self, next: N, edge_cost: f64) -> Result<Self> {
        if !edge_cost.is_finite() || edge_cost < 0.0 {
            return Err(Error::InvalidEdgeCost { cost: edge_cost });
        }
        let segment = Segment {
            start: self.end().clone(),
            end: next,
            cost: edge_cost,
        };
        Ok(Self {
            start: self.start.clone(),
            last: Some(Arc::new(Link {
                segment,
                prev: self.last.clone(),
            })),
            cost: self.cost + edge_cost,
            len: self.len + 1,
        })
    }
}

impl<N> Path<N> {
    /// Sum of all segment costs.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn start(&self) -> &N {
        &self.start
    }

    /// Final node: the last segment's end, or the start for an empty path.
    pub fn end(&self) -> &N {
        self.last
            .as_ref()
            .map(|link| &link.segment.end)
            .unwrap_or(&self.start)
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Segments in traversal order, start to end.
    pub fn segments(&self) -> std::vec::IntoIter<&Segment<N>> {
        let mut segments = Vec::with_capacity(self.len);
        let mut cursor = self.last.as_deref();
        while let Some(link) = cursor {
            segments.push(&link.segment);
            cursor = link.prev.as_deref();
        }
        segments.reverse();
        segments.into_iter()
    }
}

impl<'a, N> IntoIterator for &'a Path<N> {
    type Item = &'a Segment<N>;
    type IntoIter = std::vec::IntoIter<&'a Segment<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments()
    }
}

impl<N: PartialEq> PartialEq for Path<N> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.len == other.len
            && self.segments().eq(other.segments())
    }
}

impl<N: fmt::Display> fmt::Display for Path<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)?;
        for segment in self.segments() {
            write!(f, " -> {}", segment.end)?;
        }
        write!(f, " ({:.3})", self.cost)
    }
}
