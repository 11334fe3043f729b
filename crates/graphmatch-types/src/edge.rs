//! Vertices and undirected edges.
//!
//! Vertices are plain non-negative integers; the valid universe is whatever
//! the caller's graph uses. "Unmatched" is always an explicit `None`, never
//! a reserved vertex id.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A vertex identifier.
pub type Vertex = usize;

// ---------------------------------------------------------------------------
// Edge
// ---------------------------------------------------------------------------

/// An undirected edge `{a, b}` carried as the ordered pair `(a, b)`.
///
/// The derived `PartialEq` is orientation-sensitive, which is what callers
/// comparing `to_vec()` output expect. Use [`Edge::same_as`] for undirected
/// equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Edge(pub Vertex, pub Vertex);

impl Edge {
    #[must_use]
    pub const fn new(a: Vertex, b: Vertex) -> Self {
        Self(a, b)
    }

    #[must_use]
    pub const fn endpoints(self) -> (Vertex, Vertex) {
        (self.0, self.1)
    }

    /// The same edge with its endpoints swapped.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self(self.1, self.0)
    }

    /// Orientation with the smaller endpoint first.
    #[must_use]
    pub fn normalized(self) -> Self {
        if self.0 <= self.1 { self } else { self.reversed() }
    }

    /// Undirected equality: `(a, b)` is the same edge as `(b, a)`.
    #[must_use]
    pub fn same_as(self, other: Self) -> bool {
        self.normalized() == other.normalized()
    }

    #[must_use]
    pub const fn contains(self, v: Vertex) -> bool {
        self.0 == v || self.1 == v
    }

    /// The endpoint opposite `v`, or `None` if `v` is not on this edge.
    #[must_use]
    pub const fn other(self, v: Vertex) -> Option<Vertex> {
        if self.0 == v {
            Some(self.1)
        } else if self.1 == v {
            Some(self.0)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn is_loop(self) -> bool {
        self.0 == self.1
    }
}

impl From<(Vertex, Vertex)> for Edge {
    fn from((a, b): (Vertex, Vertex)) -> Self {
        Self(a, b)
    }
}

impl From<[Vertex; 2]> for Edge {
    fn from([a, b]: [Vertex; 2]) -> Self {
        Self(a, b)
    }
}

impl From<Edge> for (Vertex, Vertex) {
    fn from(edge: Edge) -> Self {
        (edge.0, edge.1)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.0, self.1)
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Edge {
    /// `count` vertex-disjoint edges drawn from vertices `0..universe`.
    pub fn random_disjoint<R: rand::Rng + ?Sized>(
        rng: &mut R,
        count: usize,
        universe: usize,
    ) -> Vec<Self> {
        use rand::seq::SliceRandom;

        assert!(
            universe >= count * 2,
            "universe of {universe} vertices cannot hold {count} disjoint edges"
        );
        let mut vertices: Vec<Vertex> = (0..universe).collect();
        vertices.shuffle(rng);
        vertices
            .chunks_exact(2)
            .take(count)
            .map(|pair| Self(pair[0], pair[1]))
            .collect()
    }
}
