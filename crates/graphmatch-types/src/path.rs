//! Alternating paths supplied by a path-discovery algorithm.
//!
//! A path `v0, v1, ..., vk` derives the edges `(v0,v1), (v1,v2), ...,
//! (v(k-1),vk)` in order. The matching store only checks the structural
//! requirement that an augmenting path derives an odd number of edges;
//! whether the path really alternates in the caller's graph is the
//! caller's business.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Edge, GraphMatchError, Result, Vertex, constants};

/// An ordered sequence of vertices.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlternatingPath {
    vertices: Vec<Vertex>,
}

impl AlternatingPath {
    /// Build a path without any length check.
    #[must_use]
    pub fn new(vertices: impl IntoIterator<Item = Vertex>) -> Self {
        Self {
            vertices: vertices.into_iter().collect(),
        }
    }

    /// Build a path that derives at least one edge.
    pub fn try_new(vertices: impl IntoIterator<Item = Vertex>) -> Result<Self> {
        let path = Self::new(vertices);
        if path.vertices.len() < constants::MIN_PATH_VERTICES {
            return Err(GraphMatchError::PathTooShort {
                vertices: path.vertices.len(),
            });
        }
        Ok(path)
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Consecutive-pair edges, in path order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices.windows(2).map(|w| Edge(w[0], w[1]))
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Fails with `GM_ERR_100` unless the derived edge count is odd.
    pub fn ensure_augmenting_length(&self) -> Result<()> {
        let edges = self.edge_count();
        if edges % 2 == 1 {
            Ok(())
        } else {
            Err(GraphMatchError::InvalidAugmentingPath { edges })
        }
    }
}

impl From<Vec<Vertex>> for AlternatingPath {
    fn from(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }
}

impl From<&[Vertex]> for AlternatingPath {
    fn from(vertices: &[Vertex]) -> Self {
        Self::new(vertices.iter().copied())
    }
}

impl<const N: usize> From<[Vertex; N]> for AlternatingPath {
    fn from(vertices: [Vertex; N]) -> Self {
        Self::new(vertices)
    }
}

impl fmt::Display for AlternatingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for v in &self.vertices {
            if !first {
                f.write_str(" - ")?;
            }
            write!(f, "{v}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_consecutive_pairs() {
        let path = AlternatingPath::from([1, 2, 3, 4]);
        let edges: Vec<Edge> = path.edges().collect();
        assert_eq!(edges, vec![Edge(1, 2), Edge(2, 3), Edge(3, 4)]);
        assert_eq!(path.edge_count(), 3);
    }

    #[test]
    fn degenerate_paths_have_no_edges() {
        assert_eq!(AlternatingPath::default().edge_count(), 0);
        assert_eq!(AlternatingPath::from([5]).edge_count(), 0);
        assert_eq!(AlternatingPath::from([5]).edges().count(), 0);
    }

    #[test]
    fn augmenting_length_requires_odd_edge_count() {
        assert!(AlternatingPath::from([1, 2]).ensure_augmenting_length().is_ok());
        assert!(AlternatingPath::from([1, 2, 3, 4]).ensure_augmenting_length().is_ok());

        for vertices in [vec![], vec![1], vec![1, 2, 3]] {
            let err = AlternatingPath::from(vertices)
                .ensure_augmenting_length()
                .unwrap_err();
            assert!(matches!(err, GraphMatchError::InvalidAugmentingPath { .. }));
        }
    }

    #[test]
    fn try_new_rejects_single_vertex() {
        let err = AlternatingPath::try_new([3]).unwrap_err();
        assert!(matches!(err, GraphMatchError::PathTooShort { vertices: 1 }));
        assert!(AlternatingPath::try_new([3, 4]).is_ok());
    }

    #[test]
    fn display_joins_vertices() {
        assert_eq!(AlternatingPath::from([1, 2, 3]).to_string(), "1 - 2 - 3");
        assert_eq!(AlternatingPath::default().to_string(), "");
    }

    #[test]
    fn serde_is_a_plain_array() {
        let path: AlternatingPath = serde_json::from_str("[0, 4, 2]").unwrap();
        assert_eq!(path.vertices(), &[0, 4, 2]);
        assert_eq!(serde_json::to_string(&path).unwrap(), "[0,4,2]");
    }
}
