//! The matching store: a symmetric vertex -> partner mapping.
//!
//! Partners live in a `BTreeMap<Vertex, Vertex>` keyed by vertex id. A
//! vertex with no entry is unmatched, so vertex `0` is an ordinary vertex
//! and any `usize` id is accepted without allocating up to it. Keys iterate
//! ascending, which fixes the order of `first` and `to_vec`.
//!
//! ## Invariants (maintained by `augment`, not by the raw primitives)
//!
//! - **Symmetry**: `partner(a) == Some(b)` iff `partner(b) == Some(a)`
//! - **Degree <= 1**: one map entry per vertex, so at most one partner
//! - Every matched pair is one edge, counted once

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use graphmatch_types::{AlternatingPath, Edge, MatchingConfig, Result, Vertex};

use crate::audit::log_violations;

/// Current matching of an algorithm run.
#[derive(Debug, Clone, Default)]
pub struct MatchingStore {
    /// `v -> partner`; unmatched vertices have no entry.
    mates: BTreeMap<Vertex, Vertex>,
    audit_on_augment: bool,
}

impl MatchingStore {
    /// Create an empty matching.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty matching tuned by `config`.
    #[must_use]
    pub fn with_config(config: &MatchingConfig) -> Self {
        Self {
            mates: BTreeMap::new(),
            audit_on_augment: config.audit_on_augment,
        }
    }

    /// Build a matching by adding each edge in turn.
    ///
    /// Edges are applied with the raw [`add`](Self::add), so a list that
    /// reuses a vertex produces the same half-set state `add` would.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let mut store = Self::new();
        for edge in edges {
            store.add(edge);
        }
        store
    }

    // =================================================================
    // Raw primitives
    // =================================================================

    /// Record `a` and `b` as partners.
    ///
    /// Any previous partner of `a` or `b` is overwritten without clearing
    /// the far end of that old pairing. Delete stale edges first.
    pub fn add(&mut self, edge: impl Into<Edge>) {
        let Edge(a, b) = edge.into();
        tracing::trace!(a, b, "add");
        self.mates.insert(a, b);
        self.mates.insert(b, a);
    }

    /// Clear both endpoints, whatever they currently point at. Idempotent.
    pub fn delete(&mut self, edge: impl Into<Edge>) {
        let Edge(a, b) = edge.into();
        tracing::trace!(a, b, "delete");
        self.mates.remove(&a);
        self.mates.remove(&b);
    }

    /// `delete(old)` then `add(new)`, with no check that `old` was present.
    pub fn replace(&mut self, old: impl Into<Edge>, new: impl Into<Edge>) {
        self.delete(old);
        self.add(new);
    }

    /// Replace `matched` with `replacement` only if `matched` is currently
    /// an edge of the matching. Returns whether the replacement happened.
    pub fn replace_if_matched(
        &mut self,
        matched: impl Into<Edge>,
        replacement: impl Into<Edge>,
    ) -> bool {
        let matched = matched.into();
        if self.has_edge(matched) {
            self.replace(matched, replacement);
            true
        } else {
            false
        }
    }

    // =================================================================
    // Augmentation
    // =================================================================

    /// Apply an augmenting path.
    ///
    /// ## Algorithm
    ///
    /// 1. Reject the path unless it derives an odd number of edges
    /// 2. For every path vertex with a partner, delete that pairing
    /// 3. Add the derived edges at even indices (0, 2, 4, ...)
    ///
    /// Step 2 runs to completion before step 3, so no add ever overwrites
    /// a live pairing. On a genuine augmenting path the matching grows by
    /// exactly one edge; the store does not check that the path alternates
    /// in the caller's graph.
    ///
    /// On error the matching is left untouched.
    pub fn augment(&mut self, path: &AlternatingPath) -> Result<&mut Self> {
        path.ensure_augmenting_length()?;
        let size_before = self.size();

        for &v in path.vertices() {
            if let Some(w) = self.partner(v) {
                self.delete(Edge(v, w));
            }
        }
        for edge in path.edges().step_by(2) {
            self.add(edge);
        }

        tracing::debug!(
            path_vertices = path.len(),
            size_before,
            size_after = self.size(),
            "Augmented matching"
        );

        if self.audit_on_augment {
            log_violations(&*self);
        }
        Ok(self)
    }

    // =================================================================
    // Queries
    // =================================================================

    /// `v`'s partner, or `None` if `v` is unmatched.
    #[must_use]
    pub fn partner(&self, v: Vertex) -> Option<Vertex> {
        self.mates.get(&v).copied()
    }

    /// True iff each endpoint names the other. Both directions are checked
    /// so a half-set pairing does not count.
    #[must_use]
    pub fn has_edge(&self, edge: impl Into<Edge>) -> bool {
        let Edge(a, b) = edge.into();
        self.partner(a) == Some(b) && self.partner(b) == Some(a)
    }

    /// True iff `v` currently has a partner.
    #[must_use]
    pub fn has_vertex(&self, v: Vertex) -> bool {
        self.partner(v).is_some()
    }

    /// True iff any of `candidates` currently has a partner.
    pub fn has_any_vertex(&self, candidates: impl IntoIterator<Item = Vertex>) -> bool {
        candidates.into_iter().any(|v| self.has_vertex(v))
    }

    /// All matched vertices, ascending.
    #[must_use]
    pub fn vertexes(&self) -> BTreeSet<Vertex> {
        self.matched().map(|(v, _)| v).collect()
    }

    /// `candidates` minus the matched vertices.
    pub fn unmatched_vertexes_in(
        &self,
        candidates: impl IntoIterator<Item = Vertex>,
    ) -> BTreeSet<Vertex> {
        candidates
            .into_iter()
            .filter(|&v| !self.has_vertex(v))
            .collect()
    }

    /// Number of matched edges: matched vertices / 2.
    #[must_use]
    pub fn size(&self) -> usize {
        self.matched_vertex_count() / 2
    }

    /// Number of vertices with a partner entry, half-set ones included.
    #[must_use]
    pub fn matched_vertex_count(&self) -> usize {
        self.mates.len()
    }

    /// Returns `true` if no vertex is matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mates.is_empty()
    }

    /// The edge at the lowest matched vertex `j`, oriented
    /// `(partner(j), j)`. `None` on an empty matching.
    #[must_use]
    pub fn first(&self) -> Option<Edge> {
        self.matched().next().map(|(j, mate)| Edge(mate, j))
    }

    /// Every matched edge once, in ascending order of its first-seen
    /// endpoint.
    ///
    /// A single ascending pass emits `(i, partner(i))` for each matched `i`
    /// not yet consumed and marks `partner(i)` consumed, so the far end is
    /// skipped when the pass reaches it.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Edge> {
        let mut consumed = BTreeSet::new();
        let mut edges = Vec::with_capacity(self.size());
        for (i, mate) in self.matched() {
            if consumed.contains(&i) {
                continue;
            }
            edges.push(Edge(i, mate));
            consumed.insert(mate);
        }
        edges
    }

    /// Iterate the edges in [`to_vec`](Self::to_vec) order.
    pub fn iter(&self) -> std::vec::IntoIter<Edge> {
        self.to_vec().into_iter()
    }

    /// Every `(vertex, partner)` entry, ascending by vertex.
    pub(crate) fn matched(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.mates.iter().map(|(&v, &mate)| (v, mate))
    }
}

/// Two stores are equal when they hold the same partner entries, regardless
/// of configuration.
impl PartialEq for MatchingStore {
    fn eq(&self, other: &Self) -> bool {
        self.matched().eq(other.matched())
    }
}

impl Eq for MatchingStore {}

impl<E: Into<Edge>> FromIterator<E> for MatchingStore {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl<E: Into<Edge>> Extend<E> for MatchingStore {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for edge in iter {
            self.add(edge);
        }
    }
}

impl IntoIterator for &MatchingStore {
    type Item = Edge;
    type IntoIter = std::vec::IntoIter<Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders as `[[0, 2], [1, 3]]`, in [`MatchingStore::to_vec`] order.
impl fmt::Display for MatchingStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, edge) in self.to_vec().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{edge}")?;
        }
        f.write_str("]")
    }
}
