//! Matching digests for comparing outcomes across runs.
//!
//! Two runs of a matching algorithm over the same graph should end in the
//! same matching. The matching root is a SHA-256 over the edge list that
//! lets callers check that without shipping or diffing full edge lists.

use graphmatch_types::{Edge, constants};
use sha2::{Digest, Sha256};

use crate::MatchingStore;

/// Compute the matching root over an edge list.
///
/// Order and orientation both feed the hash. [`MatchingStore::to_vec`]
/// emits a canonical order for a given state, so roots of two stores agree
/// exactly when their partner mappings do.
#[must_use]
pub fn compute_matching_root(edges: &[Edge]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(constants::MATCHING_ROOT_DOMAIN);
    hasher.update((edges.len() as u64).to_le_bytes());

    for edge in edges {
        let (a, b) = edge.endpoints();
        hasher.update((a as u64).to_le_bytes());
        hasher.update((b as u64).to_le_bytes());
    }

    let result = hasher.finalize();
    let mut root = [0u8; 32];
    root.copy_from_slice(&result);
    root
}

/// Recompute the root over `edges` and compare with `expected_root`.
#[must_use]
pub fn verify_matching_root(edges: &[Edge], expected_root: &[u8; 32]) -> bool {
    compute_matching_root(edges) == *expected_root
}

impl MatchingStore {
    /// Matching root of the current state.
    #[must_use]
    pub fn matching_root(&self) -> [u8; 32] {
        compute_matching_root(&self.to_vec())
    }

    /// Hex-encoded [`matching_root`](Self::matching_root), for logs.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        hex::encode(self.matching_root())
    }
}
