//! # graphmatch-core
//!
//! **Matching state for maximum-matching algorithms.**
//!
//! A [`MatchingStore`] holds the current set of vertex-disjoint edges as a
//! symmetric partner mapping. It answers O(1) point queries and applies
//! augmenting paths found by an external search (Gabow, Edmonds, ...):
//!
//! - **Permissive primitives**: `add`, `delete`, `replace` never repair or
//!   reject; they are building blocks for callers that know what they do
//! - **Safe bulk mutation**: `augment` clears every pairing touching the
//!   path before installing the new edges, so symmetry is preserved
//! - **Diagnostics on the side**: invariant checking lives in the
//!   [`InvariantAudit`] trait rather than in the store itself
//! - **Reproducibility**: [`compute_matching_root`] hashes a matching so two
//!   runs can be compared without diffing edge lists

pub mod audit;
pub mod digest;
pub mod gabow;
pub mod store;

pub use audit::{InvariantAudit, InvariantViolation, log_violations};
pub use digest::{compute_matching_root, verify_matching_root};
pub use store::MatchingStore;
