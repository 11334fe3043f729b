//! Crate-wide constants for graphmatch.

/// Minimum number of vertices an alternating path needs to derive one edge.
pub const MIN_PATH_VERTICES: usize = 2;

/// Domain separator prefixed to every matching digest.
pub const MATCHING_ROOT_DOMAIN: &[u8] = b"graphmatch:matching_root:v1:";

/// Exclusive upper bound on the highest vertex exported as a Gabow array.
pub const MAX_GABOW_VERTICES: usize = 1 << 24;
