//! Error types for graphmatch.
//!
//! All errors use the `GM_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Alternating path errors
//! - 2xx: Matching state errors
//! - 9xx: General errors

use thiserror::Error;

use crate::Vertex;

/// Central error enum for all graphmatch operations.
#[derive(Debug, Error)]
pub enum GraphMatchError {
    // =================================================================
    // Path Errors (1xx)
    // =================================================================
    /// An augmenting path must derive an odd number of edges.
    #[error("GM_ERR_100: Invalid augmenting path: must have odd length, got {edges} edges")]
    InvalidAugmentingPath { edges: usize },

    /// The path has too few vertices to derive a single edge.
    #[error("GM_ERR_101: Path too short: {vertices} vertices")]
    PathTooShort { vertices: usize },

    // =================================================================
    // Matching State Errors (2xx)
    // =================================================================
    /// The partner mapping is no longer symmetric (or otherwise corrupt).
    #[error("GM_ERR_200: Matching invariant violated: {reason}")]
    InvariantViolation { reason: String },

    /// A Gabow partner array names a partner that does not point back.
    #[error("GM_ERR_201: Inconsistent Gabow array: vertex {index} names {partner}, which does not point back")]
    InconsistentGabowArray { index: Vertex, partner: Vertex },

    /// The matching's highest vertex is too large for a dense partner array.
    #[error("GM_ERR_202: Gabow array too large: highest matched vertex is {highest}")]
    GabowArrayTooLarge { highest: Vertex },

    // =================================================================
    // General (9xx)
    // =================================================================
    /// Serialization / deserialization error.
    #[error("GM_ERR_901: Serialization error: {0}")]
    Serialization(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, GraphMatchError>;

impl From<serde_json::Error> for GraphMatchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
