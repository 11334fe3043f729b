//! # graphmatch-types
//!
//! Shared types, errors, and configuration for **graphmatch**.
//!
//! This crate is the leaf dependency of the workspace. It defines:
//!
//! - **Vertices and edges**: [`Vertex`], [`Edge`]
//! - **Augmenting paths**: [`AlternatingPath`]
//! - **Configuration**: [`MatchingConfig`]
//! - **Errors**: [`GraphMatchError`] with `GM_ERR_` prefix codes
//! - **Constants**: capacity defaults and limits

pub mod config;
pub mod constants;
pub mod edge;
pub mod error;
pub mod path;

// Re-export all primary types at crate root for ergonomic imports:
//   use graphmatch_types::{Edge, AlternatingPath, GraphMatchError, ...};

pub use config::*;
pub use edge::*;
pub use error::*;
pub use path::*;

// Constants are accessed via `graphmatch_types::constants::FOO`
// (not re-exported to avoid name collisions).
