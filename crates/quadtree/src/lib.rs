//! Uniform quadtree decomposition.
//!
//! This crate contains:
//! - The [`Region`] value type and quadrant arithmetic
//! - [`QuadNode`], its identity allocator and the recursive subdivision
//! - Two read-only views of a built tree: an indented outline and a Graphviz DOT document
//! - [`QuadTree`], a tree-building session that owns its own identity counter
//! - TOML-backed [`Config`] for the driver binary

pub mod config;
mod dot;
mod error;
pub mod node;
mod outline;
mod region;
mod tree;

pub use config::Config;
pub use dot::Dot;
pub use error::QuadTreeError;
pub use node::{NodeIds, QuadNode, Quadrant, SubdivideOutcome};
pub use outline::Outline;
pub use region::Region;
pub use tree::{QuadTree, TreeStats};

/// Inclusive size floor: a region whose width or height is at or below this never subdivides.
pub const SIZE_FLOOR: u32 = 15;

/// Default root region width.
pub const DEFAULT_WIDTH: u32 = 100;

/// Default root region height.
pub const DEFAULT_HEIGHT: u32 = 100;
