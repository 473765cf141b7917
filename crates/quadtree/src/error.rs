//! Quadtree error types.

use thiserror::Error;

/// Errors that can occur while building a quadtree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuadTreeError {
    #[error("Region at ({x}, {y}) with size {width}x{height} does not fit in i32 coordinates")]
    RegionOutOfRange {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}
