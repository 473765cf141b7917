//! Rectangular regions and quadrant arithmetic.

use std::fmt;

use glam::IVec2;

use crate::error::QuadTreeError;
use crate::node::Quadrant;
use crate::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// An axis-aligned rectangle with an integer origin (top-left corner) and extent.
///
/// Dimensions are unsigned, so a negative width or height cannot be constructed.
/// Zero-sized regions are allowed and are treated as leaves by subdivision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    origin: IVec2,
    width: u32,
    height: u32,
}

impl Region {
    /// Create a region, rejecting extents whose far edge overflows `i32`.
    pub fn new(origin: IVec2, width: u32, height: u32) -> Result<Self, QuadTreeError> {
        let fits = |start: i32, len: u32| i64::from(start) + i64::from(len) <= i64::from(i32::MAX);
        if !fits(origin.x, width) || !fits(origin.y, height) {
            return Err(QuadTreeError::RegionOutOfRange {
                x: origin.x,
                y: origin.y,
                width,
                height,
            });
        }
        Ok(Self { origin, width, height })
    }

    /// Create a region from separate coordinates.
    #[inline]
    pub fn from_xywh(x: i32, y: i32, width: u32, height: u32) -> Result<Self, QuadTreeError> {
        Self::new(IVec2::new(x, y), width, height)
    }

    #[inline]
    pub fn origin(&self) -> IVec2 {
        self.origin
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.origin.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.origin.y
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Area in square units.
    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Whether either dimension is at or below `min_size`.
    #[inline]
    pub fn is_at_floor(&self, min_size: u32) -> bool {
        self.width <= min_size || self.height <= min_size
    }

    /// The sub-region covering one quadrant.
    ///
    /// Halves are truncated, so on odd dimensions the four quadrants leave the last
    /// row/column of this region uncovered.
    pub fn quadrant(&self, quadrant: Quadrant) -> Region {
        let half_w = self.width / 2;
        let half_h = self.height / 2;
        // half_w <= width and origin + width fits in i32 (checked in `new`), so no overflow.
        let offset = match quadrant {
            Quadrant::NorthWest => IVec2::ZERO,
            Quadrant::NorthEast => IVec2::new(half_w as i32, 0),
            Quadrant::SouthWest => IVec2::new(0, half_h as i32),
            Quadrant::SouthEast => IVec2::new(half_w as i32, half_h as i32),
        };
        Region {
            origin: self.origin + offset,
            width: half_w,
            height: half_h,
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Self {
            origin: IVec2::ZERO,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Formats the origin as `(x, y)`.
impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.origin.x, self.origin.y)
    }
}
