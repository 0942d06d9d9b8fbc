//! Physical pixel coordinates for slider geometry.
//!
//! Pointer positions arrive in the host's device coordinate space. This module
//! provides the small set of types the slider needs to relate those positions
//! to the bounding box of its track.
//!
//! # Key Types
//!
//! - [`Px`] - A single physical pixel coordinate value, negative values allowed
//! - [`PxPosition`] - A 2D position in physical pixel space
//! - [`PxRect`] - An axis-aligned rectangle, used for the track bounds
//!
//! # Coordinate System
//!
//! - Origin (0, 0) at the top-left corner
//! - X-axis increases to the right
//! - Y-axis increases downward
//!
//! # Example
//!
//! ```
//! use value_slider_ui::px::{Px, PxPosition, PxRect};
//!
//! let track = PxRect::new(Px(10), Px(20), Px(200), Px(8));
//! let pointer = PxPosition::new(Px(110), Px(24));
//!
//! assert!(track.contains(pointer));
//! assert_eq!(track.right(), Px(210));
//! ```

use std::ops::{Add, Sub};

/// A physical pixel coordinate value.
///
/// # Examples
///
/// ```
/// use value_slider_ui::px::Px;
///
/// let a = Px::new(100);
/// let b = Px(50);
/// assert_eq!(a - b, Px(50));
/// assert_eq!(a.to_f64(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Px(pub i32);

impl Px {
    /// A constant representing zero pixels.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Px` instance from an i32 value.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Converts the pixel value to f64 for ratio arithmetic.
    pub fn to_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Saturating integer addition.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Saturating integer subtraction.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Add for Px {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Px {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl From<i32> for Px {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// A 2D position in physical pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PxPosition {
    /// The x-coordinate in physical pixels
    pub x: Px,
    /// The y-coordinate in physical pixels
    pub y: Px,
}

impl PxPosition {
    /// A constant representing the zero position (0, 0).
    pub const ZERO: Self = Self { x: Px(0), y: Px(0) };

    /// Creates a new position from x and y coordinates.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }

    /// Returns a new position offset by the given deltas.
    pub fn offset(self, dx: Px, dy: Px) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// An axis-aligned rectangle in physical pixel space.
///
/// The slider uses this for the bounding box of its track: the `x`/`y`
/// offset plus the client extent along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PxRect {
    /// The x-coordinate of the top-left corner
    pub x: Px,
    /// The y-coordinate of the top-left corner
    pub y: Px,
    /// The width of the rectangle
    pub width: Px,
    /// The height of the rectangle
    pub height: Px,
}

impl PxRect {
    /// A constant representing a zero rectangle (0×0 at position (0, 0)).
    pub const ZERO: Self = Self {
        x: Px::ZERO,
        y: Px::ZERO,
        width: Px::ZERO,
        height: Px::ZERO,
    };

    /// Creates a new rectangle from position and size.
    pub const fn new(x: Px, y: Px, width: Px, height: Px) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> Px {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> Px {
        self.y.saturating_add(self.height)
    }

    /// Checks whether the position lies inside the rectangle.
    pub fn contains(&self, position: PxPosition) -> bool {
        position.x >= self.x
            && position.x < self.right()
            && position.y >= self.y
            && position.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_arithmetic() {
        let a = Px(10);
        let b = Px(5);

        assert_eq!(a + b, Px(15));
        assert_eq!(a - b, Px(5));
        assert_eq!(b - a, Px(-5));
    }

    #[test]
    fn test_px_saturating_arithmetic() {
        let max = Px(i32::MAX);
        let min = Px(i32::MIN);
        assert_eq!(max.saturating_add(Px(1)), max);
        assert_eq!(min.saturating_sub(Px(1)), min);
        assert_eq!(Px(3).saturating_sub(min), max);
    }

    #[test]
    fn test_px_position_offset() {
        let pos = PxPosition::new(Px(10), Px(-5));
        assert_eq!(pos.offset(Px(2), Px(3)), PxPosition::new(Px(12), Px(-2)));
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = PxRect::new(Px(0), Px(0), Px(100), Px(10));
        assert!(rect.contains(PxPosition::new(Px(0), Px(0))));
        assert!(rect.contains(PxPosition::new(Px(99), Px(9))));
        assert!(!rect.contains(PxPosition::new(Px(100), Px(5))));
        assert!(!rect.contains(PxPosition::new(Px(50), Px(-1))));
    }
}
