//! 2-D coordinate conversions in screen space.
//!
//! [`to_polar`] uses the mathematical orientation of `atan2` while
//! [`to_cartesian`] negates `y` so that increasing angle sweeps the way a
//! screen with a downward y-axis expects. The two are therefore *not* inverse
//! functions: `to_cartesian` applied to `to_polar(x, y)` lands on `(x, -y)`.

use core::f32::consts::TAU;
use libm::{atan2f, cosf, sinf, sqrtf};

/// A point expressed as radius and angle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PolarCoord {
    /// Distance from the origin, never negative when produced by [`to_polar`]
    pub radius: f32,
    /// Angle in radians, in `[0, 2π)` when produced by [`to_polar`]
    pub angle: f32,
}

impl PolarCoord {
    /// Create a polar coordinate from raw parts.
    pub const fn new(radius: f32, angle: f32) -> Self {
        Self { radius, angle }
    }
}

/// A point expressed as `x`/`y` offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CartesianCoord {
    /// Horizontal component
    pub x: f32,
    /// Vertical component
    pub y: f32,
}

impl CartesianCoord {
    /// Create a Cartesian coordinate from raw parts.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Convert `(x, y)` to radius and angle.
///
/// The radius is `sqrt(x² + y²)`. The angle is `atan2(y, x)` shifted by `2π`
/// when negative, so it always lies in `[0, 2π)`.
///
/// # Example
/// ```rust
/// use tactile_core::to_polar;
///
/// let p = to_polar(0.0, -2.0);
/// assert_eq!(p.radius, 2.0);
/// assert!((p.angle - 3.0 * core::f32::consts::FRAC_PI_2).abs() < 1e-6);
/// ```
pub fn to_polar(x: f32, y: f32) -> PolarCoord {
    let radius = sqrtf(x * x + y * y);
    let mut angle = atan2f(y, x);
    if angle < 0.0 {
        angle += TAU;
        // A tiny negative angle can round up to exactly 2π in f32.
        if angle >= TAU {
            angle = 0.0;
        }
    }
    PolarCoord { radius, angle }
}

/// Convert radius and angle to `(x, y)` with the y-axis inverted.
///
/// `x = radius · cos(angle)`, `y = -radius · sin(angle)`.
pub fn to_cartesian(radius: f32, angle: f32) -> CartesianCoord {
    CartesianCoord {
        x: radius * cosf(angle),
        y: -radius * sinf(angle),
    }
}

/// Euclidean distance between `(x1, y1)` and `(x2, y2)`.
///
/// # Example
/// ```rust
/// use tactile_core::distance;
///
/// assert_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
/// ```
#[inline]
pub fn distance(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    sqrtf(dx * dx + dy * dy)
}
