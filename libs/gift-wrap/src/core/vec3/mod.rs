//! Thin wrapper around `glam::DVec3` shared across hull modules.
//!
//! Points and free vectors are both `DVec3`; addition, scaling and length
//! come from `glam`. The helpers here add the tolerance-guarded operations
//! the wrap relies on, with the tolerance always passed in explicitly.

pub use glam::DVec3 as Vec3;

/// An input point. Points are identified by their index in the input slice
/// and never mutated.
pub type Point = Vec3;

/// Unit vector along +z, the "up" reference of the extremal search.
pub const UNIT_Z: Vec3 = Vec3::Z;

/// Direction vector from `from` to `to`.
///
/// # Examples
/// ```
/// use gift_wrap::core::vec3::{direction, Vec3};
/// let d = direction(Vec3::new(1.0, 1.0, 1.0), Vec3::new(2.0, 3.0, 4.0));
/// assert_eq!(d, Vec3::new(1.0, 2.0, 3.0));
/// ```
#[inline]
pub fn direction(from: Point, to: Point) -> Vec3 {
    to - from
}

/// Cross product.
#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

/// Dot product.
#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f64 {
    a.dot(b)
}

/// Returns `v` scaled to unit length, or `None` when `|v| < tolerance`.
///
/// # Examples
/// ```
/// use gift_wrap::core::vec3::{unit, Vec3};
/// assert_eq!(unit(Vec3::new(0.0, 3.0, 0.0), 1e-10), Some(Vec3::Y));
/// assert_eq!(unit(Vec3::splat(1e-12), 1e-10), None);
/// ```
#[inline]
pub fn unit(v: Vec3, tolerance: f64) -> Option<Vec3> {
    let length = v.length();
    if length < tolerance {
        None
    } else {
        Some(v / length)
    }
}

/// Cosine of the angle between `a` and `b`.
///
/// Returns exactly `0.0` when either vector is shorter than `tolerance`, so a
/// degenerate direction compares as perpendicular to everything instead of
/// producing NaN.
///
/// # Examples
/// ```
/// use gift_wrap::core::vec3::{normalized_dot, Vec3};
/// assert_eq!(normalized_dot(Vec3::X, Vec3::new(5.0, 0.0, 0.0), 1e-10), 1.0);
/// assert_eq!(normalized_dot(Vec3::ZERO, Vec3::X, 1e-10), 0.0);
/// ```
#[inline]
pub fn normalized_dot(a: Vec3, b: Vec3, tolerance: f64) -> f64 {
    let la = a.length();
    let lb = b.length();
    if la < tolerance || lb < tolerance {
        return 0.0;
    }
    a.dot(b) / (la * lb)
}

/// Tolerance-guarded lexicographic `(z, y, x)` comparison: `a` is smaller
/// only if the first coordinate that differs by more than `tolerance` is
/// smaller in `a`.
///
/// # Examples
/// ```
/// use gift_wrap::core::vec3::{lower_zyx, Vec3};
/// let a = Vec3::new(5.0, 0.0, 0.0);
/// let b = Vec3::new(0.0, 0.0, 1.0);
/// assert!(lower_zyx(a, b, 1e-10));
/// assert!(!lower_zyx(a, a, 1e-10));
/// ```
pub fn lower_zyx(a: Point, b: Point, tolerance: f64) -> bool {
    for (ca, cb) in [(a.z, b.z), (a.y, b.y), (a.x, b.x)] {
        if ca < cb - tolerance {
            return true;
        }
        if (ca - cb).abs() >= tolerance {
            return false;
        }
    }
    false
}

/// Largest coordinate range over all three axes, used to derive a
/// scale-relative tolerance. Empty input has extent zero.
///
/// # Examples
/// ```
/// use gift_wrap::core::vec3::{extent, Vec3};
/// let pts = [Vec3::ZERO, Vec3::new(2.0, -3.0, 1.0)];
/// assert_eq!(extent(&pts), 3.0);
/// ```
pub fn extent(points: &[Point]) -> f64 {
    let Some(first) = points.first() else {
        return 0.0;
    };
    let (min, max) = points
        .iter()
        .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
    (max - min).max_element()
}
