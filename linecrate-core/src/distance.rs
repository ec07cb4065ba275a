//! Squared distance primitives
//!
//! All comparisons in the simplification algorithms are done on squared
//! distances, so nothing here takes a square root.

use crate::traits::Mappable;

/// Squared Euclidean distance between two points.
#[inline]
pub fn square_distance<A, B>(left: &A, right: &B) -> f64
where
    A: Mappable + ?Sized,
    B: Mappable + ?Sized,
{
    (left.xyz() - right.xyz()).norm_squared()
}

/// Squared distance from `point` to the segment `[start, end]`.
///
/// The projection parameter is clamped at the `end` side only: a point
/// projecting before `start` is measured against the extension of the
/// segment (`start + d * t` with `t < 0`), not against `start` itself.
pub fn segment_square_distance<P, S, E>(point: &P, start: &S, end: &E) -> f64
where
    P: Mappable + ?Sized,
    S: Mappable + ?Sized,
    E: Mappable + ?Sized,
{
    let p = point.xyz();
    let a = start.xyz();
    let b = end.xyz();
    let d = b - a;

    // Degenerate segment
    if d.x == 0.0 && d.y == 0.0 && d.z == 0.0 {
        return (p - a).norm_squared();
    }

    let t = (p - a).dot(&d) / d.norm_squared();
    let nearest = if t > 1.0 { b } else { a + d * t };

    (p - nearest).norm_squared()
}
