//! Core traits for linecrate

use crate::point::Point3d;
use nalgebra::{Point2, Point3};

/// Anything that can report its position as `(x, y, z)`.
///
/// The simplification algorithms only ever see points through this
/// projection, so new coordinate representations only need an impl here.
/// Two-dimensional values report `z = 0`.
pub trait Mappable {
    /// The `(x, y, z)` projection of this point
    fn xyz(&self) -> Point3d;
}

impl<T: Mappable + ?Sized> Mappable for &T {
    #[inline]
    fn xyz(&self) -> Point3d {
        (**self).xyz()
    }
}

impl Mappable for Point2<f64> {
    #[inline]
    fn xyz(&self) -> Point3d {
        Point3d::new(self.x, self.y, 0.0)
    }
}

impl Mappable for Point3<f64> {
    #[inline]
    fn xyz(&self) -> Point3d {
        *self
    }
}

impl Mappable for Point2<f32> {
    #[inline]
    fn xyz(&self) -> Point3d {
        Point3d::new(f64::from(self.x), f64::from(self.y), 0.0)
    }
}

impl Mappable for Point3<f32> {
    #[inline]
    fn xyz(&self) -> Point3d {
        Point3d::new(f64::from(self.x), f64::from(self.y), f64::from(self.z))
    }
}

impl Mappable for [f64; 2] {
    #[inline]
    fn xyz(&self) -> Point3d {
        Point3d::new(self[0], self[1], 0.0)
    }
}

impl Mappable for [f64; 3] {
    #[inline]
    fn xyz(&self) -> Point3d {
        Point3d::new(self[0], self[1], self[2])
    }
}
