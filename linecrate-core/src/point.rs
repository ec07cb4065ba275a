//! Point types and related functionality

use crate::error::{Error, Result};
use crate::traits::Mappable;
use nalgebra::{Point2, Point3, Vector3};

/// A 2D point with double precision coordinates
pub type Point2d = Point2<f64>;

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// A 2D point with single precision coordinates
pub type Point2f = Point2<f32>;

/// A 3D point with single precision coordinates
pub type Point3f = Point3<f32>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;

/// Widen any mappable point to a 3D point.
///
/// 2D points land on the `z = 0` plane.
pub fn lift<P: Mappable + ?Sized>(point: &P) -> Point3d {
    point.xyz()
}

/// View an interleaved `x0 y0 x1 y1 ...` buffer as 2D points without copying.
pub fn points2d_from_flat(coords: &[f64]) -> Result<&[Point2d]> {
    bytemuck::try_cast_slice(coords).map_err(|e| {
        Error::InvalidData(format!(
            "cannot view {} coordinates as 2D points: {:?}",
            coords.len(),
            e
        ))
    })
}

/// View an interleaved `x0 y0 z0 x1 y1 z1 ...` buffer as 3D points without copying.
pub fn points3d_from_flat(coords: &[f64]) -> Result<&[Point3d]> {
    bytemuck::try_cast_slice(coords).map_err(|e| {
        Error::InvalidData(format!(
            "cannot view {} coordinates as 3D points: {:?}",
            coords.len(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lift_2d() {
        let p = lift(&Point2d::new(1.0, 2.0));
        assert_eq!(p, Point3d::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_points2d_from_flat() {
        let coords = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let points = points2d_from_flat(&coords).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[1], Point2d::new(2.0, 3.0));
        assert_eq!(points[2], Point2d::new(4.0, 5.0));
    }

    #[test]
    fn test_points3d_from_flat() {
        let coords = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let points = points3d_from_flat(&coords).unwrap();
        assert_eq!(points, &[Point3d::new(0.0, 1.0, 2.0), Point3d::new(3.0, 4.0, 5.0)]);
    }

    #[test]
    fn test_flat_buffer_with_dangling_coordinate() {
        let coords = [0.0, 1.0, 2.0];
        assert!(matches!(points2d_from_flat(&coords), Err(Error::InvalidData(_))));
        assert!(points3d_from_flat(&coords[..2]).is_err());
    }

    #[test]
    fn test_empty_flat_buffer() {
        assert!(points2d_from_flat(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_point_serde() {
        let json = serde_json::to_string(&Point2d::new(1.5, -2.0)).unwrap();
        assert_eq!(json, "[1.5,-2.0]");
        let back: Point3d = serde_json::from_str("[1.0,2.0,3.0]").unwrap();
        assert_eq!(back, Point3d::new(1.0, 2.0, 3.0));
    }
}
