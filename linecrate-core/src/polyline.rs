//! Polyline container

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// An ordered sequence of points describing a path.
///
/// Order is significant and repeated points are kept as-is: two coincident
/// points at different positions are distinct vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline<T> {
    pub points: Vec<T>,
}

impl<T> Polyline<T> {
    /// Create a new empty polyline
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a new polyline with specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Create a polyline from a vector of points
    pub fn from_points(points: Vec<T>) -> Self {
        Self { points }
    }

    /// Get the number of points in the polyline
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the polyline is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a point at the end of the path
    pub fn push(&mut self, point: T) {
        self.points.push(point);
    }

    /// Get an iterator over the points
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.points.iter()
    }

    /// Borrow the points as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.points
    }

    /// First vertex of the path
    pub fn first(&self) -> Option<&T> {
        self.points.first()
    }

    /// Last vertex of the path
    pub fn last(&self) -> Option<&T> {
        self.points.last()
    }
}

impl<T> Default for Polyline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AsRef<[T]> for Polyline<T> {
    fn as_ref(&self) -> &[T] {
        &self.points
    }
}

impl<T> Index<usize> for Polyline<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<T> IntoIterator for Polyline<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Polyline<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<T> Extend<T> for Polyline<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl<T> FromIterator<T> for Polyline<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            points: Vec::from_iter(iter),
        }
    }
}

impl<T> From<Vec<T>> for Polyline<T> {
    fn from(points: Vec<T>) -> Self {
        Self { points }
    }
}
