//! Simple polygons as ordered vertex rings.

use toric_core::{Aabb, Scalar, Vec2};

/// A simple polygon described by an ordered vertex ring.
///
/// The ring is implicitly closed: the last vertex connects back to the
/// first and is not stored twice. The axis-aligned bounds are computed at
/// construction and cached.
///
/// # Examples
///
/// ```
/// use toric_space::Polygon;
/// use toric_core::Vec2;
///
/// let tri = Polygon::new(vec![
///     Vec2::new(5, 5),
///     Vec2::new(1, 1),
///     Vec2::new(3, 6),
/// ]);
/// assert_eq!(tri.bounds().top_left, Vec2::new(1, 1));
/// assert_eq!(tri.bounds().bottom_right, Vec2::new(5, 6));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon<T: Scalar> {
    points: Vec<Vec2<T>>,
    bounds: Aabb<T>,
}

impl<T: Scalar> Polygon<T> {
    /// Build a polygon from its vertex ring.
    ///
    /// # Panics
    ///
    /// Panics when fewer than three vertices are supplied — that is a
    /// programming error, not a data condition.
    pub fn new(points: Vec<Vec2<T>>) -> Self {
        assert!(
            points.len() >= 3,
            "a polygon requires at least three vertices"
        );
        let bounds = ring_bounds(&points);
        Self { points, bounds }
    }

    /// The vertex ring.
    pub fn points(&self) -> &[Vec2<T>] {
        &self.points
    }

    /// Cached axis-aligned bounds.
    pub fn bounds(&self) -> Aabb<T> {
        self.bounds
    }

    /// A copy of the polygon shifted by `delta`, with fresh bounds.
    pub fn translated(&self, delta: Vec2<T>) -> Self {
        Self::new(self.points.iter().map(|&p| p + delta).collect())
    }
}

fn ring_bounds<T: Scalar>(points: &[Vec2<T>]) -> Aabb<T> {
    let first = points[0];
    let (mut min_x, mut max_x) = (first.x, first.x);
    let (mut min_y, mut max_y) = (first.y, first.y);
    for p in &points[1..] {
        min_x = min_x.min_of(p.x);
        max_x = max_x.max_of(p.x);
        min_y = min_y.min_of(p.y);
        max_y = max_y.max_of(p.y);
    }
    Aabb::new(Vec2::new(min_x, min_y), Vec2::new(max_x, max_y))
}
