//! Axis-aligned bounding boxes.

use crate::scalar::Scalar;
use crate::vec2::Vec2;
use std::fmt;

/// Axis selector for per-axis box queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

/// An axis-aligned box described by its top-left and bottom-right corners.
///
/// Invariants: under normal construction `top_left <= bottom_right` on both
/// axes. Degenerate zero-area boxes are legal and represent points.
/// Containment is evaluated on closed intervals, while [`intersects`]
/// counts touching edges and vertices as overlap (within the kind's
/// [`OVERLAP_EPSILON`](Scalar::OVERLAP_EPSILON)).
///
/// [`intersects`]: Aabb::intersects
///
/// # Examples
///
/// ```
/// use toric_core::{Aabb, Vec2};
///
/// let a = Aabb::at(Vec2::new(0, 0), 2, 2);
/// let b = Aabb::at(Vec2::new(2, 0), 2, 2);
///
/// // Edge-touching boxes intersect but do not contain each other.
/// assert!(a.intersects(&b));
/// assert!(!a.contains(&b));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb<T: Scalar> {
    /// Top-left corner (minimum on both axes).
    pub top_left: Vec2<T>,
    /// Bottom-right corner (maximum on both axes).
    pub bottom_right: Vec2<T>,
}

impl<T: Scalar> Aabb<T> {
    /// Build a box from explicit corners.
    pub fn new(top_left: Vec2<T>, bottom_right: Vec2<T>) -> Self {
        debug_assert!(
            top_left.x.before_eq(bottom_right.x) && top_left.y.before_eq(bottom_right.y),
            "invalid Aabb: top_left past bottom_right"
        );
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Build a box at `pos` with the given width and height.
    pub fn at(pos: Vec2<T>, width: T, height: T) -> Self {
        Self::new(pos, pos + Vec2::new(width, height))
    }

    /// Build a box centered at `center` with half-size `half` on each axis.
    pub fn around(center: Vec2<T>, half: T) -> Self {
        let top_left = center - Vec2::new(half, half);
        Self::new(top_left, center + Vec2::new(half, half))
    }

    /// Width of the box.
    pub fn width(&self) -> T {
        self.bottom_right.x.sub(self.top_left.x)
    }

    /// Height of the box.
    pub fn height(&self) -> T {
        self.bottom_right.y.sub(self.top_left.y)
    }

    /// Width and height as a vector.
    pub fn extent(&self) -> Vec2<T> {
        self.bottom_right - self.top_left
    }

    /// Center point (integer kinds truncate toward the top-left).
    pub fn center(&self) -> Vec2<T> {
        self.top_left + Vec2::new(self.width().half(), self.height().half())
    }

    /// A copy of the box shifted by `delta`.
    pub fn translated(&self, delta: Vec2<T>) -> Self {
        Self {
            top_left: self.top_left + delta,
            bottom_right: self.bottom_right + delta,
        }
    }

    /// Whether `other` lies entirely within this box (closed intervals).
    pub fn contains(&self, other: &Self) -> bool {
        self.top_left.x.before_eq(other.top_left.x)
            && self.top_left.y.before_eq(other.top_left.y)
            && other.bottom_right.x.before_eq(self.bottom_right.x)
            && other.bottom_right.y.before_eq(self.bottom_right.y)
    }

    /// Whether `point` lies within this box (closed intervals).
    pub fn contains_point(&self, point: Vec2<T>) -> bool {
        self.top_left.x.before_eq(point.x)
            && point.x.before_eq(self.bottom_right.x)
            && self.top_left.y.before_eq(point.y)
            && point.y.before_eq(self.bottom_right.y)
    }

    /// Whether this box overlaps `other`.
    ///
    /// Returns `true` both when the boxes share interior area and when they
    /// only touch along an edge or vertex.
    pub fn intersects(&self, other: &Self) -> bool {
        self.axis_distance(other, Axis::X).before_eq(T::OVERLAP_EPSILON)
            && self.axis_distance(other, Axis::Y).before_eq(T::OVERLAP_EPSILON)
    }

    /// The gap between the two boxes' projections on `axis`: zero when the
    /// projections overlap, otherwise the distance between the facing edges.
    pub fn axis_distance(&self, other: &Self, axis: Axis) -> T {
        let (a_lo, a_hi) = self.axis_span(axis);
        let (b_lo, b_hi) = other.axis_span(axis);
        // Order the spans so `first` starts no later than `second`.
        let (first_hi, second_lo) = if a_lo.before_eq(b_lo) {
            (a_hi, b_lo)
        } else {
            (b_hi, a_lo)
        };
        if second_lo.before_eq(first_hi) {
            T::ZERO
        } else {
            second_lo.sub(first_hi)
        }
    }

    /// Subdivide into four equal quadrants around the center.
    pub fn split(&self) -> [Self; 4] {
        let half_w = self.width().half();
        let half_h = self.height().half();
        let center = self.center();
        [
            Self::at(self.top_left, half_w, half_h),
            Self::at(Vec2::new(center.x, self.top_left.y), half_w, half_h),
            Self::at(Vec2::new(self.top_left.x, center.y), half_w, half_h),
            Self::at(center, half_w, half_h),
        ]
    }

    fn axis_span(&self, axis: Axis) -> (T, T) {
        match axis {
            Axis::X => (self.top_left.x, self.bottom_right.x),
            Axis::Y => (self.top_left.y, self.bottom_right.y),
        }
    }
}

impl<T: Scalar> fmt::Display for Aabb<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.top_left, self.bottom_right)
    }
}
