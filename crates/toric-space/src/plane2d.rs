//! Clamped (hard-edged) plane topology.

use crate::error::SpaceError;
use crate::fragment::FragmentedAabb;
use crate::space::Space;
use toric_core::{Scalar, Vec2};

/// A finite plane whose edges are hard boundaries.
///
/// Positions and boxes are clamped into the closed viewport
/// `[0, size_x] x [0, size_y]`; nothing crosses an edge, so boxes never
/// fragment. The metric is the larger of the two directed clamped deltas,
/// which saturates at the domain diagonal instead of growing without bound.
///
/// # Examples
///
/// ```
/// use toric_space::{Plane2D, Space};
/// use toric_core::Vec2;
///
/// let plane = Plane2D::new(9, 9).unwrap();
///
/// // Translation clamps at the edges.
/// let mut v = Vec2::new(0, 0);
/// plane.translate_vector(&mut v, Vec2::new(-4, -4));
/// assert_eq!(v, Vec2::new(0, 0));
///
/// // The opposite corner is a full diagonal away.
/// assert_eq!(plane.metric(Vec2::new(0, 0), Vec2::new(8, 8)), 12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Plane2D<T: Scalar> {
    size: Vec2<T>,
}

impl<T: Scalar> Plane2D<T> {
    /// Create a clamped plane covering `[0, size_x] x [0, size_y]`.
    ///
    /// Returns [`SpaceError::EmptySpace`] when either extent is not
    /// strictly positive, or [`SpaceError::InvalidSize`] when an extent is
    /// outside the kind's representable domain range.
    pub fn new(size_x: T, size_y: T) -> Result<Self, SpaceError> {
        Ok(Self {
            size: validate_size(size_x, size_y)?,
        })
    }
}

/// Validate domain extents for either topology backend.
pub(crate) fn validate_size<T: Scalar>(size_x: T, size_y: T) -> Result<Vec2<T>, SpaceError> {
    for (axis, value) in [("x", size_x), ("y", size_y)] {
        if !value.is_representable_extent() {
            return Err(SpaceError::InvalidSize {
                axis,
                value: value.to_string(),
            });
        }
        if !value.is_positive_extent() {
            return Err(SpaceError::EmptySpace);
        }
    }
    Ok(Vec2::new(size_x, size_y))
}

impl<T: Scalar> Space<T> for Plane2D<T> {
    fn size(&self) -> Vec2<T> {
        self.size
    }

    fn contains(&self, point: Vec2<T>) -> bool {
        T::ZERO.before_eq(point.x)
            && point.x.before_eq(self.size.x)
            && T::ZERO.before_eq(point.y)
            && point.y.before_eq(self.size.y)
    }

    fn normalize_vector(&self, point: &mut Vec2<T>) {
        *point = point.clamp(self.size);
    }

    fn normalize(&self, aabb: &mut FragmentedAabb<T>) {
        let viewport = self.viewport();
        let bounds = aabb.bounds_mut();
        bounds.bottom_right = bounds.bottom_right.clamp(self.size);
        // An interior top-left is left untouched to avoid precision drift.
        if !viewport.contains_point(bounds.top_left) {
            bounds.top_left = bounds.top_left.clamp(self.size);
        }
        aabb.clear_fragments();
    }

    fn metric(&self, a: Vec2<T>, b: Vec2<T>) -> T {
        let forward = (a - b).clamp(self.size).length();
        let backward = (b - a).clamp(self.size).length();
        forward.max_of(backward)
    }
}
