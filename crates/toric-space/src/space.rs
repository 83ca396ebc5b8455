//! The core `Space` trait shared by both boundary topologies.

use crate::fragment::FragmentedAabb;
use crate::polygon::Polygon;
use smallvec::SmallVec;
use toric_core::{Aabb, Axis, Scalar, Vec2};

/// A finite 2D domain with a fixed boundary topology.
///
/// A space owns its domain size and nothing else: every operation is pure or
/// mutates only the vector/box passed to it, so spaces are freely shared
/// across threads. The two backends differ in how they fold out-of-domain
/// coordinates back in:
///
/// - [`Plane2D`](crate::Plane2D) clamps against hard edges.
/// - [`Torus2D`](crate::Torus2D) wraps across identified opposite edges and
///   tracks the seam-crossing fragments of each box.
///
/// All box mutation goes through [`normalize`](Space::normalize), which is
/// idempotent: normalizing an already-canonical box changes nothing.
pub trait Space<T: Scalar> {
    /// Domain size (width, height).
    fn size(&self) -> Vec2<T>;

    /// Whether the domain contains `point`. Edge inclusivity is
    /// topology-specific: closed for the clamped plane, half-open for the
    /// torus.
    fn contains(&self, point: Vec2<T>) -> bool;

    /// Fold a vector back into the domain.
    fn normalize_vector(&self, point: &mut Vec2<T>);

    /// Re-canonicalize a box after its corners moved: fold it back into the
    /// domain and recompute its boundary fragments.
    fn normalize(&self, aabb: &mut FragmentedAabb<T>);

    /// Topology-aware distance between two points.
    fn metric(&self, a: Vec2<T>, b: Vec2<T>) -> T;

    /// The canonical box spanning the whole domain.
    fn viewport(&self) -> Aabb<T> {
        Aabb::new(Vec2::ZERO, self.size())
    }

    /// Lift a box into this space, normalizing it and populating any
    /// boundary fragments.
    fn wrap_aabb(&self, aabb: Aabb<T>) -> FragmentedAabb<T> {
        let mut boxed = FragmentedAabb::from_aabb(aabb);
        self.normalize(&mut boxed);
        boxed
    }

    /// Lift a point into this space as a zero-area box.
    fn wrap_vector(&self, point: Vec2<T>) -> FragmentedAabb<T> {
        let mut boxed = FragmentedAabb::from_point(point);
        self.normalize(&mut boxed);
        boxed
    }

    /// Move a box by `delta` and renormalize it.
    fn translate(&self, aabb: &mut FragmentedAabb<T>, delta: Vec2<T>) {
        aabb.shift(delta);
        self.normalize(aabb);
    }

    /// Move a point by `delta` and renormalize it.
    fn translate_vector(&self, point: &mut Vec2<T>, delta: Vec2<T>) {
        *point = *point + delta;
        self.normalize_vector(point);
    }

    /// Grow a box by `margin` on every side and renormalize it.
    fn expand(&self, aabb: &mut FragmentedAabb<T>, margin: T) {
        aabb.inflate(margin);
        self.normalize(aabb);
    }

    /// Distance between two boxes.
    ///
    /// Zero when the boxes intersect (fragments included); otherwise the
    /// topology metric applied to the vector of per-axis gaps, which folds
    /// an L-shaped gap through whichever distance the space defines.
    fn distance(&self, a: &FragmentedAabb<T>, b: &FragmentedAabb<T>) -> T {
        if a.intersects(b) {
            return T::ZERO;
        }
        let dx = a.bounds().axis_distance(b.bounds(), Axis::X);
        let dy = a.bounds().axis_distance(b.bounds(), Axis::Y);
        self.metric(Vec2::new(dx, dy), Vec2::ZERO)
    }

    /// Wrapped copies of `polygon` that re-enter the domain across its
    /// edges — the non-rectangular analogue of box fragmentation.
    ///
    /// Clamped topologies never fragment, so the default is empty.
    fn boundary_fragments(&self, polygon: &Polygon<T>) -> SmallVec<[Polygon<T>; 8]> {
        let _ = polygon;
        SmallVec::new()
    }
}
