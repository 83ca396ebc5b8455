//! Space trait compliance test helpers.
//!
//! These functions verify that a topology backend satisfies the invariants
//! required by the [`Space`] contract. Reused across the backend test
//! modules (`Plane2D`, `Torus2D`) for every scalar kind.
//!
//! Note the toroidal metric is deliberately *not* checked for the triangle
//! inequality: the min-of-directed-deltas distance is the shortest wrapped
//! path between two points, which reflexivity and symmetry pin down, while
//! mixed per-axis paths can undercut any triangle bound.

use crate::fragment::FragmentedAabb;
use crate::space::Space;
use toric_core::{Scalar, Vec2};

/// Assert that `metric(a, a) == 0` for all sample points.
pub(crate) fn assert_metric_reflexive<T: Scalar, S: Space<T>>(space: &S, points: &[Vec2<T>]) {
    for &p in points {
        let d = space.metric(p, p);
        assert!(d.approx_eq(T::ZERO), "metric({p}, {p}) = {d}, expected 0");
    }
}

/// Assert that `metric(a, b) == metric(b, a)` for all sample pairs.
pub(crate) fn assert_metric_symmetric<T: Scalar, S: Space<T>>(space: &S, points: &[Vec2<T>]) {
    for &a in points {
        for &b in points {
            let dab = space.metric(a, b);
            let dba = space.metric(b, a);
            assert!(
                dab.approx_eq(dba),
                "metric({a}, {b}) = {dab} != metric({b}, {a}) = {dba}"
            );
        }
    }
}

/// Assert that a normalized vector lies inside the domain and that
/// normalizing twice equals normalizing once.
pub(crate) fn assert_normalize_vector_stable<T: Scalar, S: Space<T>>(
    space: &S,
    points: &[Vec2<T>],
) {
    for &p in points {
        let mut once = p;
        space.normalize_vector(&mut once);
        assert!(
            space.contains(once),
            "normalized {p} -> {once} is outside the domain"
        );
        let mut twice = once;
        space.normalize_vector(&mut twice);
        assert_eq!(twice, once, "normalize_vector is not idempotent at {p}");
    }
}

/// Assert that box normalization is idempotent for boxes anchored at the
/// sample points with a few representative extents.
pub(crate) fn assert_normalize_box_idempotent<T: Scalar, S: Space<T>>(
    space: &S,
    points: &[Vec2<T>],
) {
    let extents = [T::ZERO, space.size().x.half(), space.size().x];
    for &p in points {
        for &extent in &extents {
            let mut boxed = FragmentedAabb::new(p, extent, extent);
            space.normalize(&mut boxed);
            let once = boxed.clone();
            space.normalize(&mut boxed);
            assert_eq!(
                boxed, once,
                "normalize is not idempotent for box at {p} extent {extent}"
            );
        }
    }
}

/// Assert that `distance` is symmetric over boxes anchored at sample points.
pub(crate) fn assert_distance_symmetric<T: Scalar, S: Space<T>>(space: &S, points: &[Vec2<T>]) {
    let half = space.size().x.half();
    for &p in points {
        for &q in points {
            let mut a = FragmentedAabb::new(p, half, half);
            let mut b = FragmentedAabb::new(q, half, half);
            space.normalize(&mut a);
            space.normalize(&mut b);
            let dab = space.distance(&a, &b);
            let dba = space.distance(&b, &a);
            assert!(
                dab.approx_eq(dba),
                "distance({p}, {q}) = {dab} != distance({q}, {p}) = {dba}"
            );
        }
    }
}

/// Run all compliance checks on a space.
pub(crate) fn run_full_compliance<T: Scalar, S: Space<T>>(space: &S, points: &[Vec2<T>]) {
    assert_metric_reflexive(space, points);
    assert_metric_symmetric(space, points);
    assert_normalize_vector_stable(space, points);
    assert_normalize_box_idempotent(space, points);
    assert_distance_symmetric(space, points);
}

/// Sample points covering the interior, edges, and out-of-domain range of
/// an `n`-sized domain.
pub(crate) fn sample_points_i32(n: i32) -> Vec<Vec2<i32>> {
    let coords = [-n - 1, -1, 0, 1, n / 2, n - 1, n, n + 1];
    let mut points = Vec::with_capacity(coords.len() * coords.len());
    for &x in &coords {
        for &y in &coords {
            points.push(Vec2::new(x, y));
        }
    }
    points
}

/// Same coverage as [`sample_points_i32`] through the `u32` bit-pattern
/// representation.
pub(crate) fn sample_points_u32(n: i32) -> Vec<Vec2<u32>> {
    sample_points_i32(n)
        .into_iter()
        .map(|p| Vec2::new(p.x as u32, p.y as u32))
        .collect()
}

/// Continuous analogue of [`sample_points_i32`].
pub(crate) fn sample_points_f64(n: f64) -> Vec<Vec2<f64>> {
    let coords = [-n - 0.5, -0.25, 0.0, 0.75, n / 2.0, n - 0.25, n, n + 0.5];
    let mut points = Vec::with_capacity(coords.len() * coords.len());
    for &x in &coords {
        for &y in &coords {
            points.push(Vec2::new(x, y));
        }
    }
    points
}
