//! Wrap-around (toroidal) plane topology.

use crate::clip::SutherlandHodgman;
use crate::error::SpaceError;
use crate::fragment::FragmentedAabb;
use crate::plane2d::validate_size;
use crate::polygon::Polygon;
use crate::space::Space;
use smallvec::SmallVec;
use toric_core::{Scalar, Vec2};

/// A finite plane whose opposite edges are identified — topologically a
/// torus.
///
/// Positions wrap into the half-open `[0, size)` on each axis. A box whose
/// extent crosses the right or bottom seam keeps its primary rectangle
/// clipped at the seam and re-enters from the opposite edge as up to three
/// [fragments](crate::FragPosition). The metric is the smaller of the two
/// directed wrapped deltas: the shortest path around the wrap.
///
/// # Examples
///
/// ```
/// use toric_space::{Space, Torus2D};
/// use toric_core::{Aabb, Vec2};
///
/// let torus = Torus2D::new(10, 10).unwrap();
///
/// // Translating a corner box across the seam produces three fragments...
/// let mut boxed = torus.wrap_aabb(Aabb::at(Vec2::new(0, 0), 2, 2));
/// torus.translate(&mut boxed, Vec2::new(-1, -1));
/// assert_eq!(boxed.bounds().top_left, Vec2::new(9, 9));
/// assert_eq!(boxed.fragment_count(), 3);
///
/// // ...and translating back restores the original fragment-free box.
/// torus.translate(&mut boxed, Vec2::new(1, 1));
/// assert_eq!(boxed.bounds().top_left, Vec2::new(0, 0));
/// assert_eq!(boxed.fragment_count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Torus2D<T: Scalar> {
    size: Vec2<T>,
}

impl<T: Scalar> Torus2D<T> {
    /// Create a toroidal plane of period `size_x` by `size_y`.
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

/// The ≤8 non-zero candidate wrap offsets `(mx·size_x, my·size_y)` for
/// `mx, my ∈ {-1, 0, 1}`, deduplicated.
pub(crate) fn wrap_offsets<T: Scalar>(size: Vec2<T>) -> SmallVec<[Vec2<T>; 8]> {
    let mut offsets: SmallVec<[Vec2<T>; 8]> = SmallVec::new();
    for mx in [-1i32, 0, 1] {
        for my in [-1i32, 0, 1] {
            if mx == 0 && my == 0 {
                continue;
            }
            let offset = Vec2::new(axis_multiple(size.x, mx), axis_multiple(size.y, my));
            if !offsets.contains(&offset) {
                offsets.push(offset);
            }
        }
    }
    offsets
}

fn axis_multiple<T: Scalar>(extent: T, multiplier: i32) -> T {
    match multiplier {
        -1 => extent.neg(),
        1 => extent,
        _ => T::ZERO,
    }
}

impl<T: Scalar> Space<T> for Torus2D<T> {
    fn size(&self) -> Vec2<T> {
        self.size
    }

    fn contains(&self, point: Vec2<T>) -> bool {
        T::ZERO.before_eq(point.x)
            && point.x.before(self.size.x)
            && T::ZERO.before_eq(point.y)
            && point.y.before(self.size.y)
    }

    fn normalize_vector(&self, point: &mut Vec2<T>) {
        *point = point.wrap(self.size);
    }

    fn normalize(&self, aabb: &mut FragmentedAabb<T>) {
        let size = self.size;
        let extent = aabb.extent();
        let bounds = aabb.bounds_mut();
        bounds.top_left = bounds.top_left.wrap(size);
        bounds.bottom_right = bounds.top_left + extent;
        // Per-axis overflow: negative exactly when the box crosses the seam.
        let dx = size.x.sub(bounds.bottom_right.x);
        let dy = size.y.sub(bounds.bottom_right.y);
        bounds.bottom_right = bounds.bottom_right.clamp(size);
        aabb.fragmentation(dx, dy, size);
    }

    fn metric(&self, a: Vec2<T>, b: Vec2<T>) -> T {
        let forward = (a - b).wrap(self.size).length();
        let backward = (b - a).wrap(self.size).length();
        forward.min_of(backward)
    }

    fn boundary_fragments(&self, polygon: &Polygon<T>) -> SmallVec<[Polygon<T>; 8]> {
        let clipper = SutherlandHodgman::new(self.viewport());
        let mut fragments = SmallVec::new();
        let mut shifted: Vec<Vec2<T>> = Vec::with_capacity(polygon.points().len());
        for offset in wrap_offsets(self.size) {
            shifted.clear();
            shifted.extend(polygon.points().iter().map(|&p| p + offset));
            if let Some(ring) = clipper.clip(&shifted) {
                fragments.push(Polygon::new(ring));
            }
        }
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use crate::fragment::FragPosition;
    use proptest::prelude::*;
    use toric_core::Aabb;

    fn box_at(x: i32, y: i32, w: i32, h: i32) -> FragmentedAabb<i32> {
        FragmentedAabb::new(Vec2::new(x, y), w, h)
    }

    fn aabb(x0: i32, y0: i32, x1: i32, y1: i32) -> Aabb<i32> {
        Aabb::new(Vec2::new(x0, y0), Vec2::new(x1, y1))
    }

    fn expect_fragments(
        b: &FragmentedAabb<i32>,
        expected: &[(FragPosition, Aabb<i32>)],
    ) {
        assert_eq!(b.fragment_count(), expected.len(), "fragment count");
        for (pos, frag) in expected {
            assert_eq!(b.fragment(*pos), Some(frag), "fragment at {pos:?}");
        }
    }

    // ── Constructor ─────────────────────────────────────────────

    #[test]
    fn new_rejects_empty() {
        assert_eq!(Torus2D::new(0, 5), Err(SpaceError::EmptySpace));
        assert_eq!(Torus2D::new(5.0, 0.0), Err(SpaceError::EmptySpace));
        assert!(Torus2D::new(5, 5).is_ok());
    }

    // ── Vector translation ──────────────────────────────────────

    #[test]
    fn translate_vector_wraps() {
        let torus = Torus2D::new(5, 5).unwrap();
        for (start, delta, expected) in [
            (Vec2::new(2, 3), Vec2::new(-1, -2), Vec2::new(1, 1)),
            (Vec2::new(1, 2), Vec2::new(-1, -2), Vec2::new(0, 0)),
            (Vec2::new(0, 0), Vec2::new(-4, -4), Vec2::new(1, 1)),
            (Vec2::new(4, 0), Vec2::new(-1, 0), Vec2::new(3, 0)),
            (Vec2::new(1, 0), Vec2::new(-4, 0), Vec2::new(2, 0)),
        ] {
            let mut v = start;
            torus.translate_vector(&mut v, delta);
            assert_eq!(v, expected, "translate {start} by {delta}");
        }
    }

    #[test]
    fn normalize_vector_folds_both_signs() {
        let torus = Torus2D::new(5, 5).unwrap();
        let mut v = Vec2::new(7, -2);
        torus.normalize_vector(&mut v);
        assert_eq!(v, Vec2::new(2, 3));
    }

    #[test]
    fn wrap_offset_far_negative() {
        // wrap((-101, -101)) applied as an offset to (2, 2) lands on (1, 1).
        let torus = Torus2D::new(10, 10).unwrap();
        let mut v = Vec2::new(2, 2);
        torus.translate_vector(&mut v, Vec2::new(-101, -101));
        assert_eq!(v, Vec2::new(1, 1));
    }

    // ── Metric ──────────────────────────────────────────────────

    #[test]
    fn metric_worked_i32() {
        let torus = Torus2D::new(9, 9).unwrap();
        assert_eq!(torus.metric(Vec2::new(1, 2), Vec2::new(2, 3)), 2);
        assert_eq!(torus.metric(Vec2::new(1, 2), Vec2::new(1, 2)), 0);
        assert_eq!(torus.metric(Vec2::new(0, 0), Vec2::new(1, 1)), 2);
        assert_eq!(torus.metric(Vec2::new(0, 0), Vec2::new(2, 2)), 3);
        // The wrap-around path is shorter than the direct one.
        assert_eq!(torus.metric(Vec2::new(0, 0), Vec2::new(8, 8)), 2);
        // (9, 9) is one full period: the same point.
        assert_eq!(torus.metric(Vec2::new(0, 0), Vec2::new(9, 9)), 0);
    }

    #[test]
    fn metric_worked_f64() {
        let torus = Torus2D::new(9.0, 9.0).unwrap();
        let cases = [
            (Vec2::new(1.0, 2.0), Vec2::new(2.0, 3.0), 2.0f64.sqrt()),
            (Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0), 8.0f64.sqrt()),
            (Vec2::new(0.0, 0.0), Vec2::new(8.0, 8.0), 2.0f64.sqrt()),
            (Vec2::new(0.0, 0.0), Vec2::new(9.0, 9.0), 0.0),
        ];
        for (a, b, expected) in cases {
            assert!(
                (torus.metric(a, b) - expected).abs() < 1e-12,
                "metric({a}, {b})"
            );
        }
    }

    #[test]
    fn toroidal_metric_never_exceeds_clamped() {
        use crate::plane2d::Plane2D;
        let torus = Torus2D::new(9, 9).unwrap();
        let plane = Plane2D::new(9, 9).unwrap();
        for x in 0..9 {
            for y in 0..9 {
                let a = Vec2::new(0, 0);
                let b = Vec2::new(x, y);
                assert!(
                    torus.metric(a, b) <= plane.metric(a, b),
                    "torus metric exceeds clamped at {b}"
                );
            }
        }
    }

    // ── Box normalization ───────────────────────────────────────

    #[test]
    fn normalize_wraps_fully_outside_box() {
        let torus = Torus2D::new(10, 10).unwrap();
        let mut b = box_at(-2, -2, 2, 2);
        torus.normalize(&mut b);
        assert_eq!(*b.bounds(), aabb(8, 8, 10, 10));
        assert_eq!(b.fragment_count(), 0);
    }

    #[test]
    fn normalize_fragments_straddling_box() {
        let torus = Torus2D::new(10, 10).unwrap();
        let mut b = box_at(-1, -1, 2, 2);
        torus.normalize(&mut b);
        assert_eq!(*b.bounds(), aabb(9, 9, 10, 10));
        expect_fragments(
            &b,
            &[
                (FragPosition::Right, aabb(0, 9, 1, 10)),
                (FragPosition::Bottom, aabb(9, 0, 10, 1)),
                (FragPosition::BottomRight, aabb(0, 0, 1, 1)),
            ],
        );
    }

    #[test]
    fn normalize_converges_after_full_period() {
        let torus = Torus2D::new(10, 10).unwrap();
        let mut far = box_at(-11, -11, 2, 2);
        torus.normalize(&mut far);
        let mut near = box_at(-1, -1, 2, 2);
        torus.normalize(&mut near);
        assert_eq!(far, near);
    }

    // ── Box translation ─────────────────────────────────────────

    #[test]
    fn translate_crosses_right_edge() {
        let torus = Torus2D::new(10, 10).unwrap();
        let mut b = box_at(8, 4, 4, 2);
        torus.translate(&mut b, Vec2::ZERO);
        assert_eq!(*b.bounds(), aabb(8, 4, 10, 6));
        expect_fragments(&b, &[(FragPosition::Right, aabb(0, 4, 2, 6))]);
    }

    #[test]
    fn translate_crosses_bottom_edge() {
        let torus = Torus2D::new(10, 10).unwrap();
        let mut b = box_at(4, 8, 2, 4);
        torus.translate(&mut b, Vec2::ZERO);
        assert_eq!(*b.bounds(), aabb(4, 8, 6, 10));
        expect_fragments(&b, &[(FragPosition::Bottom, aabb(4, 0, 6, 2))]);
    }

    #[test]
    fn translate_crosses_corner() {
        let torus = Torus2D::new(10, 10).unwrap();
        let mut b = box_at(9, 9, 2, 2);
        torus.translate(&mut b, Vec2::ZERO);
        assert_eq!(*b.bounds(), aabb(9, 9, 10, 10));
        expect_fragments(
            &b,
            &[
                (FragPosition::Right, aabb(0, 9, 1, 10)),
                (FragPosition::Bottom, aabb(9, 0, 10, 1)),
                (FragPosition::BottomRight, aabb(0, 0, 1, 1)),
            ],
        );
    }

    #[test]
    fn translate_clears_fragments_when_leaving_seam() {
        let torus = Torus2D::new(10, 10).unwrap();
        let mut b = box_at(8, 4, 4, 2);
        torus.translate(&mut b, Vec2::ZERO);
        assert_eq!(b.fragment_count(), 1);

        torus.translate(&mut b, Vec2::new(-2, 0));
        assert_eq!(*b.bounds(), aabb(6, 4, 10, 6));
        assert_eq!(b.fragment_count(), 0);
    }

    #[test]
    fn translate_through_edge() {
        let torus = Torus2D::new(10, 10).unwrap();
        let mut b = box_at(2, 2, 2, 2);
        torus.translate(&mut b, Vec2::new(8, 0));
        assert_eq!(*b.bounds(), aabb(0, 2, 2, 4));
        assert_eq!(b.fragment_count(), 0);
    }

    #[test]
    fn translate_fragment_sequence_roundtrip() {
        let torus = Torus2D::new(10, 10).unwrap();
        let mut b = box_at(2, 2, 2, 2);

        torus.translate(&mut b, Vec2::new(-3, 0));
        assert_eq!(*b.bounds(), aabb(9, 2, 10, 4));
        expect_fragments(&b, &[(FragPosition::Right, aabb(0, 2, 1, 4))]);

        torus.translate(&mut b, Vec2::new(0, -3));
        assert_eq!(*b.bounds(), aabb(9, 9, 10, 10));
        expect_fragments(
            &b,
            &[
                (FragPosition::Right, aabb(0, 9, 1, 10)),
                (FragPosition::Bottom, aabb(9, 0, 10, 1)),
                (FragPosition::BottomRight, aabb(0, 0, 1, 1)),
            ],
        );

        torus.translate(&mut b, Vec2::new(3, 3));
        assert_eq!(*b.bounds(), aabb(2, 2, 4, 4));
        assert_eq!(b.fragment_count(), 0);
    }

    #[test]
    fn translate_huge_shift_converges() {
        let torus = Torus2D::new(10, 10).unwrap();
        let mut a = box_at(2, 2, 2, 2);
        let mut b = box_at(2, 2, 2, 2);
        torus.translate(&mut a, Vec2::new(-3, 7));
        torus.translate(&mut b, Vec2::new(-3 - 70, 7 + 120));
        assert_eq!(a, b);
    }

    // ── Expand ──────────────────────────────────────────────────

    #[test]
    fn expand_wraps_at_corner() {
        let torus = Torus2D::new(10, 10).unwrap();
        let mut b = box_at(0, 0, 2, 2);
        torus.expand(&mut b, 2);
        assert_eq!(*b.bounds(), aabb(8, 8, 10, 10));
        assert_eq!(b.extent(), Vec2::new(6, 6));
        expect_fragments(
            &b,
            &[
                (FragPosition::Right, aabb(0, 8, 4, 10)),
                (FragPosition::Bottom, aabb(8, 0, 10, 4)),
                (FragPosition::BottomRight, aabb(0, 0, 4, 4)),
            ],
        );
    }

    #[test]
    fn expanded_neighbors_intersect_across_seam() {
        let torus = Torus2D::new(100, 100).unwrap();
        let near_origin = torus.wrap_aabb(Aabb::at(Vec2::new(5, 5), 10, 10));
        let mut near_corner = torus.wrap_aabb(Aabb::at(Vec2::new(96, 96), 10, 10));
        torus.expand(&mut near_corner, 0);
        assert!(near_origin.intersects(&near_corner));
    }

    // ── Box distance ────────────────────────────────────────────

    #[test]
    fn distance_prefers_wrapped_gap() {
        let torus = Torus2D::new(10, 10).unwrap();
        let a = torus.wrap_aabb(Aabb::at(Vec2::new(0, 0), 1, 1));
        let b = torus.wrap_aabb(Aabb::at(Vec2::new(8, 0), 1, 1));
        // Direct gap is 7, the wrapped gap is 3.
        assert_eq!(torus.distance(&a, &b), 3);
        assert_eq!(torus.distance(&b, &a), 3);
    }

    #[test]
    fn distance_zero_through_fragments() {
        let torus = Torus2D::new(10, 10).unwrap();
        let a = torus.wrap_aabb(Aabb::at(Vec2::new(0, 0), 2, 2));
        let b = torus.wrap_aabb(Aabb::at(Vec2::new(9, 9), 2, 2));
        // b's corner fragment covers (0,0)-(1,1).
        assert_eq!(torus.distance(&a, &b), 0);
    }

    // ── Polygon boundary fragments ──────────────────────────────

    #[test]
    fn boundary_fragments_interior_polygon_is_empty() {
        let torus = Torus2D::new(10, 10).unwrap();
        let poly = Polygon::new(vec![Vec2::new(2, 2), Vec2::new(4, 2), Vec2::new(3, 4)]);
        assert!(torus.boundary_fragments(&poly).is_empty());
    }

    #[test]
    fn boundary_fragments_right_overflow() {
        let torus = Torus2D::new(10, 10).unwrap();
        let poly = Polygon::new(vec![
            Vec2::new(8, 2),
            Vec2::new(12, 2),
            Vec2::new(12, 4),
            Vec2::new(8, 4),
        ]);
        let frags = torus.boundary_fragments(&poly);
        // Only the (-size_x, 0) shift re-enters the viewport.
        assert_eq!(frags.len(), 1);
        assert_eq!(frags[0].bounds(), aabb(0, 2, 2, 4));
    }

    #[test]
    fn boundary_fragments_corner_overflow() {
        let torus = Torus2D::new(10, 10).unwrap();
        let poly = Polygon::new(vec![
            Vec2::new(8, 8),
            Vec2::new(12, 8),
            Vec2::new(12, 12),
            Vec2::new(8, 12),
        ]);
        let frags = torus.boundary_fragments(&poly);
        // Left, top, and top-left wrapped copies all re-enter.
        assert_eq!(frags.len(), 3);
    }

    #[test]
    fn wrap_offsets_are_deduplicated_and_nonzero() {
        let offsets = wrap_offsets(Vec2::new(10, 10));
        assert_eq!(offsets.len(), 8);
        assert!(!offsets.contains(&Vec2::ZERO));
    }

    // ── Compliance ──────────────────────────────────────────────

    #[test]
    fn compliance_i32() {
        let torus = Torus2D::new(9, 9).unwrap();
        compliance::run_full_compliance(&torus, &compliance::sample_points_i32(9));
    }

    #[test]
    fn compliance_u32() {
        let torus = Torus2D::new(9u32, 9).unwrap();
        compliance::run_full_compliance(&torus, &compliance::sample_points_u32(9));
    }

    #[test]
    fn compliance_f64() {
        let torus = Torus2D::new(9.0, 9.0).unwrap();
        compliance::run_full_compliance(&torus, &compliance::sample_points_f64(9.0));
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn metric_symmetric(
            ax in 0i32..20, ay in 0i32..20,
            bx in 0i32..20, by in 0i32..20,
        ) {
            let torus = Torus2D::new(20, 20).unwrap();
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert_eq!(torus.metric(a, b), torus.metric(b, a));
        }

        #[test]
        fn normalize_idempotent(
            x in -30i32..30, y in -30i32..30,
            w in 0i32..15, h in 0i32..15,
        ) {
            let torus = Torus2D::new(10, 10).unwrap();
            let mut b = box_at(x, y, w, h);
            torus.normalize(&mut b);
            let once = b.clone();
            torus.normalize(&mut b);
            prop_assert_eq!(b, once);
        }

        #[test]
        fn translate_periodic_shift_converges(
            x in 0i32..10, y in 0i32..10,
            dx in -20i32..20, dy in -20i32..20,
            kx in -3i32..4, ky in -3i32..4,
        ) {
            let torus = Torus2D::new(10, 10).unwrap();
            let mut direct = box_at(x, y, 2, 2);
            let mut shifted = box_at(x, y, 2, 2);
            torus.translate(&mut direct, Vec2::new(dx, dy));
            torus.translate(&mut shifted, Vec2::new(dx + kx * 10, dy + ky * 10));
            prop_assert_eq!(direct, shifted);
        }

        #[test]
        fn wrapped_vector_is_inside(x in -100i32..100, y in -100i32..100) {
            let torus = Torus2D::new(10, 10).unwrap();
            let wrapped = torus.wrap_vector(Vec2::new(x, y));
            prop_assert!(torus.contains(wrapped.bounds().top_left));
        }
    }
}
