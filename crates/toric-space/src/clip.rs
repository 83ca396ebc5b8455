//! Sutherland–Hodgman polygon clipping against an axis-aligned viewport.

use toric_core::{Aabb, Scalar, Vec2};

/// Which of the viewport's four half-planes a pass clips against.
#[derive(Clone, Copy)]
enum HalfPlane {
    MinX,
    MaxX,
    MinY,
    MaxY,
}

impl HalfPlane {
    const ALL: [Self; 4] = [Self::MinX, Self::MaxX, Self::MinY, Self::MaxY];

    fn inside<T: Scalar>(self, v: Vec2<T>, min: Vec2<T>, max: Vec2<T>) -> bool {
        match self {
            Self::MinX => min.x.before_eq(v.x),
            Self::MaxX => v.x.before_eq(max.x),
            Self::MinY => min.y.before_eq(v.y),
            Self::MaxY => v.y.before_eq(max.y),
        }
    }

    fn intersection<T: Scalar>(
        self,
        start: Vec2<T>,
        end: Vec2<T>,
        min: Vec2<T>,
        max: Vec2<T>,
    ) -> Vec2<T> {
        match self {
            Self::MinX => intersect_vertical(start, end, min.x),
            Self::MaxX => intersect_vertical(start, end, max.x),
            Self::MinY => intersect_horizontal(start, end, min.y),
            Self::MaxY => intersect_horizontal(start, end, max.y),
        }
    }
}

/// Clips arbitrary polygons against a convex axis-aligned viewport.
///
/// The input is an ordered vertex ring, implicitly closed (the last vertex
/// connects back to the first). Each of the four viewport half-planes is
/// applied in turn; edges straddling a plane contribute their intersection
/// point, vertices entirely outside are dropped.
///
/// # Examples
///
/// ```
/// use toric_space::SutherlandHodgman;
/// use toric_core::{Aabb, Vec2};
///
/// let clipper = SutherlandHodgman::new(Aabb::at(Vec2::new(0, 0), 10, 10));
///
/// // A triangle poking past the right edge is cut at x = 10.
/// let clipped = clipper
///     .clip(&[Vec2::new(8, 0), Vec2::new(14, 0), Vec2::new(8, 6)])
///     .unwrap();
/// assert!(clipped.iter().all(|v| v.x <= 10));
///
/// // A polygon entirely outside produces no fragment.
/// let outside = [Vec2::new(20, 20), Vec2::new(24, 20), Vec2::new(22, 24)];
/// assert!(clipper.clip(&outside).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct SutherlandHodgman<T: Scalar> {
    viewport: Aabb<T>,
}

impl<T: Scalar> SutherlandHodgman<T> {
    /// Build a clipper for the given viewport.
    pub fn new(viewport: Aabb<T>) -> Self {
        Self { viewport }
    }

    /// The viewport every polygon is clipped against.
    pub fn viewport(&self) -> Aabb<T> {
        self.viewport
    }

    /// Clip `points` to the viewport.
    ///
    /// Returns `None` when the polygon lies entirely outside — a normal
    /// outcome, distinct from a degenerate but valid ring. A returned ring
    /// always has at least three vertices, with consecutive near-identical
    /// vertices (within the kind's epsilon) merged and the closing
    /// duplicate of the first vertex dropped.
    pub fn clip(&self, points: &[Vec2<T>]) -> Option<Vec<Vec2<T>>> {
        if points.is_empty() {
            return None;
        }
        let min = self.viewport.top_left;
        let max = self.viewport.bottom_right;

        // One pair of buffers swapped between passes; nothing is allocated
        // per half-plane.
        let mut output: Vec<Vec2<T>> = points.to_vec();
        let mut input: Vec<Vec2<T>> = Vec::with_capacity(points.len() + 4);

        for plane in HalfPlane::ALL {
            if output.is_empty() {
                return None;
            }
            std::mem::swap(&mut input, &mut output);
            output.clear();

            let mut prev = input[input.len() - 1];
            for &curr in &input {
                let prev_inside = plane.inside(prev, min, max);
                let curr_inside = plane.inside(curr, min, max);
                if curr_inside {
                    if !prev_inside {
                        output.push(plane.intersection(prev, curr, min, max));
                    }
                    output.push(curr);
                } else if prev_inside {
                    output.push(plane.intersection(prev, curr, min, max));
                }
                prev = curr;
            }
        }

        close_ring(output)
    }
}

fn intersect_vertical<T: Scalar>(start: Vec2<T>, end: Vec2<T>, x_bound: T) -> Vec2<T> {
    if start.x.approx_eq(end.x) {
        return Vec2::new(x_bound, start.y);
    }
    let t = (x_bound.to_lerp() - start.x.to_lerp()) / (end.x.to_lerp() - start.x.to_lerp());
    let y = start.y.to_lerp() + t * (end.y.to_lerp() - start.y.to_lerp());
    Vec2::new(x_bound, T::from_lerp(y))
}

fn intersect_horizontal<T: Scalar>(start: Vec2<T>, end: Vec2<T>, y_bound: T) -> Vec2<T> {
    if start.y.approx_eq(end.y) {
        return Vec2::new(start.x, y_bound);
    }
    let t = (y_bound.to_lerp() - start.y.to_lerp()) / (end.y.to_lerp() - start.y.to_lerp());
    let x = start.x.to_lerp() + t * (end.x.to_lerp() - start.x.to_lerp());
    Vec2::new(T::from_lerp(x), y_bound)
}

/// Merge consecutive near-identical vertices and drop a closing duplicate of
/// the first vertex. Fewer than three survivors means no fragment.
fn close_ring<T: Scalar>(points: Vec<Vec2<T>>) -> Option<Vec<Vec2<T>>> {
    let mut ring: Vec<Vec2<T>> = Vec::with_capacity(points.len());
    for p in points {
        if ring.last().map_or(true, |last| !same_vertex(*last, p)) {
            ring.push(p);
        }
    }
    if ring.len() > 1 && same_vertex(ring[0], ring[ring.len() - 1]) {
        ring.pop();
    }
    if ring.len() < 3 {
        None
    } else {
        Some(ring)
    }
}

fn same_vertex<T: Scalar>(a: Vec2<T>, b: Vec2<T>) -> bool {
    a.x.approx_eq(b.x) && a.y.approx_eq(b.y)
}
