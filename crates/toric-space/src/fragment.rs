//! Boxes with boundary fragments for wrap-around domains.

use std::fmt;
use toric_core::{Aabb, Scalar, Vec2};

/// Position of a boundary fragment relative to its parent box.
///
/// Names follow the logical cardinal directions of the parent; depending on
/// screen coordinates they may appear flipped (a right-edge fragment renders
/// at the left of the viewport after wrapping).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FragPosition {
    /// Fragment re-entering across the domain's right edge.
    Right,
    /// Fragment re-entering across the domain's bottom edge.
    Bottom,
    /// Corner re-entry, present only when both edges overflow at once.
    BottomRight,
}

impl FragPosition {
    /// All positions in slot order.
    pub const ALL: [Self; 3] = [Self::Right, Self::Bottom, Self::BottomRight];

    fn index(self) -> usize {
        match self {
            Self::Right => 0,
            Self::Bottom => 1,
            Self::BottomRight => 2,
        }
    }
}

/// An axis-aligned box plus up to three boundary fragments.
///
/// On a wrap-around domain, a box whose normalized extent crosses the right
/// or bottom domain edge re-enters from the opposite side. The re-entering
/// parts are stored as fragments in a fixed three-slot array — no heap
/// allocation — keyed by [`FragPosition`]. Fragments are recomputed from
/// scratch every time the owning box is renormalized; a slot whose edge no
/// longer overflows is cleared, never merged.
///
/// The logical `extent` (width, height) is cached at construction and is
/// not changed by normalization: a wrapped box keeps its full size even
/// while its primary rectangle is clipped at the seam. Only
/// [`Space::expand`](crate::Space::expand) grows it.
///
/// # Examples
///
/// ```
/// use toric_space::{FragPosition, Space, Torus2D};
/// use toric_core::Vec2;
///
/// let torus = Torus2D::new(10, 10).unwrap();
/// // A 2x2 box at the bottom-right corner wraps into all three fragments.
/// let boxed = torus.wrap_aabb(toric_core::Aabb::at(Vec2::new(9, 9), 2, 2));
/// assert_eq!(boxed.fragment_count(), 3);
/// assert!(boxed.fragment(FragPosition::BottomRight).is_some());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentedAabb<T: Scalar> {
    bounds: Aabb<T>,
    extent: Vec2<T>,
    frags: [Option<Aabb<T>>; 3],
}

impl<T: Scalar> FragmentedAabb<T> {
    /// Build a fragmented box at `pos` with the given width and height.
    ///
    /// No fragments are populated until a space normalizes the box.
    pub fn new(pos: Vec2<T>, width: T, height: T) -> Self {
        Self {
            bounds: Aabb::at(pos, width, height),
            extent: Vec2::new(width, height),
            frags: [None; 3],
        }
    }

    /// Lift a plain box, caching its extent.
    pub fn from_aabb(aabb: Aabb<T>) -> Self {
        Self {
            bounds: aabb,
            extent: aabb.extent(),
            frags: [None; 3],
        }
    }

    /// A zero-area box representing a point.
    pub fn from_point(point: Vec2<T>) -> Self {
        Self::new(point, T::ZERO, T::ZERO)
    }

    /// The primary (un-wrapped) rectangle.
    pub fn bounds(&self) -> &Aabb<T> {
        &self.bounds
    }

    /// The logical width and height, unchanged by normalization.
    pub fn extent(&self) -> Vec2<T> {
        self.extent
    }

    /// The fragment at `pos`, when that edge currently overflows.
    pub fn fragment(&self, pos: FragPosition) -> Option<&Aabb<T>> {
        self.frags[pos.index()].as_ref()
    }

    /// Number of populated fragment slots (0 to 3).
    pub fn fragment_count(&self) -> usize {
        self.frags.iter().flatten().count()
    }

    /// Visit each populated fragment in slot order.
    pub fn visit_fragments(&self, mut visit: impl FnMut(FragPosition, &Aabb<T>)) {
        for pos in FragPosition::ALL {
            if let Some(frag) = &self.frags[pos.index()] {
                visit(pos, frag);
            }
        }
    }

    /// Whether any piece of `self` (primary box or fragment) contains any
    /// piece of `other`.
    ///
    /// Two boxes that are adjacent across the wrap seam may only relate
    /// through their wrapped copies, so the check runs over the full cross
    /// product of both piece sets — at most 16 pairwise comparisons, and a
    /// single one in the common fragment-free case.
    pub fn contains(&self, other: &Self) -> bool {
        self.pieces()
            .any(|a| other.pieces().any(|b| a.contains(b)))
    }

    /// Whether any piece of `self` intersects any piece of `other`.
    ///
    /// Same cross-product rule as [`contains`](Self::contains); touching
    /// edges count as intersecting.
    pub fn intersects(&self, other: &Self) -> bool {
        self.pieces()
            .any(|a| other.pieces().any(|b| a.intersects(b)))
    }

    /// The primary box and every populated fragment.
    fn pieces(&self) -> impl Iterator<Item = &Aabb<T>> + '_ {
        std::iter::once(&self.bounds).chain(self.frags.iter().flatten())
    }

    /// Recompute the fragment slots from the per-axis overflow recorded
    /// during normalization.
    ///
    /// `dx`/`dy` are `domain - bottom_right` before clamping: negative
    /// exactly when the box overflows past the right/bottom edge. Each
    /// fragment anchors at the opposite edge's zero coordinate and spans the
    /// overflow amount, clamped to the domain for shifts larger than one
    /// period. Slots whose overflow is not negative are cleared.
    pub(crate) fn fragmentation(&mut self, dx: T, dy: T, domain: Vec2<T>) {
        let b = self.bounds;
        self.frags[FragPosition::Right.index()] = if dx.is_negative() {
            let width = dx.neg().clamp_axis(domain.x);
            Some(Aabb::new(
                Vec2::new(T::ZERO, b.top_left.y),
                Vec2::new(width, b.bottom_right.y),
            ))
        } else {
            None
        };
        self.frags[FragPosition::Bottom.index()] = if dy.is_negative() {
            let height = dy.neg().clamp_axis(domain.y);
            Some(Aabb::new(
                Vec2::new(b.top_left.x, T::ZERO),
                Vec2::new(b.bottom_right.x, height),
            ))
        } else {
            None
        };
        self.frags[FragPosition::BottomRight.index()] = if dx.is_negative() && dy.is_negative() {
            let width = dx.neg().clamp_axis(domain.x);
            let height = dy.neg().clamp_axis(domain.y);
            Some(Aabb::new(Vec2::ZERO, Vec2::new(width, height)))
        } else {
            None
        };
    }

    /// Drop every fragment (clamped topologies never fragment).
    pub(crate) fn clear_fragments(&mut self) {
        self.frags = [None; 3];
    }

    /// Mutable access to the primary rectangle for normalization.
    pub(crate) fn bounds_mut(&mut self) -> &mut Aabb<T> {
        &mut self.bounds
    }

    /// Shift both corners by `delta` without renormalizing.
    pub(crate) fn shift(&mut self, delta: Vec2<T>) {
        self.bounds = self.bounds.translated(delta);
    }

    /// Grow the box by `margin` on every side, updating the cached extent.
    pub(crate) fn inflate(&mut self, margin: T) {
        let m = Vec2::new(margin, margin);
        self.bounds = Aabb {
            top_left: self.bounds.top_left - m,
            bottom_right: self.bounds.bottom_right + m,
        };
        self.extent = self.extent + m + m;
    }
}

impl<T: Scalar> fmt::Display for FragmentedAabb<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bounds)
    }
}
