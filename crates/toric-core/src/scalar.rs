//! Numeric scalar kinds for vector and box components.
//!
//! The toolkit supports a closed set of component types — `i32`, `u32`, and
//! `f64` — each with its own clamp, wrap, length, and overflow behavior.
//! The [`Scalar`] trait is sealed, so an unsupported component type is a
//! compile error rather than a runtime branch.

use std::fmt;

mod private {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for f64 {}
}

/// Component arithmetic for one numeric kind.
///
/// Implementations exist for exactly three types:
///
/// - `i32` — discrete signed coordinates.
/// - `u32` — discrete coordinates whose raw bits are reinterpreted as `i32`
///   wherever sign matters. A "negative" coordinate is the two's-complement
///   bit pattern of that value sitting in the unsigned slot;
///   [`clamp_axis`](Scalar::clamp_axis), [`wrap_axis`](Scalar::wrap_axis),
///   [`is_negative`](Scalar::is_negative), and [`before`](Scalar::before)
///   all fold it correctly where a plain unsigned reading would see a huge
///   positive value.
/// - `f64` — continuous coordinates.
///
/// Arithmetic on the integer kinds wraps on overflow, so a negative delta
/// produced by [`sub`](Scalar::sub) survives as a bit pattern for a later
/// `wrap_axis`/`clamp_axis` to fold back into the domain.
///
/// # Examples
///
/// ```
/// use toric_core::Scalar;
///
/// // Integer length rounds up, so separation is never under-reported.
/// assert_eq!(<i32 as Scalar>::length(1, 1), 2);
///
/// // Wrapping folds negative inputs into [0, bound).
/// assert_eq!((-99i32).wrap_axis(10), 1);
///
/// // A u32 slot holding the bit pattern of -8 clamps to 0, not to a huge
/// // positive coordinate.
/// let raw = (-8i32) as u32;
/// assert_eq!(raw.clamp_axis(100), 0);
/// ```
pub trait Scalar:
    private::Sealed + Copy + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Additive identity.
    const ZERO: Self;

    /// Tolerance under which two almost-touching extents count as
    /// overlapping: zero for the integer kinds, a small positive value for
    /// `f64`.
    const OVERLAP_EPSILON: Self;

    /// Componentwise sum. Wrapping for the integer kinds.
    fn add(self, other: Self) -> Self;

    /// Componentwise difference. Wrapping for the integer kinds: on `u32`
    /// the result of subtracting a larger value is the bit pattern of the
    /// negative delta, not a saturated zero.
    fn sub(self, other: Self) -> Self;

    /// Componentwise product. Wrapping for the integer kinds.
    fn mul(self, other: Self) -> Self;

    /// Additive inverse (`wrapping_neg` for the integer kinds).
    fn neg(self) -> Self;

    /// Halve the value. Used by quadrant splits and centers.
    fn half(self) -> Self;

    /// Euclidean norm of the vector `(x, y)`.
    ///
    /// Integer kinds round **up** to the next representable value so that
    /// distance comparisons stay conservative; squaring happens in a wider
    /// representation and cannot overflow.
    fn length(x: Self, y: Self) -> Self;

    /// Clamp into the closed interval `[0, bound]`.
    fn clamp_axis(self, bound: Self) -> Self;

    /// Fold into the half-open interval `[0, bound)` with modulo semantics.
    ///
    /// A `bound` of zero is a no-op, not an error. Negative inputs
    /// (including `u32` bit patterns of negative values) land in the
    /// non-negative range.
    fn wrap_axis(self, bound: Self) -> Self;

    /// Sign under this kind's interpretation.
    fn is_negative(self) -> bool;

    /// Strict ordering under this kind's interpretation.
    fn before(self, other: Self) -> bool;

    /// Non-strict ordering under this kind's interpretation.
    fn before_eq(self, other: Self) -> bool {
        !other.before(self)
    }

    /// The smaller of two values under this kind's interpretation.
    fn min_of(self, other: Self) -> Self {
        if self.before(other) {
            self
        } else {
            other
        }
    }

    /// The larger of two values under this kind's interpretation.
    fn max_of(self, other: Self) -> Self {
        if self.before(other) {
            other
        } else {
            self
        }
    }

    /// Widen for clip-edge interpolation.
    fn to_lerp(self) -> f64;

    /// Narrow an interpolated value back. Integer kinds round to nearest.
    fn from_lerp(value: f64) -> Self;

    /// Equality within [`OVERLAP_EPSILON`](Scalar::OVERLAP_EPSILON)
    /// (exact for the integer kinds).
    fn approx_eq(self, other: Self) -> bool;

    /// Whether the value lies in the kind's usable domain-extent range
    /// (`u32` extents must fit `i32` so signed reinterpretation stays
    /// total; `f64` extents must be finite).
    fn is_representable_extent(self) -> bool;

    /// Whether the value is strictly positive under this kind's
    /// interpretation.
    fn is_positive_extent(self) -> bool;
}

impl Scalar for i32 {
    const ZERO: Self = 0;
    const OVERLAP_EPSILON: Self = 0;

    fn add(self, other: Self) -> Self {
        self.wrapping_add(other)
    }

    fn sub(self, other: Self) -> Self {
        self.wrapping_sub(other)
    }

    fn mul(self, other: Self) -> Self {
        self.wrapping_mul(other)
    }

    fn neg(self) -> Self {
        self.wrapping_neg()
    }

    fn half(self) -> Self {
        self / 2
    }

    fn length(x: Self, y: Self) -> Self {
        let sq = i64::from(x) * i64::from(x) + i64::from(y) * i64::from(y);
        (sq as f64).sqrt().ceil() as Self
    }

    fn clamp_axis(self, bound: Self) -> Self {
        if self > bound {
            bound
        } else if self < 0 {
            0
        } else {
            self
        }
    }

    fn wrap_axis(self, bound: Self) -> Self {
        if bound == 0 {
            return self;
        }
        let m = self % bound;
        if m < 0 {
            m + bound
        } else {
            m
        }
    }

    fn is_negative(self) -> bool {
        self < 0
    }

    fn before(self, other: Self) -> bool {
        self < other
    }

    fn to_lerp(self) -> f64 {
        f64::from(self)
    }

    fn from_lerp(value: f64) -> Self {
        value.round() as Self
    }

    fn approx_eq(self, other: Self) -> bool {
        self == other
    }

    fn is_representable_extent(self) -> bool {
        true
    }

    fn is_positive_extent(self) -> bool {
        self > 0
    }
}

impl Scalar for u32 {
    const ZERO: Self = 0;
    const OVERLAP_EPSILON: Self = 0;

    fn add(self, other: Self) -> Self {
        self.wrapping_add(other)
    }

    fn sub(self, other: Self) -> Self {
        self.wrapping_sub(other)
    }

    fn mul(self, other: Self) -> Self {
        self.wrapping_mul(other)
    }

    fn neg(self) -> Self {
        self.wrapping_neg()
    }

    fn half(self) -> Self {
        ((self as i32) / 2) as Self
    }

    fn length(x: Self, y: Self) -> Self {
        let (x, y) = (i64::from(x as i32), i64::from(y as i32));
        let sq = x * x + y * y;
        (sq as f64).sqrt().ceil() as i32 as Self
    }

    fn clamp_axis(self, bound: Self) -> Self {
        let v = self as i32;
        if v < 0 {
            0
        } else if v > bound as i32 {
            bound
        } else {
            self
        }
    }

    fn wrap_axis(self, bound: Self) -> Self {
        if bound == 0 {
            return self;
        }
        let b = i64::from(bound);
        // Plain unsigned modulo would leave a negative delta as a huge
        // positive coordinate; fold through the signed interpretation.
        let m = i64::from(self as i32) % b;
        let folded = if m < 0 { m + b } else { m };
        folded as Self
    }

    fn is_negative(self) -> bool {
        (self as i32) < 0
    }

    fn before(self, other: Self) -> bool {
        (self as i32) < (other as i32)
    }

    fn to_lerp(self) -> f64 {
        f64::from(self as i32)
    }

    fn from_lerp(value: f64) -> Self {
        (value.round() as i32) as Self
    }

    fn approx_eq(self, other: Self) -> bool {
        self == other
    }

    fn is_representable_extent(self) -> bool {
        self <= i32::MAX as Self
    }

    fn is_positive_extent(self) -> bool {
        self > 0
    }
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;
    const OVERLAP_EPSILON: Self = 1e-9;

    fn add(self, other: Self) -> Self {
        self + other
    }

    fn sub(self, other: Self) -> Self {
        self - other
    }

    fn mul(self, other: Self) -> Self {
        self * other
    }

    fn neg(self) -> Self {
        -self
    }

    fn half(self) -> Self {
        self / 2.0
    }

    fn length(x: Self, y: Self) -> Self {
        (x * x + y * y).sqrt()
    }

    fn clamp_axis(self, bound: Self) -> Self {
        if self > bound {
            bound
        } else if self < 0.0 {
            0.0
        } else {
            self
        }
    }

    fn wrap_axis(self, bound: Self) -> Self {
        if bound == 0.0 {
            return self;
        }
        let m = self % bound;
        if m < 0.0 {
            // Folding a tiny negative remainder can round up to `bound`
            // itself; keep the result inside [0, bound).
            let folded = m + bound;
            if folded < bound {
                folded
            } else {
                0.0
            }
        } else {
            m
        }
    }

    fn is_negative(self) -> bool {
        self < 0.0
    }

    fn before(self, other: Self) -> bool {
        self < other
    }

    fn to_lerp(self) -> f64 {
        self
    }

    fn from_lerp(value: f64) -> Self {
        value
    }

    fn approx_eq(self, other: Self) -> bool {
        (self - other).abs() < Self::OVERLAP_EPSILON
    }

    fn is_representable_extent(self) -> bool {
        self.is_finite()
    }

    fn is_positive_extent(self) -> bool {
        self > 0.0
    }
}
