//! Generic 2-component vectors.

use crate::aabb::Aabb;
use crate::scalar::Scalar;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A 2D vector (or point) with components of one scalar kind.
///
/// `Vec2` is a plain value: equality is componentwise and every operation
/// returns a new vector. The arithmetic operators route through the
/// kind-aware [`Scalar`] methods, so `u32` components wrap instead of
/// tripping a debug-mode overflow check when a delta goes "negative".
///
/// # Examples
///
/// ```
/// use toric_core::Vec2;
///
/// let v = Vec2::new(2, 3) + Vec2::new(-1, -2);
/// assert_eq!(v, Vec2::new(1, 1));
///
/// // Componentwise wrap into a 10x10 domain.
/// assert_eq!(Vec2::new(-99, 17).wrap(Vec2::new(10, 10)), Vec2::new(1, 7));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec2<T: Scalar> {
    /// Horizontal component.
    pub x: T,
    /// Vertical component.
    pub y: T,
}

impl<T: Scalar> Vec2<T> {
    /// The origin.
    pub const ZERO: Self = Self {
        x: T::ZERO,
        y: T::ZERO,
    };

    /// Build a vector from its components.
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Euclidean magnitude (integer kinds round up).
    pub fn length(self) -> T {
        T::length(self.x, self.y)
    }

    /// Componentwise clamp into the closed box `[0, bounds]`.
    pub fn clamp(self, bounds: Self) -> Self {
        Self::new(self.x.clamp_axis(bounds.x), self.y.clamp_axis(bounds.y))
    }

    /// Componentwise fold into the half-open box `[0, bounds)`.
    ///
    /// A zero component in `bounds` leaves the corresponding component
    /// unchanged.
    pub fn wrap(self, bounds: Self) -> Self {
        Self::new(self.x.wrap_axis(bounds.x), self.y.wrap_axis(bounds.y))
    }

    /// Scale both components by `factor`.
    pub fn scale(self, factor: T) -> Self {
        Self::new(Scalar::mul(self.x, factor), Scalar::mul(self.y, factor))
    }

    /// The zero-area box at this point.
    pub fn bounds(self) -> Aabb<T> {
        Aabb::new(self, self)
    }
}

impl<T: Scalar> Add for Vec2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(Scalar::add(self.x, rhs.x), Scalar::add(self.y, rhs.y))
    }
}

impl<T: Scalar> Sub for Vec2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(Scalar::sub(self.x, rhs.x), Scalar::sub(self.y, rhs.y))
    }
}

impl<T: Scalar> Neg for Vec2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(Scalar::neg(self.x), Scalar::neg(self.y))
    }
}

impl<T: Scalar> Mul<T> for Vec2<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.scale(rhs)
    }
}

impl<T: Scalar> fmt::Display for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
