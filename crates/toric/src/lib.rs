//! Toric: 2D spatial geometry with clamped and toroidal boundary
//! topologies.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Toric sub-crates. For most users, adding `toric` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use toric::prelude::*;
//!
//! // A 10x10 wrap-around world.
//! let torus = Torus2D::new(10, 10).unwrap();
//!
//! // A 2x2 box nudged across the top-left corner splits into its primary
//! // rectangle plus three re-entering fragments.
//! let mut boxed = torus.wrap_aabb(Aabb::at(Vec2::new(0, 0), 2, 2));
//! torus.translate(&mut boxed, Vec2::new(-1, -1));
//! assert_eq!(boxed.bounds().top_left, Vec2::new(9, 9));
//! assert_eq!(boxed.fragment_count(), 3);
//!
//! // Distances take the short way around the seam.
//! assert_eq!(torus.metric(Vec2::new(0, 0), Vec2::new(9, 9)), 2);
//!
//! // The clamped plane over the same size never wraps.
//! let plane = Plane2D::new(10, 10).unwrap();
//! let mut v = Vec2::new(0, 0);
//! plane.translate_vector(&mut v, Vec2::new(-5, 3));
//! assert_eq!(v, Vec2::new(0, 3));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`core`] | `toric-core` | [`Scalar`] kinds, [`Vec2`], [`Aabb`] |
//! | [`space`] | `toric-space` | [`Space`], [`Plane2D`], [`Torus2D`], [`FragmentedAabb`], [`SutherlandHodgman`] |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use toric_core::{Aabb, Axis, Scalar, Vec2};
pub use toric_space::{
    FragPosition, FragmentedAabb, Plane2D, Polygon, Space, SpaceError, SutherlandHodgman, Torus2D,
};

/// Everything from `toric-core`.
pub mod core {
    pub use toric_core::*;
}

/// Everything from `toric-space`.
pub mod space {
    pub use toric_space::*;
}

/// The common imports, in one line.
pub mod prelude {
    pub use toric_core::{Aabb, Axis, Scalar, Vec2};
    pub use toric_space::{
        FragPosition, FragmentedAabb, Plane2D, Polygon, Space, SpaceError, SutherlandHodgman,
        Torus2D,
    };
}
