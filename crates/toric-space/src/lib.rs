//! Boundary topologies for the Toric spatial toolkit.
//!
//! This crate defines the [`Space`] trait — the abstraction through which
//! all vector and box normalization flows — along with the two topology
//! backends and the seam-crossing machinery they drive.
//!
//! # Backends
//!
//! - [`Plane2D`]: clamped domain with hard edges; boxes never fragment
//! - [`Torus2D`]: wrap-around domain; a box straddling the seam splits into
//!   up to three [`FragPosition`] fragments
//!
//! # Shapes
//!
//! Rectangles wrap through [`FragmentedAabb`]. Arbitrary polygons wrap
//! through [`Space::boundary_fragments`], which drives the
//! [`SutherlandHodgman`] clipper over the candidate wrap offsets.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod clip;
pub mod error;
pub mod fragment;
pub mod plane2d;
pub mod polygon;
pub mod space;
pub mod torus2d;

#[cfg(test)]
pub(crate) mod compliance;

pub use clip::SutherlandHodgman;
pub use error::SpaceError;
pub use fragment::{FragPosition, FragmentedAabb};
pub use plane2d::Plane2D;
pub use polygon::Polygon;
pub use space::Space;
pub use torus2d::Torus2D;
