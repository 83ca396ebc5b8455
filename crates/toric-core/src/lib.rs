//! Core value types for the Toric spatial toolkit.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! closed set of component kinds ([`Scalar`]) and the geometric value types
//! ([`Vec2`], [`Aabb`]) that the topology layer in `toric-space` builds on.
//!
//! Everything here is a plain `Copy` value: no identity, no shared mutable
//! state, free to duplicate across threads.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod aabb;
pub mod scalar;
pub mod vec2;

pub use aabb::{Aabb, Axis};
pub use scalar::Scalar;
pub use vec2::Vec2;
