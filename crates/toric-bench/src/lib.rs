//! Benchmark support crate for the Toric workspace.
//!
//! The actual benchmarks live under `benches/`; this library exists so the
//! bench targets have a crate to attach to and share helpers through.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use toric_core::Vec2;

/// Deterministic pseudo-random coordinate in `[0, bound)`, derived from an
/// index. Keeps benchmark inputs reproducible without a RNG dependency.
pub fn scrambled_coord(index: u64, bound: i32) -> i32 {
    (index.wrapping_mul(6364136223846793007) % bound as u64) as i32
}

/// Deterministic pseudo-random point in a `bound`-sized square domain.
pub fn scrambled_point(index: u64, bound: i32) -> Vec2<i32> {
    Vec2::new(
        scrambled_coord(index, bound),
        scrambled_coord(index.wrapping_mul(1442695040888963407), bound),
    )
}
