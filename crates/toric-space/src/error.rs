//! Error types for space construction.

use std::fmt;

/// Errors arising from constructing a bounded space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a space with a non-positive extent.
    EmptySpace,
    /// A domain extent is outside the kind's representable range: a `u32`
    /// size past `i32::MAX` (the signed reinterpretation would no longer be
    /// total), or a non-finite `f64`.
    InvalidSize {
        /// Which axis carried the offending extent.
        axis: &'static str,
        /// The offending value, formatted.
        value: String,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "space extents must be strictly positive"),
            Self::InvalidSize { axis, value } => {
                write!(f, "size {value} on axis {axis} is not representable")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
