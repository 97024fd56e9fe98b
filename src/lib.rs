//! Odometer-style strided copy between dense memory buffers.
//!
//! Two buffers, one logical index space: every coordinate of `shape` is
//! visited exactly once in row-major order (last axis fastest) and
//! `dest[dot(coord, dstrides)] = src[dot(coord, sstrides)]` is performed.
//! Stride vectors are independent per buffer and may be positive, negative
//! or zero, so transposes, reversed axes and broadcasts all reduce to the
//! same loop.
//!
//! # Layers
//!
//! - Raw primitive ([`strided_copy`], [`strided_copy_bytes`],
//!   [`strided_copy_with`]): `unsafe fn`s over raw pointers. No validation,
//!   no allocation for rank up to [`MAX_RANK`], no error reporting.
//! - Safe layer ([`copy_strided`], [`copy_strided_bytes`],
//!   [`copy_within_strided`]): checks once that every reachable element lies
//!   inside the given slices, then runs the raw primitive.
//! - Traversal ([`Odometer`], [`Indices`]): the mixed-radix counter itself,
//!   for callers that need a custom per-element action.
//!
//! # Example
//!
//! ```rust
//! use strided_odometer::{copy_strided, Placement};
//!
//! // Column-major 2x3 source, row-major 2x3 destination.
//! let src = [0, 1, 2, 3, 4, 5];
//! let mut dest = [0; 6];
//! copy_strided(
//!     &[2, 3],
//!     &mut dest,
//!     Placement::new(0, &[3, 1]),
//!     &src,
//!     Placement::new(0, &[1, 2]),
//! )
//! .unwrap();
//! assert_eq!(dest, [0, 2, 4, 1, 3, 5]);
//! ```
//!
//! # Overlapping buffers
//!
//! Overlap between the source and destination regions is defined: element
//! moves happen one at a time in traversal order and each move reads the
//! whole source element before writing the destination, so later writes win.
//! [`copy_within_strided`] exposes this on a single slice.

pub mod checked;
pub mod copy;
pub mod element;
pub mod layout;
pub mod odometer;

pub use checked::{copy_strided, copy_strided_bytes, copy_within_strided, Placement};
pub use copy::{strided_copy, strided_copy_bytes, strided_copy_with};
pub use element::{Bytes, ElementMove, Typed};
pub use layout::{col_major_strides, reach, row_major_strides, Span};
pub use odometer::{element_count, Axis, Indices, Odometer};

/// Number of axes the cursor keeps inline on the stack.
///
/// Ranks above this still work but the cursor spills to the heap.
pub const MAX_RANK: usize = 16;

/// Errors reported by the bounds-checked slice layer.
///
/// The raw primitive never produces these; it has no validation at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StridedError {
    /// A stride vector's length differs from the rank of the shape.
    #[error("stride length mismatch: rank {rank}, strides {len}")]
    StrideLengthMismatch { rank: usize, len: usize },

    /// Integer overflow while computing a reachable offset.
    #[error("offset overflow while computing reachable span")]
    OffsetOverflow,

    /// Some reachable element lies outside the buffer.
    #[error("span [{min}, {max}] out of bounds for buffer of length {len}")]
    OutOfBounds { min: isize, max: isize, len: usize },

    /// Generic copy called with `bpe == 0`.
    #[error("element width must be non-zero")]
    ZeroElementWidth,
}

/// Result type for the bounds-checked slice layer.
pub type Result<T> = std::result::Result<T, StridedError>;
