//! Raw strided copy entry points.
//!
//! Nothing here validates anything. Shape, strides and base pointers are
//! trusted to describe memory the caller owns; see the `# Safety` sections.

use crate::element::{Bytes, ElementMove, Typed};
use crate::odometer::Odometer;

/// Odometer copy with a caller-chosen element move.
///
/// Visits every coordinate of `shape` once in row-major order and moves the
/// element at `src + dot(coord, sstrides) * scale` to
/// `dest + dot(coord, dstrides) * scale`, where `scale` is
/// [`ElementMove::scale`] and pointer arithmetic is in units of
/// [`ElementMove::Unit`]. Rank 0 and any zero extent are no-ops that never
/// touch either pointer.
///
/// # Safety
/// - `dstrides.len()` and `sstrides.len()` must equal `shape.len()`.
/// - For every coordinate, both computed addresses must lie in live
///   allocations that are valid for reading (source) and writing
///   (destination) one element.
/// - No other thread may access the destination addresses during the call.
#[inline(always)]
pub unsafe fn strided_copy_with<M: ElementMove>(
    mover: &M,
    shape: &[usize],
    dest: *mut M::Unit,
    dstrides: &[isize],
    src: *const M::Unit,
    sstrides: &[isize],
) {
    let Some(mut cursor) = Odometer::new(shape, dstrides, sstrides, mover.scale()) else {
        return;
    };

    loop {
        let (dpos, spos) = cursor.positions();
        unsafe { mover.move_one(dest.offset(dpos), src.offset(spos)) };
        if !cursor.advance() {
            return;
        }
    }
}

/// Copy a strided region of `T` elements: `dest[dot(c, dstrides)] = src[dot(c, sstrides)]`.
///
/// Strides are in elements of `T`. A zero stride replays the axis (broadcast),
/// a negative stride walks it backwards from the base pointer.
///
/// # Safety
/// Same contract as [`strided_copy_with`]; both pointers must additionally be
/// aligned for `T`.
#[inline]
pub unsafe fn strided_copy<T: Copy>(
    shape: &[usize],
    dest: *mut T,
    dstrides: &[isize],
    src: *const T,
    sstrides: &[isize],
) {
    unsafe {
        strided_copy_with(
            &Typed::<T>::new(),
            shape,
            dest,
            dstrides,
            src,
            sstrides,
        )
    }
}

/// Copy a strided region of opaque `bpe`-byte elements.
///
/// Strides are in elements and are scaled to bytes once, before traversal.
/// Each element is moved as a raw block of `bpe` bytes, so the result is
/// byte-identical to [`strided_copy`] over any `T` with
/// `size_of::<T>() == bpe`.
///
/// # Safety
/// Same contract as [`strided_copy_with`], with every reachable element
/// spanning `bpe` valid bytes. `bpe` must be non-zero.
#[inline]
pub unsafe fn strided_copy_bytes(
    shape: &[usize],
    bpe: usize,
    dest: *mut u8,
    dstrides: &[isize],
    src: *const u8,
    sstrides: &[isize],
) {
    debug_assert!(bpe > 0, "element width must be non-zero");
    unsafe { strided_copy_with(&Bytes::new(bpe), shape, dest, dstrides, src, sstrides) }
}
