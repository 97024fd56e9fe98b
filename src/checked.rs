//! Bounds-checked copies over slices.
//!
//! Each call validates once, up front, that every element the traversal can
//! reach lies inside the given slice, then hands off to the raw primitive.
//! The hot loop itself is the same as the unchecked one.

use crate::copy::{strided_copy, strided_copy_bytes};
use crate::layout::{reach, Span};
use crate::{Result, StridedError};

/// Where one operand lives inside its slice: base offset and strides, both in
/// elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement<'a> {
    offset: isize,
    strides: &'a [isize],
}

impl<'a> Placement<'a> {
    pub fn new(offset: isize, strides: &'a [isize]) -> Self {
        Self { offset, strides }
    }

    #[inline]
    pub fn offset(&self) -> isize {
        self.offset
    }

    #[inline]
    pub fn strides(&self) -> &'a [isize] {
        self.strides
    }

    /// Reachable span in units of `bpe` bytes, checked against `len` units of
    /// the same size. `None` means nothing is touched.
    fn locate(&self, shape: &[usize], len: usize, bpe: usize) -> Result<Option<Span>> {
        let Some(span) = reach(shape, self.strides, self.offset)? else {
            return Ok(None);
        };
        let span = if bpe == 1 { span } else { span.to_bytes(bpe)? };
        span.check_within(len)?;
        Ok(Some(span))
    }
}

/// Copy `src` into `dest` over `shape`, each side placed by its [`Placement`].
///
/// # Errors
/// [`StridedError::StrideLengthMismatch`] when a stride vector does not match
/// the rank, [`StridedError::OffsetOverflow`] or
/// [`StridedError::OutOfBounds`] when some reachable element falls outside
/// its slice. Nothing is written on error.
pub fn copy_strided<T: Copy>(
    shape: &[usize],
    dest: &mut [T],
    dst_at: Placement<'_>,
    src: &[T],
    src_at: Placement<'_>,
) -> Result<()> {
    let dspan = dst_at
        .locate(shape, dest.len(), 1)
        .inspect_err(|err| log::debug!("copy_strided: destination rejected: {err}"))?;
    let sspan = src_at
        .locate(shape, src.len(), 1)
        .inspect_err(|err| log::debug!("copy_strided: source rejected: {err}"))?;
    if dspan.is_none() || sspan.is_none() {
        log::trace!("copy_strided: empty index space {shape:?}");
        return Ok(());
    }

    log::trace!(
        "copy_strided: shape={shape:?} dst={:?}@{} src={:?}@{}",
        dst_at.strides,
        dst_at.offset,
        src_at.strides,
        src_at.offset
    );
    // Safety: both base offsets lie inside their validated spans and every
    // reachable element was checked against the slice lengths.
    unsafe {
        strided_copy(
            shape,
            dest.as_mut_ptr().offset(dst_at.offset),
            dst_at.strides,
            src.as_ptr().offset(src_at.offset),
            src_at.strides,
        );
    }
    Ok(())
}

/// Copy opaque `bpe`-byte elements between byte buffers.
///
/// Offsets and strides in each [`Placement`] count elements, not bytes.
///
/// # Errors
/// As [`copy_strided`], plus [`StridedError::ZeroElementWidth`] when
/// `bpe == 0`.
pub fn copy_strided_bytes(
    shape: &[usize],
    bpe: usize,
    dest: &mut [u8],
    dst_at: Placement<'_>,
    src: &[u8],
    src_at: Placement<'_>,
) -> Result<()> {
    if bpe == 0 {
        return Err(StridedError::ZeroElementWidth);
    }
    let dspan = dst_at
        .locate(shape, dest.len(), bpe)
        .inspect_err(|err| log::debug!("copy_strided_bytes: destination rejected: {err}"))?;
    let sspan = src_at
        .locate(shape, src.len(), bpe)
        .inspect_err(|err| log::debug!("copy_strided_bytes: source rejected: {err}"))?;
    if dspan.is_none() || sspan.is_none() {
        log::trace!("copy_strided_bytes: empty index space {shape:?}");
        return Ok(());
    }

    log::trace!(
        "copy_strided_bytes: shape={shape:?} bpe={bpe} dst={:?}@{} src={:?}@{}",
        dst_at.strides,
        dst_at.offset,
        src_at.strides,
        src_at.offset
    );
    // Both products were bounded by the checked byte spans above.
    let step = bpe as isize;
    unsafe {
        strided_copy_bytes(
            shape,
            bpe,
            dest.as_mut_ptr().offset(dst_at.offset * step),
            dst_at.strides,
            src.as_ptr().offset(src_at.offset * step),
            src_at.strides,
        );
    }
    Ok(())
}

/// Copy between two possibly overlapping regions of one buffer.
///
/// Elements move one at a time in row-major traversal order and each move
/// reads before it writes, so where the regions overlap a later write
/// overwrites an earlier one and a later read sees already-written values.
///
/// ```rust
/// use strided_odometer::{copy_within_strided, Placement};
///
/// let mut buf = [0, 1, 2, 3, 4, 5];
/// // shift the first four elements right by two
/// copy_within_strided(
///     &[4],
///     &mut buf,
///     Placement::new(5, &[-1]),
///     Placement::new(3, &[-1]),
/// )
/// .unwrap();
/// assert_eq!(buf, [0, 1, 0, 1, 2, 3]);
/// ```
///
/// # Errors
/// As [`copy_strided`].
pub fn copy_within_strided<T: Copy>(
    shape: &[usize],
    buf: &mut [T],
    dst_at: Placement<'_>,
    src_at: Placement<'_>,
) -> Result<()> {
    let dspan = dst_at
        .locate(shape, buf.len(), 1)
        .inspect_err(|err| log::debug!("copy_within_strided: destination rejected: {err}"))?;
    let sspan = src_at
        .locate(shape, buf.len(), 1)
        .inspect_err(|err| log::debug!("copy_within_strided: source rejected: {err}"))?;
    let (Some(dspan), Some(sspan)) = (dspan, sspan) else {
        return Ok(());
    };

    if dspan.min <= sspan.max && sspan.min <= dspan.max {
        log::trace!("copy_within_strided: overlapping spans {dspan:?} and {sspan:?}");
    }
    let base = buf.as_mut_ptr();
    unsafe {
        strided_copy(
            shape,
            base.offset(dst_at.offset),
            dst_at.strides,
            base.offset(src_at.offset).cast_const(),
            src_at.strides,
        );
    }
    Ok(())
}
