//! Stride helpers and reachable-span computation.

use crate::{Result, StridedError};

/// Column-major strides (first axis varies fastest), in elements.
///
/// The result plugs straight into [`Placement::new`](crate::Placement::new)
/// for a compact operand starting at offset 0.
pub fn col_major_strides(shape: &[usize]) -> Vec<isize> {
    let rank = shape.len();
    if rank == 0 {
        return vec![];
    }
    let mut strides = vec![1isize; rank];
    for i in 1..rank {
        strides[i] = strides[i - 1] * shape[i - 1] as isize;
    }
    strides
}

/// Row-major strides (last axis varies fastest), in elements.
///
/// With these strides on both sides, a copy visits memory in address order,
/// since the odometer also moves the last axis fastest.
pub fn row_major_strides(shape: &[usize]) -> Vec<isize> {
    let rank = shape.len();
    if rank == 0 {
        return vec![];
    }
    let mut strides = vec![1isize; rank];
    for i in (0..rank - 1).rev() {
        strides[i] = strides[i + 1] * shape[i + 1] as isize;
    }
    strides
}

/// Inclusive range of offsets an operand can touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub min: isize,
    pub max: isize,
}

impl Span {
    /// Expand an element span to the bytes it covers at `bpe` bytes per element.
    pub fn to_bytes(self, bpe: usize) -> Result<Span> {
        let bpe = isize::try_from(bpe).map_err(|_| StridedError::OffsetOverflow)?;
        let min = self
            .min
            .checked_mul(bpe)
            .ok_or(StridedError::OffsetOverflow)?;
        let max = self
            .max
            .checked_mul(bpe)
            .and_then(|m| m.checked_add(bpe - 1))
            .ok_or(StridedError::OffsetOverflow)?;
        Ok(Span { min, max })
    }

    /// Check the span against a buffer of `len` units.
    pub fn check_within(self, len: usize) -> Result<()> {
        if self.min < 0 || self.max < 0 || self.max as usize >= len {
            return Err(StridedError::OutOfBounds {
                min: self.min,
                max: self.max,
                len,
            });
        }
        Ok(())
    }
}

/// Offsets reachable from `offset` when walking `shape` with `strides`.
///
/// Returns `None` when the index space is empty (rank 0 or a zero extent),
/// since such an operand touches no memory.
pub fn reach(shape: &[usize], strides: &[isize], offset: isize) -> Result<Option<Span>> {
    if shape.len() != strides.len() {
        return Err(StridedError::StrideLengthMismatch {
            rank: shape.len(),
            len: strides.len(),
        });
    }
    if shape.is_empty() || shape.contains(&0) {
        return Ok(None);
    }

    let mut min = offset;
    let mut max = offset;
    for (&extent, &stride) in shape.iter().zip(strides.iter()) {
        if extent > 1 {
            let last = isize::try_from(extent - 1).map_err(|_| StridedError::OffsetOverflow)?;
            let end = stride
                .checked_mul(last)
                .ok_or(StridedError::OffsetOverflow)?;
            if end >= 0 {
                max = max.checked_add(end).ok_or(StridedError::OffsetOverflow)?;
            } else {
                min = min.checked_add(end).ok_or(StridedError::OffsetOverflow)?;
            }
        }
    }
    Ok(Some(Span { min, max }))
}
