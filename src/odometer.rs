//! Mixed-radix counter over a shape with incrementally updated offsets.
//!
//! The cursor visits coordinates in row-major order: the last axis moves
//! fastest and a rollover carries into the next outer axis, exactly like the
//! digit wheels of an odometer. Destination and source positions are kept as
//! running sums and are never recomputed from the coordinate vector.

use smallvec::SmallVec;

use crate::MAX_RANK;

/// Per-axis cursor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Axis {
    pub extent: usize,
    pub coordinate: usize,
    /// Destination stride in position units (elements or bytes); 0 when
    /// `extent == 1`.
    pub dstride: isize,
    /// Source stride in position units (elements or bytes); 0 when
    /// `extent == 1`.
    pub sstride: isize,
}

/// Number of elements in the index space of `shape`.
///
/// Rank 0 counts as zero elements: an empty shape describes no copy at all,
/// not a single scalar.
#[inline]
pub fn element_count(shape: &[usize]) -> usize {
    if shape.is_empty() {
        return 0;
    }
    shape.iter().product()
}

/// Odometer cursor over one logical index space shared by two buffers.
///
/// Axis state lives inline for up to [`MAX_RANK`] axes.
#[derive(Debug, Clone)]
pub struct Odometer {
    axes: SmallVec<[Axis; MAX_RANK]>,
    dpos: isize,
    spos: isize,
}

impl Odometer {
    /// Build a cursor at the origin, with both strides multiplied by `scale`.
    ///
    /// Returns `None` when there is nothing to visit: rank 0 or any zero
    /// extent. Strides of unit-extent axes never move a position and are
    /// stored as 0.
    #[inline]
    pub fn new(
        shape: &[usize],
        dstrides: &[isize],
        sstrides: &[isize],
        scale: isize,
    ) -> Option<Self> {
        debug_assert_eq!(dstrides.len(), shape.len());
        debug_assert_eq!(sstrides.len(), shape.len());

        if shape.is_empty() || shape.contains(&0) {
            return None;
        }

        let axes = shape
            .iter()
            .zip(dstrides.iter().zip(sstrides.iter()))
            .map(|(&extent, (&ds, &ss))| {
                let (dstride, sstride) = if extent == 1 {
                    (0, 0)
                } else {
                    (ds * scale, ss * scale)
                };
                Axis {
                    extent,
                    coordinate: 0,
                    dstride,
                    sstride,
                }
            })
            .collect();

        Some(Self {
            axes,
            dpos: 0,
            spos: 0,
        })
    }

    /// Current `(destination, source)` positions relative to the base pointers.
    #[inline(always)]
    pub fn positions(&self) -> (isize, isize) {
        (self.dpos, self.spos)
    }

    /// Step to the next coordinate.
    ///
    /// Returns `false` once axis 0 rolls over; the cursor is then back at the
    /// origin with both positions at zero.
    #[inline(always)]
    pub fn advance(&mut self) -> bool {
        for axis in self.axes.iter_mut().rev() {
            if axis.coordinate + 1 < axis.extent {
                axis.coordinate += 1;
                self.dpos += axis.dstride;
                self.spos += axis.sstride;
                return true;
            }

            // rolled over: rewind to coordinate 0 and carry outward; positions
            // never step past the last coordinate of the axis
            let last = axis.coordinate as isize;
            self.dpos -= last * axis.dstride;
            self.spos -= last * axis.sstride;
            axis.coordinate = 0;
        }
        false
    }

    #[inline]
    pub fn rank(&self) -> usize {
        self.axes.len()
    }

    #[inline]
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Current coordinate vector, axis 0 first.
    #[inline]
    pub fn coordinates(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.axes.iter().map(|axis| axis.coordinate)
    }
}

/// Row-major iterator over every coordinate vector of a shape.
///
/// Yields nothing for rank 0 or when any extent is zero, matching the copy
/// entry points.
#[derive(Debug, Clone)]
pub struct Indices {
    cursor: Option<Odometer>,
    started: bool,
}

impl Indices {
    pub fn new(shape: &[usize]) -> Self {
        let zeros: SmallVec<[isize; MAX_RANK]> = smallvec::smallvec![0; shape.len()];
        Self {
            cursor: Odometer::new(shape, &zeros, &zeros, 0),
            started: false,
        }
    }
}

impl Iterator for Indices {
    type Item = SmallVec<[usize; MAX_RANK]>;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.as_mut()?;
        if self.started {
            if !cursor.advance() {
                self.cursor = None;
                return None;
            }
        } else {
            self.started = true;
        }
        Some(cursor.coordinates().collect())
    }
}

impl std::iter::FusedIterator for Indices {}
