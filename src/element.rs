//! Single-element move strategies for the odometer traversal.
//!
//! A strategy fixes two things: the unit in which positions are counted and
//! how one element travels from source to destination. [`Typed`] moves a
//! statically known `T`; [`Bytes`] moves an opaque block of `bpe` bytes and
//! counts positions in bytes.

use std::marker::PhantomData;

/// How one element is moved from source to destination.
///
/// Element strides are multiplied by [`scale`](ElementMove::scale) once,
/// when the cursor is built, so positions handed to
/// [`move_one`](ElementMove::move_one) are already in units of
/// [`Unit`](ElementMove::Unit).
pub trait ElementMove {
    /// Granularity of positions and pointers.
    type Unit;

    /// Units per element.
    fn scale(&self) -> isize;

    /// Move one element.
    ///
    /// The whole source element is read before the destination is written, so
    /// `dest` and `src` may overlap.
    ///
    /// # Safety
    /// `src` must be valid for reading one element and `dest` valid for
    /// writing one element.
    unsafe fn move_one(&self, dest: *mut Self::Unit, src: *const Self::Unit);
}

/// Move a statically typed element by value.
#[derive(Debug)]
pub struct Typed<T>(PhantomData<fn() -> T>);

impl<T> Typed<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Clone for Typed<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Typed<T> {}

impl<T> Default for Typed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> ElementMove for Typed<T> {
    type Unit = T;

    #[inline(always)]
    fn scale(&self) -> isize {
        1
    }

    #[inline(always)]
    unsafe fn move_one(&self, dest: *mut T, src: *const T) {
        unsafe {
            let value = src.read();
            dest.write(value);
        }
    }
}

/// Move an opaque element of `bpe` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bytes {
    bpe: usize,
}

impl Bytes {
    pub const fn new(bpe: usize) -> Self {
        Self { bpe }
    }

    /// Bytes per element.
    #[inline]
    pub const fn bpe(&self) -> usize {
        self.bpe
    }
}

impl ElementMove for Bytes {
    type Unit = u8;

    #[inline(always)]
    fn scale(&self) -> isize {
        self.bpe as isize
    }

    #[inline(always)]
    unsafe fn move_one(&self, dest: *mut u8, src: *const u8) {
        // memmove: a partially self-overlapping element still lands intact
        unsafe { std::ptr::copy(src, dest, self.bpe) };
    }
}
