//! Reversed views over digit slices.

use std::ops;

// REVERSE VIEW

/// Reverse, immutable view of a sequence.
///
/// Index `0` is the last element of the underlying slice, so viewing a
/// most-significant-first digit array this way walks it from the least
/// significant end, and viewing it forwards reads the digits of its reversal
/// from the least significant end.
pub struct ReverseView<'a, T: 'a> {
    inner: &'a [T],
}

impl<'a, T> ops::Index<usize> for ReverseView<'a, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.inner[self.inner.len() - index - 1]
    }
}

// SLICE

/// Trait for generic slices.
pub trait Slice<T> {
    /// Get slice of immutable elements.
    fn as_slice(&self) -> &[T];

    /// Create a reverse view of the collection for indexing.
    #[inline]
    fn rview(&self) -> ReverseView<T> {
        ReverseView {
            inner: self.as_slice(),
        }
    }
}

impl<T> Slice<T> for [T] {
    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }
}
