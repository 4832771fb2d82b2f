//! Engine-facing views over the public accessor traits.
//!
//! The engines never see [`StringAccessor`] or [`BytesAccessor`] directly: both are
//! presented as [`ByteKeys`], so one sequence engine serves both key types.

use crate::core::{BytesAccessor, NumberAccessor, StringAccessor};

/// Positional operations shared by every key type.
pub(crate) trait Permute {
    fn count(&self) -> usize;

    /// Caller-supplied ordering predicate.
    fn less(&self, i: usize, j: usize) -> bool;

    fn swap(&mut self, i: usize, j: usize);

    /// Natural key order, independent of [`Permute::less`].
    fn key_less(&self, i: usize, j: usize) -> bool;
}

pub(crate) trait WordKeys: Permute {
    fn word(&self, index: usize) -> u64;
}

pub(crate) trait ByteKeys: Permute {
    fn bytes(&self, index: usize) -> &[u8];
}

pub(crate) struct Numbers<'a, T: ?Sized>(pub &'a mut T);

pub(crate) struct Strings<'a, T: ?Sized>(pub &'a mut T);

pub(crate) struct Bytes<'a, T: ?Sized>(pub &'a mut T);

impl<T: NumberAccessor + ?Sized> Permute for Numbers<'_, T> {
    #[inline(always)]
    fn count(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    fn less(&self, i: usize, j: usize) -> bool {
        self.0.less(i, j)
    }

    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }

    fn key_less(&self, i: usize, j: usize) -> bool {
        self.0.get_key(i) < self.0.get_key(j)
    }
}

impl<T: NumberAccessor + ?Sized> WordKeys for Numbers<'_, T> {
    #[inline(always)]
    fn word(&self, index: usize) -> u64 {
        self.0.get_key(index)
    }
}

impl<T: StringAccessor + ?Sized> Permute for Strings<'_, T> {
    #[inline(always)]
    fn count(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    fn less(&self, i: usize, j: usize) -> bool {
        self.0.less(i, j)
    }

    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }

    fn key_less(&self, i: usize, j: usize) -> bool {
        self.0.get_key(i) < self.0.get_key(j)
    }
}

impl<T: StringAccessor + ?Sized> ByteKeys for Strings<'_, T> {
    #[inline(always)]
    fn bytes(&self, index: usize) -> &[u8] {
        self.0.get_key(index).as_bytes()
    }
}

impl<T: BytesAccessor + ?Sized> Permute for Bytes<'_, T> {
    #[inline(always)]
    fn count(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    fn less(&self, i: usize, j: usize) -> bool {
        self.0.less(i, j)
    }

    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }

    fn key_less(&self, i: usize, j: usize) -> bool {
        self.0.get_key(i) < self.0.get_key(j)
    }
}

impl<T: BytesAccessor + ?Sized> ByteKeys for Bytes<'_, T> {
    #[inline(always)]
    fn bytes(&self, index: usize) -> &[u8] {
        self.0.get_key(index)
    }
}
