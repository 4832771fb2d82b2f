//! Core traits for Flagsort.
//!
//! This module defines:
//! - [`NumberAccessor`], [`StringAccessor`] and [`BytesAccessor`]: the traits users implement
//!   to sort their collections by a numeric, string or byte-string key.
//! - [`NumberKey`]: an order-preserving mapping from primitive numbers to `u64`.

use std::collections::VecDeque;

/// A collection that can be sorted by a `u64` key.
///
/// The sorter never copies elements. It only reads keys, asks [`less`](Self::less)
/// and calls [`swap`](Self::swap).
///
/// # Examples
///
/// Sorting records by a signed field:
///
/// ```
/// use flagsort::{NumberAccessor, NumberKey, sort_by_number};
///
/// struct Balances(Vec<(String, i64)>);
///
/// impl NumberAccessor for Balances {
///     fn len(&self) -> usize {
///         self.0.len()
///     }
///
///     fn get_key(&self, index: usize) -> u64 {
///         self.0[index].1.to_key()
///     }
///
///     fn swap(&mut self, i: usize, j: usize) {
///         self.0.swap(i, j);
///     }
/// }
///
/// let mut data = Balances(vec![("a".into(), 5), ("b".into(), -3), ("c".into(), 0)]);
/// sort_by_number(&mut data).unwrap();
/// assert_eq!(data.0.iter().map(|r| r.1).collect::<Vec<_>>(), vec![-3, 0, 5]);
/// ```
pub trait NumberAccessor {
    /// Returns the number of items in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the key of the item at `index`.
    fn get_key(&self, index: usize) -> u64;

    /// Reports whether item `i` sorts before item `j`.
    ///
    /// Must agree with the numeric order of [`get_key`](Self::get_key).
    #[inline(always)]
    fn less(&self, i: usize, j: usize) -> bool {
        self.get_key(i) < self.get_key(j)
    }

    /// Exchanges the items at `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);
}

/// A collection that can be sorted by a string key.
pub trait StringAccessor {
    /// Returns the number of items in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the key of the item at `index`.
    fn get_key(&self, index: usize) -> &str;

    /// Reports whether item `i` sorts before item `j`.
    ///
    /// Must agree with the byte-wise order of [`get_key`](Self::get_key).
    #[inline(always)]
    fn less(&self, i: usize, j: usize) -> bool {
        self.get_key(i) < self.get_key(j)
    }

    /// Exchanges the items at `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);
}

/// A collection that can be sorted by a byte-string key.
///
/// # Examples
///
/// Implementing for flat storage, where swapping moves an index rather than the bytes:
///
/// ```
/// use flagsort::{BytesAccessor, sort_by_bytes};
///
/// struct Flat {
///     data: Vec<u8>,
///     spans: Vec<(usize, usize)>,
/// }
///
/// impl BytesAccessor for Flat {
///     fn len(&self) -> usize {
///         self.spans.len()
///     }
///
///     fn get_key(&self, index: usize) -> &[u8] {
///         let (start, end) = self.spans[index];
///         &self.data[start..end]
///     }
///
///     fn swap(&mut self, i: usize, j: usize) {
///         self.spans.swap(i, j);
///     }
/// }
///
/// let mut flat = Flat { data: b"foobarbaz".to_vec(), spans: vec![(0, 3), (3, 6), (6, 9)] };
/// sort_by_bytes(&mut flat).unwrap();
/// assert_eq!(flat.spans, vec![(3, 6), (6, 9), (0, 3)]);
/// ```
pub trait BytesAccessor {
    /// Returns the number of items in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the key of the item at `index`.
    fn get_key(&self, index: usize) -> &[u8];

    /// Reports whether item `i` sorts before item `j`.
    ///
    /// Must agree with the lexicographic order of [`get_key`](Self::get_key).
    #[inline(always)]
    fn less(&self, i: usize, j: usize) -> bool {
        self.get_key(i) < self.get_key(j)
    }

    /// Exchanges the items at `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);
}

/// Maps a value onto a `u64` whose unsigned order matches the value's order.
///
/// Floats follow the IEEE 754 total order used by `f64::total_cmp`, so `-0.0` sorts
/// before `0.0` and NaNs sort to the ends according to their sign.
pub trait NumberKey {
    fn to_key(&self) -> u64;
}

macro_rules! unsigned_key {
    ($($t:ty),*) => {
        $(
            impl NumberKey for $t {
                #[inline(always)]
                fn to_key(&self) -> u64 {
                    *self as u64
                }
            }
        )*
    };
}

unsigned_key!(u8, u16, u32, u64, usize);

impl NumberKey for i64 {
    #[inline(always)]
    fn to_key(&self) -> u64 {
        (*self as u64) ^ (1 << 63)
    }
}

macro_rules! signed_key {
    ($($t:ty),*) => {
        $(
            impl NumberKey for $t {
                #[inline(always)]
                fn to_key(&self) -> u64 {
                    (*self as i64).to_key()
                }
            }
        )*
    };
}

signed_key!(i8, i16, i32, isize);

impl NumberKey for f64 {
    #[inline(always)]
    fn to_key(&self) -> u64 {
        // see f64::total_cmp
        let bits = self.to_bits();
        (bits ^ ((bits as i64 >> 63) as u64 >> 1)) ^ (1 << 63)
    }
}

impl NumberKey for f32 {
    #[inline(always)]
    fn to_key(&self) -> u64 {
        // see f32::total_cmp
        let bits = self.to_bits();
        ((bits ^ ((bits as i32 >> 31) as u32 >> 1)) ^ (1 << 31)) as u64
    }
}

impl NumberKey for bool {
    #[inline(always)]
    fn to_key(&self) -> u64 {
        *self as u64
    }
}

impl NumberKey for char {
    #[inline(always)]
    fn to_key(&self) -> u64 {
        *self as u64
    }
}

// Blanket implementations for indexable collections. `swap` is spelled out against the
// inherent slice/deque method so it never resolves back to the trait method.

impl<T: NumberKey> NumberAccessor for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get_key(&self, index: usize) -> u64 {
        self[index].to_key()
    }

    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j);
    }
}

impl<T: NumberKey> NumberAccessor for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get_key(&self, index: usize) -> u64 {
        self[index].to_key()
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j);
    }
}

// VecDeque offers O(1) random access, so it sorts in place like a slice.
impl<T: NumberKey> NumberAccessor for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get_key(&self, index: usize) -> u64 {
        self[index].to_key()
    }

    fn swap(&mut self, i: usize, j: usize) {
        VecDeque::swap(self, i, j);
    }
}

impl<T: AsRef<str>> StringAccessor for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get_key(&self, index: usize) -> &str {
        self[index].as_ref()
    }

    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j);
    }
}

impl<T: AsRef<str>> StringAccessor for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get_key(&self, index: usize) -> &str {
        self[index].as_ref()
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j);
    }
}

impl<T: AsRef<str>> StringAccessor for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get_key(&self, index: usize) -> &str {
        self[index].as_ref()
    }

    fn swap(&mut self, i: usize, j: usize) {
        VecDeque::swap(self, i, j);
    }
}

impl<T: AsRef<[u8]>> BytesAccessor for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get_key(&self, index: usize) -> &[u8] {
        self[index].as_ref()
    }

    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j);
    }
}

impl<T: AsRef<[u8]>> BytesAccessor for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get_key(&self, index: usize) -> &[u8] {
        self[index].as_ref()
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j);
    }
}

impl<T: AsRef<[u8]>> BytesAccessor for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get_key(&self, index: usize) -> &[u8] {
        self[index].as_ref()
    }

    fn swap(&mut self, i: usize, j: usize) {
        VecDeque::swap(self, i, j);
    }
}
