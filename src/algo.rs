//! Sorting entry points.
//!
//! Each entry point runs the matching radix engine over the whole collection, then
//! audits the result with an adjacent-pair check:
//! - [`sort_by_number`]: 8-bit digits of a `u64` key, starting at a guessed digit.
//! - [`sort_by_string`] / [`sort_by_bytes`]: one byte per pass with common prefix
//!   skipping, sharing a pooled bucket table across the recursion.
//!
//! Ranges shorter than the cutoff are finished by a comparison sort.

use crate::adapter::{Bytes, Numbers, Permute, Strings};
use crate::check::verify;
use crate::core::{BytesAccessor, NumberAccessor, StringAccessor};
use crate::error::{KeyKind, Result};
use crate::number::{NumberSorter, guess_shift};
use crate::pool::{self, TablePool};
use crate::sequence::SequenceSorter;

/// Default range size below which the comparison sort takes over.
pub const DEFAULT_CUTOFF: usize = 128;

/// Tunable sort parameters.
///
/// # Examples
///
/// ```
/// use flagsort::SortConfig;
///
/// let mut data = vec![3u32, 1, 2];
/// SortConfig::default().with_cutoff(1).sort_by_number(&mut data).unwrap();
/// assert_eq!(data, vec![1, 2, 3]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortConfig {
    cutoff: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        SortConfig {
            cutoff: DEFAULT_CUTOFF,
        }
    }
}

impl SortConfig {
    /// Sets the range size below which ranges are comparison-sorted. Clamped to at least 1.
    #[must_use]
    pub fn with_cutoff(mut self, cutoff: usize) -> Self {
        self.cutoff = cutoff.max(1);
        self
    }

    /// Returns the configured cutoff.
    pub fn cutoff(&self) -> usize {
        self.cutoff
    }

    /// Sorts `data` ascending by its `u64` key. See [`sort_by_number`].
    pub fn sort_by_number<T: NumberAccessor + ?Sized>(&self, data: &mut T) -> Result<()> {
        let mut keys = Numbers(data);
        let len = keys.count();
        let shift = guess_shift(&keys, self.cutoff);
        log::trace!("sorting {len} number keys from shift {shift}");

        NumberSorter::new(&mut keys, self.cutoff).sort(shift, 0, len);
        verify(&keys, KeyKind::Number)
    }

    /// Sorts `data` ascending by its string key. See [`sort_by_string`].
    pub fn sort_by_string<T: StringAccessor + ?Sized>(&self, data: &mut T) -> Result<()> {
        self.sort_by_string_in(data, pool::shared())
    }

    /// Sorts `data` ascending by its byte-string key. See [`sort_by_bytes`].
    pub fn sort_by_bytes<T: BytesAccessor + ?Sized>(&self, data: &mut T) -> Result<()> {
        self.sort_by_bytes_in(data, pool::shared())
    }

    fn sort_by_string_in<T: StringAccessor + ?Sized>(&self, data: &mut T, pool: &TablePool) -> Result<()> {
        let mut keys = Strings(data);
        let len = keys.count();
        log::trace!("sorting {len} string keys");

        let mut bucket_ends = pool.acquire();
        SequenceSorter::new(&mut keys, &mut bucket_ends, self.cutoff).sort(0, 0, len, 0);
        verify(&keys, KeyKind::String)
    }

    fn sort_by_bytes_in<T: BytesAccessor + ?Sized>(&self, data: &mut T, pool: &TablePool) -> Result<()> {
        let mut keys = Bytes(data);
        let len = keys.count();
        log::trace!("sorting {len} byte-string keys");

        let mut bucket_ends = pool.acquire();
        SequenceSorter::new(&mut keys, &mut bucket_ends, self.cutoff).sort(0, 0, len, 0);
        verify(&keys, KeyKind::Bytes)
    }
}

/// Sorts `data` in place, ascending by its `u64` key.
///
/// The sort is unstable. After the radix passes every adjacent pair is checked with
/// [`NumberAccessor::less`]; a pair out of order is reported as a
/// [`SortError`](crate::SortError).
///
/// # Examples
///
/// ```
/// use flagsort::sort_by_number;
///
/// let mut data = vec![500u64, 3, 700_000, 3, 0];
/// sort_by_number(&mut data).unwrap();
///
/// assert_eq!(data, vec![0, 3, 3, 500, 700_000]);
/// ```
pub fn sort_by_number<T: NumberAccessor + ?Sized>(data: &mut T) -> Result<()> {
    SortConfig::default().sort_by_number(data)
}

/// Sorts `data` in place, ascending by the byte-wise order of its string key.
///
/// # Examples
///
/// ```
/// use flagsort::sort_by_string;
///
/// let mut data = vec!["banana", "apple", "app", "application", "b"];
/// sort_by_string(&mut data).unwrap();
///
/// assert_eq!(data, vec!["app", "apple", "application", "b", "banana"]);
/// ```
pub fn sort_by_string<T: StringAccessor + ?Sized>(data: &mut T) -> Result<()> {
    SortConfig::default().sort_by_string(data)
}

/// Sorts `data` in place, ascending by the lexicographic order of its byte-string key.
///
/// # Examples
///
/// ```
/// use flagsort::sort_by_bytes;
///
/// let mut data: Vec<Vec<u8>> = vec![vec![2, 0], vec![1], vec![], vec![1, 255]];
/// sort_by_bytes(&mut data).unwrap();
///
/// assert_eq!(data, vec![vec![], vec![1], vec![1, 255], vec![2, 0]]);
/// ```
pub fn sort_by_bytes<T: BytesAccessor + ?Sized>(data: &mut T) -> Result<()> {
    SortConfig::default().sort_by_bytes(data)
}
