//! American flag sort over `u64` keys, 8 bits per pass, most significant digit first.

use crate::adapter::WordKeys;
use crate::fallback::comparison_sort;
use crate::pool::BucketTable;
use crate::{RADIX_BITS, RADIX_BUCKETS};

const RADIX_MASK: u64 = (1 << RADIX_BITS) - 1;

/// Number of significant bits in `x`.
#[inline(always)]
fn bit_length(x: u64) -> u32 {
    u64::BITS - x.leading_zeros()
}

/// Shift that places the highest bit of `diff` in the top of an 8-bit digit window.
#[inline(always)]
fn exact_shift(diff: u64) -> u32 {
    bit_length(diff).saturating_sub(RADIX_BITS)
}

/// Guesses the starting shift from up to 32 evenly spaced keys.
///
/// Data spread roughly uniformly over a small range (shuffled indices, say) saves the
/// passes over leading zero digits. A guess that is too low costs one counting pass,
/// after which [`NumberSorter::sort`] recomputes the shift from the true min/max.
pub(crate) fn guess_shift<K: WordKeys + ?Sized>(data: &K, cutoff: usize) -> u32 {
    let len = data.count();
    if len < cutoff || len == 0 {
        return u64::BITS - RADIX_BITS;
    }

    let step = (len >> 5).max(1);
    let mut min = data.word(len - 1);
    let mut max = min;
    for i in (0..len).step_by(step) {
        let key = data.word(i);
        min = min.min(key);
        max = max.max(key);
    }

    let mut bits = bit_length(min ^ max);
    // On uniform data the sample often misses the top bit by one.
    if bits < u64::BITS {
        bits += 1;
    }
    bits.saturating_sub(RADIX_BITS)
}

pub(crate) struct NumberSorter<'a, K: ?Sized> {
    data: &'a mut K,
    cutoff: usize,
}

impl<'a, K: WordKeys + ?Sized> NumberSorter<'a, K> {
    pub(crate) fn new(data: &'a mut K, cutoff: usize) -> Self {
        NumberSorter { data, cutoff }
    }

    #[inline(always)]
    fn digit(&self, index: usize, shift: u32) -> usize {
        ((self.data.word(index) >> shift) & RADIX_MASK) as usize
    }

    /// Sorts `data[a..b]`, partitioning first on the digit at `shift`.
    pub(crate) fn sort(&mut self, mut shift: u32, a: usize, b: usize) {
        if b - a < self.cutoff {
            comparison_sort(self.data, a, b);
            return;
        }

        let mut counts = BucketTable::new();
        loop {
            let (min, max) = self.histogram(&mut counts, shift, a, b);
            let diff = min ^ max;
            if diff == 0 {
                comparison_sort(self.data, a, b);
                return;
            }

            // Differing bits must fall inside [shift, shift + 8).
            let above = diff.checked_shr(shift + RADIX_BITS).unwrap_or(0);
            if diff >> shift != 0 && above == 0 {
                break;
            }
            let corrected = exact_shift(diff);
            log::trace!("range {a}..{b}: digit shift {shift} misses the key spread, retrying at {corrected}");
            shift = corrected;
        }

        // Counts become each bucket's write cursor in place.
        let starts = &mut counts.data;
        let mut ends = [0usize; RADIX_BUCKETS];
        let mut pos = a;
        for (start, end) in starts.iter_mut().zip(ends.iter_mut()) {
            let count = *start;
            *start = pos;
            pos += count;
            *end = pos;
        }

        self.permute(starts, &ends, shift);

        let next_shift = shift.saturating_sub(RADIX_BITS);
        let mut pos = a;
        for &end in ends.iter() {
            if end > pos + 1 {
                if shift == 0 {
                    // Every key in the bucket is equal.
                    comparison_sort(self.data, pos, end);
                } else {
                    self.sort(next_shift, pos, end);
                }
            }
            pos = end;
        }
    }

    /// Counts digits at `shift` into `counts` and returns the min and max key of the range.
    fn histogram(&self, counts: &mut BucketTable, shift: u32, a: usize, b: usize) -> (u64, u64) {
        counts.data.fill(0);
        let mut min = self.data.word(a);
        let mut max = min;
        for i in a..b {
            let key = self.data.word(i);
            counts.data[((key >> shift) & RADIX_MASK) as usize] += 1;
            min = min.min(key);
            max = max.max(key);
        }
        (min, max)
    }

    /// Cyclic in-place permutation into buckets. Each swap places at least one element.
    ///
    /// On return `starts[d] == ends[d]` for every digit `d`.
    fn permute(&mut self, starts: &mut [usize; RADIX_BUCKETS], ends: &[usize; RADIX_BUCKETS], shift: u32) {
        for current in 0..RADIX_BUCKETS {
            let end = ends[current];
            while starts[current] < end {
                let i = starts[current];
                let dest = self.digit(i, shift);
                if dest != current {
                    self.data.swap(i, starts[dest]);
                }
                starts[dest] += 1;
            }
        }
    }
}
