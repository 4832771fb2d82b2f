//! American flag sort over byte-sequence keys, one byte per pass.
//!
//! Serves both string and byte-string keys through [`ByteKeys`]. Each pass:
//! 1. Swaps exhausted keys (no byte left at `offset`) to the front of the range and
//!    comparison-sorts them.
//! 2. Counts the byte at `offset` of every other key, while tracking the prefix all of
//!    them share (up to [`MAX_BYTE_SKIP`] bytes).
//! 3. Skips a shared prefix in one step, or partitions by the byte at `offset` and
//!    recurses into each bucket.
//!
//! Recursion stops at [`MAX_RADIX_DEPTH`], where the range is handed to the comparison sort.

use crate::adapter::ByteKeys;
use crate::fallback::comparison_sort;
use crate::pool::BucketTable;
use crate::{MAX_BYTE_SKIP, MAX_RADIX_DEPTH, RADIX_BUCKETS};

/// Longest prefix shared by every key remainder seen so far, capped at [`MAX_BYTE_SKIP`].
struct CommonPrefix {
    bytes: [u8; MAX_BYTE_SKIP],
    len: usize,
    seeded: bool,
}

impl CommonPrefix {
    fn new() -> Self {
        CommonPrefix {
            bytes: [0; MAX_BYTE_SKIP],
            len: 0,
            seeded: false,
        }
    }

    #[inline(always)]
    fn narrow(&mut self, rest: &[u8]) {
        if !self.seeded {
            let len = rest.len().min(MAX_BYTE_SKIP);
            self.bytes[..len].copy_from_slice(&rest[..len]);
            self.len = len;
            self.seeded = true;
            return;
        }
        if self.len == 0 {
            return;
        }
        let limit = self.len.min(rest.len());
        self.len = self.bytes[..limit]
            .iter()
            .zip(rest)
            .take_while(|(p, r)| p == r)
            .count();
    }
}

pub(crate) struct SequenceSorter<'a, K: ?Sized> {
    data: &'a mut K,
    /// Shared by every frame of one top-level sort; fully rewritten before each read.
    bucket_ends: &'a mut BucketTable,
    cutoff: usize,
}

impl<'a, K: ByteKeys + ?Sized> SequenceSorter<'a, K> {
    pub(crate) fn new(data: &'a mut K, bucket_ends: &'a mut BucketTable, cutoff: usize) -> Self {
        SequenceSorter {
            data,
            bucket_ends,
            cutoff,
        }
    }

    /// Sorts `data[a..b]`, whose keys all agree on their first `offset` bytes.
    pub(crate) fn sort(&mut self, offset: usize, mut a: usize, b: usize, depth: usize) {
        if b - a < self.cutoff {
            comparison_sort(self.data, a, b);
            return;
        }
        if depth >= MAX_RADIX_DEPTH {
            log::debug!(
                "radix depth {depth} reached at offset {offset} for range {a}..{b}, using comparison sort"
            );
            comparison_sort(self.data, a, b);
            return;
        }

        let mut counts = BucketTable::new();
        let mut prefix = CommonPrefix::new();
        let exhausted_start = a;
        for i in a..b {
            let key = self.data.bytes(i);
            if key.len() <= offset {
                if i != a {
                    self.data.swap(a, i);
                }
                a += 1;
                continue;
            }
            let rest = &key[offset..];
            counts.data[rest[0] as usize] += 1;
            prefix.narrow(rest);
        }

        // Exhausted keys tie on every byte examined so far.
        if a - exhausted_start > 1 {
            comparison_sort(self.data, exhausted_start, a);
        }
        if a == b {
            return;
        }

        if prefix.len > 0 {
            self.sort(offset + prefix.len, a, b, depth + 1);
            return;
        }

        // Counts become each bucket's write cursor in place.
        let starts = &mut counts.data;
        let mut pos = a;
        for (start, end) in starts.iter_mut().zip(self.bucket_ends.data.iter_mut()) {
            let count = *start;
            *start = pos;
            pos += count;
            *end = pos;
        }

        for current in 0..RADIX_BUCKETS {
            let end = self.bucket_ends.data[current];
            while starts[current] < end {
                let i = starts[current];
                let dest = self.data.bytes(i)[offset] as usize;
                if dest != current {
                    self.data.swap(i, starts[dest]);
                }
                starts[dest] += 1;
            }
        }

        // `counts` now holds each bucket's end; `bucket_ends` gets reused by the recursion.
        let mut pos = a;
        for &end in counts.data.iter() {
            if end > pos + 1 {
                self.sort(offset + 1, pos, end, depth + 1);
            }
            pos = end;
        }
    }
}
