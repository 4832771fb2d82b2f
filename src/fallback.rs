//! Comparison sort used for small ranges, runs of equal keys and depth-capped ranges.
//!
//! Only `less` and `swap` are used, so the caller's predicate has the final word on
//! elements the radix passes could not separate.

use crate::adapter::Permute;

/// Ranges up to this size use insertion sort; larger ones use heapsort.
const INSERTION_SORT_THRESHOLD: usize = 16;

/// Sorts `data[a..b]` ascending according to [`Permute::less`].
pub(crate) fn comparison_sort<P: Permute + ?Sized>(data: &mut P, a: usize, b: usize) {
    if b <= a + 1 {
        return;
    }
    if b - a <= INSERTION_SORT_THRESHOLD {
        insertion_sort(data, a, b);
    } else {
        heapsort(data, a, b);
    }
}

fn insertion_sort<P: Permute + ?Sized>(data: &mut P, a: usize, b: usize) {
    for i in a + 1..b {
        let mut j = i;
        while j > a && data.less(j, j - 1) {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}

// O(n log n) worst case; ranges handed over at the depth cap can be large.
fn heapsort<P: Permute + ?Sized>(data: &mut P, a: usize, b: usize) {
    let n = b - a;
    for root in (0..n / 2).rev() {
        sift_down(data, a, root, n);
    }
    for end in (1..n).rev() {
        data.swap(a, a + end);
        sift_down(data, a, 0, end);
    }
}

/// Restores the max-heap property below `root` for the heap `data[a..a + n]`.
fn sift_down<P: Permute + ?Sized>(data: &mut P, a: usize, mut root: usize, n: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= n {
            return;
        }
        if child + 1 < n && data.less(a + child, a + child + 1) {
            child += 1;
        }
        if !data.less(a + root, a + child) {
            return;
        }
        data.swap(a + root, a + child);
        root = child;
    }
}
