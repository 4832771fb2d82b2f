//! # Flagsort
//!
//! `flagsort` is an in-place, unstable radix sorting library for collections keyed by
//! numbers, strings or byte strings.
//!
//! It implements **American flag sort**: a most-significant-digit radix sort that counts
//! each digit and then permutes elements into their buckets with cyclic swaps, so no
//! auxiliary copy of the data is ever made. Small ranges are finished with a comparison
//! sort.
//!
//! ## Key Features
//!
//! - **Shift Guessing**: Numeric sorts sample the keys to skip leading digits that are
//!   uniform across the input (think shuffled indices into an array).
//! - **Common Prefix Skipping**: String sorts detect prefixes shared by a whole range and
//!   consume up to 16 bytes of them in a single step.
//! - **Bounded Recursion**: String sorts fall back to a comparison sort after 32 radix
//!   levels, so pathological shared prefixes cannot blow up stack use.
//! - **Zero-Copy abstractions**: The [`NumberAccessor`], [`StringAccessor`] and
//!   [`BytesAccessor`] traits sort arbitrary layouts through `get_key`, `less` and `swap`.
//! - **Self-Checking**: Every sort audits its result and reports a [`SortError`] when the
//!   collection's `less` and `get_key` turn out to disagree.
//!
//! ## Usage
//!
//! ```rust
//! use flagsort::prelude::*;
//!
//! let mut words = vec!["banana", "apple", "cherry", "date"];
//! sort_by_string(&mut words).unwrap();
//! assert_eq!(words, vec!["apple", "banana", "cherry", "date"]);
//!
//! let mut temperatures = vec![3.5f64, -12.0, 0.0, -0.5];
//! sort_by_number(&mut temperatures).unwrap();
//! assert_eq!(temperatures, vec![-12.0, -0.5, 0.0, 3.5]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Numbers**: at most eight counting passes over a `u64` key, usually fewer.
//! - **Strings**: linear in the number of distinguishing bytes, with an O(N log N)
//!   comparison sort below the [cutoff](SortConfig::with_cutoff) and at the depth limit.
//! - **Memory Overhead**: a few KiB of bucket tables, independent of input size.
//!
//! Pooled tables are shared across threads, so independent sorts may run concurrently.

mod adapter;
pub mod algo;
mod check;
pub mod core;
pub mod error;
mod fallback;
mod number;
mod pool;
mod sequence;

pub use crate::algo::{DEFAULT_CUTOFF, SortConfig, sort_by_bytes, sort_by_number, sort_by_string};
pub use crate::core::{BytesAccessor, NumberAccessor, NumberKey, StringAccessor};
pub use crate::error::{KeyKind, Result, SortError};
pub use crate::pool::POOL_CAPACITY;

/// Bits examined per radix pass.
pub const RADIX_BITS: u32 = 8;

/// Number of buckets per radix pass.
pub const RADIX_BUCKETS: usize = 1 << RADIX_BITS;

/// Longest common prefix a single string pass will detect and skip.
pub const MAX_BYTE_SKIP: usize = 16;

/// Radix recursion levels a string sort may use before switching to a comparison sort.
pub const MAX_RADIX_DEPTH: usize = 32;

pub mod prelude {
    pub use crate::algo::{SortConfig, sort_by_bytes, sort_by_number, sort_by_string};
    pub use crate::core::{BytesAccessor, NumberAccessor, NumberKey, StringAccessor};
    pub use crate::error::SortError;
}
