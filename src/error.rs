//! Error types for flagsort.

use std::fmt;

use thiserror::Error;

/// Result type alias for flagsort operations.
pub type Result<T> = std::result::Result<T, SortError>;

/// Which entry point detected the failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyKind {
    Number,
    String,
    Bytes,
}

impl KeyKind {
    fn hint(self) -> &'static str {
        match self {
            KeyKind::Number => " (the NumberKey impls for signed and float types may help resolve this)",
            KeyKind::String | KeyKind::Bytes => "",
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyKind::Number => "number",
            KeyKind::String => "string",
            KeyKind::Bytes => "bytes",
        };
        f.write_str(name)
    }
}

/// A sort whose final order failed the post-sort check.
///
/// Both variants abort the sort; the collection is left in an unspecified permutation.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SortError {
    /// The final order agrees with the keys but not with `less`: the collection's `less`
    /// and `get_key` disagree.
    #[error("sort failed at index {index}: {kind} key and less aren't consistent with each other{hint}", hint = .kind.hint())]
    KeyLessMismatch {
        /// Position of the first item that `less` places before its predecessor.
        index: usize,
        kind: KeyKind,
    },

    /// The final order contradicts the keys themselves.
    #[error(
        "sort failed at index {index}: could be a data race, a flagsort bug, or a subtle bug in the {kind} accessor implementation"
    )]
    InternalInvariantViolation {
        /// Position of the first item that `less` places before its predecessor.
        index: usize,
        kind: KeyKind,
    },
}
