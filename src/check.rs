//! Post-sort audit of adjacent pairs.

use crate::adapter::Permute;
use crate::error::{KeyKind, Result, SortError};

/// Confirms that no item sorts before its predecessor according to `less`.
///
/// A violation is classified by the natural key order: if the keys are in order the
/// caller's `less` disagrees with its keys, otherwise the permutation itself is wrong.
pub(crate) fn verify<P: Permute + ?Sized>(data: &P, kind: KeyKind) -> Result<()> {
    for i in 1..data.count() {
        if !data.less(i, i - 1) {
            continue;
        }
        let err = if data.key_less(i, i - 1) {
            SortError::InternalInvariantViolation { index: i, kind }
        } else {
            SortError::KeyLessMismatch { index: i, kind }
        };
        log::debug!("{err}");
        return Err(err);
    }
    Ok(())
}
