//! Process-wide pool of 256-slot bucket tables.
//!
//! Sequence sorts borrow one table for the whole recursion tree of a top-level call.
//! The table is returned when the [`PooledTable`] guard drops, on every exit path.

use std::mem::ManuallyDrop;
use std::ops::{Deref, DerefMut};
use std::sync::LazyLock;

use crossbeam_queue::ArrayQueue;
use cuneiform::cuneiform;

use crate::RADIX_BUCKETS;

/// Maximum number of idle tables kept for reuse. Extra tables are freed on release.
pub const POOL_CAPACITY: usize = 64;

/// Cache-aligned bucket counts or offsets for one partitioning pass.
#[cuneiform]
pub(crate) struct BucketTable {
    pub data: [usize; RADIX_BUCKETS],
}

impl BucketTable {
    #[inline(always)]
    pub(crate) fn new() -> Self {
        BucketTable {
            data: [0; RADIX_BUCKETS],
        }
    }
}

/// Bounded free list of boxed tables, safe to share between threads.
pub(crate) struct TablePool {
    idle: ArrayQueue<Box<BucketTable>>,
}

impl TablePool {
    pub(crate) fn new(capacity: usize) -> Self {
        TablePool {
            idle: ArrayQueue::new(capacity),
        }
    }

    pub(crate) fn acquire(&self) -> PooledTable<'_> {
        let table = self.idle.pop().unwrap_or_else(|| {
            log::trace!("bucket table pool empty, allocating a new table");
            Box::new(BucketTable::new())
        });
        PooledTable {
            table: ManuallyDrop::new(table),
            pool: self,
        }
    }

    #[cfg(test)]
    pub(crate) fn idle(&self) -> usize {
        self.idle.len()
    }
}

static POOL: LazyLock<TablePool> = LazyLock::new(|| TablePool::new(POOL_CAPACITY));

/// The table pool shared by every top-level sort in the process.
pub(crate) fn shared() -> &'static TablePool {
    &POOL
}

/// Exclusive handle on a pooled table.
///
/// Contents are whatever the previous user left behind; every use must overwrite all
/// slots before reading them.
pub(crate) struct PooledTable<'p> {
    table: ManuallyDrop<Box<BucketTable>>,
    pool: &'p TablePool,
}

impl Deref for PooledTable<'_> {
    type Target = BucketTable;

    fn deref(&self) -> &BucketTable {
        &self.table
    }
}

impl DerefMut for PooledTable<'_> {
    fn deref_mut(&mut self) -> &mut BucketTable {
        &mut self.table
    }
}

impl Drop for PooledTable<'_> {
    fn drop(&mut self) {
        // Safety: `table` is never touched again after this.
        let table = unsafe { ManuallyDrop::take(&mut self.table) };
        // A full pool just frees the table.
        let _ = self.pool.idle.push(table);
    }
}
