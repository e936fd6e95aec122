//! Array-backed binary heap storage
//!
//! The engine behind [`PQueue`](crate::PQueue): a growable array of
//! entries maintained in implicit-tree order (parent of slot `i` is
//! `(i - 1) / 2`, children are `2i + 1` and `2i + 2`), plus the
//! [`PositionIndex`] that tracks where every live entry currently sits.
//!
//! Both ordering modes share one pair of sift routines written against a
//! single "a beats b" comparison, so the min- and max-queue code paths
//! cannot diverge.
//!
//! # Invariants
//!
//! - For every non-root slot `i`, the entry at `parent(i)` beats-or-ties
//!   the entry at `i` under the store's [`Mode`].
//! - The position index maps exactly the ids of the entries in the array,
//!   each to its current slot. Every swap rewrites both mappings in the
//!   same step (`swap_entries` is the only code that moves entries).

use crate::error::QueueError;
use crate::index::PositionIndex;

/// Capacity used when the caller requests zero or leaves it unspecified.
pub const DEFAULT_CAPACITY: usize = 10;

/// Multiplier applied to capacity when a full store must grow.
pub const GROWTH_FACTOR: usize = 2;

/// Ordering direction of a queue, fixed at construction.
///
/// In [`Mode::Min`] the smallest key is at the root and extracted first;
/// [`Mode::Max`] inverts the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Smallest key wins
    Min,
    /// Largest key wins
    Max,
}

impl Mode {
    /// True if `a` belongs strictly closer to the root than `b`.
    ///
    /// Strictness is what makes equal-key updates a no-op and gives
    /// sift-down its deterministic left-child preference on ties.
    pub(crate) fn beats<P: Ord>(self, a: &P, b: &P) -> bool {
        match self {
            Mode::Min => a < b,
            Mode::Max => a > b,
        }
    }
}

/// Stable identity of a queued entry.
///
/// Returned by [`PQueue::insert`](crate::PQueue::insert) and accepted by
/// [`PQueue::update_key`](crate::PQueue::update_key). Ids are drawn from a
/// monotonically increasing counter, so they stay valid across heap
/// reshaping and storage reallocation, and are never reused: a handle to
/// an extracted entry is permanently dead rather than aliasing a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(u64);

impl EntryId {
    pub(crate) fn new(raw: u64) -> Self {
        EntryId(raw)
    }
}

/// A single queued (key, item) pair and its stable id.
#[derive(Debug, Clone)]
pub(crate) struct Entry<T, P> {
    pub(crate) id: EntryId,
    pub(crate) key: P,
    pub(crate) item: T,
}

/// The heap array plus its position index.
#[derive(Debug, Clone)]
pub(crate) struct HeapStore<T, P> {
    mode: Mode,
    growth: usize,
    next_id: u64,
    entries: Vec<Entry<T, P>>,
    index: PositionIndex,
}

impl<T, P: Ord> HeapStore<T, P> {
    pub(crate) fn with_capacity(mode: Mode, capacity: usize, growth: usize) -> Self {
        let capacity = if capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            capacity
        };
        HeapStore {
            mode,
            growth,
            next_id: 0,
            entries: Vec::with_capacity(capacity),
            index: PositionIndex::with_capacity(capacity),
        }
    }

    pub(crate) fn mode(&self) -> Mode {
        self.mode
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Appends an entry and sifts it up into place.
    ///
    /// All storage needed by the append is reserved before anything is
    /// mutated, so a failed insert leaves the store exactly as it was.
    pub(crate) fn insert(&mut self, key: P, item: T) -> Result<EntryId, QueueError> {
        self.reserve_for_append()?;
        self.index.try_reserve(1)?;

        let id = EntryId::new(self.next_id);
        self.next_id += 1;

        let slot = self.entries.len();
        self.entries.push(Entry { id, key, item });
        self.index.record(id, slot);
        self.sift_up(slot);
        Ok(id)
    }

    pub(crate) fn peek(&self) -> Option<&Entry<T, P>> {
        self.entries.first()
    }

    /// Removes and returns the root entry.
    ///
    /// The root is swapped with the last entry, the array shrinks by one,
    /// and the new root sifts down until no child beats it.
    pub(crate) fn extract(&mut self) -> Option<Entry<T, P>> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.swap_entries(0, last);
        let entry = self.entries.pop()?;
        self.index.remove(entry.id);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some(entry)
    }

    /// Replaces an entry's key and restores the heap invariant.
    ///
    /// The sift direction is decided by comparing the new key against the
    /// old one under the store's mode: a key that now beats its old value
    /// moves toward the root, one that is now beaten moves toward the
    /// leaves, and an equal key stays put.
    pub(crate) fn update_key(&mut self, id: EntryId, new_key: P) -> Result<(), QueueError> {
        let slot = self.index.lookup(id).ok_or(QueueError::NotFound)?;

        let toward_root = self.mode.beats(&new_key, &self.entries[slot].key);
        let toward_leaves = self.mode.beats(&self.entries[slot].key, &new_key);
        self.entries[slot].key = new_key;

        if toward_root {
            self.sift_up(slot);
        } else if toward_leaves {
            self.sift_down(slot);
        }
        Ok(())
    }

    pub(crate) fn get(&self, id: EntryId) -> Option<&Entry<T, P>> {
        self.index.lookup(id).map(|slot| &self.entries[slot])
    }

    pub(crate) fn contains(&self, id: EntryId) -> bool {
        self.index.lookup(id).is_some()
    }

    /// Live entries in heap-array order.
    pub(crate) fn entries(&self) -> &[Entry<T, P>] {
        &self.entries
    }

    /// Drops all entries and mappings, retaining capacity.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Ensures room for one more entry, growing by the configured factor.
    ///
    /// Uses `try_reserve_exact` so exhaustion surfaces as an error instead
    /// of an abort, and so capacity follows the growth-factor contract
    /// rather than `Vec`'s own policy.
    fn reserve_for_append(&mut self) -> Result<(), QueueError> {
        let len = self.entries.len();
        let cap = self.entries.capacity();
        if len < cap {
            return Ok(());
        }
        let target = usize::max(cap.saturating_mul(self.growth), len + 1);
        self.entries
            .try_reserve_exact(target - len)
            .map_err(|_| QueueError::OutOfMemory)
    }

    /// Swaps two slots and rewrites both index mappings in the same step.
    fn swap_entries(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a, b);
        self.index.record(self.entries[a].id, a);
        self.index.record(self.entries[b].id, b);
    }

    fn beats_at(&self, a: usize, b: usize) -> bool {
        self.mode.beats(&self.entries[a].key, &self.entries[b].key)
    }

    /// Moves the entry at `slot` toward the root until its parent beats it.
    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.beats_at(slot, parent) {
                self.swap_entries(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    /// Moves the entry at `slot` toward the leaves, at each step swapping
    /// with the most extreme child. The left child wins ties.
    fn sift_down(&mut self, mut slot: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut best = slot;

            if left < len && self.beats_at(left, best) {
                best = left;
            }
            if right < len && self.beats_at(right, best) {
                best = right;
            }

            if best == slot {
                break;
            }
            self.swap_entries(slot, best);
            slot = best;
        }
    }
}
