//! Position index: entry identity to live heap slot
//!
//! The heap reshapes on every insert, extract, and key update, so an
//! entry's array position is unstable. This map tracks where each live
//! entry currently sits, which is what makes `update_key` O(log n)
//! instead of an O(n) scan for the target.
//!
//! The index must mirror the heap array exactly: whenever two slots are
//! swapped, both mappings are rewritten in the same step. The store owns
//! this struct and routes all entry movement through a single swap
//! routine, so the two structures cannot drift apart.

use rustc_hash::FxHashMap;

use crate::error::QueueError;
use crate::store::EntryId;

/// Maps each live entry's stable id to its current slot in the heap array.
#[derive(Debug, Clone, Default)]
pub(crate) struct PositionIndex {
    slots: FxHashMap<EntryId, usize>,
}

impl PositionIndex {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Records (or overwrites) the slot an entry currently occupies.
    pub(crate) fn record(&mut self, id: EntryId, slot: usize) {
        self.slots.insert(id, slot);
    }

    /// Returns the entry's current slot, if it is live.
    pub(crate) fn lookup(&self, id: EntryId) -> Option<usize> {
        self.slots.get(&id).copied()
    }

    /// Purges an extracted entry's mapping.
    pub(crate) fn remove(&mut self, id: EntryId) -> Option<usize> {
        self.slots.remove(&id)
    }

    /// Pre-reserves room for `additional` mappings so a later `record`
    /// cannot fail mid-operation.
    pub(crate) fn try_reserve(&mut self, additional: usize) -> Result<(), QueueError> {
        self.slots
            .try_reserve(additional)
            .map_err(|_| QueueError::OutOfMemory)
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_lookup_remove() {
        let mut index = PositionIndex::with_capacity(4);
        let a = EntryId::new(0);
        let b = EntryId::new(1);

        index.record(a, 0);
        index.record(b, 1);
        assert_eq!(index.lookup(a), Some(0));
        assert_eq!(index.lookup(b), Some(1));

        // Overwrite simulates a swap: both slots rewritten
        index.record(a, 1);
        index.record(b, 0);
        assert_eq!(index.lookup(a), Some(1));
        assert_eq!(index.lookup(b), Some(0));

        assert_eq!(index.remove(a), Some(1));
        assert_eq!(index.lookup(a), None);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_lookup_unknown_id() {
        let index = PositionIndex::with_capacity(0);
        assert_eq!(index.lookup(EntryId::new(42)), None);
    }
}
