// Copyright (c) 2025 Probemap Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Implementation of the fixed-capacity probing table.
//!
//! Every operation walks the same [`ProbeSequence`] from the key's home slot.
//! They differ only in where they stop:
//!
//! - `set` stops at the first slot that is empty or already holds the key.
//! - `locate` (and so `get` and `delete`) skips empty slots and keeps going
//!   until it finds the key or the sequence runs out.
//!
//! Deletion empties slots outright, without tombstones. Lookups stay correct
//! because they walk through holes. Insertion does not, so a key displaced
//! past a slot that is later emptied can be inserted a second time into that
//! hole. That second copy shadows the first until it is deleted.

use tracing::{debug, trace};

use crate::data_structures::probing_table::config::ProbingTableConfig;
use crate::data_structures::probing_table::error::{ProbingTableError, Result};
use crate::data_structures::probing_table::hash::{KeyHashAlgorithm, KeyHasher};
use crate::data_structures::probing_table::probe::ProbeSequence;
use crate::data_structures::probing_table::slot::{Slot, SlotSnapshot};

/// A fixed-capacity map from string keys to values, using open addressing.
///
/// The capacity is chosen at construction and never changes. Once every slot
/// is occupied further inserts are refused.
///
/// # Type Parameters
///
/// * `V` - The value type. No bounds are required.
/// * `S` - The [`KeyHasher`] computing home slots.
#[derive(Debug, Clone)]
pub struct ProbingTable<V, S = KeyHashAlgorithm> {
    /// Slot storage, one entry per unit of capacity
    slots: Box<[Slot<V>]>,

    /// Number of occupied slots
    count: usize,

    hasher: S,
}

impl<V> ProbingTable<V> {
    /// Creates an empty table with `capacity` slots and FNV key hashing.
    pub fn new(capacity: usize) -> Self {
        Self::with_hasher(capacity, KeyHashAlgorithm::default())
    }

    /// Creates an empty table from a signed capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ProbingTableError::InvalidCapacity`] if `capacity` is negative.
    pub fn try_new(capacity: i64) -> Result<Self> {
        let config = ProbingTableConfig::new().with_signed_capacity(capacity)?;
        Ok(Self::with_config(&config))
    }

    /// Creates an empty table with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Capacity and hashing algorithm for the table.
    pub fn with_config(config: &ProbingTableConfig) -> Self {
        Self::with_hasher(config.capacity, config.hasher)
    }
}

impl<V, S: KeyHasher> ProbingTable<V, S> {
    /// Creates an empty table with `capacity` slots hashed by `hasher`.
    pub fn with_hasher(capacity: usize, hasher: S) -> Self {
        let slots = std::iter::repeat_with(Slot::default)
            .take(capacity)
            .collect();
        Self {
            slots,
            count: 0,
            hasher,
        }
    }

    /// Inserts a key-value pair if the key is not already present.
    ///
    /// An existing entry is never overwritten. Any string, the empty one
    /// included, is a valid key.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert.
    /// * `value` - The value to associate with the key.
    ///
    /// # Returns
    ///
    /// `true` if the pair was stored, `false` if the table is full or the key
    /// was found on its probe path.
    pub fn set<K>(&mut self, key: K, value: V) -> bool
    where
        K: AsRef<str> + Into<String>,
    {
        let key_str = key.as_ref();

        // no rehashing: a full table simply refuses new keys
        if self.count >= self.capacity() {
            debug!(key = key_str, capacity = self.capacity(), "Table full, insert refused");
            return false;
        }

        let stop = self.probe(key_str).find(|&index| {
            let slot = &self.slots[index];
            slot.is_empty() || slot.holds(key_str)
        });

        // count < capacity and the linear phase visits every slot
        let Some(index) = stop else {
            debug!(key = key_str, "Probe sequence found no free slot");
            return false;
        };

        if self.slots[index].holds(key_str) {
            debug!(key = key_str, slot = index, "Duplicate key, insert refused");
            return false;
        }

        self.slots[index] = Slot::Occupied {
            key: key.into(),
            value,
        };
        self.count += 1;
        trace!(slot = index, elements = self.count, "Stored key");

        true
    }

    /// Returns a reference to the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        if self.count == 0 {
            return None;
        }

        self.locate(key)
            .and_then(|index| self.slots[index].entry())
            .map(|(_, value)| value)
    }

    /// Removes `key` from the table and returns its value.
    ///
    /// The slot is emptied in place; nothing is moved.
    pub fn delete(&mut self, key: &str) -> Option<V> {
        if self.count == 0 {
            return None;
        }

        let index = self.locate(key)?;
        let removed = self.slots[index].take().map(|(_, value)| value);
        if removed.is_some() {
            self.count -= 1;
            debug!(key, slot = index, elements = self.count, "Deleted key");
        }

        removed
    }

    /// [`set`](Self::set) for callers whose key or value may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`ProbingTableError::InvalidArgument`] if either argument is
    /// `None`. The table is left untouched.
    pub fn try_set<K>(&mut self, key: Option<K>, value: Option<V>) -> Result<bool>
    where
        K: AsRef<str> + Into<String>,
    {
        let key = key.ok_or_else(|| ProbingTableError::missing("set", "key"))?;
        let value = value.ok_or_else(|| ProbingTableError::missing("set", "value"))?;
        Ok(self.set(key, value))
    }

    /// [`get`](Self::get) for callers whose key may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`ProbingTableError::InvalidArgument`] if `key` is `None`.
    pub fn try_get(&self, key: Option<&str>) -> Result<Option<&V>> {
        let key = key.ok_or_else(|| ProbingTableError::missing("get", "key"))?;
        Ok(self.get(key))
    }

    /// [`delete`](Self::delete) for callers whose key may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`ProbingTableError::InvalidArgument`] if `key` is `None`.
    pub fn try_delete(&mut self, key: Option<&str>) -> Result<Option<V>> {
        let key = key.ok_or_else(|| ProbingTableError::missing("delete", "key"))?;
        Ok(self.delete(key))
    }

    /// [`locate`](Self::locate) for callers whose key may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`ProbingTableError::InvalidArgument`] if `key` is `None`.
    pub fn try_locate(&self, key: Option<&str>) -> Result<Option<usize>> {
        let key = key.ok_or_else(|| ProbingTableError::missing("locate", "key"))?;
        Ok(self.locate(key))
    }

    /// Finds the slot index holding `key`.
    ///
    /// Walks the full probe sequence, passing over empty slots, so keys that
    /// were displaced past a since-deleted entry are still found.
    ///
    /// # Returns
    ///
    /// `Some(index)` if the key is stored, `None` otherwise (always `None` for
    /// a zero-capacity table).
    pub fn locate(&self, key: &str) -> Option<usize> {
        let found = self.probe(key).find(|&index| self.slots[index].holds(key));
        if found.is_none() {
            trace!(key, "Probe sequence exhausted");
        }
        found
    }

    /// Whether `key` is stored in the table.
    pub fn contains_key(&self, key: &str) -> bool {
        self.locate(key).is_some()
    }

    /// Fraction of slots in use, `elements() / size()`.
    ///
    /// A zero-capacity table reports `0.0` rather than dividing by zero.
    pub fn load(&self) -> f64 {
        if self.capacity() == 0 {
            return 0.0;
        }
        self.count as f64 / self.capacity() as f64
    }

    /// The fixed number of slots.
    pub fn size(&self) -> usize {
        self.capacity()
    }

    /// The number of stored key-value pairs.
    pub fn elements(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// Snapshot of every slot, empty ones included, in index order.
    ///
    /// Intended for inspection and debugging.
    pub fn dump(&self) -> Vec<SlotSnapshot<'_, V>> {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, slot)| SlotSnapshot::of(index, slot))
            .collect()
    }

    /// Iterates over occupied slots as `(index, key, value)`.
    ///
    /// The order follows slot positions and carries no meaning.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str, &V)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.entry().map(|(key, value)| (index, key, value)))
    }

    /// The hasher used for home slots.
    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn probe(&self, key: &str) -> ProbeSequence {
        let capacity = self.capacity();
        let home = self.hasher.home_slot(key, capacity).unwrap_or(0);
        ProbeSequence::new(home, capacity)
    }
}
