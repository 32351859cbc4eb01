// Copyright (c) 2025 Probemap Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Storage cells of the probing table.

use serde::Serialize;

/// A single cell of the table.
#[derive(Debug, Clone)]
pub(crate) enum Slot<V> {
    /// Nothing stored here. Deletion returns a slot to this state directly.
    Empty,
    /// A stored key-value pair.
    Occupied { key: String, value: V },
}

impl<V> Default for Slot<V> {
    fn default() -> Self {
        Slot::Empty
    }
}

impl<V> Slot<V> {
    /// Whether this slot holds exactly `key`.
    pub(crate) fn holds(&self, key: &str) -> bool {
        matches!(self, Slot::Occupied { key: stored, .. } if stored == key)
    }

    pub(crate) fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub(crate) fn entry(&self) -> Option<(&str, &V)> {
        match self {
            Slot::Occupied { key, value } => Some((key.as_str(), value)),
            Slot::Empty => None,
        }
    }

    /// Empties the slot, handing back whatever it held.
    pub(crate) fn take(&mut self) -> Option<(String, V)> {
        match std::mem::take(self) {
            Slot::Occupied { key, value } => Some((key, value)),
            Slot::Empty => None,
        }
    }
}

/// Read-only view of one slot, as returned by
/// [`ProbingTable::dump`](super::ProbingTable::dump).
///
/// Empty slots have neither key nor value.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct SlotSnapshot<'a, V> {
    /// Position of the slot in the table.
    pub index: usize,
    /// Stored key, if the slot is occupied.
    pub key: Option<&'a str>,
    /// Stored value, if the slot is occupied.
    pub value: Option<&'a V>,
}

// manual impls: a derive would demand `V: Copy`
impl<V> Clone for SlotSnapshot<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for SlotSnapshot<'_, V> {}

impl<'a, V> SlotSnapshot<'a, V> {
    pub(crate) fn of(index: usize, slot: &'a Slot<V>) -> Self {
        let entry = slot.entry();
        Self {
            index,
            key: entry.map(|(key, _)| key),
            value: entry.map(|(_, value)| value),
        }
    }

    /// Whether the slot held a key-value pair.
    pub fn is_occupied(&self) -> bool {
        self.key.is_some()
    }
}
