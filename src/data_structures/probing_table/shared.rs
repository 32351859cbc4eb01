// Copyright (c) 2025 Probemap Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! A probing table behind a single exclusive lock.
//!
//! The table itself has no internal synchronization. This wrapper serializes
//! every operation through one `parking_lot::Mutex`, so it can be shared
//! between threads (typically inside an `Arc`).

use parking_lot::Mutex;

use crate::data_structures::probing_table::hash::{KeyHashAlgorithm, KeyHasher};
use crate::data_structures::probing_table::table::ProbingTable;

/// Thread-safe wrapper around a [`ProbingTable`].
#[derive(Debug)]
pub struct SharedProbingTable<V, S = KeyHashAlgorithm> {
    inner: Mutex<ProbingTable<V, S>>,
}

impl<V> SharedProbingTable<V> {
    /// Creates an empty shared table with `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self::from_table(ProbingTable::new(capacity))
    }
}

impl<V, S: KeyHasher> SharedProbingTable<V, S> {
    /// Wraps an existing table.
    pub fn from_table(table: ProbingTable<V, S>) -> Self {
        Self {
            inner: Mutex::new(table),
        }
    }

    /// See [`ProbingTable::set`].
    pub fn set<K>(&self, key: K, value: V) -> bool
    where
        K: AsRef<str> + Into<String>,
    {
        self.inner.lock().set(key, value)
    }

    /// Returns a clone of the value stored under `key`.
    ///
    /// A reference cannot outlive the lock, so the value is cloned.
    pub fn get(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    /// See [`ProbingTable::delete`].
    pub fn delete(&self, key: &str) -> Option<V> {
        self.inner.lock().delete(key)
    }

    /// See [`ProbingTable::locate`].
    pub fn locate(&self, key: &str) -> Option<usize> {
        self.inner.lock().locate(key)
    }

    pub fn load(&self) -> f64 {
        self.inner.lock().load()
    }

    pub fn size(&self) -> usize {
        self.inner.lock().size()
    }

    pub fn elements(&self) -> usize {
        self.inner.lock().elements()
    }

    /// Runs `f` with exclusive access to the table.
    ///
    /// Use this to make several operations atomic with respect to other threads.
    pub fn with_table<R>(&self, f: impl FnOnce(&mut ProbingTable<V, S>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Unwraps the table.
    pub fn into_inner(self) -> ProbingTable<V, S> {
        self.inner.into_inner()
    }
}
