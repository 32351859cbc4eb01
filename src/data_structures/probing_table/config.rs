// Copyright (c) 2025 Probemap Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration options for the probing table.

use crate::data_structures::probing_table::error::{ProbingTableError, Result};
use crate::data_structures::probing_table::hash::KeyHashAlgorithm;

/// Configuration for a probing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbingTableConfig {
    /// Number of slots. Fixed for the lifetime of the table.
    pub capacity: usize,

    /// Algorithm used to compute home slots.
    pub hasher: KeyHashAlgorithm,
}

impl ProbingTableConfig {
    /// Creates a new configuration with default values.
    ///
    /// # Returns
    ///
    /// A new `ProbingTableConfig` instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of slots in the table.
    ///
    /// # Arguments
    ///
    /// * `capacity` - The fixed number of slots.
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the capacity from a signed value, as read from an external source.
    ///
    /// # Errors
    ///
    /// Returns [`ProbingTableError::InvalidCapacity`] if `capacity` is negative
    /// or does not fit in `usize`.
    pub fn with_signed_capacity(self, capacity: i64) -> Result<Self> {
        let capacity =
            usize::try_from(capacity).map_err(|_| ProbingTableError::InvalidCapacity(capacity))?;
        Ok(self.with_capacity(capacity))
    }

    /// Sets the key hashing algorithm.
    ///
    /// # Arguments
    ///
    /// * `hasher` - The algorithm used to compute home slots.
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_hasher(mut self, hasher: KeyHashAlgorithm) -> Self {
        self.hasher = hasher;
        self
    }
}

impl Default for ProbingTableConfig {
    fn default() -> Self {
        Self {
            capacity: 1_024,
            hasher: KeyHashAlgorithm::Fnv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = ProbingTableConfig::new()
            .with_capacity(16)
            .with_hasher(KeyHashAlgorithm::Polynomial);
        assert_eq!(config.capacity, 16);
        assert_eq!(config.hasher, KeyHashAlgorithm::Polynomial);
    }

    #[test]
    fn test_signed_capacity() {
        let config = ProbingTableConfig::new().with_signed_capacity(0).unwrap();
        assert_eq!(config.capacity, 0);

        assert_eq!(
            ProbingTableConfig::new().with_signed_capacity(-1),
            Err(ProbingTableError::InvalidCapacity(-1))
        );
    }
}
