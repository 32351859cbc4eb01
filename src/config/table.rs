//! Table configuration module.
//!
//! Settings for the probing table built by the command-line tool.

use super::{ConfigResult, Validate};
use crate::data_structures::probing_table::{
    KeyHashAlgorithm, ProbingTableConfig, ProbingTableError,
};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Probing table configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSettings {
    /// Number of slots. Signed because it comes from files and the
    /// environment; negative values are rejected.
    pub capacity: i64,

    /// Key hashing algorithm (`fnv` or `polynomial`)
    pub hasher: KeyHashAlgorithm,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            capacity: 1_024,
            hasher: KeyHashAlgorithm::Fnv,
        }
    }
}

impl Validate for TableSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.capacity < 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "table.capacity".to_string(),
                message: format!("must be zero or greater, got {}", self.capacity),
            });
        }

        Ok(())
    }
}

impl TableSettings {
    /// Converts these settings into a table configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ProbingTableError::InvalidCapacity`] for a negative capacity.
    pub fn to_table_config(&self) -> Result<ProbingTableConfig, ProbingTableError> {
        ProbingTableConfig::new()
            .with_hasher(self.hasher)
            .with_signed_capacity(self.capacity)
    }
}
