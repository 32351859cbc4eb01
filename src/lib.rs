//! Probemap Library
//!
//! A fixed-capacity associative map from string keys to values, backed by a
//! single slot array with open addressing, plus the configuration, error and
//! operation-script layers used by the `probemap` command-line tool.
//!
//! # Architecture
//!
//! - [`data_structures::probing_table`]: the table, its probe sequence and key hashing
//! - [`script`]: text operations applied to a table
//! - [`config`]: layered configuration (defaults, file, environment)
//! - [`error`]: error types and reporting

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod script;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for probemap.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
