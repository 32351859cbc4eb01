// Copyright (c) 2025 Probemap Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the probing table.
//!
//! Only caller misuse (a negative capacity, a missing key or value) is an error. A full table, a duplicate key or a missing
//! key are ordinary return values of the table operations.

/// Error types for probing table operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProbingTableError {
    /// Table constructed with a negative capacity
    #[error("Invalid table size specified: {0}")]
    InvalidCapacity(i64),

    /// Missing key or value passed to a table operation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ProbingTableError {
    /// Builds the error reported when `operation` is called without `argument`.
    pub(crate) fn missing(operation: &str, argument: &str) -> Self {
        Self::InvalidArgument(format!("{operation} requires a {argument}"))
    }
}

/// Result type for probing table operations
pub type Result<T> = std::result::Result<T, ProbingTableError>;
