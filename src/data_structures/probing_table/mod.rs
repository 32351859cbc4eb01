// Copyright (c) 2025 Probemap Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Fixed-capacity probing table.
//!
//! An open-addressing map from string keys to arbitrary values, stored in one
//! slot array whose size is fixed at construction. There is no resizing: when
//! every slot is taken, inserts are refused.
//!
//! # Features
//!
//! - Quadratic probing through the first half of the table, then a linear
//!   sweep from the home slot that reaches every slot
//! - Insert-once semantics: a duplicate key is refused, never overwritten
//! - Deletion without tombstones
//! - Pluggable key hashing through [`KeyHasher`]
//! - Optional lock-guarded sharing through [`SharedProbingTable`]
//!
//! # Example
//!
//! ```
//! use probemap_lib::data_structures::probing_table::ProbingTable;
//!
//! let mut table = ProbingTable::new(4);
//!
//! assert!(table.set("hello", 42));
//! assert_eq!(table.get("hello"), Some(&42));
//! assert_eq!(table.get("world"), None);
//!
//! // Duplicates are refused and the original value remains
//! assert!(!table.set("hello", 100));
//! assert_eq!(table.get("hello"), Some(&42));
//!
//! assert_eq!(table.delete("hello"), Some(42));
//! assert_eq!(table.elements(), 0);
//! ```
//!
//! # Probing
//!
//! ```
//! use probemap_lib::data_structures::probing_table::ProbeSequence;
//!
//! // home slot 2 in a table of 5: quadratic 2, 3, 1 then linear 3, 4, 0, 1, 2
//! let sequence: Vec<usize> = ProbeSequence::new(2, 5).collect();
//! assert_eq!(sequence, [2, 3, 1, 3, 4, 0, 1, 2]);
//! ```

// Module declarations
mod config;
mod error;
mod hash;
mod probe;
mod shared;
mod slot;
mod table;

// Re-exports
pub use config::ProbingTableConfig;
pub use error::{ProbingTableError, Result};
pub use hash::{KeyHashAlgorithm, KeyHasher};
pub use probe::{ProbePhase, ProbeSequence};
pub use shared::SharedProbingTable;
pub use slot::SlotSnapshot;
pub use table::ProbingTable;
