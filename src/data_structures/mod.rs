//! Data structures for probemap.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Fixed memory footprint decided at construction
//! - Bounded work per operation

pub mod probing_table;

// Re-export common data structures
pub use probing_table::{ProbingTable, ProbingTableError, SharedProbingTable};
