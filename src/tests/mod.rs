//! Test modules for probemap.
//!
//! This module contains crate-internal test suites:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Model-based property tests for the probing table
//! - Shared fixtures and strategies

pub mod error_tests;

pub use test_utils::{SuffixHasher, TestFixture};
