// Copyright (c) 2025 Probemap Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Key hashing for the probing table.
//!
//! A table only needs a deterministic hash of the key's string content; the
//! home slot is that hash reduced modulo the capacity. The distribution is not
//! part of the contract, so the hasher is a seam: FNV-1a by default, or a
//! 31-multiplier polynomial hash whose values are small and easy to predict.

use std::hash::Hasher;

use serde::{Deserialize, Serialize};

/// Mask that clears the sign bit of a 32-bit polynomial hash.
const POLYNOMIAL_MASK: u32 = 0x7FFF_FFFF;

/// Computes the hash used to place a key in a probing table.
///
/// Implementations must return the same value for the same key for the whole
/// lifetime of a table.
pub trait KeyHasher {
    /// Hashes the string content of `key`.
    fn hash_key(&self, key: &str) -> u64;

    /// Maps `key` onto a slot index in `0..capacity`.
    ///
    /// Returns `None` for a zero-capacity table, which has no slots.
    fn home_slot(&self, key: &str, capacity: usize) -> Option<usize> {
        if capacity == 0 {
            return None;
        }
        Some((self.hash_key(key) % capacity as u64) as usize)
    }
}

/// Built-in key hashing algorithms, selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyHashAlgorithm {
    /// FNV-1a over the UTF-8 bytes of the key.
    #[default]
    Fnv,

    /// `h = 31 * h + unit` over the UTF-16 code units of the key, in wrapping
    /// 32-bit arithmetic, with the sign bit cleared.
    Polynomial,
}

impl KeyHasher for KeyHashAlgorithm {
    fn hash_key(&self, key: &str) -> u64 {
        match self {
            Self::Fnv => fnv_hash(key),
            Self::Polynomial => polynomial_hash(key),
        }
    }
}

impl std::fmt::Display for KeyHashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fnv => f.write_str("fnv"),
            Self::Polynomial => f.write_str("polynomial"),
        }
    }
}

/// FNV-1a hash of the key bytes.
fn fnv_hash(key: &str) -> u64 {
    let mut hasher = fnv::FnvHasher::default();
    hasher.write(key.as_bytes());
    hasher.finish()
}

/// 31-multiplier polynomial hash of the key's UTF-16 code units.
fn polynomial_hash(key: &str) -> u64 {
    let hash = key
        .encode_utf16()
        .fold(0u32, |h, unit| h.wrapping_mul(31).wrapping_add(u32::from(unit)));
    u64::from(hash & POLYNOMIAL_MASK)
}
