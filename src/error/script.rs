//! Script error module.
//!
//! Errors raised while parsing table operations given on the command line.

use thiserror::Error;

/// Errors that can occur while parsing a table operation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScriptError {
    /// The verb is not one of `set`, `get`, `del`, `locate`.
    #[error("Unknown operation '{0}', expected one of set, get, del, locate")]
    UnknownVerb(String),
}
