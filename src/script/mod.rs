//! Table operations given as text.
//!
//! The command-line tool drives a probing table with a small operation
//! language, one operation per argument:
//!
//! | Operation        | Effect                           |
//! |------------------|----------------------------------|
//! | `set:key=value`  | [`ProbingTable::set`]            |
//! | `get:key`        | [`ProbingTable::get`]            |
//! | `del:key`        | [`ProbingTable::delete`]         |
//! | `locate:key`     | [`ProbingTable::locate`]         |
//!
//! The key is everything between the first `:` and, for `set`, the first `=`,
//! so `get:` looks up the empty key. A verb with no `:` carries no key at all,
//! and `set:key` without `=` carries no value. Those parse, and are refused
//! by the table when applied.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::data_structures::probing_table::{KeyHasher, ProbingTable};
use crate::error::script::ScriptError;
use crate::error::ProbemapResult;

/// A single parsed table operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Insert `value` under `key`.
    Set {
        key: Option<String>,
        value: Option<String>,
    },
    /// Look up `key`.
    Get { key: Option<String> },
    /// Remove `key`.
    Delete { key: Option<String> },
    /// Report the slot holding `key`.
    Locate { key: Option<String> },
}

impl FromStr for Operation {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (verb, rest) = match s.split_once(':') {
            Some((verb, rest)) => (verb, Some(rest)),
            None => (s, None),
        };
        let key = rest.map(str::to_string);

        match verb {
            "set" => {
                let (key, value) = match rest.map(|rest| rest.split_once('=')) {
                    Some(Some((key, value))) => (Some(key.to_string()), Some(value.to_string())),
                    Some(None) => (key, None),
                    None => (None, None),
                };
                Ok(Operation::Set { key, value })
            }
            "get" => Ok(Operation::Get { key }),
            "del" | "delete" => Ok(Operation::Delete { key }),
            "locate" => Ok(Operation::Locate { key }),
            other => Err(ScriptError::UnknownVerb(other.to_string())),
        }
    }
}

/// Result of applying one [`Operation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Outcome {
    Set { key: String, inserted: bool },
    Get { key: String, value: Option<String> },
    Delete { key: String, removed: Option<String> },
    Locate { key: String, index: Option<usize> },
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Set { key, inserted } => {
                let status = if *inserted { "inserted" } else { "rejected" };
                write!(f, "set {key}: {status}")
            }
            Outcome::Get { key, value } => match value {
                Some(value) => write!(f, "get {key}: {value}"),
                None => write!(f, "get {key}: not found"),
            },
            Outcome::Delete { key, removed } => match removed {
                Some(value) => write!(f, "del {key}: removed {value}"),
                None => write!(f, "del {key}: not found"),
            },
            Outcome::Locate { key, index } => match index {
                Some(index) => write!(f, "locate {key}: slot {index}"),
                None => write!(f, "locate {key}: not found"),
            },
        }
    }
}

/// Parses every operation, failing on the first malformed one.
pub fn parse_all<I, S>(operations: I) -> Result<Vec<Operation>, ScriptError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    operations
        .into_iter()
        .map(|operation| operation.as_ref().parse())
        .collect()
}

impl Operation {
    /// Applies this operation to `table`.
    ///
    /// # Errors
    ///
    /// Propagates table misuse, such as a missing key or value.
    pub fn apply<S: KeyHasher>(
        self,
        table: &mut ProbingTable<String, S>,
    ) -> ProbemapResult<Outcome> {
        let outcome = match self {
            Operation::Set { key, value } => {
                let inserted = table.try_set(key.as_deref(), value)?;
                Outcome::Set {
                    key: key.unwrap_or_default(),
                    inserted,
                }
            }
            Operation::Get { key } => {
                let value = table.try_get(key.as_deref())?.cloned();
                Outcome::Get {
                    key: key.unwrap_or_default(),
                    value,
                }
            }
            Operation::Delete { key } => {
                let removed = table.try_delete(key.as_deref())?;
                Outcome::Delete {
                    key: key.unwrap_or_default(),
                    removed,
                }
            }
            Operation::Locate { key } => {
                let index = table.try_locate(key.as_deref())?;
                Outcome::Locate {
                    key: key.unwrap_or_default(),
                    index,
                }
            }
        };
        debug!(%outcome, "Applied operation");
        Ok(outcome)
    }
}

/// Applies `operations` in order, stopping at the first error.
pub fn run<S: KeyHasher>(
    table: &mut ProbingTable<String, S>,
    operations: Vec<Operation>,
) -> ProbemapResult<Vec<Outcome>> {
    operations
        .into_iter()
        .map(|operation| operation.apply(table))
        .collect()
}
