//! Strongly-typed transaction identifier
//!
//! Wraps a UUID so transaction ids can't be confused with other strings.
//! The short display form (`txn-` plus the first 8 hex digits) is what the
//! CLI prints, and lookups accept it back along with any unambiguous prefix.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "txn-";

/// Unique identifier of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an ID from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Check whether a user-supplied identifier prefix refers to this ID
    ///
    /// Accepts the `txn-` display form and bare hex, with or without hyphens.
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        let prefix = prefix.trim();
        let prefix = prefix.strip_prefix(DISPLAY_PREFIX).unwrap_or(prefix);
        let needle: String = prefix
            .chars()
            .filter(|c| *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if needle.is_empty() {
            return false;
        }
        self.0.simple().to_string().starts_with(&needle)
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, &self.0.to_string()[..8])
    }
}

impl From<Uuid> for TransactionId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for TransactionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}
