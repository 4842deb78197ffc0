//! Snapshot data model: realms and their resource inventories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable realm identity (`entityId` in exported snapshots).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RealmId(pub i64);

impl fmt::Display for RealmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player-owned realm and everything it holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Realm {
    #[serde(rename = "entityId", alias = "id")]
    pub id: RealmId,
    pub name: String,
    pub resources: Vec<ResourceEntry>,
}

impl Realm {
    pub fn new(id: i64, name: impl Into<String>, resources: Vec<ResourceEntry>) -> Self {
        Self {
            id: RealmId(id),
            name: name.into(),
            resources,
        }
    }

    /// Sum of every entry named exactly `name` (0 if absent).
    ///
    /// Duplicate entries are not expected in exports, but each one counts.
    pub fn amount_of(&self, name: &str) -> f64 {
        self.resources
            .iter()
            .filter(|entry| entry.name == name)
            .map(|entry| entry.amount)
            .sum()
    }
}

/// One named, quantified asset inside a realm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceEntry {
    /// Raw name as exported (e.g. "Wood", "KnightT2", "Knight T2")
    pub name: String,
    #[serde(rename = "totalAmount", alias = "amount")]
    pub amount: f64,
}

impl ResourceEntry {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}
