//! Ingestion boundary: turns pasted or on-disk JSON into validated realms.
//!
//! Validation is deliberately shallow. It checks the shape the aggregation
//! code relies on (array of realms, id, name, resource list) and reports the
//! first offending realm so the caller can show it next to the input.

use crate::types::{Realm, ResourceEntry};
use serde_json::Value;
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Error parsing JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid realm data: {0}")]
    Schema(#[from] SchemaError),
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Shape violations in otherwise valid JSON.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("Data must be an array of realms")]
    NotAnArray,
    #[error("Realm at index {index} is not an object")]
    RealmNotObject { index: usize },
    #[error("Realm at index {index} is missing entityId")]
    MissingId { index: usize },
    #[error("Realm at index {index} has a non-integer entityId")]
    InvalidId { index: usize },
    #[error("Realm at index {index} has both entityId and id")]
    AmbiguousId { index: usize },
    #[error("Realm at index {index} reuses entityId {id}")]
    DuplicateId { index: usize, id: i64 },
    #[error("Realm at index {index} is missing name")]
    MissingName { index: usize },
    #[error("Realm \"{name}\" has invalid resources (not an array)")]
    InvalidResources { index: usize, name: String },
    #[error("Realm \"{realm}\" resource at index {entry}: {reason}")]
    InvalidEntry {
        index: usize,
        realm: String,
        entry: usize,
        reason: &'static str,
    },
}

impl SchemaError {
    /// Index of the offending realm, if the error is tied to one.
    pub fn realm_index(&self) -> Option<usize> {
        match self {
            SchemaError::NotAnArray => None,
            SchemaError::RealmNotObject { index }
            | SchemaError::MissingId { index }
            | SchemaError::InvalidId { index }
            | SchemaError::AmbiguousId { index }
            | SchemaError::DuplicateId { index, .. }
            | SchemaError::MissingName { index }
            | SchemaError::InvalidResources { index, .. }
            | SchemaError::InvalidEntry { index, .. } => Some(*index),
        }
    }
}

/// Parses a JSON document into realms, validating the shape first.
pub fn parse_realms(text: &str) -> Result<Vec<Realm>, IngestError> {
    let value: Value = serde_json::from_str(text)?;
    validate(&value)?;
    let realms: Vec<Realm> = serde_json::from_value(value)?;
    log::debug!("Parsed {} realms", realms.len());
    Ok(realms)
}

/// Reads and parses a snapshot file.
pub fn load_file(path: &Path) -> Result<Vec<Realm>, IngestError> {
    log::info!("Loading realms from: {}", path.display());
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_realms(&text)
}

/// Checks the realm-array shape without building any realms.
pub fn validate(value: &Value) -> Result<(), SchemaError> {
    let realms = value.as_array().ok_or(SchemaError::NotAnArray)?;
    let mut seen_ids = HashSet::with_capacity(realms.len());

    for (index, realm) in realms.iter().enumerate() {
        let fields = realm
            .as_object()
            .ok_or(SchemaError::RealmNotObject { index })?;

        if fields.contains_key("entityId") && fields.contains_key("id") {
            return Err(SchemaError::AmbiguousId { index });
        }

        let id = fields
            .get("entityId")
            .or_else(|| fields.get("id"))
            .filter(|v| !v.is_null())
            .ok_or(SchemaError::MissingId { index })?;
        let id = id.as_i64().ok_or(SchemaError::InvalidId { index })?;
        if !seen_ids.insert(id) {
            return Err(SchemaError::DuplicateId { index, id });
        }

        let name = fields
            .get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .ok_or(SchemaError::MissingName { index })?;

        let resources = fields.get("resources").and_then(Value::as_array).ok_or_else(|| {
            SchemaError::InvalidResources {
                index,
                name: name.to_string(),
            }
        })?;

        for (entry, resource) in resources.iter().enumerate() {
            if let Err(reason) = validate_entry(resource) {
                return Err(SchemaError::InvalidEntry {
                    index,
                    realm: name.to_string(),
                    entry,
                    reason,
                });
            }
        }
    }

    Ok(())
}

fn validate_entry(resource: &Value) -> Result<(), &'static str> {
    let fields = resource.as_object().ok_or("not an object")?;
    if fields.contains_key("totalAmount") && fields.contains_key("amount") {
        return Err("both totalAmount and amount");
    }
    if !fields.get("name").is_some_and(Value::is_string) {
        return Err("missing name");
    }
    let amount = fields
        .get("totalAmount")
        .or_else(|| fields.get("amount"))
        .and_then(Value::as_f64)
        .ok_or("missing totalAmount")?;
    if amount < 0.0 {
        return Err("negative totalAmount");
    }
    Ok(())
}

/// Small two-realm snapshot used to seed the data-entry box.
pub fn sample_realms() -> Vec<Realm> {
    vec![
        Realm::new(
            1,
            "Sample Realm 1",
            vec![
                ResourceEntry::new("Wood", 1000.0),
                ResourceEntry::new("Stone", 500.0),
                ResourceEntry::new("Knight", 100.0),
            ],
        ),
        Realm::new(
            2,
            "Sample Realm 2",
            vec![
                ResourceEntry::new("Wood", 750.0),
                ResourceEntry::new("Copper", 250.0),
                ResourceEntry::new("Crossbowman", 50.0),
            ],
        ),
    ]
}

/// The sample snapshot as pretty-printed JSON, in export field names.
pub fn sample_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&sample_realms())
}
