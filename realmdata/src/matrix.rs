//! Resource × realm amount matrix.
//!
//! Columns are keyed by [`RealmId`], not by realm name, so two realms that
//! happen to share a name still get separate columns.

use crate::catalog::locale_cmp;
use crate::types::{Realm, RealmId};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;

/// One realm column: identity for lookups, name for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RealmColumn {
    pub id: RealmId,
    pub name: String,
}

/// Realm columns in display order (alphabetical by name).
pub fn realm_columns(realms: &[Realm]) -> Vec<RealmColumn> {
    let mut columns: Vec<RealmColumn> = realms
        .iter()
        .map(|realm| RealmColumn {
            id: realm.id,
            name: realm.name.clone(),
        })
        .collect();
    columns.sort_by(|a, b| locale_cmp(&a.name, &b.name));
    columns
}

/// Amounts of one resource across every realm column, plus their sum.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatrixRow {
    pub amounts: IndexMap<RealmId, f64>,
    pub total: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResourceMatrix {
    columns: Vec<RealmColumn>,
    rows: IndexMap<String, MatrixRow>,
}

impl ResourceMatrix {
    pub fn columns(&self) -> &[RealmColumn] {
        &self.columns
    }

    pub fn rows(&self) -> &IndexMap<String, MatrixRow> {
        &self.rows
    }

    pub fn row(&self, resource: &str) -> Option<&MatrixRow> {
        self.rows.get(resource)
    }

    /// Amount of `resource` held by realm `id`; 0 when either is unknown.
    pub fn amount(&self, resource: &str, id: RealmId) -> f64 {
        self.row(resource)
            .and_then(|row| row.amounts.get(&id))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn total(&self, resource: &str) -> f64 {
        self.row(resource).map_or(0.0, |row| row.total)
    }

    /// First column whose realm is called `name`.
    pub fn column_by_name(&self, name: &str) -> Option<&RealmColumn> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Builds the matrix for `resource_names` over the realms in `realm_order`.
///
/// Every row has an entry for every column (0 when the realm lacks the
/// resource) and `total` is the sum of that row's stored cells.
pub fn build_matrix(
    realms: &[Realm],
    resource_names: &[String],
    realm_order: &[RealmColumn],
) -> ResourceMatrix {
    let mut by_id: HashMap<RealmId, &Realm> = HashMap::with_capacity(realms.len());
    for realm in realms {
        by_id.entry(realm.id).or_insert(realm);
    }

    let mut rows = IndexMap::with_capacity(resource_names.len());
    for resource in resource_names {
        let mut row = MatrixRow::default();
        for column in realm_order {
            let amount = by_id
                .get(&column.id)
                .map_or(0.0, |realm| realm.amount_of(resource));
            row.amounts.insert(column.id, amount);
        }
        row.total = row.amounts.values().sum();
        rows.insert(resource.clone(), row);
    }

    log::debug!(
        "Built resource matrix: {} resources x {} realms",
        rows.len(),
        realm_order.len()
    );

    ResourceMatrix {
        columns: realm_order.to_vec(),
        rows,
    }
}
