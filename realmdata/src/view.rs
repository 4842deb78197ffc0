//! Row selection for the table views: tab split, search filter and sorting.

use crate::catalog::compare_resources;
use crate::matrix::ResourceMatrix;
use crate::military::is_military_unit;
use crate::types::RealmId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    DataEntry,
    Resources,
    Military,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Applies the direction to an ascending comparison.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// Column the rows are ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Canonical resource order
    #[default]
    Resource,
    /// Row total
    Total,
    /// Amount held by one realm
    Realm(RealmId),
}

impl SortKey {
    /// Resolves a column label: `resource`, `total`, or a realm name.
    ///
    /// Returns `None` for a label that names no realm in the matrix.
    pub fn from_column(label: &str, matrix: &ResourceMatrix) -> Option<Self> {
        match label {
            "resource" => Some(SortKey::Resource),
            "total" => Some(SortKey::Total),
            name => matrix
                .column_by_name(name)
                .map(|column| SortKey::Realm(column.id)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    /// Result of clicking `key`'s column header.
    ///
    /// Clicking the current ascending key flips it to descending; anything
    /// else sorts ascending by `key`.
    pub fn toggled(self, key: SortKey) -> Self {
        let direction = if self.key == key && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        Self { key, direction }
    }
}

/// Splits names into (economic, military), keeping the input order.
pub fn split_resources(names: &[String]) -> (Vec<String>, Vec<String>) {
    let (military, economic): (Vec<String>, Vec<String>) =
        names.iter().cloned().partition(|name| is_military_unit(name));
    (economic, military)
}

/// Case-insensitive substring match on raw names. Blank terms match all.
pub fn filter_names(names: &[String], term: &str) -> Vec<String> {
    if term.trim().is_empty() {
        return names.to_vec();
    }
    let needle = term.to_lowercase();
    names
        .iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Orders resource rows by `key` in `direction`.
///
/// The sort is stable, so rows with equal amounts keep their input order.
/// Descending by `Resource` reverses the canonical comparator, which puts
/// known resources last and reads them back to front.
pub fn sort_rows(
    names: &[String],
    key: SortKey,
    direction: SortDirection,
    matrix: &ResourceMatrix,
) -> Vec<String> {
    let mut rows = names.to_vec();
    match key {
        SortKey::Resource => {
            rows.sort_by(|a, b| direction.apply(compare_resources(a, b)));
        }
        SortKey::Total => {
            rows.sort_by(|a, b| direction.apply(matrix.total(a).total_cmp(&matrix.total(b))));
        }
        SortKey::Realm(id) => {
            rows.sort_by(|a, b| {
                direction.apply(matrix.amount(a, id).total_cmp(&matrix.amount(b, id)))
            });
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{build_matrix, realm_columns};
    use crate::types::{Realm, ResourceEntry};

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn fixture() -> (Vec<String>, ResourceMatrix) {
        let realms = vec![
            Realm::new(
                1,
                "A",
                vec![
                    ResourceEntry::new("Wood", 1000.0),
                    ResourceEntry::new("Stone", 10.0),
                    ResourceEntry::new("Apple", 300.0),
                ],
            ),
            Realm::new(
                2,
                "B",
                vec![
                    ResourceEntry::new("Wood", 5.0),
                    ResourceEntry::new("Stone", 900.0),
                ],
            ),
        ];
        let list = names(&["Wood", "Stone", "Apple"]);
        let matrix = build_matrix(&realms, &list, &realm_columns(&realms));
        (list, matrix)
    }

    #[test]
    fn test_toggle_same_key_flips_direction() {
        let config = SortConfig::default();
        let flipped = config.toggled(SortKey::Resource);
        assert_eq!(flipped.direction, SortDirection::Descending);
        let back = flipped.toggled(SortKey::Resource);
        assert_eq!(back.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_toggle_new_key_resets_to_ascending() {
        let config = SortConfig {
            key: SortKey::Resource,
            direction: SortDirection::Descending,
        };
        let next = config.toggled(SortKey::Total);
        assert_eq!(
            next,
            SortConfig {
                key: SortKey::Total,
                direction: SortDirection::Ascending
            }
        );
    }

    #[test]
    fn test_from_column() {
        let (_, matrix) = fixture();
        assert_eq!(SortKey::from_column("resource", &matrix), Some(SortKey::Resource));
        assert_eq!(SortKey::from_column("total", &matrix), Some(SortKey::Total));
        assert_eq!(
            SortKey::from_column("B", &matrix),
            Some(SortKey::Realm(RealmId(2)))
        );
        assert_eq!(SortKey::from_column("Nowhere", &matrix), None);
    }

    #[test]
    fn test_split_resources() {
        let list = names(&["Knight", "Wood", "PaladinT2", "Mystery"]);
        let (economic, military) = split_resources(&list);
        assert_eq!(economic, names(&["Wood", "Mystery"]));
        assert_eq!(military, names(&["Knight", "PaladinT2"]));
    }

    #[test]
    fn test_filter_is_case_insensitive_on_raw_names() {
        let list = names(&["Knight T2", "Wood", "Ironwood", "Stone"]);
        assert_eq!(filter_names(&list, "WOOD"), names(&["Wood", "Ironwood"]));
        assert_eq!(filter_names(&list, "t t"), names(&["Knight T2"]));
        assert!(filter_names(&list, "KnightT2").is_empty());
    }

    #[test]
    fn test_blank_filter_returns_everything() {
        let list = names(&["Wood", "Stone"]);
        assert_eq!(filter_names(&list, ""), list);
        assert_eq!(filter_names(&list, "   "), list);
        assert!(filter_names(&[], "wood").is_empty());
    }

    #[test]
    fn test_sort_by_resource() {
        let (list, matrix) = fixture();
        assert_eq!(
            sort_rows(&list, SortKey::Resource, SortDirection::Ascending, &matrix),
            names(&["Wood", "Stone", "Apple"])
        );
        assert_eq!(
            sort_rows(&list, SortKey::Resource, SortDirection::Descending, &matrix),
            names(&["Apple", "Stone", "Wood"])
        );
    }

    #[test]
    fn test_sort_by_total() {
        let (list, matrix) = fixture();
        assert_eq!(
            sort_rows(&list, SortKey::Total, SortDirection::Ascending, &matrix),
            names(&["Apple", "Stone", "Wood"])
        );
        assert_eq!(
            sort_rows(&list, SortKey::Total, SortDirection::Descending, &matrix),
            names(&["Wood", "Stone", "Apple"])
        );
    }

    #[test]
    fn test_sort_by_realm_defaults_missing_to_zero() {
        let (list, matrix) = fixture();
        assert_eq!(
            sort_rows(&list, SortKey::Realm(RealmId(2)), SortDirection::Descending, &matrix),
            names(&["Stone", "Wood", "Apple"])
        );
        // Unknown realm: every value is 0, order is left alone.
        assert_eq!(
            sort_rows(&list, SortKey::Realm(RealmId(99)), SortDirection::Ascending, &matrix),
            list
        );
    }

    #[test]
    fn test_spaced_and_compact_spellings_reverse_exactly() {
        let list = names(&["KnightT2", "Wood", "Knight T2", "Knight"]);
        let matrix = ResourceMatrix::default();

        let ascending = sort_rows(&list, SortKey::Resource, SortDirection::Ascending, &matrix);
        assert_eq!(ascending, names(&["Knight", "Knight T2", "KnightT2", "Wood"]));

        let mut descending = sort_rows(&list, SortKey::Resource, SortDirection::Descending, &matrix);
        descending.reverse();
        assert_eq!(ascending, descending);
    }

    mod props {
        use super::*;
        use crate::catalog::RESOURCE_ORDER;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_resource_descending_is_exact_reverse(
                known in proptest::sample::subsequence(RESOURCE_ORDER.to_vec(), 0..RESOURCE_ORDER.len()),
                unknown in proptest::collection::btree_set("[a-z]{1,6}", 0..6)
            ) {
                let mut list: Vec<String> = known.iter().map(|s| s.to_string()).collect();
                // Lowercase names can never collide with the capitalized list.
                list.extend(unknown.into_iter());
                let matrix = ResourceMatrix::default();

                let ascending = sort_rows(&list, SortKey::Resource, SortDirection::Ascending, &matrix);
                let mut descending = sort_rows(&list, SortKey::Resource, SortDirection::Descending, &matrix);
                descending.reverse();
                prop_assert_eq!(ascending, descending);
            }
        }
    }
}
