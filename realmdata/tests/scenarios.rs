use realmdata::catalog::{RESOURCE_ORDER, ordered_resource_names};
use realmdata::matrix::realm_columns;
use realmdata::military::TierCounts;
use realmdata::view::sort_rows;
use realmdata::{
    Dashboard, IngestError, RealmId, SchemaError, Snapshot, SortDirection, SortKey, Tab,
    build_military_summary, parse_realms,
};

const TWO_REALMS: &str = r#"[
    {"entityId": 1, "name": "A", "resources": [
        {"name": "Wood", "totalAmount": 1000},
        {"name": "Knight", "totalAmount": 100}
    ]},
    {"entityId": 2, "name": "B", "resources": [
        {"name": "Wood", "totalAmount": 750},
        {"name": "Crossbowman", "totalAmount": 50}
    ]}
]"#;

#[test]
fn test_two_realm_matrix() {
    let snapshot = Snapshot::new(parse_realms(TWO_REALMS).unwrap());
    let matrix = snapshot.matrix();
    let (a, b) = (RealmId(1), RealmId(2));

    assert_eq!(matrix.amount("Wood", a), 1000.0);
    assert_eq!(matrix.amount("Wood", b), 750.0);
    assert_eq!(matrix.total("Wood"), 1750.0);

    assert_eq!(matrix.amount("Knight", a), 100.0);
    assert_eq!(matrix.amount("Knight", b), 0.0);
    assert_eq!(matrix.total("Knight"), 100.0);

    assert_eq!(matrix.amount("Crossbowman", a), 0.0);
    assert_eq!(matrix.amount("Crossbowman", b), 50.0);
    assert_eq!(matrix.total("Crossbowman"), 50.0);
}

#[test]
fn test_two_realm_military_summary() {
    let summary = build_military_summary(&parse_realms(TWO_REALMS).unwrap());

    assert_eq!(
        summary.knight,
        TierCounts {
            t1: 100.0,
            total: 100.0,
            ..TierCounts::default()
        }
    );
    assert_eq!(summary.crossbowman.t1, 50.0);
    assert_eq!(summary.crossbowman.total, 50.0);
    assert_eq!(summary.paladin, TierCounts::default());
    assert_eq!(summary.totals.t1, 150.0);
    assert_eq!(summary.totals.grand_total, 150.0);
}

#[test]
fn test_unknown_resource_is_economic_only() {
    let realms = parse_realms(
        r#"[{"entityId": 1, "name": "A", "resources": [
            {"name": "Mystery", "totalAmount": 7},
            {"name": "Knight", "totalAmount": 1}
        ]}]"#,
    )
    .unwrap();
    let snapshot = Snapshot::new(realms);

    assert_eq!(snapshot.matrix().total("Mystery"), 7.0);
    assert_eq!(snapshot.economic(), ["Mystery".to_string()]);
    assert_eq!(snapshot.military(), ["Knight".to_string()]);
    assert_eq!(snapshot.summary().totals.grand_total, 1.0);
}

#[test]
fn test_malformed_input_leaves_dashboard_unchanged() {
    let mut dashboard = Dashboard::new();
    dashboard.load_json(TWO_REALMS).unwrap();
    let before = dashboard.snapshot().clone();

    let err = dashboard.load_json(r#"{"not":"an array"}"#).unwrap_err();
    assert!(matches!(err, IngestError::Schema(SchemaError::NotAnArray)));
    assert_eq!(dashboard.snapshot(), &before);
    assert_eq!(dashboard.view().tab, Tab::Resources);
}

#[test]
fn test_empty_input() {
    let snapshot = Snapshot::new(Vec::new());
    assert!(snapshot.matrix().is_empty());
    assert!(snapshot.summary().is_empty());
    assert!(snapshot.resource_names().is_empty());
}

#[test]
fn test_full_catalog_reverses_exactly() {
    let realms = vec![realmdata::Realm::new(
        1,
        "All",
        RESOURCE_ORDER
            .iter()
            .rev()
            .map(|name| realmdata::ResourceEntry::new(*name, 1.0))
            .chain(
                ["beta", "Alpha", "gamma"]
                    .iter()
                    .map(|name| realmdata::ResourceEntry::new(*name, 1.0)),
            )
            .collect(),
    )];
    let names = ordered_resource_names(&realms);
    let columns = realm_columns(&realms);
    let matrix = realmdata::build_matrix(&realms, &names, &columns);

    let ascending = sort_rows(&names, SortKey::Resource, SortDirection::Ascending, &matrix);
    let descending = sort_rows(&names, SortKey::Resource, SortDirection::Descending, &matrix);

    let known: Vec<&str> = RESOURCE_ORDER.to_vec();
    assert_eq!(&ascending[..known.len()], known.as_slice());
    assert_eq!(&ascending[known.len()..], ["Alpha", "beta", "gamma"]);

    let mut reversed = ascending.clone();
    reversed.reverse();
    assert_eq!(descending, reversed);
}
