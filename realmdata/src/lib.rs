//! Aggregation engine for per-realm resource snapshots.
//!
//! Takes a realm list (usually pasted JSON), derives the canonical resource
//! order, the resource × realm matrix and the military tier summary, and
//! selects sorted/searched rows for the dashboard tables.

pub mod catalog;
pub mod dashboard;
pub mod load;
pub mod matrix;
pub mod military;
pub mod report;
pub mod types;
pub mod view;

pub use dashboard::{Dashboard, Snapshot, ViewState};
pub use load::{IngestError, SchemaError, parse_realms};
pub use matrix::{RealmColumn, ResourceMatrix, build_matrix};
pub use military::{MilitarySummary, UnitFamily, build_military_summary};
pub use types::{Realm, RealmId, ResourceEntry};
pub use view::{SortConfig, SortDirection, SortKey, Tab};
