//! Application state for the dashboard front end.
//!
//! [`Snapshot`] holds one loaded realm list and every view derived from it.
//! [`ViewState`] is the user's current tab, sort and search. Row selection is
//! a pure function of the two; [`Dashboard`] only owns them and swaps in a
//! new snapshot when ingestion succeeds.

use crate::catalog::ordered_resource_names;
use crate::load::{IngestError, parse_realms};
use crate::matrix::{RealmColumn, ResourceMatrix, build_matrix, realm_columns};
use crate::military::{MilitarySummary, build_military_summary};
use crate::types::Realm;
use crate::view::{SortConfig, SortKey, Tab, filter_names, sort_rows, split_resources};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User-selected view parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub tab: Tab,
    pub sort: SortConfig,
    pub search: String,
}

impl ViewState {
    pub fn with_tab(self, tab: Tab) -> Self {
        Self { tab, ..self }
    }

    pub fn with_sort_toggled(self, key: SortKey) -> Self {
        Self {
            sort: self.sort.toggled(key),
            ..self
        }
    }

    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self
        }
    }
}

/// A loaded realm list and its derived views.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    realms: Vec<Realm>,
    columns: Vec<RealmColumn>,
    resource_names: Vec<String>,
    economic: Vec<String>,
    military: Vec<String>,
    matrix: ResourceMatrix,
    summary: MilitarySummary,
}

impl Snapshot {
    pub fn new(realms: Vec<Realm>) -> Self {
        let columns = realm_columns(&realms);
        let resource_names = ordered_resource_names(&realms);
        let (economic, military) = split_resources(&resource_names);
        let matrix = build_matrix(&realms, &resource_names, &columns);
        let summary = build_military_summary(&realms);
        Self {
            realms,
            columns,
            resource_names,
            economic,
            military,
            matrix,
            summary,
        }
    }

    pub fn realms(&self) -> &[Realm] {
        &self.realms
    }

    pub fn columns(&self) -> &[RealmColumn] {
        &self.columns
    }

    /// Every resource name in canonical order.
    pub fn resource_names(&self) -> &[String] {
        &self.resource_names
    }

    pub fn economic(&self) -> &[String] {
        &self.economic
    }

    pub fn military(&self) -> &[String] {
        &self.military
    }

    pub fn matrix(&self) -> &ResourceMatrix {
        &self.matrix
    }

    pub fn summary(&self) -> &MilitarySummary {
        &self.summary
    }

    pub fn is_empty(&self) -> bool {
        self.realms.is_empty()
    }

    /// Rows for `tab`, before search and sort.
    pub fn rows_for_tab(&self, tab: Tab) -> &[String] {
        match tab {
            Tab::DataEntry => &[],
            Tab::Resources => &self.economic,
            Tab::Military => &self.military,
        }
    }

    /// Rows the active tab shows, searched and sorted per `view`.
    pub fn rows(&self, view: &ViewState) -> Vec<String> {
        let filtered = filter_names(self.rows_for_tab(view.tab), &view.search);
        sort_rows(&filtered, view.sort.key, view.sort.direction, &self.matrix)
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    snapshot: Snapshot,
    view: ViewState,
    last_updated: DateTime<Utc>,
    error: Option<String>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            snapshot: Snapshot::default(),
            view: ViewState::default(),
            last_updated: Utc::now(),
            error: None,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Message from the last failed ingestion, cleared by the next success.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_data(&self) -> bool {
        !self.snapshot.is_empty()
    }

    /// Ingests pasted JSON. On failure the current snapshot is kept and the
    /// error message is recorded for display.
    pub fn load_json(&mut self, text: &str) -> Result<usize, IngestError> {
        match parse_realms(text) {
            Ok(realms) => Ok(self.load_realms(realms)),
            Err(e) => {
                log::warn!("Rejected realm data: {}", e);
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Replaces the snapshot and switches to the resources tab.
    pub fn load_realms(&mut self, realms: Vec<Realm>) -> usize {
        let count = realms.len();
        self.snapshot = Snapshot::new(realms);
        self.last_updated = Utc::now();
        self.error = None;
        self.view = std::mem::take(&mut self.view).with_tab(Tab::Resources);
        log::info!(
            "Loaded {} realms with {} distinct resources",
            count,
            self.snapshot.resource_names().len()
        );
        count
    }

    pub fn clear(&mut self) {
        self.snapshot = Snapshot::default();
        self.view = std::mem::take(&mut self.view).with_tab(Tab::DataEntry);
        self.error = None;
        log::info!("Cleared realm data");
    }

    /// Switches tabs. Data tabs stay disabled until something is loaded.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if tab != Tab::DataEntry && !self.has_data() {
            log::debug!("Ignoring {:?} tab: no data loaded", tab);
            return false;
        }
        self.view = std::mem::take(&mut self.view).with_tab(tab);
        true
    }

    /// Sets the tab even when nothing is loaded, for one-shot renders.
    pub fn set_tab(&mut self, tab: Tab) {
        self.view = std::mem::take(&mut self.view).with_tab(tab);
    }

    pub fn sort_by(&mut self, key: SortKey) {
        self.view = std::mem::take(&mut self.view).with_sort_toggled(key);
    }

    /// Sets the sort outright, without the click-to-toggle behavior.
    pub fn set_sort(&mut self, sort: SortConfig) {
        self.view.sort = sort;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.view = std::mem::take(&mut self.view).with_search(term);
    }

    /// Rows for the current view.
    pub fn rows(&self) -> Vec<String> {
        self.snapshot.rows(&self.view)
    }
}
