//! Page controller for the customers table.
//!
//! Owns every piece of page state. Network calls run as tokio tasks; each task
//! sends exactly one [`PageEvent`] back over a flume channel, and the UI thread
//! applies them in [`TaxesPage::poll`]. Widgets only read this state and report
//! user intents back through the methods below.

use std::future::Future;
use std::sync::Arc;

use flume::{Receiver, Sender};
use log::{error, info, warn};

use crate::api;
use crate::config::BusinessConfig;
use crate::edit::{EditError, EditWorkflow};
use crate::error::ApiResult;
use crate::model::{Country, TaxRecord};
use crate::table::{PageSummary, RowModel, TableState, unique_countries};

/// Result of a finished background request.
#[derive(Debug)]
pub enum PageEvent {
    RecordsLoaded(ApiResult<Vec<TaxRecord>>),
    CountriesLoaded(ApiResult<Vec<Country>>),
    RecordSaved(ApiResult<TaxRecord>),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

type Repaint = Arc<dyn Fn() + Send + Sync>;

pub struct TaxesPage {
    config: BusinessConfig,
    records: Vec<TaxRecord>,
    load_status: LoadStatus,
    mounted: bool,
    country_filter_open: bool,
    /// Search, country filter, sort and pagination inputs.
    pub table: TableState,
    /// Edit modal state.
    pub edit: EditWorkflow,
    sender: Sender<PageEvent>,
    receiver: Receiver<PageEvent>,
    repaint: Option<Repaint>,
}

impl std::fmt::Debug for TaxesPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaxesPage")
            .field("config", &self.config)
            .field("records", &self.records.len())
            .field("load_status", &self.load_status)
            .field("mounted", &self.mounted)
            .field("country_filter_open", &self.country_filter_open)
            .field("table", &self.table)
            .field("edit", &self.edit)
            .finish_non_exhaustive()
    }
}

impl Default for TaxesPage {
    fn default() -> Self {
        Self::new(BusinessConfig::default())
    }
}

impl TaxesPage {
    pub fn new(config: BusinessConfig) -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            config,
            records: Vec::new(),
            load_status: LoadStatus::Idle,
            mounted: false,
            country_filter_open: false,
            table: TableState::new(),
            edit: EditWorkflow::new(),
            sender,
            receiver,
            repaint: None,
        }
    }

    /// Called after every background request completes, e.g. to wake the UI.
    pub fn set_repaint(&mut self, repaint: impl Fn() + Send + Sync + 'static) {
        self.repaint = Some(Arc::new(repaint));
    }

    pub fn config(&self) -> &BusinessConfig {
        &self.config
    }

    pub fn records(&self) -> &[TaxRecord] {
        &self.records
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    pub fn is_loading(&self) -> bool {
        self.load_status == LoadStatus::Loading
    }

    /// Message of the last failed list fetch, if the latest attempt failed.
    pub fn load_error(&self) -> Option<&str> {
        match &self.load_status {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Triggers the initial fetch the first time the page is shown.
    pub fn mount(&mut self) {
        if !self.mounted {
            self.mounted = true;
            self.load_records();
        }
    }

    pub fn load_records(&mut self) {
        self.load_status = LoadStatus::Loading;
        let config = self.config.clone();
        self.spawn(async move { PageEvent::RecordsLoaded(api::list_records(&config).await) });
    }

    fn load_countries(&mut self) {
        self.edit.set_countries_loading();
        let config = self.config.clone();
        self.spawn(async move { PageEvent::CountriesLoaded(api::list_countries(&config).await) });
    }

    /// Opens the edit modal for the record with `id` and refreshes the country list.
    pub fn open_edit(&mut self, id: &str) {
        let Some(record) = self.records.iter().find(|record| record.id == id).cloned() else {
            warn!("Cannot edit unknown record {id}");
            return;
        };
        self.edit.open(record);
        self.load_countries();
    }

    pub fn cancel_edit(&mut self) {
        self.edit.cancel();
    }

    /// Sends the merged record to the server; the outcome arrives through [`Self::poll`].
    pub fn save_edit(&mut self) -> Result<(), EditError> {
        let record = self.edit.begin_save()?;
        let config = self.config.clone();
        self.spawn(async move {
            PageEvent::RecordSaved(api::update_record(&config, &record).await)
        });
        Ok(())
    }

    pub fn is_country_filter_open(&self) -> bool {
        self.country_filter_open
    }

    pub fn toggle_country_filter(&mut self) {
        self.country_filter_open = !self.country_filter_open;
    }

    pub fn close_country_filter(&mut self) {
        self.country_filter_open = false;
    }

    /// Countries offered by the column filter: those in the loaded records plus
    /// any still selected, so a selection never loses its checkbox.
    pub fn filter_countries(&self) -> Vec<String> {
        let mut countries = unique_countries(&self.records);
        for selected in self.table.country_filter() {
            if let Err(at) = countries.binary_search(selected) {
                countries.insert(at, selected.clone());
            }
        }
        countries
    }

    pub fn row_model(&self) -> RowModel<'_> {
        self.table.derive(&self.records)
    }

    pub fn summary(&self) -> PageSummary {
        self.row_model().summary()
    }

    /// Applies every finished request. Returns how many events were handled.
    pub fn poll(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.receiver.try_recv() {
            self.apply(event);
            handled += 1;
        }
        handled
    }

    /// Waits for the next finished request and applies it.
    ///
    /// Returns `false` if the channel is closed.
    pub async fn process_next(&mut self) -> bool {
        match self.receiver.recv_async().await {
            Ok(event) => {
                self.apply(event);
                true
            }
            Err(_) => false,
        }
    }

    fn apply(&mut self, event: PageEvent) {
        match event {
            PageEvent::RecordsLoaded(Ok(records)) => {
                info!("Loaded {} records", records.len());
                self.records = records;
                self.load_status = LoadStatus::Loaded;
                let page_count = self.summary().page_count;
                self.table.clamp_page_index(page_count);
            }
            PageEvent::RecordsLoaded(Err(err)) => {
                // Existing rows stay; on first load this leaves an empty table.
                error!("Error loading data: {err}");
                self.load_status = LoadStatus::Failed(err.to_string());
            }
            PageEvent::CountriesLoaded(result) => self.edit.set_countries(result),
            PageEvent::RecordSaved(result) => {
                if self.edit.finish_save(result) {
                    self.load_records();
                }
            }
        }
    }

    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = PageEvent> + Send + 'static,
    {
        let sender = self.sender.clone();
        let repaint = self.repaint.clone();
        tokio::spawn(async move {
            let event = task.await;
            if sender.send_async(event).await.is_err() {
                warn!("Page dropped before a request finished");
            }
            if let Some(repaint) = repaint {
                repaint();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::ApiError;
    use crate::model::normalize_records;

    fn page_with_records() -> TaxesPage {
        let mut page = TaxesPage::new(BusinessConfig::new("http://127.0.0.1:9"));
        page.apply(PageEvent::RecordsLoaded(Ok(normalize_records(vec![
            json!({ "id": "1", "name": "Acme", "country": "US" }),
            json!({ "id": "2", "name": "Globex", "country": "FR" }),
        ]))));
        page
    }

    #[test]
    fn test_records_loaded_replaces_collection() {
        let page = page_with_records();
        assert_eq!(page.load_status(), &LoadStatus::Loaded);
        assert_eq!(page.records().len(), 2);
        assert_eq!(page.filter_countries(), vec!["FR", "US"]);
    }

    #[test]
    fn test_failed_load_keeps_rows_and_remembers_error() {
        let mut page = page_with_records();
        page.apply(PageEvent::RecordsLoaded(Err(ApiError::Timeout)));

        assert_eq!(page.records().len(), 2);
        assert_eq!(page.load_error(), Some(ApiError::Timeout.to_string().as_str()));
        assert!(!page.is_loading());
    }

    #[test]
    fn test_failed_first_load_is_empty() {
        let mut page = TaxesPage::new(BusinessConfig::new("http://127.0.0.1:9"));
        page.apply(PageEvent::RecordsLoaded(Err(ApiError::Network)));
        assert!(page.row_model().is_empty());
        assert!(page.load_error().is_some());
    }

    #[test]
    fn test_country_filter_popup_toggle() {
        let mut page = page_with_records();
        assert!(!page.is_country_filter_open());
        page.toggle_country_filter();
        assert!(page.is_country_filter_open());
        page.close_country_filter();
        assert!(!page.is_country_filter_open());
    }

    #[test]
    fn test_open_edit_unknown_id_is_ignored() {
        let mut page = page_with_records();
        page.open_edit("404");
        assert!(!page.edit.is_open());
    }

    #[test]
    fn test_save_failure_keeps_modal_open() {
        let mut page = page_with_records();
        page.edit.open(page.records()[0].clone());
        page.edit.begin_save().unwrap();

        page.apply(PageEvent::RecordSaved(Err(ApiError::server(
            500,
            "Internal Server Error",
        ))));

        assert!(page.edit.is_open());
        assert!(page.edit.error().is_some());
        assert_eq!(page.load_status(), &LoadStatus::Loaded);
    }

    #[test]
    fn test_selected_country_stays_listed_after_reload() {
        let mut page = page_with_records();
        page.table.toggle_country("FR");

        page.apply(PageEvent::RecordsLoaded(Ok(normalize_records(vec![
            json!({ "id": "1", "name": "Acme", "country": "US" }),
            json!({ "id": "2", "name": "Globex", "country": "US" }),
        ]))));

        assert_eq!(page.filter_countries(), vec!["FR", "US"]);
        assert!(page.row_model().is_empty());

        page.table.toggle_country("FR");
        assert_eq!(page.filter_countries(), vec!["US"]);
        assert_eq!(page.row_model().rows.len(), 2);
    }

    #[test]
    fn test_reload_clamps_page_index() {
        let mut page = page_with_records();
        page.table.set_page_size(1);
        page.table.set_page_index(1);

        page.apply(PageEvent::RecordsLoaded(Ok(normalize_records(vec![json!({
            "id": "1"
        })]))));
        assert_eq!(page.table.page_index(), 0);
    }
}
