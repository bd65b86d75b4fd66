//! Edit modal workflow.
//!
//! ```text
//! Closed --open--> Editing --begin_save--> Saving --ok--> Closed
//!                     ^                       |
//!                     +------ Failed <--err---+
//! ```
//!
//! A failed save keeps the form contents so the user can retry.

use log::{error, info};
use thiserror::Error;

use crate::error::ApiResult;
use crate::model::{Country, RecordPatch, TaxRecord};

pub const SAVE_FAILED_MESSAGE: &str = "Failed to save. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditPhase {
    #[default]
    Closed,
    Editing,
    Saving,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("No record is being edited")]
    NotOpen,
    #[error("A save is already in progress")]
    AlreadySaving,
    #[error("Name is required")]
    NameRequired,
}

/// Countries offered by the modal's dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CountryOptions {
    #[default]
    NotLoaded,
    Loading,
    Loaded(Vec<Country>),
}

impl CountryOptions {
    pub fn as_slice(&self) -> &[Country] {
        match self {
            Self::Loaded(countries) => countries,
            Self::NotLoaded | Self::Loading => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EditWorkflow {
    phase: EditPhase,
    record: Option<TaxRecord>,
    name: String,
    country: String,
    countries: CountryOptions,
}

impl EditWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the form pre-populated with `record`'s name and country.
    pub fn open(&mut self, record: TaxRecord) {
        info!("Editing record {}", record.id);
        self.name = record.name.clone().unwrap_or_default();
        self.country = record.country.clone().unwrap_or_default();
        self.record = Some(record);
        self.phase = EditPhase::Editing;
    }

    /// Closes the form unless a save is in flight.
    pub fn cancel(&mut self) {
        if self.phase == EditPhase::Saving {
            return;
        }
        self.close();
    }

    fn close(&mut self) {
        self.phase = EditPhase::Closed;
        self.record = None;
        self.name.clear();
        self.country.clear();
    }

    pub fn phase(&self) -> &EditPhase {
        &self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != EditPhase::Closed
    }

    pub fn is_saving(&self) -> bool {
        self.phase == EditPhase::Saving
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            EditPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn record(&self) -> Option<&TaxRecord> {
        self.record.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text buffer bound to the name input.
    pub fn name_mut(&mut self) -> &mut String {
        &mut self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        if !self.is_saving() {
            self.name = name.into();
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn select_country(&mut self, country: impl Into<String>) {
        if !self.is_saving() {
            self.country = country.into();
        }
    }

    pub fn countries(&self) -> &CountryOptions {
        &self.countries
    }

    pub fn set_countries_loading(&mut self) {
        self.countries = CountryOptions::Loading;
    }

    pub fn set_countries(&mut self, result: ApiResult<Vec<Country>>) {
        self.countries = match result {
            Ok(countries) => CountryOptions::Loaded(countries),
            Err(err) => {
                error!("Error loading countries: {err}");
                CountryOptions::Loaded(Vec::new())
            }
        };
    }

    pub fn can_save(&self) -> bool {
        matches!(self.phase, EditPhase::Editing | EditPhase::Failed(_))
            && !self.name.trim().is_empty()
    }

    /// Validates the form and moves to `Saving`, returning the merged record to send.
    pub fn begin_save(&mut self) -> Result<TaxRecord, EditError> {
        let record = match self.phase {
            EditPhase::Closed => return Err(EditError::NotOpen),
            EditPhase::Saving => return Err(EditError::AlreadySaving),
            EditPhase::Editing | EditPhase::Failed(_) => {
                self.record.as_ref().ok_or(EditError::NotOpen)?
            }
        };

        if self.name.trim().is_empty() {
            return Err(EditError::NameRequired);
        }

        let merged = record.merged(&RecordPatch {
            name: self.name.clone(),
            country: self.country.clone(),
        });
        self.phase = EditPhase::Saving;
        Ok(merged)
    }

    /// Applies the outcome of the update request. Returns `true` when the record was saved.
    pub fn finish_save(&mut self, result: ApiResult<TaxRecord>) -> bool {
        if !self.is_saving() {
            return false;
        }
        match result {
            Ok(saved) => {
                info!("Saved record {}", saved.id);
                self.close();
                true
            }
            Err(err) => {
                error!("Error saving: {err}");
                self.phase = EditPhase::Failed(format!("{SAVE_FAILED_MESSAGE} {err}"));
                false
            }
        }
    }
}
