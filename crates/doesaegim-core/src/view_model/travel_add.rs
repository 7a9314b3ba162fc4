//! Travel creation form state

use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use crate::error::StorageError;
use crate::model::{Travel, TravelDto};
use crate::repository::TravelRepository;

/// Why a travel could not be added
#[derive(Debug, Error)]
pub enum TravelAddError {
    /// The form is not valid yet
    #[error("travel form is incomplete")]
    Invalid,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Validity of the travel form
///
/// Every assignment to either flag reports the combined validity to the
/// callback, even when nothing changed.
pub struct TravelAddViewModel {
    text_field_valid: bool,
    date_valid: bool,
    on_validity_changed: Box<dyn FnMut(bool)>,
}

impl TravelAddViewModel {
    pub fn new(on_validity_changed: impl FnMut(bool) + 'static) -> Self {
        Self {
            text_field_valid: false,
            date_valid: false,
            on_validity_changed: Box::new(on_validity_changed),
        }
    }

    pub fn text_field_valid(&self) -> bool {
        self.text_field_valid
    }

    pub fn date_valid(&self) -> bool {
        self.date_valid
    }

    pub fn is_valid(&self) -> bool {
        self.text_field_valid && self.date_valid
    }

    pub fn set_text_field_valid(&mut self, valid: bool) {
        self.text_field_valid = valid;
        self.notify();
    }

    pub fn set_date_valid(&mut self, valid: bool) {
        self.date_valid = valid;
        self.notify();
    }

    /// A name is valid once it has any non-whitespace character
    pub fn validate_name(&mut self, name: &str) {
        self.set_text_field_valid(!name.trim().is_empty());
    }

    /// A range is valid when it does not end before it starts
    pub fn validate_dates(&mut self, start: NaiveDate, end: NaiveDate) {
        self.set_date_valid(start <= end);
    }

    /// Save the travel if the form is valid
    pub fn save(
        &self,
        repository: &dyn TravelRepository,
        dto: &TravelDto,
    ) -> Result<Travel, TravelAddError> {
        if !self.is_valid() {
            return Err(TravelAddError::Invalid);
        }
        Ok(repository.add_and_save(dto)?)
    }

    fn notify(&mut self) {
        let valid = self.is_valid();
        debug!("Travel form validity: {}", valid);
        (self.on_validity_changed)(valid);
    }
}

impl fmt::Debug for TravelAddViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TravelAddViewModel")
            .field("text_field_valid", &self.text_field_valid)
            .field("date_valid", &self.date_valid)
            .finish_non_exhaustive()
    }
}
