//! Offer module - business data of a commercial offer.
//!
//! Offers come either from the built-in Resimix sample or from a JSON file
//! with the same shape as `OfferData`.

pub mod models;
pub mod sample;

mod tests;

pub use models::{Customer, OfferData, Product, Term, Totals};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::document::common::{format_italian_date, sanitize_filename_component};

/// Errors that can occur while loading offer data.
#[derive(Debug, Error)]
pub enum OfferError {
    #[error("failed to read offer file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse offer data: {0}")]
    Parse(#[source] serde_json::Error),
}

impl OfferData {
    pub fn from_json_str(json: &str) -> Result<Self, OfferError> {
        serde_json::from_str(json).map_err(OfferError::Parse)
    }

    pub fn from_path(path: &Path) -> Result<Self, OfferError> {
        let json = fs::read_to_string(path).map_err(|source| OfferError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The configured date, or today's date in Italian.
    pub fn display_date(&self) -> String {
        match self.date.as_deref().map(str::trim) {
            Some(date) if !date.is_empty() => date.to_string(),
            _ => format_italian_date(),
        }
    }

    /// `Offerta_RESIMIX_<number>_<first customer word>.docx`
    pub fn output_filename(&self) -> String {
        let number = sanitize_filename_component(&self.offer_number.replace('/', "-"), "offerta");
        let customer_word = self.customer.name.split_whitespace().next().unwrap_or_default();
        let customer = sanitize_filename_component(customer_word, "cliente");

        format!("Offerta_RESIMIX_{}_{}.docx", number, customer)
    }

    /// Split terms into the left and right columns of the terms table.
    pub fn term_columns(&self) -> (&[Term], &[Term]) {
        let left_len = self.terms.len().div_ceil(2);
        self.terms.split_at(left_len)
    }
}
