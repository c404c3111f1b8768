//! Document module - assembling the commercial offer as a `.docx` file.
//!
//! - `common` - dates, file naming and Resimix style constants
//! - `sections` - builders for each block of the offer layout
//! - `engine` - packing a `docx_rs::Docx` into bytes
//! - `offer` - `OfferGenerator`, which lays the sections out in order

pub mod common;
pub mod engine;
pub mod offer;
pub mod sections;
pub mod traits;


pub use engine::DocxRenderEngine;
pub use offer::{OfferGenerator, OfferRequest};
pub use traits::Generator;

use thiserror::Error;

/// Errors that can occur during document generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to pack .docx document: {0}")]
    Pack(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result of a successful document generation.
#[derive(Debug)]
pub struct GeneratedDocument {
    pub filename: String,
    pub docx: Vec<u8>,
    /// Date printed in the header.
    pub date: String,
}
