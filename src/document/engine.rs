//! Docx rendering engine.
//!
//! Applies the page setup shared by every document and packs the finished
//! `Docx` into an in-memory `.docx` archive.

use docx_rs::{Docx, PageMargin};
use std::io::Cursor;

use super::common::PAGE_MARGIN_TWIPS;
use super::{GeneratedDocument, GeneratorError};

/// Stateless engine for packing documents.
pub struct DocxRenderEngine;

impl DocxRenderEngine {
    /// Pack a document body into `.docx` bytes.
    ///
    /// # Arguments
    /// * `docx` - The document with all sections added.
    /// * `filename` - Name the document will be saved under.
    /// * `date` - Date printed in the document header.
    pub fn render(docx: Docx, filename: String, date: String) -> Result<GeneratedDocument, GeneratorError> {
        let docx = Self::with_page_setup(docx);

        let mut buffer = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buffer)
            .map_err(|e| GeneratorError::Pack(Box::new(e)))?;

        let docx = buffer.into_inner();
        log::debug!("Packed {} ({} bytes)", filename, docx.len());

        Ok(GeneratedDocument {
            filename,
            docx,
            date,
        })
    }

    /// One-inch margins on every side.
    pub fn with_page_setup(docx: Docx) -> Docx {
        docx.page_margin(
            PageMargin::new()
                .top(PAGE_MARGIN_TWIPS)
                .right(PAGE_MARGIN_TWIPS)
                .bottom(PAGE_MARGIN_TWIPS)
                .left(PAGE_MARGIN_TWIPS),
        )
    }
}
