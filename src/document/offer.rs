//! Generator for the Resimix commercial offer.
//!
//! Lays out header, logo, customer block, products, totals, supply terms,
//! closing and signatures, then hands the document to `DocxRenderEngine`.

use docx_rs::Docx;

use super::engine::DocxRenderEngine;
use super::sections::{self, Block};
use super::traits::Generator;
use super::{GeneratedDocument, GeneratorError};
use crate::logo::LogoAsset;
use crate::offer::OfferData;

const TERMS_HEADING: &str = "Condizioni di fornitura";

/// Request for one commercial offer document.
#[derive(Debug, Clone)]
pub struct OfferRequest {
    pub offer: OfferData,
    pub logo: LogoAsset,
}

/// Generator for commercial offers.
#[derive(Debug, Default)]
pub struct OfferGenerator;

impl OfferGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Build the document body for `request`, printing `date` in the header.
    pub fn compose(&self, request: &OfferRequest, date: &str) -> Docx {
        let offer = &request.offer;

        let mut blocks: Vec<Block> = vec![
            sections::header(&offer.offer_number, date).into(),
            sections::logo(&request.logo).into(),
        ];
        blocks.extend(
            sections::customer_info(&offer.customer, &offer.validity)
                .into_iter()
                .map(Block::from),
        );
        blocks.push(sections::greeting(&offer.customer.title).into());
        blocks.push(sections::intro().into());

        for product in &offer.products {
            blocks.extend(sections::product_section(product));
        }

        blocks.push(sections::totals(&offer.totals).into());
        blocks.push(sections::spacer(400).into());
        blocks.push(sections::section_heading(TERMS_HEADING).into());

        let (left, right) = offer.term_columns();
        blocks.push(sections::terms_table(left, right).into());

        blocks.extend(sections::closing().into_iter().map(Block::from));
        blocks.push(sections::signature_table(&offer.customer.name).into());

        blocks
            .into_iter()
            .fold(Docx::new(), |docx, block| block.add_to(docx))
    }
}

impl Generator<OfferRequest> for OfferGenerator {
    fn generate(&self, request: OfferRequest) -> Result<GeneratedDocument, GeneratorError> {
        let date = request.offer.display_date();
        let docx = self.compose(&request, &date);

        DocxRenderEngine::render(docx, request.offer.output_filename(), date)
    }
}
