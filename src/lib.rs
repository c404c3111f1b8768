use anyhow::Context;
use std::path::PathBuf;

pub mod config;
pub mod document;
pub mod logo;
pub mod offer;
pub mod storage;


pub use crate::config::AppConfig;

use crate::document::{Generator, OfferGenerator, OfferRequest};
use crate::logo::LogoResolver;
use crate::offer::OfferData;
use crate::storage::{DocumentStorage, LocalStorage};

/// What a run produced, for the closing log lines.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferSummary {
    pub path: PathBuf,
    pub customer: String,
    pub product_count: usize,
    pub offer_number: String,
    pub total: String,
    /// Image location, or `None` when the text placeholder was embedded.
    pub logo_source: Option<String>,
}

impl OfferSummary {
    pub fn log(&self) {
        log::info!("✓ Offerta generata con successo!");
        log::info!("  File: {}", self.path.display());
        log::info!("  Cliente: {}", self.customer);
        log::info!("  Prodotti: {}", self.product_count);
        log::info!("  Numero offerta: {}", self.offer_number);
        log::info!("  Totale: {}", self.total);
        match &self.logo_source {
            Some(source) => log::info!("  Logo: Resimix logo from {}", source),
            None => log::info!("  Logo: Text fallback"),
        }
    }
}

/// Resolve the logo, assemble the offer and store it.
pub async fn generate_with(
    offer: OfferData,
    resolver: &LogoResolver,
    storage: &dyn DocumentStorage,
) -> anyhow::Result<OfferSummary> {
    let logo = resolver.resolve().await;
    let logo_source = logo
        .is_image()
        .then(|| resolver.source().location().to_string());
    let customer = offer.customer.name.clone();
    let product_count = offer.products.len();
    let offer_number = offer.offer_number.clone();
    let total = offer.totals.offer_total.clone();

    let document = OfferGenerator::new()
        .generate(OfferRequest { offer, logo })
        .context("failed to assemble offer document")?;

    let path = storage
        .save(&document.filename, &document.docx)
        .await
        .with_context(|| format!("failed to save {}", document.filename))?;

    Ok(OfferSummary {
        path,
        customer,
        product_count,
        offer_number,
        total,
        logo_source,
    })
}

/// One full pass: load the offer, resolve the logo, build and save the document.
pub async fn generate_offer(config: &AppConfig) -> anyhow::Result<OfferSummary> {
    let offer = match &config.offer_data_path {
        Some(path) => OfferData::from_path(path)?,
        None => OfferData::resimix_sample(),
    };
    log::info!(
        "Generating offer {} for {}",
        offer.offer_number,
        offer.customer.name
    );

    let resolver = LogoResolver::new(config.logo.clone());
    let storage = LocalStorage::new(&config.output_dir);
    generate_with(offer, &resolver, &storage).await
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok(); // Load .env file
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    let summary = generate_offer(&config).await?;
    summary.log();

    Ok(())
}
