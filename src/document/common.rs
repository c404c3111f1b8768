//! Common utilities for document generation.
//!
//! Shared helpers for date formatting, file naming, and the Resimix style
//! constants used by the section builders.

use chrono::{Datelike, Local, NaiveDate};

/// Resimix brand colors (hex RGB).
pub mod colors {
    pub const RESIMIX_BLUE: &str = "003865";
    pub const LIGHT_GRAY: &str = "F2F2F2";
}

/// Font sizes in half-points.
pub mod font_sizes {
    /// 10pt
    pub const HEADER: usize = 20;
    /// 14pt
    pub const LARGE: usize = 28;
    /// 13pt
    pub const MEDIUM: usize = 26;
    /// 10pt
    pub const BODY: usize = 20;
    /// 11pt
    pub const SMALL: usize = 22;
}

/// Page margin on every side, in twips (1 inch).
pub const PAGE_MARGIN_TWIPS: i32 = 1440;

/// EMU per pixel at 96 DPI.
pub const EMU_PER_PIXEL: u32 = 9525;

const ITALIAN_MONTHS: [&str; 12] = [
    "Gennaio",
    "Febbraio",
    "Marzo",
    "Aprile",
    "Maggio",
    "Giugno",
    "Luglio",
    "Agosto",
    "Settembre",
    "Ottobre",
    "Novembre",
    "Dicembre",
];

/// Format a date in Italian (e.g., "21 Maggio 2025").
pub fn italian_date(date: NaiveDate) -> String {
    let month = ITALIAN_MONTHS[(date.month0() as usize).min(ITALIAN_MONTHS.len() - 1)];
    format!("{} {} {}", date.day(), month, date.year())
}

/// Format the current local date in Italian.
pub fn format_italian_date() -> String {
    italian_date(Local::now().date_naive())
}

/// Sanitize one component of a file name, using `fallback` when nothing is left.
pub fn sanitize_filename_component(name: &str, fallback: &str) -> String {
    let result = sanitize_filename::sanitize(name.trim());

    if result.trim().is_empty() {
        return fallback.to_string();
    }

    result
}

/// Convert a pixel dimension to EMU.
pub fn px_to_emu(px: u32) -> u32 {
    px.saturating_mul(EMU_PER_PIXEL)
}
