//! Run configuration loaded from the environment.
//!
//! Values come from process environment variables, with a `.env` file loaded
//! by the entry point through `dotenvy`.

use std::env;
use std::path::PathBuf;
use thiserror::Error;

use crate::logo::LogoSource;

pub const DEFAULT_OUTPUT_DIR: &str = "./outputs";
pub const DEFAULT_LOGO_SOURCE: &str = "./Resimix.png";
pub const DEFAULT_LOGO_WIDTH: u32 = 200;
pub const DEFAULT_LOGO_HEIGHT: u32 = 80;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub output_dir: PathBuf,
    /// JSON offer file; the built-in sample is used when absent.
    pub offer_data_path: Option<PathBuf>,
    pub logo: LogoSource,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let output_dir = get("OFFER_OUTPUT_DIR").unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());
        let offer_data_path = get("OFFER_DATA_PATH").map(PathBuf::from);

        let location = get("LOGO_SOURCE").unwrap_or_else(|| DEFAULT_LOGO_SOURCE.to_string());
        let width = parse_u32("LOGO_WIDTH", get("LOGO_WIDTH"), DEFAULT_LOGO_WIDTH)?;
        let height = parse_u32("LOGO_HEIGHT", get("LOGO_HEIGHT"), DEFAULT_LOGO_HEIGHT)?;
        let force_text_fallback = parse_bool("LOGO_TEXT_FALLBACK", get("LOGO_TEXT_FALLBACK"))?;

        Ok(Self {
            output_dir: PathBuf::from(output_dir),
            offer_data_path,
            logo: LogoSource::from_location(location.trim(), width, height)
                .with_text_fallback(force_text_fallback),
        })
    }
}

fn parse_u32(key: &'static str, value: Option<String>, default: u32) -> Result<u32, ConfigError> {
    match value {
        None => Ok(default),
        Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid { key, value: v }),
    }
}

fn parse_bool(key: &'static str, value: Option<String>) -> Result<bool, ConfigError> {
    let Some(v) = value else {
        return Ok(false);
    };

    match v.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::Invalid { key, value: v }),
    }
}
