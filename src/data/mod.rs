pub mod catalog;
mod parser;

pub use parser::parse;

use crate::map::Country;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Decode a feature-collection document and parse its countries
pub fn parse_bytes(bytes: &mut [u8]) -> Result<Vec<Country>> {
    let collection: serde_json::Value =
        simd_json::serde::from_slice(bytes).context("Invalid feature collection JSON")?;
    Ok(parse(&collection))
}

/// Load countries from a feature-collection file
pub fn load_countries(path: &Path) -> Result<Vec<Country>> {
    let mut bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let countries = parse_bytes(&mut bytes).with_context(|| format!("Failed to load {}", path.display()))?;
    log::info!("Loaded {} countries from {}", countries.len(), path.display());
    Ok(countries)
}
