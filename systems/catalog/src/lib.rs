#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Catalog ingestion for the PC Workshop experience.
//!
//! The item database arrives as a JSON array of records. Every record is
//! validated here, at load time, so the engine never trips over a missing
//! field or a duplicated id in the middle of a session.

use pc_workshop_core::{Catalog, CatalogError, ItemDefinition};
use thiserror::Error;

/// Errors that can occur while ingesting the item database.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The JSON document could not be parsed into item records.
    #[error("could not parse the item database: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The records parsed but violate a catalog invariant.
    #[error(transparent)]
    Invalid(#[from] CatalogError),
}

/// Parses the item database JSON into raw item records.
pub fn parse_items(json: &str) -> Result<Vec<ItemDefinition>, CatalogLoadError> {
    Ok(serde_json::from_str(json)?)
}

/// Parses and validates the item database into an immutable catalog.
pub fn load_catalog(json: &str) -> Result<Catalog, CatalogLoadError> {
    let items = parse_items(json)?;
    Ok(Catalog::new(items)?)
}
