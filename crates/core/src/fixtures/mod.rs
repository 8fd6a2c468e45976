//! Fixtures
//!
//! YAML documents describing a menu and an order, used by the quoting CLI and tests.

use std::{fs, path::Path};

use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod menu;
pub mod orders;

pub use menu::{MenuFixture, parse_price};
pub use orders::{OrderFixture, OrderLineFixture};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Prices in one menu must share a currency
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// A menu item lists an ingredient missing from the ingredient price list
    #[error("Menu item {item} lists unknown ingredient {ingredient}")]
    UnknownIngredient {
        /// Menu item key
        item: String,
        /// Ingredient name
        ingredient: String,
    },
}

/// Read and deserialize a YAML fixture from disk.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the file cannot be read or parsed.
pub fn load_yaml<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, FixtureError> {
    let contents = fs::read_to_string(path)?;

    Ok(serde_norway::from_str(&contents)?)
}
