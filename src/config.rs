//! Configuration for shoestock
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{InventoryError, Result};

/// Main configuration for a shoestock session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Comma-delimited inventory file. The first line is a header that is
    /// carried over verbatim on every save.
    pub inventory_path: PathBuf,

    // -------------------------------------------------------------------------
    // Presentation Configuration
    // -------------------------------------------------------------------------
    /// Symbol prefixed to money amounts in the value table
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inventory_path: PathBuf::from(Self::DEFAULT_INVENTORY_FILE),
            currency_symbol: "$".to_string(),
        }
    }
}

impl Config {
    /// File name used when no path is configured
    pub const DEFAULT_INVENTORY_FILE: &'static str = "inventory.txt";

    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the configuration can be used
    pub fn validate(&self) -> Result<()> {
        if self.inventory_path.as_os_str().is_empty() {
            return Err(InventoryError::Config(
                "inventory path must not be empty".to_string(),
            ));
        }
        if self.currency_symbol.contains(['\n', '\r']) {
            return Err(InventoryError::Config(
                "currency symbol must fit on one line".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the inventory file path
    pub fn inventory_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.inventory_path = path.into();
        self
    }

    /// Set the currency symbol
    pub fn currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.config.currency_symbol = symbol.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
