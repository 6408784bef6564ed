//! Inventory Store
//!
//! Owns the session's inventory and the file it is persisted to.
//!
//! ## Responsibilities
//! - Load the inventory once at startup, degrading to empty on failure
//! - Persist after every mutation (append, restock)
//! - Answer the read-only queries (search, lowest/highest quantity)

use std::path::Path;

use crate::config::Config;
use crate::error::{InventoryError, Result};
use crate::record::ShoeRecord;

use super::file::{self, Diagnostic, SaveOutcome};
use super::Inventory;

/// The application context for one session
///
/// Single-threaded: all methods either borrow the inventory or take
/// `&mut self` for mutations.
pub struct InventoryStore {
    /// Session configuration
    config: Config,

    /// In-memory records, in file order then append order
    inventory: Inventory,

    /// Lines skipped during the initial load
    diagnostics: Vec<Diagnostic>,
}

impl InventoryStore {
    /// Open the store described by `config`
    ///
    /// Never fails: a missing or unreadable file is logged and yields an
    /// empty inventory.
    pub fn open(config: Config) -> Self {
        let path = config.inventory_path.clone();

        let (inventory, diagnostics) = match file::load(&path) {
            Ok(outcome) => (outcome.inventory, outcome.diagnostics),
            Err(InventoryError::FileNotFound { .. }) => {
                tracing::warn!("Error: {} was not found.", path.display());
                (Inventory::new(), Vec::new())
            }
            Err(e) => {
                tracing::error!("Unexpected error loading {}: {}", path.display(), e);
                (Inventory::new(), Vec::new())
            }
        };

        Self {
            config,
            inventory,
            diagnostics,
        }
    }

    /// Build a store around an existing inventory without touching disk
    pub fn with_inventory(config: Config, inventory: Inventory) -> Self {
        Self {
            config,
            inventory,
            diagnostics: Vec::new(),
        }
    }

    /// Write the inventory back to its file
    pub fn save(&self) -> Result<SaveOutcome> {
        let outcome = file::save(self.path(), &self.inventory)?;
        match outcome {
            SaveOutcome::Written { records } => {
                tracing::info!(path = %self.path().display(), records, "Inventory saved");
            }
            SaveOutcome::SkippedEmpty => {
                tracing::warn!("Inventory is currently empty, nothing saved");
            }
        }
        Ok(outcome)
    }

    /// Append a record and persist
    pub fn append(&mut self, record: ShoeRecord) -> Result<SaveOutcome> {
        tracing::debug!(code = %record.code, "Appending record");
        self.inventory.push(record);
        self.save()
    }

    /// The record `restock_lowest` would change
    pub fn lowest_quantity(&self) -> Option<&ShoeRecord> {
        self.inventory.lowest_quantity()
    }

    /// Add `amount` to the first lowest-quantity record and persist
    ///
    /// Returns the updated record, or `None` for an empty inventory (in
    /// which case nothing is saved). The in-memory change is kept even if
    /// the save fails.
    pub fn restock_lowest(&mut self, amount: i64) -> Result<Option<&ShoeRecord>> {
        let index = match self.inventory.lowest_quantity_position() {
            Some(index) => index,
            None => return Ok(None),
        };

        if let Some(record) = self.inventory.get_mut(index) {
            let quantity = record.restock(amount);
            tracing::debug!(code = %record.code, amount, quantity, "Restocked");
        }

        self.save()?;
        Ok(self.inventory.records().get(index))
    }

    /// First record with exactly this code
    pub fn search_by_code(&self, code: &str) -> Option<&ShoeRecord> {
        self.inventory.find_by_code(code)
    }

    /// First record with the highest quantity
    pub fn highest_quantity(&self) -> Option<&ShoeRecord> {
        self.inventory.highest_quantity()
    }

    /// Sum of all record values
    pub fn total_value(&self) -> i64 {
        self.inventory.total_value()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn is_empty(&self) -> bool {
        self.inventory.is_empty()
    }

    /// Lines skipped while loading
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.config.inventory_path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
