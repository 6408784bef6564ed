//! Error types for shoestock
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using InventoryError
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Unified error type for shoestock operations
#[derive(Debug, Error)]
pub enum InventoryError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{} was not found", path.display())]
    FileNotFound { path: PathBuf },

    // -------------------------------------------------------------------------
    // Data Errors
    // -------------------------------------------------------------------------
    /// A line of the inventory file could not be turned into a record
    #[error("bad row data at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// Record fields rejected before a line number is known
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    // -------------------------------------------------------------------------
    // Console Errors
    // -------------------------------------------------------------------------
    /// Console input reached end of stream
    #[error("input stream closed")]
    InputClosed,

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
