//! Store Module
//!
//! Persistent storage layer backed by a comma-delimited text file.
//!
//! ## Responsibilities
//! - Hold the ordered in-memory collection of records
//! - Parse and format single record lines
//! - Load the collection from disk, skipping malformed lines
//! - Rewrite the file after every mutation, keeping its header
//!
//! ## File Format
//! ```text
//! ┌────────────────────────────────────────┐
//! │ Header line (passed through verbatim)  │
//! ├────────────────────────────────────────┤
//! │ country,code,product,cost,quantity     │
//! │ ... (one line per record)              │
//! └────────────────────────────────────────┘
//! ```
//!
//! Fields are plain comma-separated text. There is no quoting or escaping,
//! so a comma inside any field corrupts that line.

mod codec;
mod file;
mod inventory;
mod manager;

pub use codec::{format_line, parse_line};
pub use file::{load, save, Diagnostic, LoadOutcome, SaveOutcome};
pub use inventory::Inventory;
pub use manager::InventoryStore;
