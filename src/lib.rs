//! # shoestock
//!
//! A small shoe inventory manager backed by a comma-delimited text file:
//! - Ordered in-memory collection loaded once per session
//! - Tolerant loading (malformed lines are reported and skipped)
//! - File rewritten after every append or restock, header preserved
//! - Plain-text tables with a currency value column
//! - Numbered console menu that survives bad input
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Menu Controller                           │
//! │              (Prompt + numbered selections)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   Inventory Store                            │
//! │          (owns Inventory + backing file path)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Inventory  │          │  File I/O   │
//!   │ (ShoeRecord)│          │ (load/save) │
//!   └──────┬──────┘          └─────────────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │   Report    │
//!   │  (tables)   │
//!   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod report;
pub mod menu;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{InventoryError, Result};
pub use config::Config;
pub use record::ShoeRecord;
pub use store::{Inventory, InventoryStore};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of shoestock
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
