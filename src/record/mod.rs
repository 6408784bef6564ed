//! Record Module
//!
//! The single entity of the inventory: one shoe line item.
//!
//! ## Responsibilities
//! - Fixed-shape record with three text fields and two integer fields
//! - Validate integer fields at the construction boundary
//! - Derived stock value (`cost * quantity`)
//! - Multi-line label/value rendering for single-record display

mod shoe;

pub use shoe::{ShoeRecord, FIELD_COUNT};
