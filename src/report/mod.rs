//! Report Module
//!
//! Text presentation of the inventory.
//!
//! ## Responsibilities
//! - Lay out aligned plain-text tables
//! - Format money with thousands separators
//! - Render the inventory listing, optionally with a value column

mod currency;
mod table;

pub use currency::format_currency;
pub use table::{Align, Table};

use crate::store::Inventory;

/// Notice shown instead of a table when there is nothing to list
pub const EMPTY_NOTICE: &str = "Inventory is currently empty.";

/// Render the inventory as an aligned table
///
/// Columns are Country, Code, Product, Cost and Quantity, plus Value when
/// `include_value` is set. An empty inventory renders as [`EMPTY_NOTICE`].
pub fn render_table(inventory: &Inventory, include_value: bool, currency_symbol: &str) -> String {
    if inventory.is_empty() {
        return EMPTY_NOTICE.to_string();
    }

    let mut table = Table::new()
        .column("Country", Align::Left)
        .column("Code", Align::Left)
        .column("Product", Align::Left)
        .column("Cost", Align::Right)
        .column("Quantity", Align::Right);
    if include_value {
        table = table.column("Value", Align::Right);
    }

    for record in inventory {
        let mut row = vec![
            record.country.clone(),
            record.code.clone(),
            record.product.clone(),
            record.cost.to_string(),
            record.quantity.to_string(),
        ];
        if include_value {
            row.push(format_currency(record.value(), currency_symbol));
        }
        table.push_row(row);
    }

    table.render()
}
