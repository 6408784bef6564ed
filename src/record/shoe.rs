//! Shoe record
//!
//! One inventory line item and its derived value.

use std::fmt;

use crate::error::{InventoryError, Result};

/// Number of fields in a serialized record:
/// country, code, product, cost, quantity
pub const FIELD_COUNT: usize = 5;

/// A shoe stocked in the inventory
///
/// `code` is the lookup key but uniqueness is not enforced. `cost` and
/// `quantity` are only guaranteed to be integers; their sign is not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoeRecord {
    pub country: String,
    pub code: String,
    pub product: String,
    pub cost: i64,
    pub quantity: i64,
}

impl ShoeRecord {
    /// Create a record from already-typed fields
    pub fn new(
        country: impl Into<String>,
        code: impl Into<String>,
        product: impl Into<String>,
        cost: i64,
        quantity: i64,
    ) -> Self {
        Self {
            country: country.into(),
            code: code.into(),
            product: product.into(),
            cost,
            quantity,
        }
    }

    /// Create a record from raw text fields, parsing `cost` and `quantity`
    ///
    /// Surrounding whitespace on the integer fields is ignored; text fields
    /// are kept as given.
    pub fn parse_fields(
        country: &str,
        code: &str,
        product: &str,
        cost: &str,
        quantity: &str,
    ) -> Result<Self> {
        let cost = parse_integer_field("cost", cost)?;
        let quantity = parse_integer_field("quantity", quantity)?;
        Ok(Self::new(country, code, product, cost, quantity))
    }

    /// Stock value of this line item: `cost * quantity`
    ///
    /// Saturates at the `i64` bounds instead of overflowing.
    pub fn value(&self) -> i64 {
        self.cost.saturating_mul(self.quantity)
    }

    /// Add `amount` to the quantity in place and return the new quantity
    pub fn restock(&mut self, amount: i64) -> i64 {
        self.quantity = self.quantity.saturating_add(amount);
        self.quantity
    }
}

fn parse_integer_field(name: &str, raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        InventoryError::InvalidRecord(format!("{} '{}' is not an integer", name, raw))
    })
}

impl fmt::Display for ShoeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Product:  {}", self.product)?;
        writeln!(f, "Cost:     {}", self.cost)?;
        writeln!(f, "Quantity: {}", self.quantity)?;
        writeln!(f, "Code:     {}", self.code)?;
        write!(f, "Country:  {}", self.country)
    }
}
