//! Line codec
//!
//! Converts between a single inventory file line and a [`ShoeRecord`].
//!
//! ## Line Format
//! ```text
//! country,code,product,cost,quantity
//! ```

use crate::error::{InventoryError, Result};
use crate::record::{ShoeRecord, FIELD_COUNT};

/// Field separator
pub const SEPARATOR: char = ',';

/// Parse one data line into a record
///
/// `line_number` is 1-based and counts the header line, it is only used to
/// label the error. The whole line is trimmed before splitting.
pub fn parse_line(line_number: usize, line: &str) -> Result<ShoeRecord> {
    let fields: Vec<&str> = line.trim().split(SEPARATOR).collect();

    if fields.len() != FIELD_COUNT {
        return Err(InventoryError::MalformedRecord {
            line: line_number,
            reason: format!(
                "expected {} fields, found {}",
                FIELD_COUNT,
                fields.len()
            ),
        });
    }

    ShoeRecord::parse_fields(fields[0], fields[1], fields[2], fields[3], fields[4]).map_err(
        |e| InventoryError::MalformedRecord {
            line: line_number,
            reason: match e {
                InventoryError::InvalidRecord(reason) => reason,
                other => other.to_string(),
            },
        },
    )
}

/// Format a record as a data line (without line terminator)
pub fn format_line(record: &ShoeRecord) -> String {
    format!(
        "{country}{sep}{code}{sep}{product}{sep}{cost}{sep}{quantity}",
        country = record.country,
        code = record.code,
        product = record.product,
        cost = record.cost,
        quantity = record.quantity,
        sep = SEPARATOR,
    )
}
