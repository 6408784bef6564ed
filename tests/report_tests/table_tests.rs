//! Tests for table rendering
//!
//! These tests verify:
//! - Column layout and alignment
//! - Optional value column with currency formatting
//! - Empty inventory notice

use shoestock::record::ShoeRecord;
use shoestock::report::{format_currency, render_table, Align, Table, EMPTY_NOTICE};
use shoestock::store::Inventory;

fn sample_inventory() -> Inventory {
    Inventory::from(vec![
        ShoeRecord::new("UK", "A1", "Boot", 50, 4),
        ShoeRecord::new("South Africa", "SKU44386", "Air Max 90", 2300, 20),
    ])
}

#[test]
fn test_render_table_layout() {
    let table = render_table(&sample_inventory(), false, "$");

    let expected = [
        "Country       Code      Product     Cost  Quantity",
        "------------  --------  ----------  ----  --------",
        "UK            A1        Boot          50         4",
        "South Africa  SKU44386  Air Max 90  2300        20",
    ]
    .join("\n");

    assert_eq!(table, expected);
}

#[test]
fn test_render_table_with_value() {
    let table = render_table(&sample_inventory(), true, "$");
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].ends_with("Quantity    Value"));
    assert!(lines[2].ends_with("$200"));
    assert!(lines[3].ends_with("$46,000"));
}

#[test]
fn test_render_table_custom_symbol() {
    let table = render_table(&sample_inventory(), true, "R");

    assert!(table.contains("R46,000"));
    assert!(!table.contains('$'));
}

#[test]
fn test_render_table_without_value_has_no_value_column() {
    let table = render_table(&sample_inventory(), false, "$");

    assert!(!table.contains("Value"));
    assert!(!table.contains('$'));
}

#[test]
fn test_render_empty_inventory() {
    assert_eq!(render_table(&Inventory::new(), false, "$"), EMPTY_NOTICE);
    assert_eq!(render_table(&Inventory::new(), true, "$"), EMPTY_NOTICE);
}

#[test]
fn test_table_pads_short_rows() {
    let mut table = Table::new()
        .column("Name", Align::Left)
        .column("Count", Align::Right);
    table.push_row(vec!["x".to_string()]);

    assert_eq!(table.render(), "Name  Count\n----  -----\nx");
}

#[test]
fn test_render_table_negative_value() {
    let inventory = Inventory::from(vec![ShoeRecord::new("UK", "A1", "Boot", 50, -4)]);

    let table = render_table(&inventory, true, "$");

    assert!(table.lines().last().unwrap().ends_with("$-200"));
}

#[test]
fn test_format_currency_example() {
    assert_eq!(format_currency(12_345, "$"), "$12,345");
}
