//! Tests for the menu controller
//!
//! These tests drive the menu loop with scripted input and check both the
//! console transcript and the resulting inventory file.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use shoestock::menu::{MenuChoice, MenuController};
use shoestock::store::InventoryStore;
use shoestock::Config;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

const HEADER: &str = "Country,Code,Product,Cost,Quantity";

fn setup_file(rows: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("inventory.txt");
    fs::write(&path, format!("{}\n{}", HEADER, rows)).unwrap();
    (temp_dir, path)
}

/// Run the menu over `path` with scripted `input`, returning the store and
/// everything written to the console
fn run_menu(path: &Path, input: &str) -> (InventoryStore, String) {
    let store = InventoryStore::open(Config::builder().inventory_path(path).build());
    let mut controller =
        MenuController::new(store, Cursor::new(input.as_bytes().to_vec()), Vec::new());

    controller.run().unwrap();

    let (store, _, writer) = controller.into_parts();
    (store, String::from_utf8(writer).unwrap())
}

// =============================================================================
// Loop Tests
// =============================================================================

#[test]
fn test_exit_immediately() {
    let (_temp, path) = setup_file("UK,A1,Boot,50,4\n");

    let (_, output) = run_menu(&path, "7\n");

    assert!(output.contains("1. View all shoes"));
    assert_eq!(output.matches("Selection: ").count(), 1);
}

#[test]
fn test_end_of_input_stops_loop() {
    let (_temp, path) = setup_file("UK,A1,Boot,50,4\n");

    let (_, output) = run_menu(&path, "");

    assert!(output.contains("Selection: "));
}

#[test]
fn test_non_numeric_selection_reprompts() {
    let (_temp, path) = setup_file("UK,A1,Boot,50,4\n");

    let (_, output) = run_menu(&path, "view\n7\n");

    assert!(output.contains("Invalid input, please enter a numerical value."));
    assert_eq!(output.matches("Selection: ").count(), 2);
}

#[test]
fn test_non_utf8_selection_reprompts() {
    let (_temp, path) = setup_file("UK,A1,Boot,50,4\n");
    let store = InventoryStore::open(Config::builder().inventory_path(&path).build());
    let mut controller = MenuController::new(store, Cursor::new(b"\xff\n7\n".to_vec()), Vec::new());

    controller.run().unwrap();

    let (_, _, writer) = controller.into_parts();
    let output = String::from_utf8(writer).unwrap();
    assert!(output.contains("Invalid input, please enter a numerical value."));
    assert_eq!(output.matches("Selection: ").count(), 2);
}

#[test]
fn test_out_of_range_selection_requires_acknowledgment() {
    let (_temp, path) = setup_file("UK,A1,Boot,50,4\n");

    let (_, output) = run_menu(&path, "9\n\n7\n");

    assert!(output.contains("Invalid input: Please select from available options."));
    assert!(output.contains("Press Enter to continue: "));
    assert_eq!(output.matches("Selection: ").count(), 2);
}

// =============================================================================
// Action Tests
// =============================================================================

#[test]
fn test_view_all() {
    let (_temp, path) = setup_file("UK,A1,Boot,50,4\n");

    let (_, output) = run_menu(&path, "1\n\n7\n");

    assert!(output.contains("Country  Code  Product  Cost  Quantity"));
    assert!(output.contains("Press Enter to return to menu: "));
}

#[test]
fn test_view_all_empty() {
    let (_temp, path) = setup_file("");

    let (_, output) = run_menu(&path, "1\n\n7\n");

    assert!(output.contains("Inventory is currently empty."));
}

#[test]
fn test_add_shoe() {
    let (_temp, path) = setup_file("UK,A1,Boot,50,4\n");

    let (store, output) = run_menu(&path, "2\nItaly\nZ9\nOxford\nlots\n180\n2\n\n7\n");

    assert!(output.contains("Invalid input, please enter a numerical value."));
    assert_eq!(store.inventory().len(), 2);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!("{}\nUK,A1,Boot,50,4\nItaly,Z9,Oxford,180,2\n", HEADER)
    );
}

#[test]
fn test_restock_shows_lowest_and_saves() {
    let (_temp, path) = setup_file("UK,A1,Boot,50,4\nUK,A2,Shoe,30,10\n");

    let (store, output) = run_menu(&path, "3\n6\n\n7\n");

    assert!(output.contains("The shoe with the lowest quantity is:"));
    assert!(output.contains("Code:     A1"));
    assert_eq!(store.search_by_code("A1").unwrap().quantity, 10);
    assert!(fs::read_to_string(&path).unwrap().contains("UK,A1,Boot,50,10\n"));
}

#[test]
fn test_restock_empty_does_not_prompt() {
    let (_temp, path) = setup_file("");

    let (_, output) = run_menu(&path, "3\n\n7\n");

    assert!(output.contains("Inventory is currently empty."));
    assert!(!output.contains("Enter the amount of shoes to add: "));
}

#[test]
fn test_search_found_and_missing() {
    let (_temp, path) = setup_file("UK,A1,Boot,50,4\n");

    let (_, output) = run_menu(&path, "4\nA1\n\n4\nZZ\n\n7\n");

    assert!(output.contains("Product:  Boot"));
    assert!(output.contains("Shoe code ZZ was not found."));
}

#[test]
fn test_search_empty_does_not_prompt() {
    let (_temp, path) = setup_file("");

    let (_, output) = run_menu(&path, "4\n\n7\n");

    assert!(output.contains("Inventory is currently empty."));
    assert!(!output.contains("Please enter the shoe code"));
}

#[test]
fn test_sales_announces_highest() {
    let (_temp, path) = setup_file("UK,A1,Boot,50,3\nUK,A2,Shoe,30,10\nUK,A3,Clog,20,10\n");

    let (_, output) = run_menu(&path, "5\n\n7\n");

    assert!(output.contains("Due to high quantity, the following shoe is on sale:"));
    assert!(output.contains("Code:     A2"));
    assert!(!output.contains("Code:     A3"));
}

#[test]
fn test_value_per_item() {
    let (_temp, path) = setup_file("UK,A1,Boot,2500,6\n");

    let (_, output) = run_menu(&path, "6\n\n7\n");

    assert!(output.contains("Value"));
    assert!(output.contains("$15,000"));
}

#[test]
fn test_action_failure_is_reported_and_loop_continues() {
    let (_temp, path) = setup_file("UK,A1,Boot,50,4\n");
    let store = InventoryStore::open(Config::builder().inventory_path(&path).build());
    fs::remove_file(&path).unwrap();

    let input = "3\n5\n1\n\n7\n";
    let mut controller =
        MenuController::new(store, Cursor::new(input.as_bytes().to_vec()), Vec::new());
    controller.run().unwrap();

    let (store, _, writer) = controller.into_parts();
    let output = String::from_utf8(writer).unwrap();

    assert!(output.contains("An error was encountered:"));
    assert!(output.contains("was not found"));
    // The loop carried on to the listing after the failed save
    assert!(output.contains("Boot"));
    assert_eq!(store.inventory().records()[0].quantity, 9);
}

#[test]
fn test_dispatch_exit_is_noop() {
    let (_temp, path) = setup_file("UK,A1,Boot,50,4\n");
    let store = InventoryStore::open(Config::builder().inventory_path(&path).build());
    let mut controller = MenuController::new(store, Cursor::new(Vec::new()), Vec::new());

    controller.dispatch(MenuChoice::Exit).unwrap();

    assert_eq!(controller.store().inventory().len(), 1);
}
