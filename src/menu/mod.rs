//! Menu Module
//!
//! Interactive console front end over the inventory store.
//!
//! ## Responsibilities
//! - Prompt for text and validated integers, re-prompting on bad input
//! - Map numeric selections to menu actions
//! - Run the menu loop, reporting action failures without exiting
//!
//! Everything is generic over `BufRead`/`Write` so the loop can be driven
//! from scripted input.

mod choice;
mod controller;
mod prompt;

pub use choice::MenuChoice;
pub use controller::{MenuController, MENU_TEXT};
pub use prompt::{parse_integer, InputRejected, Prompt};
