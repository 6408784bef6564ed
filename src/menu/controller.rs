//! Menu controller
//!
//! Numbered menu loop dispatching to the inventory store.

use std::io::{BufRead, Write};

use crate::error::{InventoryError, Result};
use crate::record::ShoeRecord;
use crate::report::{render_table, EMPTY_NOTICE};
use crate::store::InventoryStore;

use super::{MenuChoice, Prompt};

/// Main menu, shown before every selection
pub const MENU_TEXT: &str = "
Please select from the following options:
1. View all shoes
2. Add another shoe to the inventory
3. Re-stock shoes with low quantity
4. Search for a shoe by shoe code
5. Search for sales
6. List the value per item
7. Exit program
Selection: ";

const INVALID_SELECTION: &str = "Invalid input: Please select from available options.";
const CONTINUE_PROMPT: &str = "Press Enter to continue: ";
const RETURN_PROMPT: &str = "Press Enter to return to menu: ";

/// Drives the interactive session
pub struct MenuController<R, W> {
    store: InventoryStore,
    prompt: Prompt<R, W>,
}

impl<R: BufRead, W: Write> MenuController<R, W> {
    pub fn new(store: InventoryStore, reader: R, writer: W) -> Self {
        Self {
            store,
            prompt: Prompt::new(reader, writer),
        }
    }

    /// Run until Exit is selected or input ends
    ///
    /// Failures inside an action are reported and the loop carries on.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let selection = match self.prompt.read_integer(MENU_TEXT) {
                Ok(selection) => selection,
                Err(InventoryError::InputClosed) => return Ok(()),
                Err(e) => return Err(e),
            };
            self.prompt.say("")?;

            let choice = match MenuChoice::from_selection(selection) {
                Some(MenuChoice::Exit) => return Ok(()),
                Some(choice) => choice,
                None => {
                    self.prompt.say(INVALID_SELECTION)?;
                    if self.acknowledge(CONTINUE_PROMPT)? {
                        continue;
                    }
                    return Ok(());
                }
            };

            match self.dispatch(choice) {
                Ok(()) => {}
                Err(InventoryError::InputClosed) => return Ok(()),
                Err(e) => {
                    tracing::error!(action = choice.label(), "Action failed: {}", e);
                    self.prompt.say(format!("An error was encountered: {}", e))?;
                    continue;
                }
            }

            if !self.acknowledge(RETURN_PROMPT)? {
                return Ok(());
            }
        }
    }

    /// Run a single menu action
    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::ViewAll => self.view_table(false),
            MenuChoice::AddShoe => self.capture_shoe(),
            MenuChoice::Restock => self.restock(),
            MenuChoice::SearchByCode => self.search(),
            MenuChoice::Sales => self.sales(),
            MenuChoice::ValuePerItem => self.view_table(true),
            MenuChoice::Exit => Ok(()),
        }
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    /// Tear down into the store and the prompt's reader/writer
    pub fn into_parts(self) -> (InventoryStore, R, W) {
        let (reader, writer) = self.prompt.into_parts();
        (self.store, reader, writer)
    }

    // =========================================================================
    // Actions
    // =========================================================================

    fn view_table(&mut self, include_value: bool) -> Result<()> {
        let table = render_table(
            self.store.inventory(),
            include_value,
            &self.store.config().currency_symbol,
        );
        self.prompt.say(table)
    }

    fn capture_shoe(&mut self) -> Result<()> {
        let country = self.prompt.read_line("Please enter shoe Country: ")?;
        let code = self.prompt.read_line("Please enter shoe Code: ")?;
        let product = self.prompt.read_line("Please enter shoe Product: ")?;
        let cost = self.prompt.read_integer("Please enter shoe Cost: ")?;
        let quantity = self.prompt.read_integer("Please enter shoe Quantity: ")?;

        let record = ShoeRecord::new(country, code, product, cost, quantity);
        let message = format!("Shoe {} added to the inventory.", record.code);
        self.store.append(record)?;
        self.prompt.say(message)
    }

    fn restock(&mut self) -> Result<()> {
        let lowest = match self.store.lowest_quantity() {
            Some(record) => record.clone(),
            None => return self.prompt.say(EMPTY_NOTICE),
        };

        self.prompt.say("The shoe with the lowest quantity is:")?;
        self.prompt.say(&lowest)?;

        let amount = self
            .prompt
            .read_integer("Enter the amount of shoes to add: ")?;

        if let Some(record) = self.store.restock_lowest(amount)? {
            self.prompt.say(format!(
                "Shoe {} now has a quantity of {}.",
                record.code, record.quantity
            ))?;
        }
        Ok(())
    }

    fn search(&mut self) -> Result<()> {
        if self.store.is_empty() {
            return self.prompt.say(EMPTY_NOTICE);
        }

        let code = self
            .prompt
            .read_line("Please enter the shoe code you wish to search for: ")?;

        match self.store.search_by_code(&code) {
            Some(record) => self.prompt.say(record),
            None => self
                .prompt
                .say(format!("Shoe code {} was not found.", code)),
        }
    }

    fn sales(&mut self) -> Result<()> {
        match self.store.highest_quantity() {
            Some(record) => {
                self.prompt
                    .say("Due to high quantity, the following shoe is on sale:")?;
                self.prompt.say(record)
            }
            None => self.prompt.say(EMPTY_NOTICE),
        }
    }

    /// Wait for Enter; `false` when input has ended
    fn acknowledge(&mut self, message: &str) -> Result<bool> {
        match self.prompt.pause(message) {
            Ok(()) => Ok(true),
            Err(InventoryError::InputClosed) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
