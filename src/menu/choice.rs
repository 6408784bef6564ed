//! Menu selections

/// An action offered by the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MenuChoice {
    ViewAll = 1,
    AddShoe = 2,
    Restock = 3,
    SearchByCode = 4,
    Sales = 5,
    ValuePerItem = 6,
    Exit = 7,
}

impl MenuChoice {
    /// Every choice in menu order
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::ViewAll,
        MenuChoice::AddShoe,
        MenuChoice::Restock,
        MenuChoice::SearchByCode,
        MenuChoice::Sales,
        MenuChoice::ValuePerItem,
        MenuChoice::Exit,
    ];

    /// Map a 1-based selection to a choice; out-of-range yields `None`
    pub fn from_selection(selection: i64) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|choice| *choice as i64 == selection)
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::ViewAll => "View all shoes",
            MenuChoice::AddShoe => "Add another shoe to the inventory",
            MenuChoice::Restock => "Re-stock shoes with low quantity",
            MenuChoice::SearchByCode => "Search for a shoe by shoe code",
            MenuChoice::Sales => "Search for sales",
            MenuChoice::ValuePerItem => "List the value per item",
            MenuChoice::Exit => "Exit program",
        }
    }
}
