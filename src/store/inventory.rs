//! In-memory inventory
//!
//! Ordered collection of records. Order reflects file order followed by
//! append order, and duplicate codes are allowed.

use std::slice;

use crate::record::ShoeRecord;

/// Ordered collection of shoe records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    records: Vec<ShoeRecord>,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order
    pub fn records(&self) -> &[ShoeRecord] {
        &self.records
    }

    pub fn iter(&self) -> slice::Iter<'_, ShoeRecord> {
        self.records.iter()
    }

    /// Append a record at the end
    pub fn push(&mut self, record: ShoeRecord) {
        self.records.push(record);
    }

    /// Position of the first record with the lowest quantity
    pub fn lowest_quantity_position(&self) -> Option<usize> {
        let mut best: Option<(usize, i64)> = None;
        for (index, record) in self.records.iter().enumerate() {
            // Strict comparison keeps the first occurrence on ties
            match best {
                Some((_, quantity)) if record.quantity >= quantity => {}
                _ => best = Some((index, record.quantity)),
            }
        }
        best.map(|(index, _)| index)
    }

    /// First record with the lowest quantity
    pub fn lowest_quantity(&self) -> Option<&ShoeRecord> {
        self.lowest_quantity_position()
            .map(|index| &self.records[index])
    }

    /// First record with the highest quantity
    pub fn highest_quantity(&self) -> Option<&ShoeRecord> {
        let mut best: Option<&ShoeRecord> = None;
        for record in &self.records {
            match best {
                Some(current) if record.quantity <= current.quantity => {}
                _ => best = Some(record),
            }
        }
        best
    }

    /// First record whose code equals `code` exactly (case-sensitive)
    pub fn find_by_code(&self, code: &str) -> Option<&ShoeRecord> {
        self.records.iter().find(|record| record.code == code)
    }

    /// Mutable access to the record at `index`
    pub fn get_mut(&mut self, index: usize) -> Option<&mut ShoeRecord> {
        self.records.get_mut(index)
    }

    /// Sum of every record value, saturating at the `i64` bounds
    pub fn total_value(&self) -> i64 {
        self.records
            .iter()
            .fold(0i64, |total, record| total.saturating_add(record.value()))
    }
}

impl From<Vec<ShoeRecord>> for Inventory {
    fn from(records: Vec<ShoeRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<ShoeRecord> for Inventory {
    fn from_iter<I: IntoIterator<Item = ShoeRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a ShoeRecord;
    type IntoIter = slice::Iter<'a, ShoeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
