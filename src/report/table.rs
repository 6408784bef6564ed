//! Plain-text table layout
//!
//! Columns are separated by two spaces and the header is underlined with
//! dashes as wide as each column:
//!
//! ```text
//! Country  Code  Product  Cost  Quantity
//! -------  ----  -------  ----  --------
//! UK       A1    Boot       50         4
//! ```

/// Horizontal alignment of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

const COLUMN_GAP: &str = "  ";

/// A table of text cells with per-column alignment
#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    aligns: Vec<Align>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column
    pub fn column(mut self, header: impl Into<String>, align: Align) -> Self {
        self.headers.push(header.into());
        self.aligns.push(align);
        self
    }

    /// Add a row; missing cells render blank and extra cells are dropped
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    /// Render header, rule and rows, joined by newlines (no trailing newline)
    pub fn render(&self) -> String {
        let widths = self.column_widths();

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(self.render_line(&self.headers, &widths));

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        lines.push(rule.join(COLUMN_GAP));

        for row in &self.rows {
            lines.push(self.render_line(row, &widths));
        }

        lines.join("\n")
    }

    fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                self.rows
                    .iter()
                    .map(|row| display_width(&row[col]))
                    .chain(std::iter::once(display_width(header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn render_line(&self, cells: &[String], widths: &[usize]) -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .zip(&self.aligns)
            .map(|((cell, width), align)| match align {
                Align::Left => format!("{:<width$}", cell, width = *width),
                Align::Right => format!("{:>width$}", cell, width = *width),
            })
            .collect();

        padded.join(COLUMN_GAP).trim_end().to_string()
    }
}

// Counts chars, matching how `format!` width padding measures text.
fn display_width(text: &str) -> usize {
    text.chars().count()
}
