//! Inventory file I/O
//!
//! Loads and saves the whole inventory. Every call opens, uses and closes
//! the file; no handle outlives a call.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{InventoryError, Result};

use super::codec::{format_line, parse_line};
use super::Inventory;

/// A data line that was skipped while loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number, counting the header as line 1
    pub line: usize,

    /// Why the line was rejected
    pub reason: String,
}

/// Result of loading an inventory file
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Header line as read, without its line terminator
    pub header: Option<String>,

    /// Records from every well-formed data line, in file order
    pub inventory: Inventory,

    /// One entry per skipped data line
    pub diagnostics: Vec<Diagnostic>,
}

/// Result of a save request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// File rewritten with this many data lines
    Written { records: usize },

    /// Nothing to write; the file was left untouched
    SkippedEmpty,
}

/// Load an inventory file
///
/// The first line is a header and is never validated. Malformed data lines
/// are logged and reported in [`LoadOutcome::diagnostics`], they never fail
/// the load.
pub fn load(path: &Path) -> Result<LoadOutcome> {
    let mut reader = BufReader::new(open_existing(path)?);

    let mut outcome = LoadOutcome::default();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;
        let raw = strip_line_ending(&buf);

        // Step 1: The first line is the header
        if line_number == 1 {
            outcome.header = Some(String::from_utf8_lossy(raw).into_owned());
            continue;
        }

        // Step 2: Parse the data line, dropping it on failure
        let parsed = match std::str::from_utf8(raw) {
            Ok(text) => parse_line(line_number, text),
            Err(_) => Err(InventoryError::MalformedRecord {
                line: line_number,
                reason: "not valid UTF-8".to_string(),
            }),
        };

        match parsed {
            Ok(record) => outcome.inventory.push(record),
            Err(InventoryError::MalformedRecord { line, reason }) => {
                tracing::warn!(
                    path = %path.display(),
                    line,
                    "Skipping bad row data at line {}: {}",
                    line,
                    reason
                );
                outcome.diagnostics.push(Diagnostic { line, reason });
            }
            Err(e) => return Err(e),
        }
    }

    tracing::debug!(
        path = %path.display(),
        records = outcome.inventory.len(),
        skipped = outcome.diagnostics.len(),
        "Inventory loaded"
    );

    Ok(outcome)
}

/// Rewrite an inventory file from `inventory`
///
/// The header is re-read from the existing file right before writing, so
/// the file must already exist. An empty inventory writes nothing.
pub fn save(path: &Path, inventory: &Inventory) -> Result<SaveOutcome> {
    if inventory.is_empty() {
        return Ok(SaveOutcome::SkippedEmpty);
    }

    // Step 1: Capture the current header line
    let header = read_header(path)?;

    // Step 2: Truncate and rewrite header + records
    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| classify_open_error(path, e))?;
    let mut writer = BufWriter::new(file);

    writer.write_all(&header)?;
    if !header.is_empty() && !header.ends_with(b"\n") {
        writer.write_all(b"\n")?;
    }
    for record in inventory {
        writer.write_all(format_line(record).as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    Ok(SaveOutcome::Written {
        records: inventory.len(),
    })
}

/// Read the first line of `path` as raw bytes, including its line terminator
fn read_header(path: &Path) -> Result<Vec<u8>> {
    let mut reader = BufReader::new(open_existing(path)?);
    let mut header = Vec::new();
    reader.read_until(b'\n', &mut header)?;
    Ok(header)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn open_existing(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| classify_open_error(path, e))
}

fn classify_open_error(path: &Path, e: io::Error) -> InventoryError {
    match e.kind() {
        io::ErrorKind::NotFound => InventoryError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => InventoryError::Io(e),
    }
}
