//! Console prompts
//!
//! Blocking line reads with typed integer validation.

use std::fmt;
use std::io::{BufRead, Write};

use crate::error::{InventoryError, Result};

/// Message shown when an integer was expected
pub const NOT_A_NUMBER: &str = "Invalid input, please enter a numerical value.";

/// Text that was rejected where an integer was required
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRejected {
    pub input: String,
}

impl fmt::Display for InputRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a whole number", self.input)
    }
}

/// Parse a console entry as an integer
///
/// Surrounding whitespace and a leading sign are accepted.
pub fn parse_integer(text: &str) -> std::result::Result<i64, InputRejected> {
    text.trim().parse::<i64>().map_err(|_| InputRejected {
        input: text.to_string(),
    })
}

/// Prompts on a writer and reads answers from a reader
pub struct Prompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Show `message` and read one line, without its line terminator
    ///
    /// Input that is not valid UTF-8 is decoded lossily rather than failing.
    /// Returns [`InventoryError::InputClosed`] at end of input.
    pub fn read_line(&mut self, message: &str) -> Result<String> {
        write!(self.writer, "{}", message)?;
        self.writer.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(InventoryError::InputClosed);
        }

        // Undecodable bytes become U+FFFD, which integer parsing rejects
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Show `message` until an integer is entered
    ///
    /// Bad entries print [`NOT_A_NUMBER`] and re-prompt with no retry limit.
    pub fn read_integer(&mut self, message: &str) -> Result<i64> {
        loop {
            let line = self.read_line(message)?;
            match parse_integer(&line) {
                Ok(value) => return Ok(value),
                Err(rejected) => {
                    tracing::debug!(%rejected, "Integer input rejected");
                    writeln!(self.writer, "{}", NOT_A_NUMBER)?;
                }
            }
        }
    }

    /// Wait for the user to press Enter
    pub fn pause(&mut self, message: &str) -> Result<()> {
        self.read_line(message).map(|_| ())
    }

    /// Write one line of output
    pub fn say(&mut self, text: impl fmt::Display) -> Result<()> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}
