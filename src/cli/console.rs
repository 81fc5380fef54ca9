//! Line-oriented console I/O
//!
//! Wraps any `BufRead`/`Write` pair so the interactive flows can run against
//! the real terminal or an in-memory script.

use std::io::{BufRead, Write};

use crate::error::{ExpenseError, ExpenseResult};

/// Prompt/response console over an input and an output stream
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show `prompt` and read one line, trimmed
    ///
    /// Returns `None` once the input is exhausted.
    pub fn prompt(&mut self, prompt: &str) -> ExpenseResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| ExpenseError::Io(format!("Failed to read input: {}", e)))?;

        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Print one line
    pub fn say(&mut self, line: &str) -> ExpenseResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Print pre-formatted text as-is
    pub fn print(&mut self, text: &str) -> ExpenseResult<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Give back the output stream
    pub fn into_output(self) -> W {
        self.output
    }
}
