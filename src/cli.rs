pub mod command;
pub mod run;

pub use run::{run_app, run_menu};

use crate::errors::AppError;
use std::io::{BufRead, Write};

/// Line-oriented terminal: everything the menu prints or reads goes through
/// here, so the loop can be driven from a byte buffer in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    // OUTPUT FUNCTIONS
    pub fn say(&mut self, text: &str) -> Result<(), AppError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn error(&mut self, err: &AppError) -> Result<(), AppError> {
        self.say(&format!("ERROR: {}", err))
    }

    // INPUT FUNCTIONS

    /// Prints `text` without a newline and reads one trimmed line.
    /// Returns `None` once the input is exhausted.
    pub fn prompt(&mut self, text: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            // Keep the transcript on separate lines when stdin closes early
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }

    /// Like `prompt`, with end of input read as an empty line.
    pub fn get_input(&mut self, text: &str) -> Result<String, AppError> {
        Ok(self.prompt(text)?.unwrap_or_default())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
