//! Interactive questions (commit message, git identity).

use crate::Error;
use crate::log;
use std::io::{self, BufRead};

/// Asks the user for one line of input.
pub trait Prompt {
    /// Shows `question` and returns the trimmed answer. End of input is an
    /// empty answer.
    ///
    /// # Errors
    /// I/O errors from the input stream.
    fn ask(&mut self, question: &str) -> Result<String, Error>;
}

/// Asks on the terminal: the question goes to stderr without a newline and
/// the answer is typed right after it.
#[derive(Debug, Default)]
pub struct ConsoleInput;

impl Prompt for ConsoleInput {
    fn ask(&mut self, question: &str) -> Result<String, Error> {
        let printer = log::inline();
        printer.info(format_args!("{question} "));
        printer.flush();

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}
