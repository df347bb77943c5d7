//! User input utilities for interactive command-line prompts.

use console::Term;

use crate::error::CliError;

/// Interpret a yes/no answer.
///
/// Accepts 'y', 'yes', 'n', 'no' (case insensitive). Empty input is 'no';
/// anything else is `None`.
pub fn parse_confirmation(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" | "" => Some(false),
        _ => None,
    }
}

/// Prompts the user for a yes/no confirmation on the terminal.
///
/// Re-prompts until the answer parses.
///
/// # Errors
///
/// Returns [`CliError::Io`] if the terminal cannot be read or written.
pub fn prompt_confirmation(prompt: &str) -> Result<bool, CliError> {
    let term = Term::stderr();
    loop {
        term.write_str(&format!("{prompt} (y/N): "))?;
        let line = term.read_line()?;
        if let Some(answer) = parse_confirmation(&line) {
            return Ok(answer);
        }
        term.write_line("Please enter 'y' for yes or 'n' for no.")?;
    }
}
