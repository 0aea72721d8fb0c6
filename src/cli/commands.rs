//! Command implementations for standup.

use std::io::Read;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{Cli, InputArgs, OutputFormat};
use crate::error::StandupError;
use crate::output::{format_classification, format_statement, format_tokens};
use crate::parse::{Indicators, Parser, Scanner, Token};

/// Result of the parse command.
#[derive(Debug)]
pub struct ParseOutcome {
    /// Formatted statement.
    pub output: String,
    /// Fields that were mentioned but are not valid.
    pub needs_review: Vec<String>,
}

/// Read a message from a file, or stdin for `None` and `-`.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than rejected.
///
/// # Errors
///
/// Returns `StandupError::Io` if the input cannot be read.
pub fn read_input(input: &InputArgs) -> Result<String, StandupError> {
    let bytes = match input.file.as_deref() {
        Some(path) if path != Path::new("-") => {
            tracing::debug!(path = %path.display(), "reading message");
            std::fs::read(path)?
        },
        _ => {
            tracing::debug!("reading message from stdin");
            let mut bytes = Vec::new();
            std::io::stdin().read_to_end(&mut bytes)?;
            bytes
        },
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Execute parse command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn parse(
    text: &str,
    indicators: Indicators,
    format: OutputFormat,
) -> Result<ParseOutcome, StandupError> {
    let stmt = Parser::with_indicators(text.chars(), indicators).parse();
    let needs_review: Vec<String> = stmt
        .needs_review()
        .into_iter()
        .map(String::from)
        .collect();

    if !needs_review.is_empty() {
        tracing::info!(fields = ?needs_review, "standup has fields that need review");
    }

    Ok(ParseOutcome {
        output: format_statement(&stmt, format)?,
        needs_review,
    })
}

/// Execute tokens command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn tokens(text: &str, format: OutputFormat) -> Result<String, StandupError> {
    let tokens: Vec<Token> = Scanner::for_text(text).collect();
    format_tokens(&tokens, format)
}

/// Execute classify command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn classify(
    text: &str,
    indicators: &Indicators,
    format: OutputFormat,
) -> Result<String, StandupError> {
    let classification = indicators.classify(text);
    format_classification(text, &classification, format)
}

/// Generate a shell completion script.
#[must_use]
pub fn completions(shell: Shell) -> String {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "standup", &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
