//! Output formatting for standup.
//!
//! This module renders parsed statements, token streams, and boolean
//! classifications as pretty text or JSON.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::StandupError;
use crate::parse::{Classification, Statement, Token};

pub use json::*;
pub use pretty::*;

/// Format a statement based on output format
///
/// # Errors
///
/// Returns `StandupError::Json` if JSON serialization fails.
pub fn format_statement(stmt: &Statement, format: OutputFormat) -> Result<String, StandupError> {
    match format {
        OutputFormat::Pretty => Ok(format_statement_pretty(stmt)),
        OutputFormat::Json => format_statement_json(stmt),
    }
}

/// Format a token stream based on output format
///
/// # Errors
///
/// Returns `StandupError::Json` if JSON serialization fails.
pub fn format_tokens(tokens: &[Token], format: OutputFormat) -> Result<String, StandupError> {
    match format {
        OutputFormat::Pretty => Ok(format_tokens_pretty(tokens)),
        OutputFormat::Json => format_tokens_json(tokens),
    }
}

/// Format a boolean classification based on output format
///
/// # Errors
///
/// Returns `StandupError::Json` if JSON serialization fails.
pub fn format_classification(
    text: &str,
    classification: &Classification,
    format: OutputFormat,
) -> Result<String, StandupError> {
    match format {
        OutputFormat::Pretty => Ok(format_classification_pretty(text, classification)),
        OutputFormat::Json => format_classification_json(text, classification),
    }
}
