//! JSON output formatting for standup.
//!
//! Text fields serialize as `{key, val, valid}` and flag fields as
//! `{key, val, lit, valid}`.

use serde_json::json;

use crate::error::StandupError;
use crate::parse::{Classification, Statement, Token};

/// Format a parsed statement as JSON
///
/// # Errors
///
/// Returns `StandupError::Json` if JSON serialization fails.
pub fn format_statement_json(stmt: &Statement) -> Result<String, StandupError> {
    Ok(serde_json::to_string_pretty(stmt)?)
}

/// Format a token stream as JSON
///
/// # Errors
///
/// Returns `StandupError::Json` if JSON serialization fails.
pub fn format_tokens_json(tokens: &[Token]) -> Result<String, StandupError> {
    let output = json!({
        "count": tokens.len(),
        "items": tokens
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the outcome of boolean inference as JSON
///
/// # Errors
///
/// Returns `StandupError::Json` if JSON serialization fails.
pub fn format_classification_json(
    text: &str,
    classification: &Classification,
) -> Result<String, StandupError> {
    let output = json!({
        "lit": text,
        "val": classification.value,
        "verdict": classification.verdict,
        "valid": classification.is_valid(),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
