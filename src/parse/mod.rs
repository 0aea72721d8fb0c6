//! Standup message parsing.
//!
//! This module turns loosely written standup updates like:
//! - "Friday: ibm, slack\nToday: ibm\nLP: up to date"
//! - "- meetings: huddle\n- blockers: none"
//! - "working on something" (no keyword: goes to today)
//!
//! into a [`Statement`] with per-field validity.

mod classify;
mod parser;
mod scanner;
mod statement;
mod token;

pub use classify::{
    classify_boolean, Classification, Indicators, Verdict, NEGATIVE_PATTERNS, POSITIVE_PATTERNS,
};
pub use parser::{normalize_value, parse_statement, Parser};
pub use scanner::Scanner;
pub use statement::{FieldRef, FlagField, Statement, TextField};
pub use token::{keyword_kind, normalize_word, Token, TokenKind, KEYWORDS};
