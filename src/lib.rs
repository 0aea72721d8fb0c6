//! standup - parse free-form standup updates
//!
//! This crate turns chat-style standup messages into a [`Statement`] with
//! yesterday, today, meetings, and blockers text plus inferred time-log and
//! issue-tracker flags. Parsing never fails; each field carries a validity
//! bit instead.
//!
//! ```
//! use standup::parse_statement;
//!
//! let stmt = parse_statement("Friday: ibm\nToday: slack\nLP: up to date");
//! assert_eq!(stmt.yesterday.key, "Friday");
//! assert_eq!(stmt.today.val, "slack");
//! assert!(stmt.time_log.val && stmt.time_log.valid);
//! ```

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod parse;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::StandupError;
pub use parse::{parse_statement, FlagField, Parser, Statement, TextField};
