//! Command-line interface for standup.

pub mod args;
pub mod commands;
