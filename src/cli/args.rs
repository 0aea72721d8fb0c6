use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "standup")]
#[command(about = "Turn free-form standup messages into structured records")]
#[command(long_about = "standup - parse chat-style standup updates

Reads a standup message such as

  Friday: ibm, slack
  Today:
    - ibm: finish deployment
    - meetings: huddle
  LP: up to date
  Jira: not yet

and extracts yesterday, today, meetings, blockers, and the time-log (LP)
and issue-tracker (Jira) status flags. Every field carries a validity bit;
invalid fields need a human to look at them.

QUICK START:
  standup parse message.txt        Parse a file
  pbpaste | standup parse          Parse stdin
  standup parse -o json msg.txt    Machine-readable output
  standup classify \"not yet\"       Check how a status phrase is read

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to `general.default_output` from the config file, or
    /// 'pretty' when unset.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to the config file
    #[arg(long, global = true, env = "STANDUP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a standup message
    ///
    /// Reads FILE (or stdin when FILE is omitted or '-') and prints the
    /// extracted fields. Text before the first keyword is treated as today.
    ///
    /// # Examples
    ///
    ///   standup parse standup.txt
    ///   standup parse -o json < standup.txt
    ///   standup parse --strict standup.txt || echo "needs review"
    #[command(alias = "p")]
    Parse(ParseArgs),

    /// Show the token stream for a message
    ///
    /// Useful for seeing which words were recognised as keywords.
    Tokens(InputArgs),

    /// Classify a status phrase as yes or no
    ///
    /// Runs the same inference used for the LP and Jira fields, including
    /// any extra patterns from the config file.
    ///
    /// # Examples
    ///
    ///   standup classify "up to date"
    ///   standup classify "not yet" -o json
    Classify {
        /// Phrase to classify
        text: String,
    },

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   standup completions bash > /usr/local/etc/bash_completion.d/standup
    ///   standup completions zsh > ~/.zsh/completions/_standup
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Where to read a message from.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// File to read; stdin when omitted or '-'
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ParseArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Exit with status 2 if any mentioned field needs review
    #[arg(long)]
    pub strict: bool,
}
