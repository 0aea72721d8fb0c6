//! Path resolution for standup configuration.
//!
//! Configuration lives in `~/.standup/config.yaml`.

use std::path::PathBuf;

use crate::error::StandupError;

/// Paths to standup configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.standup/`
    pub root: PathBuf,
    /// Config file: `~/.standup/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, StandupError> {
        let home = std::env::var("HOME").map_err(|_| {
            StandupError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".standup")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }
}
