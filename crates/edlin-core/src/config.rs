//! User configuration.
//!
//! The configuration is read once (typically from the host's JSON settings), then handed to a
//! [`CommandExecutor`](crate::CommandExecutor) and never mutated afterwards.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while loading a [`Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Filesystem I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings were not valid JSON for this schema.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings recognized by the line commands.
///
/// Keys use the host's camelCase spelling; missing keys take their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Keep a single empty line where a run of blank lines is removed.
    ///
    /// Carried for compatibility with existing settings files; blank-line removal currently
    /// drops every blank line regardless.
    pub keep_one_empty_line: bool,
    /// Let save-triggered invocations run.
    pub trigger_on_save: bool,
    /// Insert an empty line after a block. Carried but not consulted by any command.
    pub insert_line_after_block: bool,
    /// Languages for which save-triggered invocations run.
    pub language_ids: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keep_one_empty_line: true,
            trigger_on_save: true,
            insert_line_after_block: true,
            language_ids: ["javascript", "typescript", "json"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl Config {
    /// Parse settings from a JSON object.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::debug!("loaded line command settings from {}", path.display());
        Ok(config)
    }

    /// Returns `true` if `language_id` is one of the configured languages.
    pub fn applies_to_language(&self, language_id: &str) -> bool {
        self.language_ids.iter().any(|id| id == language_id)
    }
}
