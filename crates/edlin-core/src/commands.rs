//! Command Interface Layer
//!
//! Binds the line transforms to an editor host.
//!
//! # Overview
//!
//! Each [`LineCommand`] is a zero-argument action a host binds to a user-facing command id
//! (`edlin.trim`, `edlin.split`, ...). Running one through a [`CommandExecutor`]:
//!
//! 1. asks the host for the active editor (none => the command is a no-op),
//! 2. walks the editor's selections in document order (overlapping ones merged), turning each
//!    into one [`TextEdit`],
//! 3. submits all edits as a single [`EditBatch`], which the host applies atomically.
//!
//! # Example
//!
//! ```rust
//! use edlin_core::{BufferEditor, BufferHost, CommandExecutor, CommandOutcome, Config};
//! use edlin_core::{InvocationContext, Position, Selection};
//!
//! let editor = BufferEditor::new("  hi  \n  bye  ")
//!     .with_selections(vec![Selection::new(Position::new(0, 0), Position::new(1, 7))]);
//! let mut executor = CommandExecutor::new(BufferHost::new(editor), Config::default());
//!
//! let outcome = executor
//!     .execute_id("edlin.trim", InvocationContext::Command)
//!     .unwrap();
//! assert_eq!(outcome, CommandOutcome::Applied { edits: 1 });
//! assert_eq!(executor.host().editor().unwrap().text(), "hi\nbye");
//! ```

use std::collections::HashSet;
use std::str::FromStr;

use thiserror::Error;

use crate::config::Config;
use crate::host::{EditBatch, EditorHost, HostError, TextEdit, TextEditor};
use crate::line_ending::LineEnding;
use crate::selection::normalize_selections;
use crate::transform::{self, SplitMode, TrimSide};

/// A line command exposed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineCommand {
    /// Trim whitespace on each selected line.
    Trim(TrimSide),
    /// Remove blank lines from each selection.
    RemoveBlankLines,
    /// Split the line under each selection on the selected delimiter.
    Split {
        /// Keep the delimiter at the end of each produced line.
        keep_delimiter: bool,
    },
    /// Join the lines of each selection.
    Combine,
}

impl LineCommand {
    /// Every command, in registration order.
    pub const ALL: [LineCommand; 7] = [
        Self::Trim(TrimSide::Both),
        Self::Trim(TrimSide::Left),
        Self::Trim(TrimSide::Right),
        Self::RemoveBlankLines,
        Self::Split {
            keep_delimiter: false,
        },
        Self::Split {
            keep_delimiter: true,
        },
        Self::Combine,
    ];

    /// The host command id this command is registered under.
    pub fn id(self) -> &'static str {
        match self {
            Self::Trim(TrimSide::Both) => "edlin.trim",
            Self::Trim(TrimSide::Left) => "edlin.ltrim",
            Self::Trim(TrimSide::Right) => "edlin.rtrim",
            Self::RemoveBlankLines => "edlin.removeBlankLine",
            Self::Split {
                keep_delimiter: false,
            } => "edlin.split",
            Self::Split {
                keep_delimiter: true,
            } => "edlin.splitAndKeep",
            Self::Combine => "edlin.combine",
        }
    }

    /// Look a command up by its host command id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.id() == id)
    }
}

impl std::fmt::Display for LineCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for LineCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| CommandError::UnknownCommand(s.to_string()))
    }
}

/// What triggered a command invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InvocationContext {
    /// The user ran the command explicitly.
    #[default]
    Command,
    /// The host is saving the document.
    Save,
}

/// Result of a successful invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// No editor has focus; nothing was done.
    NoActiveEditor,
    /// A save-triggered invocation was disabled by configuration.
    Skipped,
    /// A batch of `edits` replacements was applied.
    Applied {
        /// Number of replacements in the batch.
        edits: usize,
    },
}

/// Command error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// No command is registered under this id.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The host failed to apply the batch; the document is unchanged.
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Runs [`LineCommand`]s against an [`EditorHost`].
#[derive(Debug)]
pub struct CommandExecutor<H> {
    host: H,
    config: Config,
}

impl<H: EditorHost> CommandExecutor<H> {
    /// Create an executor over `host` with a fixed configuration.
    pub fn new(host: H, config: Config) -> Self {
        Self { host, config }
    }

    /// The wrapped host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the wrapped host (e.g. to switch editors between commands).
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The configuration this executor was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Give the host back.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Run the command registered under `id`.
    pub fn execute_id(
        &mut self,
        id: &str,
        context: InvocationContext,
    ) -> Result<CommandOutcome, CommandError> {
        let command = id.parse()?;
        self.execute(command, context)
    }

    /// Run `command` once over every selection of the active editor.
    pub fn execute(
        &mut self,
        command: LineCommand,
        context: InvocationContext,
    ) -> Result<CommandOutcome, CommandError> {
        if context == InvocationContext::Save && !self.config.trigger_on_save {
            log::debug!("{command}: save trigger disabled");
            return Ok(CommandOutcome::Skipped);
        }

        let Some(editor) = self.host.active_editor() else {
            log::debug!("{command}: no active editor");
            return Ok(CommandOutcome::NoActiveEditor);
        };

        if context == InvocationContext::Save
            && !self.config.applies_to_language(editor.language_id())
        {
            log::debug!(
                "{command}: language '{}' not enabled for save trigger",
                editor.language_id()
            );
            return Ok(CommandOutcome::Skipped);
        }

        let batch = plan_edits(command, &*editor);
        let edits = batch.len();
        log::debug!("{command}: {edits} edit(s)");
        if batch.is_empty() {
            return Ok(CommandOutcome::Applied { edits });
        }

        editor.apply_edits(batch).map_err(|err| {
            log::warn!("{command}: host rejected edit batch: {err}");
            CommandError::from(err)
        })?;
        Ok(CommandOutcome::Applied { edits })
    }
}

/// Compute the edit batch `command` produces for `editor`, without applying it.
pub fn plan_edits<E: TextEditor + ?Sized>(command: LineCommand, editor: &E) -> EditBatch {
    let selections = normalize_selections(editor.selections());
    let mut batch = EditBatch::new();

    match command {
        LineCommand::Split { keep_delimiter } => {
            let mode = if keep_delimiter {
                SplitMode::Keep
            } else {
                SplitMode::Discard
            };
            // Several carets on one line would produce overlapping replacements of that line;
            // the leftmost one wins.
            let mut seen_lines = HashSet::new();
            for selection in selections {
                let range = selection.range();
                if !seen_lines.insert(range.start.line) {
                    continue;
                }
                let Some(line) = editor.line_at(range.start.line) else {
                    continue;
                };
                let selected = editor.text_in(range);
                let delimiter = transform::resolve_delimiter(&selected);
                let ending = LineEnding::detect_in_text_or(&line.text, editor.line_ending());
                let new_text = transform::split_line(&line.text, delimiter, ending, mode);
                batch.push(TextEdit::replace(line.range, new_text));
            }
        }
        LineCommand::Combine => {
            for selection in selections {
                let range = selection.range();
                let new_text = transform::combine_lines(&editor.text_in(range));
                batch.push(TextEdit::replace(range, new_text));
            }
        }
        LineCommand::RemoveBlankLines => {
            for selection in selections {
                let range = selection.range();
                let new_text = transform::remove_blank_lines(&editor.text_in(range));
                batch.push(TextEdit::replace(range, new_text));
            }
        }
        LineCommand::Trim(side) => {
            for selection in selections {
                let range = selection.range();
                let new_text = transform::trim_lines(&editor.text_in(range), side);
                batch.push(TextEdit::replace(range, new_text));
            }
        }
    }

    batch
}
