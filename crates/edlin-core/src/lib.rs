#![warn(missing_docs)]
//! Edlin Core - line-oriented text commands for editor hosts
//!
//! # Overview
//!
//! `edlin-core` implements a small set of line commands an editor binds to user actions:
//!
//! - **Split**: break the line under each caret on a delimiter (the selected text, or a tab)
//! - **Split and keep**: same, keeping the delimiter at the end of every produced line
//! - **Combine**: join the lines of each selection into one
//! - **Remove blank lines**: drop lines that are empty or whitespace-only
//! - **Trim**: strip leading, trailing or both runs of whitespace on each line
//!
//! The transforms themselves are pure string functions ([`transform`]). The editor is reached only
//! through the [`EditorHost`] / [`TextEditor`] traits, so the same commands run inside a real
//! editor or against the in-memory [`BufferEditor`].
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  CommandExecutor (ids, config, batching)    │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  EditorHost / TextEditor                    │  ← Host boundary
//! ├─────────────────────────────────────────────┤
//! │  Line transforms                            │  ← Pure text
//! ├─────────────────────────────────────────────┤
//! │  Line ending detection                      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use edlin_core::{BufferEditor, BufferHost, CommandExecutor, Config};
//! use edlin_core::{InvocationContext, LineCommand, Position, Selection};
//!
//! let editor = BufferEditor::new("line1\n\n  \nline2")
//!     .with_selections(vec![Selection::new(Position::new(0, 0), Position::new(3, 5))]);
//! let mut executor = CommandExecutor::new(BufferHost::new(editor), Config::default());
//!
//! executor
//!     .execute(LineCommand::RemoveBlankLines, InvocationContext::Command)
//!     .unwrap();
//! assert_eq!(executor.host().editor().unwrap().text(), "line1\nline2");
//! ```
//!
//! # Module Description
//!
//! - [`line_ending`] - per-block line ending detection
//! - [`transform`] - split / combine / blank-line removal / trim
//! - [`selection`] - positions, ranges and selections
//! - [`host`] - the editor host boundary and edit batches
//! - [`buffer`] - rope-backed in-memory host
//! - [`config`] - user settings
//! - [`commands`] - command ids and the executor

pub mod buffer;
pub mod commands;
pub mod config;
pub mod host;
pub mod line_ending;
pub mod selection;
mod text;
pub mod transform;

pub use buffer::{BufferEditor, BufferHost};
pub use commands::{
    CommandError, CommandExecutor, CommandOutcome, InvocationContext, LineCommand, plan_edits,
};
pub use config::{Config, ConfigError};
pub use host::{EditBatch, EditorHost, HostError, LineSpan, TextEdit, TextEditor};
pub use line_ending::LineEnding;
pub use selection::{Position, Range, Selection, SelectionDirection};
pub use transform::{DEFAULT_DELIMITER, SplitMode, TrimSide};
