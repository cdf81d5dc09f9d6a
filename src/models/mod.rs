//! Data models and types for the editor.
//!
//! Contains domain types for:
//! - [`Entry`], [`EntryId`], [`EntryKind`] - Virtual filesystem records
//! - [`ConsoleEntry`], [`ConsoleLog`] - Console panel output
//! - [`Language`] - Supported languages and their templates
//! - [`Feedback`] - Transient notification banner
//! - [`ShortcutRegistry`] - Keyboard shortcuts
//! - [`EditorSettings`] - Widget preferences

mod console;
mod entry;
mod feedback;
mod language;
mod settings;
mod shortcut;

pub use console::{ConsoleEntry, ConsoleKind, ConsoleLog};
pub use entry::{Entry, EntryData, EntryId, EntryKind, split_extension};
pub use feedback::{DismissTicket, Feedback, FeedbackKind};
pub use language::Language;
pub use settings::{EditorSettings, Theme};
pub use shortcut::{Shortcut, ShortcutAction, ShortcutEdit, ShortcutRegistry};
