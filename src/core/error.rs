//! Error types for the editor core.
//!
//! Display strings double as the console messages shown to the user, so
//! they are kept verbatim:
//!
//! - [`SimulationError`] - Language-specific failures of the mock execution
//! - [`RunnerError`] - Initialization failures of the simulated runner
//! - [`TreeError`] - Lookups over the entry table
//! - [`ShortcutError`] - Shortcut rebinding failures

use thiserror::Error;

use crate::models::EntryId;

/// Simulated failures raised by the per-language error predicates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error("SyntaxError: invalid syntax")]
    InvalidSyntax,
    #[error("SyntaxError: Unexpected token")]
    UnexpectedToken,
    #[error("Error: Main method not found")]
    MainMethodNotFound,
}

/// Runner initialization errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunnerError {
    #[error("runner backend unreachable: {0}")]
    Unreachable(String),
    #[error("runner reported no supported languages")]
    NoLanguages,
}

/// Errors from path and ancestry queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("entry not found: {0}")]
    NotFound(EntryId),
    /// The parent chain loops back on itself. Indicates a corrupted table.
    #[error("parent cycle detected at entry {0}")]
    Cycle(EntryId),
}

/// Shortcut edit-flow errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortcutError {
    #[error("unknown shortcut: {0}")]
    Unknown(String),
    #[error("{0} shortcut cannot be changed")]
    NotEditable(&'static str),
    #[error("no shortcut is being edited")]
    NotEditing,
    #[error("key combination is empty")]
    EmptyCombo,
    #[error("{combo} is already bound to {label}")]
    Conflict { combo: String, label: &'static str },
}
