//! Core editor logic.
//!
//! This module provides:
//! - [`EntryStore`] and the [`tree`] views over it
//! - The mock execution [`engine`]
//! - [`Session`], the state machine driven by user actions
//! - [`preview`] rendering for HTML and Markdown

pub mod engine;
pub mod error;
mod preview;
mod session;
mod store;
pub mod tree;

pub use preview::{Preview, preview};
pub use session::{RunMode, RunPlan, Session, SessionSnapshot, ShortcutOutcome};
pub use store::{EntryStore, NewEntry};
