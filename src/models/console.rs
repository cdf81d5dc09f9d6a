//! Console log types for the editor's output panel.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

use crate::utils::time;

/// Severity/styling of a console line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleKind {
    /// Program transcript (plain)
    Output,
    /// Error message (red)
    Error,
    /// Informational message (blue)
    Info,
    /// Success message (green)
    Success,
    /// Run framing banners (purple)
    System,
}

/// A single line in the console with a unique ID.
#[derive(Clone, Debug, Serialize)]
pub struct ConsoleEntry {
    /// Unique ID for keyed rendering
    pub id: usize,
    pub kind: ConsoleKind,
    pub text: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: f64,
}

// Global counter for generating unique IDs
static CONSOLE_ENTRY_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl ConsoleEntry {
    fn new(kind: ConsoleKind, text: String) -> Self {
        Self {
            id: CONSOLE_ENTRY_COUNTER.fetch_add(1, Ordering::Relaxed),
            kind,
            text,
            timestamp: time::now_ms(),
        }
    }

    pub fn output(s: impl Into<String>) -> Self {
        Self::new(ConsoleKind::Output, s.into())
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(ConsoleKind::Error, s.into())
    }

    pub fn info(s: impl Into<String>) -> Self {
        Self::new(ConsoleKind::Info, s.into())
    }

    pub fn success(s: impl Into<String>) -> Self {
        Self::new(ConsoleKind::Success, s.into())
    }

    pub fn system(s: impl Into<String>) -> Self {
        Self::new(ConsoleKind::System, s.into())
    }

    /// Render as `[HH:MM:SS] text`.
    pub fn render(&self) -> String {
        format!("[{}] {}", time::format_clock(self.timestamp), self.text)
    }
}

impl PartialEq for ConsoleEntry {
    fn eq(&self, other: &Self) -> bool {
        // Only compare content, not ID or timestamp
        self.kind == other.kind && self.text == other.text
    }
}

/// Append-only console history, oldest first.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct ConsoleLog {
    entries: Vec<ConsoleEntry>,
}

impl ConsoleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ConsoleEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ConsoleEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&ConsoleEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of one kind, in order.
    pub fn of_kind(&self, kind: ConsoleKind) -> impl Iterator<Item = &ConsoleEntry> {
        self.entries.iter().filter(move |e| e.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(ConsoleEntry::output("a").kind, ConsoleKind::Output);
        assert_eq!(ConsoleEntry::error("b").kind, ConsoleKind::Error);
        assert_eq!(ConsoleEntry::info("c").kind, ConsoleKind::Info);
        assert_eq!(ConsoleEntry::success("d").kind, ConsoleKind::Success);
        assert_eq!(ConsoleEntry::system("e").kind, ConsoleKind::System);
    }

    #[test]
    fn test_unique_ids() {
        let first = ConsoleEntry::info("same");
        let second = ConsoleEntry::info("same");
        assert_ne!(first.id, second.id);
        assert_eq!(first, second);
    }

    #[test]
    fn test_log_is_append_only_and_ordered() {
        let mut log = ConsoleLog::new();
        log.push(ConsoleEntry::system("start"));
        log.push(ConsoleEntry::output("body"));
        log.push(ConsoleEntry::system("end"));

        let texts: Vec<_> = log.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["start", "body", "end"]);
        assert_eq!(log.of_kind(ConsoleKind::System).count(), 2);
        assert_eq!(log.last().map(|e| e.text.as_str()), Some("end"));
    }

    #[test]
    fn test_render_has_clock_prefix() {
        let entry = ConsoleEntry::info("ready");
        let rendered = entry.render();
        assert!(rendered.starts_with('['));
        assert!(rendered.ends_with("] ready"));
    }
}
