//! Mock execution engine.
//!
//! Two paths produce a [`Transcript`] without ever evaluating code:
//! - [`simulate`] - local, per-language scanning of output statements
//! - [`runner_transcript`] - the coarser output of the simulated runner

mod extract;
mod local;
mod runner;

pub use extract::extract_print_content;
pub use local::{scan_calls, scan_stream, simulate};
pub use runner::{RunnerProbe, RunnerStatus, SimulatedRunner, runner_transcript};

/// Text block produced by one run. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transcript(String);

impl Transcript {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn lines(&self) -> std::str::Lines<'_> {
        self.0.lines()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}
