//! The simulated remote runner.
//!
//! The runner stands in for a server-side execution backend. It becomes
//! available after an artificial connection delay and produces a coarser,
//! keyword-driven transcript than the local scanners.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::{RUNNER_LANGUAGES, RUNNER_NO_CODE, RUNNER_NO_OUTPUT, delays};
use crate::core::error::RunnerError;
use crate::models::Language;
use crate::utils::timer;

use super::{Transcript, extract_print_content};

static PYTHON_PRINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"print\s*\((.*?)\)").expect("valid print pattern"));

static CONSOLE_LOG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"console\.log\s*\((.*?)\)").expect("valid console.log pattern"));

/// Availability of the runner.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum RunnerStatus {
    /// Still connecting; runs use local simulation.
    #[default]
    Pending,
    Ready { languages: Vec<Language> },
    /// Initialization failed; local simulation for the rest of the session.
    Unavailable,
}

impl RunnerStatus {
    pub fn supports(&self, language: Language) -> bool {
        match self {
            Self::Ready { languages } => languages.contains(&language),
            Self::Pending | Self::Unavailable => false,
        }
    }
}

/// Connection handshake with an execution backend.
#[allow(async_fn_in_trait)]
pub trait RunnerProbe {
    /// Resolve to the languages the backend accepts.
    async fn connect(&self) -> Result<Vec<Language>, RunnerError>;
}

/// Backend that only pretends to connect.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedRunner {
    pub delay_ms: u32,
}

impl Default for SimulatedRunner {
    fn default() -> Self {
        Self {
            delay_ms: delays::RUNNER_INIT_MS,
        }
    }
}

impl RunnerProbe for SimulatedRunner {
    async fn connect(&self) -> Result<Vec<Language>, RunnerError> {
        timer::sleep(self.delay_ms).await;
        let languages: Vec<Language> = RUNNER_LANGUAGES
            .iter()
            .filter_map(|tag| Language::from_tag(tag))
            .collect();
        if languages.is_empty() {
            return Err(RunnerError::NoLanguages);
        }
        Ok(languages)
    }
}

fn extract_all(pattern: &Regex, source: &str) -> String {
    pattern
        .captures_iter(source)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|arg| !arg.is_empty())
        .map(|arg| extract_print_content(arg) + "\n")
        .collect()
}

/// Transcript the runner reports for `source`.
///
/// Print statements are extracted when present; otherwise a few keywords
/// trigger canned progress messages.
pub fn runner_transcript(language: Language, source: &str) -> Transcript {
    let mut output = String::new();

    match language {
        Language::Python => {
            if source.contains("print(") {
                output = extract_all(&PYTHON_PRINT, source);
            } else if source.contains("import ") {
                output.push_str("Loading package...\n");
                if source.contains("import numpy") || source.contains("import pandas") {
                    output.push_str("Data analysis libraries initialized\n");
                }
            }
        }
        Language::JavaScript | Language::TypeScript => {
            if source.contains("console.log(") {
                output = extract_all(&CONSOLE_LOG, source);
            } else if source.contains("fetch(") || source.contains("axios.") {
                output.push_str("Making API request...\n");
                output.push_str("Response received: { status: 'success', data: [...] }\n");
            }
        }
        _ => {}
    }

    if !output.trim().is_empty() {
        Transcript::new(output)
    } else if !source.trim().is_empty() {
        Transcript::new(RUNNER_NO_OUTPUT)
    } else {
        Transcript::new(RUNNER_NO_CODE)
    }
}
