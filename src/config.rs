//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the editor.
//! Language templates and canned transcripts are loaded at compile time
//! using `include_str!`.

// =============================================================================
// Language Templates (loaded at compile time)
// =============================================================================

/// Starter source for new files, one per supported language.
pub mod templates {
    pub const PYTHON: &str = include_str!("../assets/templates/python.py");
    pub const JAVASCRIPT: &str = include_str!("../assets/templates/javascript.js");
    pub const TYPESCRIPT: &str = include_str!("../assets/templates/typescript.ts");
    pub const CPP: &str = include_str!("../assets/templates/cpp.cpp");
    pub const CSHARP: &str = include_str!("../assets/templates/csharp.cs");
    pub const JAVA: &str = include_str!("../assets/templates/java.java");
    pub const HTML: &str = include_str!("../assets/templates/html.html");
    pub const MARKDOWN: &str = include_str!("../assets/templates/markdown.md");
}

/// Transcript for languages the local simulation has no call shape for.
///
/// `{language}` is replaced with the language label.
pub const SIMULATION_ONLY_TEXT: &str = include_str!("../assets/text/simulation_only.txt");

// =============================================================================
// Entry Naming
// =============================================================================

/// Stem used for new files (`untitled.py`, `untitled1.py`, ...).
pub const DEFAULT_FILE_STEM: &str = "untitled";

/// Base name used for new folders (`New Folder`, `New Folder 1`, ...).
pub const DEFAULT_FOLDER_NAME: &str = "New Folder";

/// Marker inserted before the extension of a duplicated file.
pub const COPY_SUFFIX: &str = "-copy";

// =============================================================================
// Execution
// =============================================================================

/// Console banner written before every transcript.
pub const RUN_START_BANNER: &str = "------------ Running Results ------------";

/// Console banner written after every run, successful or not.
pub const RUN_END_BANNER: &str = "Execution completed";

/// Console error for a run requested with no file open.
pub const RUN_NO_FILE: &str = "Please select a file to run";

/// Console error for a run requested while another is still in flight.
pub const RUN_BUSY: &str = "Execution already in progress";

/// Transcript used when local extraction produced only blank lines.
pub const NO_OUTPUT: &str = "(No output)";

/// Runner transcript for non-empty source that printed nothing.
pub const RUNNER_NO_OUTPUT: &str = "Code executed successfully. (No output)";

/// Runner transcript for empty source.
pub const RUNNER_NO_CODE: &str = "No code to execute.";

/// Language tags the simulated runner reports as supported.
pub const RUNNER_LANGUAGES: &[&str] = &["python", "javascript", "typescript"];

/// Console line once the runner is up; followed by the language tags.
pub const RUNNER_READY_PREFIX: &str = "Code execution environment is ready. Supported languages: ";

/// Console error when the runner cannot be reached.
pub const RUNNER_INIT_FAILED: &str =
    "Failed to initialize code execution environment. Running in local simulation mode.";

/// Artificial delay constants (milliseconds).
pub mod delays {
    /// Delay before the runner reports availability.
    pub const RUNNER_INIT_MS: u32 = 1000;
    /// Delay standing in for the runner's network round trip.
    pub const RUNNER_EXEC_MS: u32 = 1500;
    /// Lifetime of a feedback banner.
    pub const FEEDBACK_MS: u32 = 3000;
}

// =============================================================================
// Editor Defaults
// =============================================================================

/// Default editor font size in pixels.
pub const DEFAULT_FONT_SIZE: u8 = 14;

/// Accepted font size range.
pub const FONT_SIZE_RANGE: std::ops::RangeInclusive<u8> = 10..=24;
