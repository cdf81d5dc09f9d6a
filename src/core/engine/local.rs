//! Local simulation: per-language scanners over the raw source.
//!
//! Nothing is evaluated. Each language maps to a call shape whose arguments
//! are pulled out line by line, and to an error predicate that fakes the
//! compiler's most common complaint.

use crate::config::{NO_OUTPUT, SIMULATION_ONLY_TEXT};
use crate::core::error::SimulationError;
use crate::models::Language;

use super::{Transcript, extract_print_content};

/// Where printable arguments sit in a language's source.
#[derive(Clone, Copy, Debug)]
enum CallShape {
    /// `<callee>(<argument>)` on a single line.
    Call(&'static str),
    /// `<stream> << <argument> <<` as in C++ iostreams.
    Stream(&'static str),
    /// No recognized output statement.
    Unsupported,
}

/// Scanner and error predicate for one language.
struct Profile {
    shape: CallShape,
    check: fn(&str) -> Result<(), SimulationError>,
}

fn no_check(_: &str) -> Result<(), SimulationError> {
    Ok(())
}

fn python_check(source: &str) -> Result<(), SimulationError> {
    if source.contains("syntax error") {
        return Err(SimulationError::InvalidSyntax);
    }
    Ok(())
}

fn script_check(source: &str) -> Result<(), SimulationError> {
    if source.contains("syntax error") {
        return Err(SimulationError::UnexpectedToken);
    }
    Ok(())
}

fn java_check(source: &str) -> Result<(), SimulationError> {
    if !source.contains("public static void main") {
        return Err(SimulationError::MainMethodNotFound);
    }
    Ok(())
}

fn profile(language: Language) -> Profile {
    let (shape, check): (CallShape, fn(&str) -> Result<(), SimulationError>) = match language {
        Language::Python => (CallShape::Call("print"), python_check),
        Language::JavaScript | Language::TypeScript => {
            (CallShape::Call("console.log"), script_check)
        }
        Language::Java => (CallShape::Call("System.out.println"), java_check),
        Language::Cpp => (CallShape::Stream("std::cout"), no_check),
        Language::CSharp => (CallShape::Call("Console.WriteLine"), no_check),
        Language::Html | Language::Markdown => (CallShape::Unsupported, no_check),
    };
    Profile { shape, check }
}

/// Arguments of every `callee(...)` occurrence, left to right.
///
/// An argument is at least one character long, ends at the first `)` after
/// that character and never spans a line break. Calls are not nested.
pub fn scan_calls<'a>(source: &'a str, callee: &str) -> Vec<&'a str> {
    let opener = format!("{callee}(");
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(offset) = source[pos..].find(&opener) {
        let start = pos + offset;
        let arg_start = start + opener.len();

        match call_argument_end(&source[arg_start..]) {
            Some(len) => {
                found.push(&source[arg_start..arg_start + len]);
                // Resume after the closing parenthesis
                pos = arg_start + len + 1;
            }
            None => pos = start + 1,
        }
    }

    found
}

/// Length of the argument at the head of `rest`, if a `)` closes it on the
/// same line.
fn call_argument_end(rest: &str) -> Option<usize> {
    let first = rest.chars().next().filter(|c| *c != '\n')?;
    let body_start = first.len_utf8();
    let line = &rest[body_start..];
    let line = &line[..line.find('\n').unwrap_or(line.len())];
    line.find(')').map(|idx| body_start + idx)
}

/// Arguments of every `<stream> << arg <<` occurrence, left to right.
pub fn scan_stream<'a>(source: &'a str, stream: &str) -> Vec<&'a str> {
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(offset) = source[pos..].find(stream) {
        let start = pos + offset;
        let after = skip_whitespace(source, start + stream.len());

        let arg = source[after..]
            .strip_prefix("<<")
            .map(|_| skip_whitespace(source, after + 2))
            .and_then(|arg_start| {
                stream_argument_end(&source[arg_start..]).map(|len| (arg_start, len))
            });

        match arg {
            Some((arg_start, len)) => {
                found.push(&source[arg_start..arg_start + len]);
                pos = arg_start + len;
            }
            None => pos = start + 1,
        }
    }

    found
}

fn skip_whitespace(source: &str, from: usize) -> usize {
    source[from..]
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map_or(source.len(), |(idx, _)| from + idx)
}

/// Shortest non-empty single-line prefix of `rest` followed by optional
/// whitespace and `<<`.
fn stream_argument_end(rest: &str) -> Option<usize> {
    let first = rest.chars().next().filter(|c| *c != '\n')?;
    let mut end = first.len_utf8();

    loop {
        let tail = &rest[end..];
        if tail.trim_start().starts_with("<<") {
            return Some(end);
        }
        let next = tail.chars().next().filter(|c| *c != '\n')?;
        end += next.len_utf8();
    }
}

/// Simulate running `source` as `language`.
///
/// Each recognized output statement contributes one line. Languages without
/// an output statement get a canned explanation instead.
pub fn simulate(language: Language, source: &str) -> Result<Transcript, SimulationError> {
    let profile = profile(language);
    (profile.check)(source)?;

    let arguments = match profile.shape {
        CallShape::Call(callee) => scan_calls(source, callee),
        CallShape::Stream(stream) => scan_stream(source, stream),
        CallShape::Unsupported => {
            return Ok(Transcript::new(
                SIMULATION_ONLY_TEXT.replace("{language}", language.label()),
            ));
        }
    };

    let output: String = arguments
        .into_iter()
        .map(|arg| extract_print_content(arg) + "\n")
        .collect();

    if output.trim().is_empty() {
        return Ok(Transcript::new(NO_OUTPUT));
    }
    Ok(Transcript::new(output))
}
