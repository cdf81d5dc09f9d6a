//! Languages the editor knows how to template, highlight and simulate.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::templates;

/// A language selectable in the editor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    Python,
    JavaScript,
    TypeScript,
    #[serde(rename = "C++")]
    Cpp,
    #[serde(rename = "C#")]
    CSharp,
    Java,
    #[serde(rename = "HTML")]
    Html,
    Markdown,
}

impl Language {
    /// All languages, in menu order.
    pub const ALL: [Language; 8] = [
        Self::Python,
        Self::JavaScript,
        Self::TypeScript,
        Self::Cpp,
        Self::CSharp,
        Self::Java,
        Self::Html,
        Self::Markdown,
    ];

    /// Display label (e.g., `"C++"`).
    pub fn label(&self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
            Self::Cpp => "C++",
            Self::CSharp => "C#",
            Self::Java => "Java",
            Self::Html => "HTML",
            Self::Markdown => "Markdown",
        }
    }

    /// Lowercase tag used by the runner's supported-language set.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Cpp => "c++",
            Self::CSharp => "c#",
            Self::Java => "java",
            Self::Html => "html",
            Self::Markdown => "markdown",
        }
    }

    /// File extension including the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Python => ".py",
            Self::JavaScript => ".js",
            Self::TypeScript => ".ts",
            Self::Cpp => ".cpp",
            Self::CSharp => ".cs",
            Self::Java => ".java",
            Self::Html => ".html",
            Self::Markdown => ".md",
        }
    }

    /// Starter source for a new file.
    pub fn template(&self) -> &'static str {
        match self {
            Self::Python => templates::PYTHON,
            Self::JavaScript => templates::JAVASCRIPT,
            Self::TypeScript => templates::TYPESCRIPT,
            Self::Cpp => templates::CPP,
            Self::CSharp => templates::CSHARP,
            Self::Java => templates::JAVA,
            Self::Html => templates::HTML,
            Self::Markdown => templates::MARKDOWN,
        }
    }

    /// Identifier the editor widget expects for syntax highlighting.
    pub fn widget_id(&self) -> &'static str {
        match self {
            Self::Cpp => "cpp",
            Self::CSharp => "csharp",
            other => other.tag(),
        }
    }

    /// Detect the language from an extension, with or without the dot.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        Self::ALL
            .into_iter()
            .find(|lang| lang.extension()[1..].eq_ignore_ascii_case(ext))
    }

    /// Look a language up by label or tag, ignoring case.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.tag().eq_ignore_ascii_case(tag) || lang.label().eq_ignore_ascii_case(tag))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(Language::from_extension(".py"), Some(Language::Python));
        assert_eq!(Language::from_extension("cpp"), Some(Language::Cpp));
        assert_eq!(Language::from_extension(".MD"), Some(Language::Markdown));
        assert_eq!(Language::from_extension(".txt"), None);
        assert_eq!(Language::from_extension(""), None);
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(Language::from_tag("c#"), Some(Language::CSharp));
        assert_eq!(Language::from_tag("TypeScript"), Some(Language::TypeScript));
        assert_eq!(Language::from_tag("HTML"), Some(Language::Html));
        assert_eq!(Language::from_tag("cobol"), None);
    }

    #[test]
    fn test_templates_match_language() {
        assert!(Language::Python.template().starts_with("print(\"Hello, World!\")"));
        assert!(Language::Java.template().contains("public static void main"));
        assert!(Language::Cpp.template().contains("std::cout << \"Hello, World!\""));
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Language::Cpp).unwrap();
        assert_eq!(json, "\"C++\"");
        let back: Language = serde_json::from_str("\"C#\"").unwrap();
        assert_eq!(back, Language::CSharp);
    }
}
