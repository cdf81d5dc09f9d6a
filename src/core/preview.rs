//! Side-by-side preview of HTML and Markdown sources.

use serde::Serialize;

use crate::models::Language;
use crate::utils::markdown_to_html;

/// What the preview pane shows for the active buffer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "html", rename_all = "lowercase")]
pub enum Preview {
    /// Source shown as-is in a sandboxed frame.
    Html(String),
    /// Rendered and sanitized Markdown.
    Markdown(String),
    Unsupported,
}

fn is_html(language: Language, source: &str) -> bool {
    language == Language::Html || source.contains("<html") || source.contains("<body")
}

fn is_markdown(language: Language, file_name: &str) -> bool {
    language == Language::Markdown || file_name.ends_with(".md")
}

/// Build the preview for `source`.
pub fn preview(language: Language, file_name: &str, source: &str) -> Preview {
    if is_html(language, source) {
        Preview::Html(source.to_string())
    } else if is_markdown(language, file_name) {
        Preview::Markdown(markdown_to_html(source))
    } else {
        Preview::Unsupported
    }
}
