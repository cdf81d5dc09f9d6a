//! Markdown rendering utilities.
//!
//! Provides safe markdown-to-HTML conversion with XSS protection.

use comrak::{Options, markdown_to_html as render};

/// Convert markdown content to sanitized HTML.
///
/// Supports strikethrough (`~~text~~`), tables and task lists on top of
/// CommonMark. The output is sanitized with `ammonia`, removing script
/// elements, event handlers and other dangerous markup.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.tasklist = true;

    let html_output = render(markdown, &options);

    ammonia::clean(&html_output)
}
