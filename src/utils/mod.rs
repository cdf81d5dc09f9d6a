//! Utility modules for timing and rendering.
//!
//! Provides:
//! - [`time`] - Epoch timestamps and clock formatting
//! - [`timer`] - Async delays and local task spawning
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization

mod markdown;
pub mod time;
pub mod timer;

pub use markdown::markdown_to_html;
