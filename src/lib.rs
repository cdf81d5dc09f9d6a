//! In-browser code editor core.
//!
//! A flat virtual filesystem, a mock execution engine that fabricates
//! console output from print-like statements, and the session state that
//! ties them together. The `web` module (wasm32 only) exposes the session to
//! JavaScript.

pub mod app;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

#[cfg(target_arch = "wasm32")]
mod web;

pub use app::AppContext;
pub use crate::core::Session;
