//! Quill Bridge library target.
//!
//! Exposes the editor's modules for integration tests. The binary entry
//! point is in `main.rs`.

// ── Application shell ────────────────────────────────────────────
pub mod app;
pub mod keyboard;
pub mod messages;
pub mod update;
pub mod view_ui;

// ── Headless logic ───────────────────────────────────────────────
pub mod helpers;
pub mod session;

// ── Rendering ────────────────────────────────────────────────────
pub mod highlighter;
pub mod renderer;

pub mod util;
