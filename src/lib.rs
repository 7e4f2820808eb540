//! # landing-ui
//!
//! WASM interactivity layer for the static landing page. The page ships as
//! plain HTML; this crate attaches behavior to markup that already exists in
//! the document and renders nothing itself.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`context`] | Startup wiring, [`context::PageContext`], [`context::InitError`] |
//! | [`toast`] | Single-slot auto-dismissing status message |
//! | [`theme`] | Light/dark preference, persisted to `localStorage` |
//! | [`nav`] | Section spy: highlights the TOC link for the most-visible section |
//! | [`accordion`] | FAQ expand/collapse with delegated click handling |
//! | [`clipboard`] | Copy buttons with a legacy `execCommand` fallback |
//! | [`quick_scroll`] | Jump-to-section and back-to-top buttons |
//! | [`dom`] | Small web-sys helpers shared by the controllers |
//!
//! Decision logic (theme resolution, most-visible selection, toast wording,
//! payload assembly) lives in plain functions so it can be unit tested on the
//! host without a browser.

use wasm_bindgen::prelude::*;

pub mod accordion;
pub mod clipboard;
pub mod context;
pub mod dom;
pub mod nav;
pub mod quick_scroll;
pub mod theme;
pub mod toast;

/// WASM entry point. Installs the panic hook and console logger, then wires
/// every controller. A failed setup is logged and otherwise left alone; the
/// page stays usable as plain HTML.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    if let Err(err) = context::init() {
        log::error!("landing-ui setup failed: {err}");
    }
}
