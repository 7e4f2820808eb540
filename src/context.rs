//! Startup wiring and the shared controller context.
//!
//! DESIGN
//! ======
//! All controllers share one [`PageContext`] built once at startup: the
//! window, the document, and the toast slot. Controllers clone the `Rc` into
//! their event closures; there is no free-floating module state.

use std::rc::Rc;

use thiserror::Error;
use web_sys::{Document, Window};

use crate::toast::Toast;
use crate::{accordion, clipboard, nav, quick_scroll, theme};

/// Fatal conditions during startup.
///
/// A missing *required* element means the markup and the script are out of
/// sync, which is not recoverable at runtime. Optional elements are handled
/// by the individual controllers and never reach this type.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("no window: not running in a browser")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("required element `#{0}` not found in document")]
    MissingElement(&'static str),
}

/// Shared handles passed to every controller initializer.
pub struct PageContext {
    pub window: Window,
    pub document: Document,
    pub toast: Toast,
}

impl PageContext {
    /// Build the context from the live document.
    ///
    /// # Errors
    /// Returns [`InitError::MissingElement`] when the toast element is
    /// absent; the toast is the one piece of markup every controller needs.
    pub fn new(window: Window, document: Document) -> Result<Self, InitError> {
        let toast = Toast::locate(&document)?;
        Ok(Self { window, document, toast })
    }
}

/// Wire all five controllers, in fixed order.
///
/// Optional markup that is absent simply leaves that controller inactive;
/// only the toast element is required.
///
/// # Errors
/// Fails when not running in a browser document or when the toast element
/// is missing.
pub fn init() -> Result<(), InitError> {
    let window = web_sys::window().ok_or(InitError::NoWindow)?;
    let document = window.document().ok_or(InitError::NoDocument)?;
    let ctx = Rc::new(PageContext::new(window, document)?);

    theme::init(&ctx);
    nav::init(&ctx);
    accordion::init(&ctx);
    clipboard::init(&ctx);
    quick_scroll::init(&ctx);

    log::debug!("landing-ui controllers attached");
    Ok(())
}
